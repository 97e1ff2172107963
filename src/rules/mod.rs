//! Fixed scoring tables. Every rule the scorer applies is data in [`defs`];
//! the pipeline stages only look values up.

pub mod defs;

#[cfg(test)]
#[path = "../../tests/src_inline/rules/tests.rs"]
mod tests;

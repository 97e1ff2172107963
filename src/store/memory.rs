use std::collections::BTreeMap;

use crate::store::{ProfileRecord, ProfileStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, ProfileRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self, user_id: &str) -> Result<Option<ProfileRecord>, StoreError> {
        Ok(self.records.get(user_id).cloned())
    }

    fn save(&mut self, record: ProfileRecord) -> Result<(), StoreError> {
        self.records.insert(record.user_id.clone(), record);
        Ok(())
    }
}

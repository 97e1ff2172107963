use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;

use style_profiler::model::answers::QuizAnswers;
use style_profiler::model::profile::StyleProfile;
use style_profiler::report::json::{render_explain_json, render_profile_json};
use style_profiler::report::text::render_results_text;
use style_profiler::report::{ReportFormat, build_results_context};
use style_profiler::scorer::score_answers;
use style_profiler::store::{
    JsonFileStore, StoreError, Verification, latest_profile, submit_quiz, verify_record,
};
use style_profiler::telemetry::init_tracing;

#[derive(Debug, Parser)]
#[command(
    name = "style-profiler",
    version,
    about = "Score style-quiz answers into a fashion style profile"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an answers file without storing anything
    Score {
        /// Quiz answers JSON, or `-` for stdin
        #[arg(long)]
        answers: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Score answers and store them as the user's active profile
    Submit {
        #[arg(long, env = "STYLE_PROFILER_STORE")]
        store: PathBuf,
        #[arg(long)]
        user: String,
        /// Quiz answers JSON, or `-` for stdin
        #[arg(long)]
        answers: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show a user's stored profile
    Show {
        #[arg(long, env = "STYLE_PROFILER_STORE")]
        store: PathBuf,
        #[arg(long)]
        user: String,
        /// Recompute from the stored answers and fail if the profile drifted
        #[arg(long)]
        verify: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Clone, Args)]
struct OutputArgs {
    #[arg(long, value_enum, default_value = "text")]
    format: FormatArg,
    /// Write the report to a file instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Explain,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => ReportFormat::Text,
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Explain => ReportFormat::Explain,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("answers are not valid quiz JSON: {0}")]
    Answers(#[source] serde_json::Error),
    #[error("failed to render report: {0}")]
    Render(#[source] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("stored profile for {0} no longer matches its answers")]
    Drift(String),
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Score { answers, output } => {
            let answers = read_answers(&answers)?;
            let profile = score_answers(&answers).profile;
            let report = render(output.format.into(), &answers, &profile)?;
            emit(&report, output.out.as_deref())
        }
        Command::Submit {
            store,
            user,
            answers,
            output,
        } => {
            let answers = read_answers(&answers)?;
            let mut store = JsonFileStore::open(&store)?;
            let record = submit_quiz(&mut store, &user, answers)?;
            tracing::info!(
                store = %store.path().display(),
                revision = record.revision,
                "profile saved"
            );
            let report = render(output.format.into(), &record.answers, &record.profile)?;
            emit(&report, output.out.as_deref())
        }
        Command::Show {
            store,
            user,
            verify,
            output,
        } => {
            let store = JsonFileStore::open(&store)?;
            let record = latest_profile(&store, &user)?;
            if verify {
                if let Verification::Drift { .. } = verify_record(&record) {
                    return Err(CliError::Drift(record.user_id));
                }
                tracing::info!(user = record.user_id.as_str(), "stored profile verified");
            }
            let report = render(output.format.into(), &record.answers, &record.profile)?;
            emit(&report, output.out.as_deref())
        }
    }
}

fn read_answers(path: &Path) -> Result<QuizAnswers, CliError> {
    let read_err = |source| CliError::Read {
        path: path.display().to_string(),
        source,
    };
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(read_err)?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(read_err)?
    };
    parse_answers(&content)
}

fn parse_answers(content: &str) -> Result<QuizAnswers, CliError> {
    serde_json::from_str(content).map_err(CliError::Answers)
}

fn render(
    format: ReportFormat,
    answers: &QuizAnswers,
    profile: &StyleProfile,
) -> Result<String, CliError> {
    match format {
        ReportFormat::Text => Ok(render_results_text(&build_results_context(
            answers, profile,
        ))),
        ReportFormat::Json => render_profile_json(profile).map_err(CliError::Render),
        // explanations are always rebuilt from the answers
        ReportFormat::Explain => {
            render_explain_json(&score_answers(answers)).map_err(CliError::Render)
        }
    }
}

fn emit(report: &str, out: Option<&Path>) -> Result<(), CliError> {
    match out {
        Some(path) => {
            let write_err = |source| CliError::Write {
                path: path.display().to_string(),
                source,
            };
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(write_err)?;
                }
            }
            let mut content = report.to_string();
            if !content.ends_with('\n') {
                content.push('\n');
            }
            std::fs::write(path, content).map_err(write_err)?;
            tracing::info!(path = %path.display(), "report written");
            Ok(())
        }
        None => {
            println!("{}", report.trim_end_matches('\n'));
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

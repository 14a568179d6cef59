//! CLI Commands

pub mod dogs;
pub mod programs;
pub mod sessions;

pub use dogs::DogsCommand;
pub use programs::ProgramsCommand;
pub use sessions::SessionsCommand;

use std::future::Future;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Output switches shared by every command
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

/// Show a spinner on stderr while `work` runs. Skipped for JSON output.
pub async fn with_spinner<F, T>(output: Output, message: &'static str, work: F) -> T
where
    F: Future<Output = T>,
{
    if output.json {
        return work.await;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work.await;
    spinner.finish_and_clear();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spinner_returns_work_result() {
        let value = with_spinner(Output { json: false }, "Working...", async { 42 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_spinner_skipped_for_json() {
        let value = with_spinner(Output { json: true }, "Working...", async { "done" }).await;
        assert_eq!(value, "done");
    }
}

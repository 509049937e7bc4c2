use super::Reporter;
use crate::{
    exit_status::ExitStatus,
    registry::Registry,
    report::{Outcome, Summary, TestCaseResult},
    test::TestDesc,
};

/// A reporter that emits the progress as log records.
#[derive(Debug, Clone)]
pub struct LogReporter {
    _p: (),
}

impl LogReporter {
    #[allow(missing_docs)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self { _p: () }
    }
}

impl Reporter for LogReporter {
    fn test_run_starting(&mut self, tests: &Registry<'_>) {
        let suffix = match tests.len() {
            1 => "",
            _ => "s",
        };
        log::info!("running {} test{}", tests.len(), suffix);
    }

    fn test_run_ended(&mut self, summary: &Summary) {
        log::info!(
            "{} run; {} failed ({:.2}%)",
            summary.count_run(),
            summary.count_failed(),
            summary.failed_percentage()
        );
        if summary.is_passed() {
            log::info!("test status: ok");
        } else {
            log::error!("test status: FAILED");
        }
    }

    fn test_case_starting(&mut self, ordinal: usize, desc: &TestDesc) {
        log::info!("start: ({}) {}", ordinal, desc.display_name());
    }

    fn test_case_ended(&mut self, result: &TestCaseResult<'_>) {
        match result.outcome {
            Outcome::Passed => log::info!("({}) {}: ok", result.ordinal, result.desc.display_name()),
            Outcome::Failed(ref failure) => log::error!(
                "({}) {}: FAILED: {}",
                result.ordinal,
                result.desc.display_name(),
                failure
            ),
        }
    }

    fn test_run_aborting(&mut self, status: ExitStatus) {
        log::error!("aborting with exit code {}", status.code());
    }

    fn test_not_found(&mut self, name: &str) {
        log::error!("no test named `{}` was found", name);
    }
}

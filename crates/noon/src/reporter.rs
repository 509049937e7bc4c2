mod console;
mod log;

pub use self::{console::ConsoleReporter, log::LogReporter};

use crate::{
    exit_status::ExitStatus,
    registry::Registry,
    report::{Summary, TestCaseResult},
    test::TestDesc,
};

/// The receiver of the events emitted during a run.
pub trait Reporter {
    /// Called once before the first test case of a full run.
    fn test_run_starting(&mut self, tests: &Registry<'_>);

    /// Called once after the last test case of a full run.
    fn test_run_ended(&mut self, summary: &Summary);

    /// Called before the body of a test case is executed.
    fn test_case_starting(&mut self, ordinal: usize, desc: &TestDesc);

    /// Called after the body of a test case has returned.
    fn test_case_ended(&mut self, result: &TestCaseResult<'_>);

    /// Called right before the process is terminated due to failures.
    fn test_run_aborting(&mut self, status: ExitStatus);

    /// Called when a test case selected by name is not registered.
    fn test_not_found(&mut self, name: &str);
}

macro_rules! impl_reporter_body {
    () => {
        fn test_run_starting(&mut self, tests: &Registry<'_>) {
            (**self).test_run_starting(tests)
        }

        fn test_run_ended(&mut self, summary: &Summary) {
            (**self).test_run_ended(summary)
        }

        fn test_case_starting(&mut self, ordinal: usize, desc: &TestDesc) {
            (**self).test_case_starting(ordinal, desc)
        }

        fn test_case_ended(&mut self, result: &TestCaseResult<'_>) {
            (**self).test_case_ended(result)
        }

        fn test_run_aborting(&mut self, status: ExitStatus) {
            (**self).test_run_aborting(status)
        }

        fn test_not_found(&mut self, name: &str) {
            (**self).test_not_found(name)
        }
    };
}

impl<R: ?Sized> Reporter for &mut R
where
    R: Reporter,
{
    impl_reporter_body!();
}

impl<R: ?Sized> Reporter for Box<R>
where
    R: Reporter,
{
    impl_reporter_body!();
}

use crate::{
    registry::Registry,
    report::{Summary, TestCaseResult},
    reporter::Reporter,
    test::Test,
};

/// Executes the test cases in a registry.
///
/// Each test body runs inside a failure boundary: a check failure is recorded
/// as the outcome of that test case and the run continues with the next one.
pub struct Runner<'r, R> {
    registry: &'r Registry<'r>,
    reporter: R,
}

impl<'r, R> Runner<'r, R>
where
    R: Reporter,
{
    #[allow(missing_docs)]
    pub fn new(registry: &'r Registry<'r>, reporter: R) -> Self {
        Self { registry, reporter }
    }

    /// Run all registered test cases in registration order.
    ///
    /// The failures are only observable through the reporter. When
    /// `abort_on_failure` is set and at least one test case has failed,
    /// the process is terminated with a failure exit status after the
    /// summary has been reported.
    pub fn run_all(&mut self, abort_on_failure: bool) {
        let summary = self.run_pass();
        if abort_on_failure && !summary.is_passed() {
            let status = summary.status();
            self.reporter.test_run_aborting(status);
            status.exit();
        }
    }

    /// Run the first test case registered with the exact given name.
    ///
    /// This never terminates the process, even if the test case fails.
    pub fn run_named(&mut self, name: &str) {
        match self.registry.find(name) {
            Some(test) => {
                let _ = self.run_test(1, test);
            }
            None => self.reporter.test_not_found(name),
        }
    }

    pub(crate) fn run_pass(&mut self) -> Summary {
        self.reporter.test_run_starting(self.registry);

        let registry = self.registry;
        let mut summary = Summary::default();
        for (i, test) in registry.iter().enumerate() {
            let result = self.run_test(i + 1, test);
            summary.append(&result.outcome);
        }

        log::debug!(
            "run completed: {} run, {} failed",
            summary.count_run(),
            summary.count_failed()
        );
        self.reporter.test_run_ended(&summary);

        summary
    }

    fn run_test(&mut self, ordinal: usize, test: &'r Test) -> TestCaseResult<'r> {
        self.reporter.test_case_starting(ordinal, &test.desc);
        let result = TestCaseResult {
            ordinal,
            desc: &test.desc,
            outcome: test.run(),
        };
        self.reporter.test_case_ended(&result);
        result
    }
}

use crate::{check::CheckFailure, exit_status::ExitStatus, test::TestDesc};

/// The outcome of running a single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The test body returned without raising a check failure.
    Passed,
    /// The test body raised a check failure.
    Failed(CheckFailure),
}

impl Outcome {
    #[allow(missing_docs)]
    #[inline]
    pub fn is_passed(&self) -> bool {
        match self {
            Outcome::Passed => true,
            Outcome::Failed(..) => false,
        }
    }

    /// Return the check failure, if the test case failed.
    #[inline]
    pub fn failure(&self) -> Option<&CheckFailure> {
        match self {
            Outcome::Passed => None,
            Outcome::Failed(failure) => Some(failure),
        }
    }
}

/// The result of a test case within a run.
#[derive(Debug)]
pub struct TestCaseResult<'a> {
    /// The 1-based position of the test case in the run.
    pub ordinal: usize,
    #[allow(missing_docs)]
    pub desc: &'a TestDesc,
    #[allow(missing_docs)]
    pub outcome: Outcome,
}

/// Accounting of a single run.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    count_run: usize,
    count_failed: usize,
}

impl Summary {
    /// Record the outcome of a test case.
    pub fn append(&mut self, outcome: &Outcome) {
        self.count_run += 1;
        if !outcome.is_passed() {
            self.count_failed += 1;
        }
    }

    /// Return the number of test cases run.
    #[inline]
    pub fn count_run(&self) -> usize {
        self.count_run
    }

    /// Return the number of failed test cases.
    #[inline]
    pub fn count_failed(&self) -> usize {
        self.count_failed
    }

    /// Return the percentage of failed test cases.
    ///
    /// A run without any test case is reported as 0%.
    pub fn failed_percentage(&self) -> f64 {
        if self.count_run == 0 {
            return 0.0;
        }
        100.0 * self.count_failed as f64 / self.count_run as f64
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn is_passed(&self) -> bool {
        self.count_failed == 0
    }

    /// Return an exit status used as a result of the test process.
    pub fn status(&self) -> ExitStatus {
        if self.is_passed() {
            ExitStatus::OK
        } else {
            ExitStatus::FAILED
        }
    }
}

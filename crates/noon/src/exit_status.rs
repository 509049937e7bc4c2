/// Exit status code used as a result of the test process.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExitStatus(pub(crate) i32);

impl ExitStatus {
    /// The test process completed successfully.
    pub const OK: Self = Self(0);

    /// At least one test case failed.
    pub const FAILED: Self = Self(101);

    /// Return whether the status is successful or not.
    #[inline]
    pub fn success(self) -> bool {
        self.code() == 0
    }

    /// Return the raw exit code.
    #[inline]
    pub fn code(self) -> i32 {
        self.0
    }

    /// Terminate the test process with the exit code.
    ///
    /// This method **should not** be called before the cleanup
    /// of the test process has completed.
    #[inline]
    pub fn exit(self) -> ! {
        std::process::exit(self.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert!(ExitStatus::OK.success());
        assert_eq!(ExitStatus::OK.code(), 0);
        assert!(!ExitStatus::FAILED.success());
        assert_eq!(ExitStatus::FAILED.code(), 101);
    }
}

use super::Reporter;
use crate::{
    cli::ColorConfig,
    exit_status::ExitStatus,
    registry::Registry,
    report::{Outcome, Summary, TestCaseResult},
    test::TestDesc,
};
use std::{fmt, io};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

struct Colored<T> {
    val: T,
    spec: Option<ColorSpec>,
}

impl<T> Colored<T> {
    fn fg(mut self, color: Color) -> Self {
        self.spec
            .get_or_insert_with(ColorSpec::new)
            .set_fg(Some(color));
        self
    }

    fn bold(mut self) -> Self {
        self.spec.get_or_insert_with(ColorSpec::new).set_bold(true);
        self
    }

    fn fmt_colored<W: ?Sized>(&self, w: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: WriteColor,
    {
        if let Some(ref spec) = self.spec {
            w.set_color(spec)?;
        }
        write!(w, "{}", &self.val)?;
        if let Some(..) = self.spec {
            w.reset()?;
        }
        Ok(())
    }
}

fn colored<T>(val: T) -> Colored<T> {
    Colored { val, spec: None }
}

fn plural_suffix(n: usize) -> &'static str {
    match n {
        1 => "",
        _ => "s",
    }
}

/// A reporter that prints the progress to the console.
///
/// Test statuses and the summary are written to the standard output,
/// failure diagnostics to the standard error.
pub struct ConsoleReporter<W = StandardStream> {
    out: W,
    err: W,
}

impl ConsoleReporter {
    #[allow(missing_docs)]
    pub fn new(color: ColorConfig) -> Self {
        let choice = match color {
            ColorConfig::Auto => ColorChoice::Auto,
            ColorConfig::Always => ColorChoice::Always,
            ColorConfig::Never => ColorChoice::Never,
        };
        Self::with_writers(StandardStream::stdout(choice), StandardStream::stderr(choice))
    }
}

impl<W> ConsoleReporter<W>
where
    W: WriteColor,
{
    /// Create a reporter writing to the given streams.
    pub fn with_writers(out: W, err: W) -> Self {
        Self { out, err }
    }

    /// Return the stream receiving the test statuses and the summary.
    pub fn out(&self) -> &W {
        &self.out
    }

    /// Return the stream receiving the failure diagnostics.
    pub fn err(&self) -> &W {
        &self.err
    }

    fn print_run_starting(&mut self, num_tests: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "running {} test{}",
            num_tests,
            plural_suffix(num_tests)
        )
    }

    fn print_test_case_starting(&mut self, ordinal: usize, desc: &TestDesc) -> io::Result<()> {
        write!(self.out, "({}) {} ... ", ordinal, desc.display_name())?;
        self.out.flush()
    }

    fn print_test_case_ended(&mut self, result: &TestCaseResult<'_>) -> io::Result<()> {
        match result.outcome {
            Outcome::Passed => {
                colored("ok").fg(Color::Green).fmt_colored(&mut self.out)?;
                writeln!(self.out)?;
                self.out.flush()
            }
            Outcome::Failed(ref failure) => {
                colored("FAILED").fg(Color::Red).fmt_colored(&mut self.out)?;
                writeln!(self.out)?;
                self.out.flush()?;

                writeln!(
                    self.err,
                    "---- ({}) {} at {} ----",
                    result.ordinal,
                    result.desc.display_name(),
                    result.desc.location
                )?;
                writeln!(self.err, "{}", failure)?;
                self.err.flush()
            }
        }
    }

    fn print_summary(&mut self, summary: &Summary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "summary: {} run; {} failed ({:.2}%)",
            summary.count_run(),
            summary.count_failed(),
            summary.failed_percentage(),
        )?;

        let status = if summary.is_passed() {
            colored("ok").fg(Color::Green).bold()
        } else {
            colored("FAILED").fg(Color::Red).bold()
        };
        write!(self.out, "test result: ")?;
        status.fmt_colored(&mut self.out)?;
        writeln!(self.out, ".")?;

        if !summary.is_passed() {
            writeln!(self.out, "tip: use `1> /dev/null` to hide successful tests")?;
        }
        self.out.flush()
    }

    fn print_aborting(&mut self, status: ExitStatus) -> io::Result<()> {
        writeln!(self.err, "aborting with exit code {}", status.code())?;
        self.err.flush()
    }

    fn print_not_found(&mut self, name: &str) -> io::Result<()> {
        colored("error").fg(Color::Red).bold().fmt_colored(&mut self.err)?;
        writeln!(self.err, ": no test named `{}` was found", name)?;
        self.err.flush()
    }
}

impl<W> Reporter for ConsoleReporter<W>
where
    W: WriteColor,
{
    fn test_run_starting(&mut self, tests: &Registry<'_>) {
        let _ = self.print_run_starting(tests.len());
    }

    fn test_run_ended(&mut self, summary: &Summary) {
        let _ = self.print_summary(summary);
    }

    fn test_case_starting(&mut self, ordinal: usize, desc: &TestDesc) {
        let _ = self.print_test_case_starting(ordinal, desc);
    }

    fn test_case_ended(&mut self, result: &TestCaseResult<'_>) {
        let _ = self.print_test_case_ended(result);
    }

    fn test_run_aborting(&mut self, status: ExitStatus) {
        let _ = self.print_aborting(status);
    }

    fn test_not_found(&mut self, name: &str) {
        let _ = self.print_not_found(name);
    }
}

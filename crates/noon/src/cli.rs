//! Definition of command line interface.

use crate::exit_status::ExitStatus;
use getopts::Options;
use std::{env, path::Path, str::FromStr};

/// The environment variable enabling `--abort-on-failure`.
const ABORT_ON_FAILURE_ENV: &str = "NOON_ABORT_ON_FAILURE";

/// Command line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// Print the registered test cases instead of running them.
    pub list_tests: bool,
    /// Run only the test case with this exact name.
    pub test_name: Option<String>,
    /// Terminate the process with a failure status if any test case failed.
    pub abort_on_failure: bool,
    #[allow(missing_docs)]
    pub color: ColorConfig,
    #[allow(missing_docs)]
    pub reporter: ReporterKind,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            list_tests: false,
            test_name: None,
            abort_on_failure: false,
            color: ColorConfig::Auto,
            reporter: ReporterKind::Console,
        }
    }
}

impl Args {
    /// Parse command line arguments.
    pub fn from_env() -> Result<Self, ExitStatus> {
        let args: Vec<_> = env::args().collect();
        let abort_env = env::var_os(ABORT_ON_FAILURE_ENV)
            .map_or(false, |val| !val.is_empty() && val != "0");

        let parser = Parser::new(&args[..]);
        match parser.parse() {
            Ok(Some(mut args)) => {
                args.abort_on_failure |= abort_env;
                Ok(args)
            }
            Ok(None) => {
                parser.print_usage();
                Err(ExitStatus::OK)
            }
            Err(err) => {
                eprintln!("CLI argument error: {:#}", err);
                Err(ExitStatus::FAILED)
            }
        }
    }
}

/// The color configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ColorConfig {
    #[allow(missing_docs)]
    Auto,
    #[allow(missing_docs)]
    Always,
    #[allow(missing_docs)]
    Never,
}

impl FromStr for ColorConfig {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorConfig::Auto),
            "always" => Ok(ColorConfig::Always),
            "never" => Ok(ColorConfig::Never),
            v => anyhow::bail!(
                "argument for --color must be auto, always, or never (was {})",
                v
            ),
        }
    }
}

/// The reporter used to print the progress of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ReporterKind {
    /// Print to the console.
    Console,
    /// Emit log records.
    Log,
}

impl FromStr for ReporterKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "console" => Ok(ReporterKind::Console),
            "log" => Ok(ReporterKind::Log),
            v => anyhow::bail!("argument for --reporter must be console or log (was {})", v),
        }
    }
}

struct Parser<'a> {
    args: &'a [String],
    opts: Options,
}

impl<'a> Parser<'a> {
    fn new(args: &'a [String]) -> Self {
        let mut opts = Options::new();
        opts.optflag("h", "help", "Display this message");
        opts.optflag("", "list", "List all registered tests");
        opts.optflag(
            "",
            "abort-on-failure",
            "Exit with a failure status if any test fails",
        );
        opts.optopt(
            "",
            "color",
            "Configure coloring of output:
                auto   = colorize if stdout is a tty (default);
                always = always colorize output;
                never  = never colorize output;",
            "auto|always|never",
        );
        opts.optopt(
            "",
            "reporter",
            "Configure the destination of the progress:
                console = print to the console (default);
                log     = emit log records, filtered by RUST_LOG;",
            "console|log",
        );

        // The following options and flags are reserved for keeping the compatibility with
        // the built-in test harness.
        opts.optflag("", "ignored", "");
        opts.optflag("", "include-ignored", "");
        opts.optflag("", "test", "");
        opts.optflag("", "bench", "");
        opts.optflag("", "nocapture", "");
        opts.optflag("q", "quiet", "");
        opts.optflag("", "exact", "");
        opts.optopt("", "logfile", "", "PATH");
        opts.optopt("", "test-threads", "", "n_threads");
        opts.optmulti("", "skip", "", "FILTER");
        opts.optopt("", "format", "", "");
        opts.optmulti("Z", "", "", "unstable-options");

        Self { args, opts }
    }

    fn print_usage(&self) {
        let binary = self.args.first().map_or("test", String::as_str);
        let progname = Path::new(binary)
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or(binary);

        let message = format!("Usage: {} [OPTIONS] [NAME]", progname);
        eprintln!(
            r#"{usage}
If NAME is specified, only the first test case with exactly that name is executed,
otherwise all test cases are executed in registration order.

Set {env}=1 to enable --abort-on-failure from the environment."#,
            usage = self.opts.usage(&message),
            env = ABORT_ON_FAILURE_ENV,
        );
    }

    fn parse(&self) -> anyhow::Result<Option<Args>> {
        let args = self.args.get(1..).unwrap_or(&[]);

        let matches = self.opts.parse(args)?;
        if matches.opt_present("h") {
            return Ok(None);
        }

        let list_tests = matches.opt_present("list");
        let abort_on_failure = matches.opt_present("abort-on-failure");
        let color = matches
            .opt_str("color")
            .map(|s| s.parse::<ColorConfig>())
            .transpose()?
            .unwrap_or(ColorConfig::Auto);
        let reporter = matches
            .opt_str("reporter")
            .map(|s| s.parse::<ReporterKind>())
            .transpose()?
            .unwrap_or(ReporterKind::Console);

        let test_name = match &matches.free[..] {
            [] => None,
            [name] => Some(name.clone()),
            names => anyhow::bail!("expected at most one test name, got {}", names.len()),
        };

        Ok(Some(Args {
            list_tests,
            test_name,
            abort_on_failure,
            color,
            reporter,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> anyhow::Result<Option<Args>> {
        let args: Vec<String> = std::iter::once("test_harness")
            .chain(args.iter().copied())
            .map(Into::into)
            .collect();
        Parser::new(&args).parse()
    }

    #[test]
    fn defaults() {
        assert_eq!(parse(&[]).unwrap(), Some(Args::default()));
    }

    #[test]
    fn named_test() {
        let args = parse(&["check_sun_shines"]).unwrap().unwrap();
        assert_eq!(args.test_name.as_deref(), Some("check_sun_shines"));
        assert!(!args.abort_on_failure);
    }

    #[test]
    fn flags() {
        let args = parse(&["--abort-on-failure", "--list", "--color", "never", "--reporter=log"])
            .unwrap()
            .unwrap();
        assert!(args.abort_on_failure);
        assert!(args.list_tests);
        assert_eq!(args.color, ColorConfig::Never);
        assert_eq!(args.reporter, ReporterKind::Log);
    }

    #[test]
    fn help() {
        assert_eq!(parse(&["--help"]).unwrap(), None);
        assert_eq!(parse(&["-h"]).unwrap(), None);
    }

    #[test]
    fn libtest_flags_are_accepted() {
        let args = parse(&["--nocapture", "--test-threads", "1", "-q", "--exact", "alpha"])
            .unwrap()
            .unwrap();
        assert_eq!(args.test_name.as_deref(), Some("alpha"));
    }

    #[test]
    fn errors() {
        assert!(parse(&["--color", "sometimes"]).is_err());
        assert!(parse(&["--reporter", "json"]).is_err());
        assert!(parse(&["--unknown-flag"]).is_err());
        assert!(parse(&["alpha", "gamma"]).is_err());
    }
}

use crate::{
    cli::{Args, ColorConfig, ReporterKind},
    registry::Registry,
    reporter::{ConsoleReporter, LogReporter, Reporter},
    runner::Runner,
    test::Test,
};
use linkme::distributed_slice;
use std::io;

#[doc(hidden)]
#[distributed_slice]
pub static TESTS: [&'static Test] = [..];

/// Build the registry from the test cases declared with `#[noon::test]`.
///
/// The registry is rebuilt on each call. The linker lays the declarations out
/// in no particular order, so they are sorted by source location: test cases
/// of one file are registered in declaration order, and files are ordered by
/// path.
pub fn registry() -> Registry<'static> {
    let mut tests: Vec<&'static Test> = TESTS.iter().copied().collect();
    tests.sort_by_key(|test| {
        let location = &test.desc.location;
        (location.file, location.line, location.column)
    });

    let mut registry = Registry::new();
    registry.extend(tests);
    log::debug!("collected {} declared test case(s)", registry.len());
    registry
}

/// Run all declared test cases, printing the progress to the console.
///
/// When `abort_on_failure` is set and any test case fails, the process
/// exits with a failure status after the summary is printed.
pub fn run_all(abort_on_failure: bool) {
    let registry = registry();
    Runner::new(&registry, ConsoleReporter::new(ColorConfig::Auto)).run_all(abort_on_failure);
}

/// Run the first declared test case with the exact given name.
pub fn run_named(name: &str) {
    let registry = registry();
    Runner::new(&registry, ConsoleReporter::new(ColorConfig::Auto)).run_named(name);
}

#[doc(hidden)]
pub fn main() {
    let _ = env_logger::Builder::from_default_env().try_init();

    let args = Args::from_env().unwrap_or_else(|st| st.exit());
    let registry = registry();

    if args.list_tests {
        let stdout = io::stdout();
        let _ = print_list(&mut stdout.lock(), &registry);
        return;
    }

    let reporter: Box<dyn Reporter> = match args.reporter {
        ReporterKind::Console => Box::new(ConsoleReporter::new(args.color)),
        ReporterKind::Log => Box::new(LogReporter::new()),
    };
    let mut runner = Runner::new(&registry, reporter);
    match args.test_name {
        Some(ref name) => runner.run_named(name),
        None => runner.run_all(args.abort_on_failure),
    }
}

fn print_list<W: ?Sized>(w: &mut W, registry: &Registry<'_>) -> io::Result<()>
where
    W: io::Write,
{
    for (i, test) in registry.iter().enumerate() {
        writeln!(
            w,
            "({}) {}: test at {}",
            i + 1,
            test.desc.display_name(),
            test.desc.location
        )?;
    }

    let suffix = match registry.len() {
        1 => "",
        _ => "s",
    };
    if !registry.is_empty() {
        writeln!(w)?;
    }
    writeln!(w, "{} test{}", registry.len(), suffix)?;
    w.flush()
}

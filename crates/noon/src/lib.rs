/*!
A minimal self-registering test harness.

Test cases register themselves into a link-time table simply by being
declared, and the runner executes them in registration order, reporting
the outcome of each test and an aggregate summary.

# Writing Test Cases

A test case is a free function without arguments annotated with
`#[noon::test]`. Conditions are checked with [`check!`], which returns
early from the test body with a [`CheckFailure`] when the condition is false.

```
# fn main() {}
# mod inner {
use noon::check;

#[noon::test]
fn addition() {
    check!(1 + 1 == 2);
    check!(2 + 2 == 4, "arithmetic is broken");
}
# }
```

By default the test is named after the function. A test can also be left
anonymous, or given an explicit name:

```
# fn main() {}
# mod inner {
use noon::check_message;

#[noon::test(anonymous)]
fn unnamed() {
    check_message!("the sun shines", true);
}

#[noon::test(name = "sun shines")]
fn sun_shines() {}
# }
```

A test function without a return type leaves early only through `check!` or
[`fail!`]; a bare `return` in its body is rejected at compile time. Declare
`-> Result<(), CheckFailure>` to return explicitly.

A test body that never calls `check!` is reported as passed.
Only check failures mark a test as failed: a panic inside a test body is
not caught and terminates the run.

# Running Test Cases

The test binary defines its entry point with [`test_harness!`], which parses
the command line, builds the registry and runs the tests:

```ignore
noon::test_harness!();
```

Alternatively, call [`run_all`] or [`run_named`] from a hand-written `main`
after all tests are declared.

!*/

#![doc(html_root_url = "https://docs.rs/noon/0.1.0-dev")]
#![deny(missing_docs)]
#![forbid(clippy::unimplemented, clippy::todo)]

#[macro_use]
mod macros;
mod check;
mod cli;
mod exit_status;
mod harness;
mod registry;
mod report;
mod reporter;
mod runner;

pub use crate::{
    check::CheckFailure,
    cli::{Args, ColorConfig, ReporterKind},
    exit_status::ExitStatus,
    harness::{registry, run_all, run_named},
    registry::{Iter, Registry},
    report::{Outcome, Summary, TestCaseResult},
    reporter::{ConsoleReporter, LogReporter, Reporter},
    runner::Runner,
    test::{Location, Test, TestDesc, TestFn},
};

/// Generate a single test case.
pub use noon_macros::test;

hidden_item! {
    /// Re-exported items for #[test]
    pub mod _test_reexports {
        pub use crate::{
            __location as location,
            check::CheckFailure,
            test::{Location, Test, TestDesc, TestFn},
        };
        pub use std::{column, concat, file, line, option::Option, result::Result, stringify};
    }

    /// Re-exported items for test_harness!() and __test_case!()
    pub mod _test_harness_reexports {
        pub use {
            crate::harness::{main, TESTS},
            linkme::{self, distributed_slice},
        };
    }
}

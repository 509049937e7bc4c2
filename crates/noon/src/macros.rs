macro_rules! hidden_item {
    ( $( $item:item )* ) => {
        $(
            #[doc(hidden)]
            $item
        )*
    };
}

/// Check that a condition holds, or fail the current test case.
///
/// On failure, the enclosing function returns a [`CheckFailure`](crate::CheckFailure)
/// carrying the message and the location of the check. Without an explicit
/// message, the stringified condition is used.
///
/// The message must be a `&'static str`, typically a string literal.
#[macro_export]
macro_rules! check {
    ( $cond:expr $(,)? ) => {
        $crate::check!(
            $cond,
            $crate::_test_reexports::concat!(
                "check failed: ",
                $crate::_test_reexports::stringify!($cond)
            )
        )
    };
    ( $cond:expr, $msg:expr $(,)? ) => {{
        if !($cond) {
            $crate::fail!($msg);
        }
    }};
}

/// Same as [`check!`], with the message placed first.
#[macro_export]
macro_rules! check_message {
    ( $msg:expr, $cond:expr $(,)? ) => {
        $crate::check!($cond, $msg)
    };
}

/// Mark the current test case as failed and then terminate its execution.
#[macro_export]
macro_rules! fail {
    () => {
        $crate::fail!("explicitly failed")
    };
    ( $msg:expr $(,)? ) => {{
        use $crate::_test_reexports as __noon;
        const LOCATION: __noon::Location = __noon::location!();
        return __noon::Result::Err(__noon::CheckFailure::new($msg, LOCATION).into());
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __location {
    () => {{
        use $crate::_test_reexports as __noon;
        __noon::Location {
            file: __noon::file!(),
            line: __noon::line!(),
            column: __noon::column!(),
        }
    }};
}

#[doc(hidden)] // private API
#[macro_export]
macro_rules! __test_case {
    ( $item:item ) => {
        #[$crate::_test_harness_reexports::distributed_slice(
            $crate::_test_harness_reexports::TESTS
        )]
        #[linkme(crate = $crate::_test_harness_reexports::linkme)]
        $item
    };
}

/// Generate the main function for running the registered test cases.
#[macro_export]
macro_rules! test_harness {
    () => {
        fn main() {
            $crate::_test_harness_reexports::main()
        }
    };
}

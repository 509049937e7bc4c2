#[allow(non_upper_case_globals)]
const local: &crate::_test_reexports::Test = {
    #[allow(unused_imports)]
    use crate::_test_reexports as __noon;

    fn local() -> __noon::Result<(), __noon::CheckFailure> {
        {}
        __noon::Result::Ok(())
    }

    &__noon::Test {
        desc: __noon::TestDesc {
            name: __noon::Option::Some("local"),
            location: __noon::location!(),
        },
        body: local,
    }
};

crate::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_local: &crate::_test_reexports::Test = local;
}

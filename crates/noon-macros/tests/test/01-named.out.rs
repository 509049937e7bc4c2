#[allow(non_upper_case_globals)]
const alpha: &::noon::_test_reexports::Test = {
    #[allow(unused_imports)]
    use ::noon::_test_reexports as __noon;

    fn alpha() -> __noon::Result<(), __noon::CheckFailure> {
        {
            check!(1 + 1 == 2);
        }
        __noon::Result::Ok(())
    }

    &__noon::Test {
        desc: __noon::TestDesc {
            name: __noon::Option::Some("alpha"),
            location: __noon::location!(),
        },
        body: alpha,
    }
};

::noon::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_alpha: &::noon::_test_reexports::Test = alpha;
}

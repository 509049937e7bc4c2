#[allow(non_upper_case_globals)]
const fallible: &::noon::_test_reexports::Test = {
    #[allow(unused_imports)]
    use ::noon::_test_reexports as __noon;

    fn fallible() -> Result<(), noon::CheckFailure> {
        noon::check!(true);
        Ok(())
    }

    &__noon::Test {
        desc: __noon::TestDesc {
            name: __noon::Option::Some("fallible"),
            location: __noon::location!(),
        },
        body: fallible,
    }
};

::noon::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_fallible: &::noon::_test_reexports::Test = fallible;
}

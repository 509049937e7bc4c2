#[allow(non_upper_case_globals)]
const unnamed: &::noon::_test_reexports::Test = {
    #[allow(unused_imports)]
    use ::noon::_test_reexports as __noon;

    fn unnamed() -> __noon::Result<(), __noon::CheckFailure> {
        {
            check_message!("hey", true);
        }
        __noon::Result::Ok(())
    }

    &__noon::Test {
        desc: __noon::TestDesc {
            name: __noon::Option::None,
            location: __noon::location!(),
        },
        body: unnamed,
    }
};

::noon::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_unnamed: &::noon::_test_reexports::Test = unnamed;
}

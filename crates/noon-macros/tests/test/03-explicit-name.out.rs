#[allow(non_upper_case_globals)]
const sun_shines: &::noon::_test_reexports::Test = {
    #[allow(unused_imports)]
    use ::noon::_test_reexports as __noon;

    #[allow(unused_mut)]
    fn sun_shines() -> __noon::Result<(), __noon::CheckFailure> {
        {
            let shining = true;
            check!(shining, "Yes it most certainly does");
        }
        __noon::Result::Ok(())
    }

    &__noon::Test {
        desc: __noon::TestDesc {
            name: __noon::Option::Some("sun shines"),
            location: __noon::location!(),
        },
        body: sun_shines,
    }
};

::noon::__test_case! {
    #[allow(non_upper_case_globals)]
    static __TEST_CASE_sun_shines: &::noon::_test_reexports::Test = sun_shines;
}

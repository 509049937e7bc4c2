use noon::check;

#[noon::test]
fn named() {
    check!(1 + 1 == 2);
}

#[noon::test(anonymous)]
fn unnamed() {}

#[noon::test(name = "with spaces")]
fn renamed() -> Result<(), noon::CheckFailure> {
    noon::check_message!("must hold", true);
    Ok(())
}

noon::test_harness!();

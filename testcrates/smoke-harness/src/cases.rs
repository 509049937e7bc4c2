use noon::check;

#[noon::test]
fn alpha() {
    check!(1 + 1 == 2);
}

#[noon::test(anonymous)]
fn boom() {
    check!(false, "boom");
}

#[noon::test]
fn gamma() {}

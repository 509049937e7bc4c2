#[noon::test]
fn gamma() {
    noon::check!(true);
}

fn main() {
    noon::run_named("gamma");
    noon::run_all(false);
}

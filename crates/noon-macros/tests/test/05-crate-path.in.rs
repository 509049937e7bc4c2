#[noon(crate = crate)]
fn local() {}

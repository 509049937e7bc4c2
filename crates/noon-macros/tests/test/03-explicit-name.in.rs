#[allow(unused_mut)]
fn sun_shines() {
    let shining = true;
    check!(shining, "Yes it most certainly does");
}

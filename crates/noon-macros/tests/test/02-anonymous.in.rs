fn unnamed() {
    check_message!("hey", true);
}

fn alpha() {
    check!(1 + 1 == 2);
}

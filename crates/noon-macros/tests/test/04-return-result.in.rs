fn fallible() -> Result<(), noon::CheckFailure> {
    noon::check!(true);
    Ok(())
}

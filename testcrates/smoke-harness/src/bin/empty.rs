noon::test_harness!();

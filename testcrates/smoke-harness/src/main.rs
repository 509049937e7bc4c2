mod cases;

noon::test_harness!();

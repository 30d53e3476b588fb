//! Integration test binary; one module per test area.

mod cli_test;

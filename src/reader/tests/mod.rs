//! Tests for the built-in readers

mod csv_tests;

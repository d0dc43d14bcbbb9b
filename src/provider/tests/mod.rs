//! Tests for the built-in providers

mod file_tests;
mod inline_tests;

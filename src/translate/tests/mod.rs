//! Tests for the built-in translations and chain semantics

mod default_tests;
mod numeric_tests;

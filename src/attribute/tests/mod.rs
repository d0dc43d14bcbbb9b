//! Tests for attribute mapping

//! Tests for traversal of domains

mod traversal_tests;

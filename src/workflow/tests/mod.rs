//! Unit tests for the workflow context.

mod support;

mod schema_tests;

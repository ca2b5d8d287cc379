//! Unit tests for the sheet context.

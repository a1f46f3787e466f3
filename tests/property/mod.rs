//! Property-based tests for merge and matcher guarantees

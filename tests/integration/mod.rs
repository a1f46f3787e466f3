//! Integration tests for the ctxconf context store

mod info_command;
mod merge_command;
mod remove_command;
mod store_integration;
mod test_utils;

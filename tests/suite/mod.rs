//! Integration test suite modules.

mod config;
mod gameplay;

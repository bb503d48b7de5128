//! Integration tests for the movie console.

pub mod common;
pub mod store_test;

//! Shared test harness
//!
//! Each integration test file compiles this module independently, so not
//! every helper is used from every file.

#![allow(dead_code)]

pub mod mock_groq;
pub mod server;

//! Integration tests for the codespace library
//!
//! These tests drive the public API end to end: loading content, filtering
//! and paging it, and running the simulated playground.

pub mod content;
pub mod filtering;
pub mod helpers;
pub mod pagination;
pub mod playground;

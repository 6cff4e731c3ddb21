//! Shared helpers for end-to-end tests

#![allow(dead_code)]

mod registry;

pub use registry::*;

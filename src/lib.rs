//! Query release versions of programming languages and tools
//!
//! Fetches per-language release manifests, normalizes their heterogeneous
//! shapes into a flat version list and reduces it to one entry per
//! major.minor line inside a configurable version window.
//!
//! # Modules
//!
//! - [`cli`]: Command line arguments and output rendering
//! - [`config`]: Constants, version directives and the per-run `Configuration`
//! - [`language`]: Supported languages and their endpoint table
//! - [`logging`]: `tracing` subscriber setup
//! - [`version`]: Fetch, extract, reduce pipeline

pub mod cli;
pub mod config;
pub mod language;
pub mod logging;
pub mod version;

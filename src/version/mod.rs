//! Version lookup layer for language releases
//!
//! This module provides the core functionality for fetching release manifests,
//! extracting raw version strings from them and reducing those strings to the
//! final, bounded version list.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Fetcher   │────▶│  Adapters   │────▶│   Reducer   │
//! │   (http)    │     │  (extract)  │     │ (bucket+cut)│
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                                       ▲
//!        ▼                                       │
//! ┌─────────────┐                         ┌─────────────┐
//! │  EOL feed   │────────────────────────▶│  min bound  │
//! │  (resolve)  │                         │             │
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`adapters`]: Payload shape adapters (manifest, Perl, PHP, Ruby, Terraform)
//! - [`eol`]: End-of-life feed and minimum version resolution
//! - [`error`]: Error types for configuration, registry and lookup failures
//! - [`http`]: `reqwest` backed [`registry::Fetcher`] implementation
//! - [`lookup`]: Orchestrates one lookup for a `Configuration`
//! - [`reducer`]: Range filtering, bucketing, sorting and truncation
//! - [`registry`]: Fetcher trait for retrieving remote documents
//! - [`semver`]: Loose version parsing and the segment-wise sort key

pub mod adapters;
pub mod eol;
pub mod error;
pub mod http;
pub mod lookup;
pub mod reducer;
pub mod registry;
pub mod semver;

//! Version layer for documentation sites
//!
//! This module decides which documentation version to link against and checks
//! that a release has a matching documentation snapshot.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registries │────▶│  Registry   │◀────│  Resolver   │
//! │ (docusaurus)│     │  (trait)    │     │  (modes)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │   Natural   │
//!                                         │ (ordering)  │
//!                                         └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Release manifest vs. documented versions check
//! - [`error`]: Error types for registries, modes and checks
//! - [`mode`]: Resolution modes and their string forms
//! - [`natural`]: Numeric-aware, case-insensitive string ordering
//! - [`registry`]: Registry trait supplying version descriptors
//! - [`registries`]: In-memory registry and the Docusaurus loader
//! - [`resolver`]: Version resolution per mode
//! - [`types`]: Common types like `VersionDescriptor`

pub mod checker;
pub mod error;
pub mod mode;
pub mod natural;
pub mod registries;
pub mod registry;
pub mod resolver;
pub mod types;

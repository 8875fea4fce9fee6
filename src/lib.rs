//! Documentation version resolution for versioned documentation sites.
//!
//! - [`version`]: version descriptors, ordering, registries and the resolver
//! - [`install`]: installation command rendering
//! - [`config`]: configuration file and data directory handling
//! - [`logging`]: tracing subscriber setup for the CLI

pub mod config;
pub mod install;
pub mod logging;
pub mod version;

//! sr-core - Core library for Schemareset
//!
//! This crate provides configuration parsing, migration discovery, header
//! templating, and assembly of the single reset script that tears down a
//! schema and replays every migration in filename order.

pub mod checksum;
pub mod config;
pub mod error;
pub mod header;
pub mod migration;
pub mod script;

pub use checksum::compute_checksum;
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use header::{render_header, HeaderContext};
pub use migration::{discover_migrations, MigrationFile};
pub use script::{assemble, generate, migration_banner, ResetReport, ResetRequest};

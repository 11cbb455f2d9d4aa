#![cfg_attr(docsrs, feature(doc_cfg))]
//! `migverify` is a cross-engine verification harness for database
//! schema-migration tools.
//!
//! Core concepts:
//! - A migration tool is consumed as an opaque [Migrator]: the harness drives a run and asserts only its externally observable effects on the server.
//! - Per-engine SQL dialect differences live behind one [Dialect] contract; everything else is engine-agnostic and talks to the server through a single connection abstraction.
//! - Server-side state changes (CREATE DATABASE, user and grant provisioning) are not instantaneous or fully transactional from the client's point of view, so the [provision] layer retries and degrades instead of flaking.
//!
//! # Motivation
//!
//! ## One harness, many engines
//!
//! A migration tool's contract (create the database if missing, skip if it
//! already exists, honor a hand-written bootstrap script, run with a
//! minimal-privilege connection) only means something when it holds on
//! every engine the tool claims to support. Writing the scenarios once per
//! engine multiplies the fragile parts: retry discipline, connection
//! cleanup, dialect text. Here the scenarios in [verify] are written once
//! against an [EngineContext], and each engine supplies a [Dialect] plus
//! connection details.
//!
//! ## Provisioning that does not flake
//!
//! Administrative DDL runs on dedicated autocommit connections, never
//! inside a caller transaction, and each operation retries a fixed number
//! of times, swallowing database-level errors. Past the retry budget the
//! provisioning layer degrades to an empty result rather than raising;
//! scenarios assert the state they need and report precisely what is
//! missing.
//!
//! # Database support
//!
//! - PostgreSQL - available with the `postgres` feature flag.
//! - MySQL - available with the `mysql` feature flag.
//! - MariaDB - available with the `mariadb` feature flag.
//!
//! # Other feature flags
//!
//! - `testing` - a minimal reference [Migrator](crate::Migrator) for
//!   exercising the harness end to end.
//! - `tracing` - tracing integration.

mod config;
pub use config::{FolderLayout, MigrationConfig};

mod context;
pub use context::EngineContext;

mod dialect;
pub use dialect::Dialect;

mod error;
pub use error::Error;

mod migrator;
pub use migrator::{Migrator, MigratorFactory};

pub mod provision;

pub mod verify;

#[cfg(feature = "postgres")]
#[cfg_attr(docsrs, doc(cfg(feature = "postgres")))]
pub mod postgres;

#[cfg(feature = "mysql")]
pub mod mysql;

#[cfg(feature = "mariadb")]
#[cfg_attr(docsrs, doc(cfg(feature = "mariadb")))]
pub mod mariadb;

#[cfg(any(test, feature = "testing"))]
#[cfg_attr(docsrs, doc(cfg(feature = "testing")))]
pub mod testing;

#[cfg(all(test, feature = "postgres"))]
pub(crate) mod test_postgres;

#[cfg(all(test, feature = "mysql"))]
pub(crate) mod test_mysql;

#[cfg(all(test, feature = "mariadb"))]
pub(crate) mod test_mariadb;

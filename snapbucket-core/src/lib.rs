#![doc = "snapbucket-core: core logic library for snapbucket."]

//! This crate holds the screenshot publishing pipeline, its data model and
//! the contracts for the external services it calls (object storage and the
//! clipboard). Concrete S3 and clipboard clients live in the `snapbucket` crate.
//!
//! # Usage
//! Call [`pipeline::publish_latest`] with a resolved [`config::Config`] and
//! implementations of [`contract::ObjectStore`] and [`contract::Clipboard`].

pub mod config;
pub mod contract;
pub mod error;
pub mod key;
pub mod pipeline;
pub mod publish;
pub mod screenshot;

pub use error::{Error, Result};

#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the wheelhouse helper crates
//!
//! This crate provides fundamental types used throughout the system,
//! including wheel artifacts, publish requests/reports, and the metadata
//! rows surfaced by the catalog and registry helpers.

pub mod artifact;
pub mod catalog;
pub mod publish;

// Re-export commonly used types
pub use artifact::WheelArtifact;
pub use catalog::{RegisteredModel, SchemaInfo};
pub use publish::{PipelineStage, PublishReport, PublishRequest};
pub use uuid::Uuid;

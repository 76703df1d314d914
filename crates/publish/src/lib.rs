#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Wheel build-and-publish pipeline
//!
//! Stages a source tree into a per-invocation scratch directory, invokes the
//! external build tool there, locates the single produced wheel, and copies
//! it into a managed volume. Stages run strictly in order
//! (stage -> build -> locate -> publish) and the first failure aborts the
//! rest; a retry re-runs the whole pipeline from the start.

mod builder;
mod locate;
mod pipeline;
mod publisher;
mod staging;
mod timeout;

pub use builder::{CommandWheelBuilder, WheelBuilder};
pub use locate::locate_wheel;
pub use pipeline::PublishPipeline;
pub use publisher::publish_artifact;
pub use staging::StagingArea;
pub use timeout::{with_optional_timeout, with_timeout};

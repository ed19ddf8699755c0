//! Core domain models
//!
//! This module defines the data structures that describe pipelines, step
//! templates, step runs and the resources they bind.

pub mod condition;
pub mod config;
pub mod pipeline;
pub mod resource;
pub mod state;
pub mod step;

pub use condition::*;
pub use pipeline::*;
pub use resource::*;
pub use state::*;
pub use step::*;

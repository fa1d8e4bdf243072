//! Structured message formats.
//!
//! This module contains:
//! - The [`MessageFormat`] trait and the [`MessageFormatter`] registry
//! - The fixed-layout Health and Environmental formats
//! - The self-describing CustomStructure format

pub mod custom;
pub mod environmental;
pub mod formatter;
pub mod health;

pub use custom::CustomStructureFormat;
pub use environmental::EnvironmentalFormat;
pub use formatter::{MessageFormat, MessageFormatter};
pub use health::HealthFormat;

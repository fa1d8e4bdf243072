//! Typed codec registry.
//!
//! This module contains:
//! - The [`CodecRegistry`] mapping value types to codec strategies
//! - The built-in strategies for the supported value types

pub mod registry;
pub mod strategies;

pub use registry::{CodecRegistry, CodecStrategy};
pub use strategies::{
    BoolCodec, F32Codec, I16Codec, I32Codec, U16Codec, U8Codec, Utf8Codec,
};

//! Error types for the ble-message-codec crate.

use crate::value::ValueType;
use thiserror::Error;

/// The main error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// No codec strategy is registered for the requested value type.
    ///
    /// This is a configuration error, not a data error: the registry
    /// never falls back to a default strategy.
    #[error("No codec strategy registered for value type {value_type}")]
    UnregisteredType {
        /// The value type that has no strategy.
        value_type: ValueType,
    },

    /// The requested format name has no registered message format.
    #[error("Unknown message format: {name}")]
    UnknownFormat {
        /// The format name that was looked up.
        name: String,
    },

    /// A buffer failed header-byte or minimum-length validation for a
    /// structured format.
    #[error("Malformed record: {context}")]
    MalformedRecord {
        /// Description of what was invalid about the buffer.
        context: String,
    },

    /// A caller-supplied value cannot be represented by the requested
    /// value type.
    #[error("Type mismatch: {expected} cannot represent {value}")]
    TypeMismatch {
        /// The value type the wire slot requires.
        expected: ValueType,
        /// Display form of the offending value.
        value: String,
    },

    /// A field name or string value exceeds the one-byte length prefix
    /// of the self-describing format.
    #[error("Field too long: {name} is {length} bytes (maximum 255)")]
    FieldTooLong {
        /// The field the oversized data belongs to.
        name: String,
        /// The actual byte length.
        length: usize,
    },

    /// A field mapping holds more entries than the one-byte field count
    /// of the self-describing format can declare.
    #[error("Too many fields: {count} (maximum 255)")]
    TooManyFields {
        /// The number of fields in the mapping.
        count: usize,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;

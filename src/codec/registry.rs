//! Codec strategy registry.
//!
//! Dispatches decode and encode calls by value type. The registry is
//! populated with the built-in strategies at construction and can be
//! extended (or have entries replaced) at runtime; entries are never
//! removed.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::codec::strategies;
use crate::error::{Error, Result};
use crate::value::{Value, ValueType};

/// A paired decode/encode operation for one value type.
///
/// Strategies are stateless. Decoding is tolerant of truncated or
/// padded buffers and never fails for the built-in types; encoding
/// fails only when the supplied value cannot be represented by the
/// strategy's type.
pub trait CodecStrategy: Send + Sync {
    /// Decode a raw characteristic buffer into a typed value.
    ///
    /// An empty buffer decodes to the type's zero value.
    fn decode(&self, data: &[u8]) -> Value;

    /// Encode a typed value into its wire representation.
    fn encode(&self, value: &Value) -> Result<Vec<u8>>;
}

/// Registry mapping value types to codec strategies.
///
/// Construction installs the built-in strategies for every supported
/// type except [`ValueType::I8`], which has no registry slot by
/// default. Lookups for unregistered types fail with
/// [`Error::UnregisteredType`]; the registry never silently defaults.
///
/// Mutation is expected during single-threaded setup, but the table
/// sits behind a reader-writer lock so a late
/// [`register`](CodecRegistry::register) call is safe against
/// concurrent decode/encode traffic.
pub struct CodecRegistry {
    strategies: RwLock<HashMap<ValueType, Arc<dyn CodecStrategy>>>,
}

impl CodecRegistry {
    /// Create a registry with the built-in strategies installed.
    pub fn new() -> Self {
        let registry = Self {
            strategies: RwLock::new(HashMap::new()),
        };
        registry.register(ValueType::I32, Arc::new(strategies::I32Codec));
        registry.register(ValueType::F32, Arc::new(strategies::F32Codec));
        registry.register(ValueType::Str, Arc::new(strategies::Utf8Codec));
        registry.register(ValueType::Bool, Arc::new(strategies::BoolCodec));
        registry.register(ValueType::U8, Arc::new(strategies::U8Codec));
        registry.register(ValueType::U16, Arc::new(strategies::U16Codec));
        registry.register(ValueType::I16, Arc::new(strategies::I16Codec));
        registry
    }

    /// Install or replace the strategy for a value type.
    ///
    /// Subsequent decode/encode calls for that type use the new
    /// strategy immediately.
    pub fn register(&self, value_type: ValueType, strategy: Arc<dyn CodecStrategy>) {
        self.strategies.write().insert(value_type, strategy);
    }

    /// Check whether a strategy is registered for a value type.
    pub fn is_registered(&self, value_type: ValueType) -> bool {
        self.strategies.read().contains_key(&value_type)
    }

    /// Decode a raw buffer into a value of the given type.
    pub fn decode(&self, value_type: ValueType, data: &[u8]) -> Result<Value> {
        let strategy = self.strategy(value_type)?;
        Ok(strategy.decode(data))
    }

    /// Encode a value into the wire representation of the given type.
    pub fn encode(&self, value_type: ValueType, value: &Value) -> Result<Vec<u8>> {
        let strategy = self.strategy(value_type)?;
        strategy.encode(value)
    }

    fn strategy(&self, value_type: ValueType) -> Result<Arc<dyn CodecStrategy>> {
        self.strategies
            .read()
            .get(&value_type)
            .cloned()
            .ok_or(Error::UnregisteredType { value_type })
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = CodecRegistry::new();
        for value_type in [
            ValueType::I32,
            ValueType::F32,
            ValueType::Str,
            ValueType::Bool,
            ValueType::U8,
            ValueType::U16,
            ValueType::I16,
        ] {
            assert!(registry.is_registered(value_type), "{value_type} missing");
        }
        assert!(!registry.is_registered(ValueType::I8));
    }

    #[test]
    fn test_unregistered_type_decode() {
        let registry = CodecRegistry::new();
        let result = registry.decode(ValueType::I8, &[0x01]);
        assert!(matches!(
            result,
            Err(Error::UnregisteredType {
                value_type: ValueType::I8
            })
        ));
    }

    #[test]
    fn test_unregistered_type_encode() {
        let registry = CodecRegistry::new();
        let result = registry.encode(ValueType::I8, &Value::I8(-5));
        assert!(matches!(
            result,
            Err(Error::UnregisteredType {
                value_type: ValueType::I8
            })
        ));
    }

    #[test]
    fn test_register_installs_strategy() {
        struct SignedByteCodec;

        impl CodecStrategy for SignedByteCodec {
            fn decode(&self, data: &[u8]) -> Value {
                Value::I8(data.first().copied().unwrap_or(0) as i8)
            }

            fn encode(&self, value: &Value) -> Result<Vec<u8>> {
                let v = value.as_i8().ok_or_else(|| Error::TypeMismatch {
                    expected: ValueType::I8,
                    value: value.to_string(),
                })?;
                Ok(vec![v as u8])
            }
        }

        let registry = CodecRegistry::new();
        registry.register(ValueType::I8, Arc::new(SignedByteCodec));

        assert_eq!(
            registry.decode(ValueType::I8, &[0xFF]).unwrap(),
            Value::I8(-1)
        );
        assert_eq!(
            registry.encode(ValueType::I8, &Value::I8(-1)).unwrap(),
            vec![0xFF]
        );
    }

    #[test]
    fn test_register_replaces_strategy() {
        struct FixedCodec;

        impl CodecStrategy for FixedCodec {
            fn decode(&self, _data: &[u8]) -> Value {
                Value::Bool(true)
            }

            fn encode(&self, _value: &Value) -> Result<Vec<u8>> {
                Ok(vec![0xAA])
            }
        }

        let registry = CodecRegistry::new();
        registry.register(ValueType::Bool, Arc::new(FixedCodec));

        // The replacement answers all subsequent calls.
        assert_eq!(
            registry.decode(ValueType::Bool, &[0x00]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            registry.encode(ValueType::Bool, &Value::Bool(false)).unwrap(),
            vec![0xAA]
        );
    }
}

//! Message format registry.
//!
//! Maps format names to [`MessageFormat`] implementations and routes
//! encode/decode calls to them. The built-in Health, Environmental and
//! CustomStructure formats are registered at construction; callers can
//! register additional formats at runtime.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::fields::FieldMap;
use crate::format::{CustomStructureFormat, EnvironmentalFormat, HealthFormat};

/// A named binary record layout.
///
/// A format owns one buffer layout: `encode` turns a field mapping
/// into a single characteristic buffer and `decode` reverses it.
/// Implementations are stateless with respect to one message at a
/// time and never mutate input buffers.
pub trait MessageFormat: Send + Sync {
    /// Encode a field mapping into a characteristic buffer.
    fn encode(&self, fields: &FieldMap) -> Result<Vec<u8>>;

    /// Decode a characteristic buffer into a field mapping.
    fn decode(&self, data: &[u8]) -> Result<FieldMap>;
}

/// Registry of named message formats.
///
/// Names are case-sensitive. Registration overwrites; entries are
/// never removed. Lookups for unknown names fail with
/// [`Error::UnknownFormat`]. Like the codec registry, the table sits
/// behind a reader-writer lock so runtime registration is safe
/// against concurrent traffic.
pub struct MessageFormatter {
    formats: RwLock<HashMap<String, Arc<dyn MessageFormat>>>,
}

impl MessageFormatter {
    /// Create a formatter with the built-in formats registered.
    pub fn new() -> Self {
        let formatter = Self {
            formats: RwLock::new(HashMap::new()),
        };
        formatter.register_format(HealthFormat::NAME, Arc::new(HealthFormat));
        formatter.register_format(EnvironmentalFormat::NAME, Arc::new(EnvironmentalFormat));
        formatter.register_format(CustomStructureFormat::NAME, Arc::new(CustomStructureFormat));
        formatter
    }

    /// Install a format under a name, overwriting any existing entry.
    pub fn register_format(&self, name: impl Into<String>, format: Arc<dyn MessageFormat>) {
        self.formats.write().insert(name.into(), format);
    }

    /// Check whether a format name is registered.
    pub fn is_registered(&self, name: &str) -> bool {
        self.formats.read().contains_key(name)
    }

    /// Names of all registered formats, unordered.
    pub fn format_names(&self) -> Vec<String> {
        self.formats.read().keys().cloned().collect()
    }

    /// Encode a field mapping with the named format.
    pub fn encode(&self, name: &str, fields: &FieldMap) -> Result<Vec<u8>> {
        self.format(name)?.encode(fields)
    }

    /// Decode a buffer with the named format.
    pub fn decode(&self, name: &str, data: &[u8]) -> Result<FieldMap> {
        self.format(name)?.decode(data)
    }

    fn format(&self, name: &str) -> Result<Arc<dyn MessageFormat>> {
        self.formats
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownFormat {
                name: name.to_string(),
            })
    }
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new()
    }
}

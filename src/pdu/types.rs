//! Varbind and payload types

use serde::{Deserialize, Serialize};

/// Typed payload carried by one varbind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Signed integer (INTEGER / Integer32)
    Integer(i64),
    /// Unsigned integer (Counter32/64, Gauge32, TimeTicks)
    Unsigned(u64),
    /// Floating point (Opaque float/double)
    Float(f64),
    /// Displayable text (decoded OCTET STRING)
    Text(String),
    /// Raw bytes (undecoded OCTET STRING and opaque payloads)
    Bytes(Vec<u8>),
}

/// One OID/value pair as returned by a query.
///
/// Varbinds are produced by the transport layer and are immutable once
/// received; the mapper only ever reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarBind {
    /// Dotted-numeric object identifier, e.g. `".1.3.6.1.2.1.1.5.0"`.
    pub oid: String,
    /// Typed payload.
    pub value: Value,
}

impl VarBind {
    /// Create a new varbind.
    pub fn new(oid: impl Into<String>, value: Value) -> Self {
        Self {
            oid: oid.into(),
            value,
        }
    }
}

//! SNMP Mapper - map query results onto statically declared record types
//!
//! Provides the pieces a poller needs between the transport and its own
//! data model:
//! - OID collection from annotated record schemas ([`collect_oids`])
//! - Varbind-to-record mapping by exact OID or pattern binding
//!   ([`RecordMapper`]), with payload coercion ([`Value`])
//! - Record declaration via descriptor tables ([`SnmpRecord`],
//!   [`snmp_record!`])
//! - MAC address normalization and OID string helpers ([`util`])
//!
//! The wire protocol itself is out of scope: a transport client
//! produces the [`VarBind`]s this crate consumes and is the only party
//! doing network I/O.

pub mod mapping;
pub mod pdu;
pub mod schema;
pub mod util;

// Re-export commonly used types
pub use mapping::{
    MapperConfig, MappingError, MappingReport, MappingResult, RecordMapper, map_varbind,
    map_varbinds,
};
pub use pdu::{Value, VarBind};
pub use schema::{
    FieldMut, FieldRef, FieldSpec, RecordSlot, SnmpRecord, collect_oids, collect_oids_from_slot,
};
pub use util::{MacFormatError, normalize_mac, oid_index};

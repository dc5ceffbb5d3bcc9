//! Record schemas: descriptor tables, the record trait, and OID collection
//!
//! A record type declares, per field, how that field is bound to the
//! protocol namespace — an exact OID, a pattern whose first capture
//! group keys a table, or nothing. The declarations live in an
//! ahead-of-time descriptor table exposed through [`SnmpRecord`],
//! normally generated with the [`snmp_record!`](crate::snmp_record)
//! macro. [`collect_oids`] walks the table to enumerate what a query
//! needs to fetch.

mod collector;
mod macros;
mod types;

pub use collector::{collect_oids, collect_oids_from_slot};
pub use types::{FieldMut, FieldRef, FieldSpec, RecordSlot, SnmpRecord};

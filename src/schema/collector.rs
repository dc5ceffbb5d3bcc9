//! OID collection from record descriptor tables

use super::types::{FieldRef, RecordSlot, SnmpRecord};

/// Collect the OIDs a record schema needs queried, in declaration
/// order, suitable for a bulk get against the transport.
///
/// When `recurse_nested` is set, nested records contribute their OIDs
/// immediately after the containing field's own OID — by value always,
/// through an owned slot only once the slot is allocated. Empty slots
/// are skipped silently, so a partially populated schema degrades to
/// "query only what's reachable"; pre-allocate the slot to include its
/// OIDs.
///
/// Pattern bindings are never collected: a pattern cannot be turned
/// into a single queryable OID, and pattern-matched data comes from a
/// walk issued by the transport instead. Duplicate OIDs are preserved.
pub fn collect_oids(record: &dyn SnmpRecord, recurse_nested: bool) -> Vec<String> {
    let mut oids = Vec::new();
    collect_into(record, recurse_nested, &mut oids);
    oids
}

/// Collect OIDs from an owned root slot; an empty slot yields nothing.
pub fn collect_oids_from_slot(slot: &dyn RecordSlot, recurse_nested: bool) -> Vec<String> {
    match slot.get() {
        Some(record) => collect_oids(record, recurse_nested),
        None => Vec::new(),
    }
}

fn collect_into(record: &dyn SnmpRecord, recurse_nested: bool, oids: &mut Vec<String>) {
    for spec in record.fields() {
        if let Some(oid) = spec.oid {
            oids.push(oid.to_string());
        }
        if recurse_nested {
            match record.field_ref(spec.name) {
                Some(FieldRef::Record(nested)) => collect_into(nested, true, oids),
                Some(FieldRef::OptionalRecord(Some(nested))) => collect_into(nested, true, oids),
                _ => {}
            }
        }
    }
}

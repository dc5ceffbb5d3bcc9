//! Field descriptors and the record trait

use std::collections::HashMap;

/// One field's entry in a record's descriptor table.
///
/// A field may carry an exact-OID binding, a pattern binding, or
/// neither. The two binding namespaces are independent; when both are
/// present the exact binding is tested first and wins on a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as declared.
    pub name: &'static str,
    /// Exact-OID binding, e.g. `".1.3.6.1.2.1.1.1.0"`.
    pub oid: Option<&'static str>,
    /// Pattern binding; the first capture group keys a table field.
    pub pattern: Option<&'static str>,
}

impl FieldSpec {
    /// Create an unbound field descriptor.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            oid: None,
            pattern: None,
        }
    }

    /// Attach an exact-OID binding.
    pub const fn with_oid(mut self, oid: &'static str) -> Self {
        self.oid = Some(oid);
        self
    }

    /// Attach a pattern binding.
    pub const fn with_pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }
}

/// Immutable structural view of a field, used by the collector to
/// decide whether to descend.
pub enum FieldRef<'a> {
    /// Scalar or table field; nothing to descend into.
    Leaf,
    /// Nested record stored by value.
    Record(&'a dyn SnmpRecord),
    /// Owned nested record; `None` until first write.
    OptionalRecord(Option<&'a dyn SnmpRecord>),
}

/// Mutable assignment view of a field.
///
/// The variants form the closed set of kinds the mapper can populate.
/// Keyed tables store `None` until the first insert; narrower integer
/// widths are available for scalars, while table values use the 64-bit
/// kinds plus text.
pub enum FieldMut<'a> {
    I32(&'a mut i32),
    I64(&'a mut i64),
    U32(&'a mut u32),
    U64(&'a mut u64),
    F32(&'a mut f32),
    F64(&'a mut f64),
    Text(&'a mut String),
    Bytes(&'a mut Vec<u8>),
    TextTable(&'a mut Option<HashMap<String, String>>),
    IntTable(&'a mut Option<HashMap<String, i64>>),
    UintTable(&'a mut Option<HashMap<String, u64>>),
    FloatTable(&'a mut Option<HashMap<String, f64>>),
    /// Nested record stored by value.
    Record(&'a mut dyn SnmpRecord),
    /// Owned nested record, allocated on first write.
    OptionalRecord(&'a mut dyn RecordSlot),
}

/// An owned, nullable link from a record to a nested record.
///
/// The containing record exclusively owns the nested record once it is
/// allocated; until then the slot reads as empty and the collector
/// skips it.
pub trait RecordSlot {
    /// The nested record, if allocated.
    fn get(&self) -> Option<&dyn SnmpRecord>;

    /// The nested record, allocating a default one first if the slot is
    /// empty.
    fn get_or_allocate(&mut self) -> &mut dyn SnmpRecord;
}

impl<R: SnmpRecord + Default> RecordSlot for Option<Box<R>> {
    fn get(&self) -> Option<&dyn SnmpRecord> {
        self.as_deref().map(|record| record as &dyn SnmpRecord)
    }

    fn get_or_allocate(&mut self) -> &mut dyn SnmpRecord {
        &mut **self.get_or_insert_with(Box::default)
    }
}

/// A record type with an ahead-of-time field descriptor table.
///
/// Implementations are normally generated by [`snmp_record!`], which
/// builds the table from per-field kind keywords and bindings; the
/// trait can also be implemented by hand.
///
/// Schema rules the mapper relies on:
/// - Within one record, the first field declared with a given binding
///   is the only one that can receive a match; later duplicates are
///   unreachable.
/// - Nested-record fields are visited structurally, never through
///   bindings; a binding declared on a nested-record field is ignored.
///
/// [`snmp_record!`]: crate::snmp_record
pub trait SnmpRecord {
    /// Field declarations in declaration order.
    fn fields(&self) -> &'static [FieldSpec];

    /// Immutable structural view of the named field.
    fn field_ref(&self, name: &str) -> Option<FieldRef<'_>>;

    /// Mutable assignment view of the named field.
    fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>>;
}

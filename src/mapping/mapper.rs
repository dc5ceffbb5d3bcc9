//! Varbind-to-field matching and assignment

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, trace, warn};

use crate::pdu::{Value, VarBind};
use crate::schema::{FieldMut, FieldSpec, SnmpRecord};

use super::config::MapperConfig;
use super::error::{MappingError, MappingResult};
use super::types::MappingReport;

/// Maps varbinds into annotated records.
///
/// The mapper owns a cache of compiled pattern bindings, so reusing
/// one mapper across a whole response avoids recompiling per varbind.
/// It holds no reference to any destination record; independent
/// records may be mapped from independent mappers in parallel.
pub struct RecordMapper {
    config: MapperConfig,
    patterns: HashMap<&'static str, Option<Regex>>,
}

/// Outcome of testing one field's bindings against an OID.
enum BindingMatch {
    /// The exact binding matched.
    Exact,
    /// The pattern binding matched; `key` is the first capture.
    Pattern {
        key: Option<String>,
        pattern: &'static str,
    },
}

impl RecordMapper {
    /// Create a mapper with default config.
    pub fn new() -> Self {
        Self::with_config(MapperConfig::default())
    }

    /// Create a mapper with custom config.
    pub fn with_config(config: MapperConfig) -> Self {
        Self {
            config,
            patterns: HashMap::new(),
        }
    }

    /// Map one varbind into `record`, returning whether a field
    /// received it.
    ///
    /// Fields are scanned in declaration order and the first match
    /// wins: the scan stops as soon as a field is assigned, so a later
    /// field with a duplicate binding is unreachable. A nested-record
    /// field also ends the scan — the mapper recurses into it
    /// (allocating an owned nested record if the slot is empty) and
    /// returns the recursive result whether or not it matched, so
    /// nested records should be declared after the bound fields of
    /// their container.
    ///
    /// On no match the record is left untouched and `Ok(false)` is
    /// returned. Errors are configuration errors (see
    /// [`MappingError`]) and leave the record in an unspecified state.
    pub fn map_varbind(
        &mut self,
        record: &mut dyn SnmpRecord,
        varbind: &VarBind,
    ) -> MappingResult<bool> {
        for spec in record.fields() {
            match record.field_mut(spec.name) {
                Some(FieldMut::Record(nested)) => {
                    trace!(field = spec.name, "descending into nested record");
                    return self.map_varbind(nested, varbind);
                }
                Some(FieldMut::OptionalRecord(slot)) => {
                    trace!(field = spec.name, "descending into owned nested record");
                    return self.map_varbind(slot.get_or_allocate(), varbind);
                }
                Some(view) => {
                    let matched = match self.test_binding(spec, &varbind.oid)? {
                        Some(matched) => matched,
                        None => continue,
                    };
                    assign(view, matched, &varbind.value, spec.name)?;
                    debug!(oid = %varbind.oid, field = spec.name, "varbind mapped");
                    return Ok(true);
                }
                None => continue,
            }
        }
        trace!(oid = %varbind.oid, "no field matched");
        Ok(false)
    }

    /// Map a whole response into `record`, one varbind at a time.
    pub fn map_varbinds(
        &mut self,
        record: &mut dyn SnmpRecord,
        varbinds: &[VarBind],
    ) -> MappingResult<MappingReport> {
        let mut report = MappingReport {
            total: varbinds.len(),
            ..MappingReport::default()
        };
        for varbind in varbinds {
            if self.map_varbind(record, varbind)? {
                report.matched += 1;
            } else {
                report.unmatched_oids.push(varbind.oid.clone());
            }
        }
        debug!(
            total = report.total,
            matched = report.matched,
            "bulk mapping complete"
        );
        Ok(report)
    }

    /// Test one field's bindings against an OID; the exact binding is
    /// tested first and takes precedence over the pattern binding.
    fn test_binding(
        &mut self,
        spec: &FieldSpec,
        oid: &str,
    ) -> MappingResult<Option<BindingMatch>> {
        if let Some(bound) = spec.oid {
            if bound == oid {
                return Ok(Some(BindingMatch::Exact));
            }
        }
        if let Some(pattern) = spec.pattern {
            if let Some(re) = self.compiled(spec.name, pattern)? {
                if let Some(caps) = re.captures(oid) {
                    let key = caps.get(1).map(|m| m.as_str().to_string());
                    return Ok(Some(BindingMatch::Pattern { key, pattern }));
                }
            }
        }
        Ok(None)
    }

    /// Look up (compiling on first use) the pattern binding for a
    /// field. A pattern that fails to compile is cached as a permanent
    /// non-match unless strict patterns are enabled.
    fn compiled(
        &mut self,
        field: &'static str,
        pattern: &'static str,
    ) -> MappingResult<&Option<Regex>> {
        if !self.patterns.contains_key(pattern) {
            let compiled = match Regex::new(pattern) {
                Ok(re) => Some(re),
                Err(source) => {
                    if self.config.strict_patterns {
                        return Err(MappingError::InvalidPattern { field, source });
                    }
                    warn!(field, pattern, "ignoring malformed pattern binding");
                    None
                }
            };
            self.patterns.insert(pattern, compiled);
        }
        Ok(&self.patterns[pattern])
    }
}

impl Default for RecordMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce and store a matched payload into a leaf field view.
fn assign(
    view: FieldMut<'_>,
    matched: BindingMatch,
    value: &Value,
    field: &'static str,
) -> MappingResult<()> {
    match view {
        FieldMut::I32(slot) => *slot = value.as_i32(),
        FieldMut::I64(slot) => *slot = value.as_i64(),
        FieldMut::U32(slot) => *slot = value.as_u32(),
        FieldMut::U64(slot) => *slot = value.as_u64(),
        FieldMut::F32(slot) => *slot = value.as_f32(),
        FieldMut::F64(slot) => *slot = value.as_f64(),
        FieldMut::Text(slot) => *slot = value.as_text(),
        FieldMut::Bytes(slot) => *slot = value.as_bytes(),
        FieldMut::TextTable(table) => {
            let key = table_key(matched, field)?;
            table
                .get_or_insert_with(HashMap::new)
                .insert(key, value.as_text());
        }
        FieldMut::IntTable(table) => {
            let key = table_key(matched, field)?;
            table
                .get_or_insert_with(HashMap::new)
                .insert(key, value.as_i64());
        }
        FieldMut::UintTable(table) => {
            let key = table_key(matched, field)?;
            table
                .get_or_insert_with(HashMap::new)
                .insert(key, value.as_u64());
        }
        FieldMut::FloatTable(table) => {
            let key = table_key(matched, field)?;
            table
                .get_or_insert_with(HashMap::new)
                .insert(key, value.as_f64());
        }
        // Nested records are matched structurally, never through bindings.
        FieldMut::Record(_) | FieldMut::OptionalRecord(_) => {}
    }
    Ok(())
}

/// Derive the map key for a table field from the binding match.
fn table_key(matched: BindingMatch, field: &'static str) -> MappingResult<String> {
    match matched {
        BindingMatch::Pattern { key: Some(key), .. } => Ok(key),
        BindingMatch::Pattern { key: None, pattern } => {
            Err(MappingError::MissingCaptureGroup { field, pattern })
        }
        BindingMatch::Exact => Err(MappingError::ExactBindingOnTable { field }),
    }
}

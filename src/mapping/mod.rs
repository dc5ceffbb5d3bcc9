//! Varbind-to-record mapping
//!
//! This module populates a destination record from the varbinds a
//! query returned:
//! - Match each varbind's OID against field bindings, exact first,
//!   then pattern (first capture group becomes the table key)
//! - Coerce the payload to the matched field's kind and assign it
//! - Recurse into nested records, allocating owned nested records on
//!   first write
//!
//! # Example
//!
//! ```rust,ignore
//! use snmp_mapper::{collect_oids, snmp_record, RecordMapper};
//!
//! snmp_record! {
//!     pub struct SysInfo {
//!         sys_desc: text => oid ".1.3.6.1.2.1.1.1.0",
//!         sys_name: text => oid ".1.3.6.1.2.1.1.5.0",
//!         if_desc: text_table => pattern r"\.1\.3\.6\.1\.2\.1\.2\.2\.1\.2\.(\d+)",
//!     }
//! }
//!
//! let mut info = SysInfo::default();
//! let oids = collect_oids(&info, true);
//! let varbinds = client.get(&oids)?; // external transport
//!
//! let mut mapper = RecordMapper::new();
//! let report = mapper.map_varbinds(&mut info, &varbinds)?;
//! println!("mapped {}/{} varbinds", report.matched, report.total);
//! ```

mod config;
mod error;
mod mapper;
mod types;

pub use config::MapperConfig;
pub use error::{MappingError, MappingResult};
pub use mapper::RecordMapper;
pub use types::MappingReport;

use crate::pdu::VarBind;
use crate::schema::SnmpRecord;

/// Map one varbind into a record with a default mapper.
///
/// This is a convenience function for one-off mappings; reuse a
/// [`RecordMapper`] to keep compiled patterns across calls.
pub fn map_varbind(record: &mut dyn SnmpRecord, varbind: &VarBind) -> MappingResult<bool> {
    RecordMapper::new().map_varbind(record, varbind)
}

/// Map a whole response into a record with a default mapper.
pub fn map_varbinds(
    record: &mut dyn SnmpRecord,
    varbinds: &[VarBind],
) -> MappingResult<MappingReport> {
    RecordMapper::new().map_varbinds(record, varbinds)
}

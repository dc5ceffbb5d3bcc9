//! Stateless string utilities used alongside the mapping engine

mod mac;
mod oid;

pub use mac::{MacFormatError, normalize_mac};
pub use oid::oid_index;

//! OID string helpers

/// Return the final index portion of an OID.
///
/// `oid_index(".1.3.6.1.2.1.2.2.1.2.6")` returns `"6"`. An input with
/// no dots is returned whole.
pub fn oid_index(oid: &str) -> &str {
    oid.rsplit('.').next().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_segment() {
        assert_eq!(oid_index(".1.3.6.1.2.1.2.2.1.2.6"), "6");
        assert_eq!(oid_index(".1.2.4.5.2.3.6.7"), "7");
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(oid_index("42"), "42");
        assert_eq!(oid_index(""), "");
        assert_eq!(oid_index(".1."), "");
    }
}

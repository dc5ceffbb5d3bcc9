//! Mapping engine integration tests

use std::collections::HashMap;

use snmp_mapper::{
    FieldMut, FieldRef, FieldSpec, MappingError, RecordMapper, SnmpRecord, Value, VarBind,
    collect_oids, map_varbinds, snmp_record,
};

snmp_record! {
    /// Nested interface info, owned by the root record.
    pub struct InterfaceInfo {
        if_count: int64 => oid ".2.1",
    }
}

snmp_record! {
    /// Root record for the collect-then-map round trip.
    pub struct DeviceInfo {
        description: text => oid ".1.1",
        interfaces: optional InterfaceInfo,
    }
}

mod collector_tests {
    use super::*;

    #[test]
    fn test_null_slot_yields_only_root_oids() {
        let device = DeviceInfo::default();
        assert_eq!(collect_oids(&device, true), vec![".1.1"]);
    }

    #[test]
    fn test_allocated_slot_appends_nested_oids() {
        let device = DeviceInfo {
            interfaces: Some(Box::new(InterfaceInfo::default())),
            ..DeviceInfo::default()
        };
        assert_eq!(collect_oids(&device, true), vec![".1.1", ".2.1"]);
    }

    #[test]
    fn test_nested_by_value_follows_own_oid() {
        snmp_record! {
            struct Inner {
                speed: uint64 => oid ".1.3.6.1.2.1.2.2.1.5.1",
            }
        }
        snmp_record! {
            struct Outer {
                sys_desc: text => oid ".1.3.6.1.2.1.1.1.0",
                inner: record Inner,
                sys_name: text => oid ".1.3.6.1.2.1.1.5.0",
            }
        }

        assert_eq!(
            collect_oids(&Outer::default(), true),
            vec![
                ".1.3.6.1.2.1.1.1.0",
                ".1.3.6.1.2.1.2.2.1.5.1",
                ".1.3.6.1.2.1.1.5.0",
            ]
        );
    }
}

mod roundtrip_tests {
    use super::*;

    fn respond(oids: &[String]) -> Vec<VarBind> {
        // Stands in for the transport: answer the collected OIDs.
        oids.iter()
            .map(|oid| match oid.as_str() {
                ".1.1" => VarBind::new(".1.1", Value::Text("desc".to_string())),
                ".2.1" => VarBind::new(".2.1", Value::Integer(42)),
                other => VarBind::new(other, Value::Integer(0)),
            })
            .collect()
    }

    #[test]
    fn test_collect_then_map_round_trip() {
        let mut device = DeviceInfo {
            interfaces: Some(Box::new(InterfaceInfo::default())),
            ..DeviceInfo::default()
        };

        let oids = collect_oids(&device, true);
        assert_eq!(oids, vec![".1.1", ".2.1"]);

        let report = map_varbinds(&mut device, &respond(&oids)).unwrap();
        assert!(report.all_matched());
        assert_eq!(device.description, "desc");
        assert_eq!(
            device.interfaces.as_deref().map(|intfs| intfs.if_count),
            Some(42)
        );
    }

    #[test]
    fn test_round_trip_is_order_independent() {
        let varbinds = vec![
            VarBind::new(".2.1", Value::Integer(42)),
            VarBind::new(".1.1", Value::Text("desc".to_string())),
        ];

        let mut device = DeviceInfo {
            interfaces: Some(Box::new(InterfaceInfo::default())),
            ..DeviceInfo::default()
        };
        let report = map_varbinds(&mut device, &varbinds).unwrap();

        assert!(report.all_matched());
        assert_eq!(device.description, "desc");
        assert_eq!(
            device.interfaces.as_deref().map(|intfs| intfs.if_count),
            Some(42)
        );
    }

    #[test]
    fn test_interface_walk_populates_tables() {
        snmp_record! {
            pub struct IfTable {
                if_desc: text_table => pattern r"\.1\.3\.6\.1\.2\.1\.2\.2\.1\.2\.(\d+)",
                if_oper_status: int_table => pattern r"\.1\.3\.6\.1\.2\.1\.2\.2\.1\.8\.(\d+)",
            }
        }

        let mut table = IfTable::default();
        let walk: Vec<VarBind> = (1..=4)
            .flat_map(|idx| {
                vec![
                    VarBind::new(
                        format!(".1.3.6.1.2.1.2.2.1.2.{idx}"),
                        Value::Text(format!("eth{idx}")),
                    ),
                    VarBind::new(
                        format!(".1.3.6.1.2.1.2.2.1.8.{idx}"),
                        Value::Integer(if idx == 3 { 2 } else { 1 }),
                    ),
                ]
            })
            .collect();

        let mut mapper = RecordMapper::new();
        let report = mapper.map_varbinds(&mut table, &walk).unwrap();
        assert!(report.all_matched());

        let if_desc = table.if_desc.as_ref().unwrap();
        assert_eq!(if_desc.len(), 4);
        assert_eq!(if_desc.get("2").map(String::as_str), Some("eth2"));

        let if_oper_status = table.if_oper_status.as_ref().unwrap();
        assert_eq!(if_oper_status.get("3"), Some(&2));
        assert_eq!(if_oper_status.get("4"), Some(&1));
    }
}

mod precedence_tests {
    use super::*;

    /// Table field carrying both an exact and a pattern binding; only
    /// a hand-written impl can declare this.
    #[derive(Debug, Default)]
    struct BothBindings {
        rows: Option<HashMap<String, String>>,
    }

    impl SnmpRecord for BothBindings {
        fn fields(&self) -> &'static [FieldSpec] {
            const FIELDS: &[FieldSpec] = &[FieldSpec::new("rows")
                .with_oid(".1.9.9.1.6")
                .with_pattern(r"\.1\.9\.9\.1\.(\d+)")];
            FIELDS
        }

        fn field_ref(&self, name: &str) -> Option<FieldRef<'_>> {
            match name {
                "rows" => Some(FieldRef::Leaf),
                _ => None,
            }
        }

        fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
            match name {
                "rows" => Some(FieldMut::TextTable(&mut self.rows)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_exact_binding_takes_precedence_over_pattern() {
        // ".1.9.9.1.6" satisfies both bindings; the exact binding wins,
        // and an exact match cannot key a table.
        let mut rec = BothBindings::default();
        let err = RecordMapper::new()
            .map_varbind(&mut rec, &VarBind::new(".1.9.9.1.6", Value::Text("x".to_string())))
            .unwrap_err();
        assert!(matches!(err, MappingError::ExactBindingOnTable { field: "rows" }));
        assert!(rec.rows.is_none());
    }

    #[test]
    fn test_pattern_applies_when_exact_does_not_match() {
        let mut rec = BothBindings::default();
        let matched = RecordMapper::new()
            .map_varbind(&mut rec, &VarBind::new(".1.9.9.1.7", Value::Text("up".to_string())))
            .unwrap();
        assert!(matched);
        assert_eq!(
            rec.rows.as_ref().and_then(|rows| rows.get("7")).map(String::as_str),
            Some("up")
        );
    }
}

mod serde_tests {
    use super::*;

    snmp_record! {
        /// Extra derives pass through the macro.
        #[derive(serde::Serialize)]
        pub struct Exported {
            sys_name: text => oid ".1.3.6.1.2.1.1.5.0",
            if_desc: text_table => pattern r"\.1\.3\.6\.1\.2\.1\.2\.2\.1\.2\.(\d+)",
        }
    }

    #[test]
    fn test_populated_record_serializes() {
        let mut rec = Exported::default();
        let mut mapper = RecordMapper::new();
        mapper
            .map_varbind(
                &mut rec,
                &VarBind::new(".1.3.6.1.2.1.1.5.0", Value::Text("core-sw-1".to_string())),
            )
            .unwrap();
        mapper
            .map_varbind(
                &mut rec,
                &VarBind::new(".1.3.6.1.2.1.2.2.1.2.6", Value::Text("eth6".to_string())),
            )
            .unwrap();

        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["sys_name"], "core-sw-1");
        assert_eq!(json["if_desc"]["6"], "eth6");
    }
}

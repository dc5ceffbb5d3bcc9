//! Record declaration macro
//!
//! [`snmp_record!`] declares a struct and generates its
//! [`SnmpRecord`](crate::schema::SnmpRecord) impl from per-field kind
//! keywords and bindings, so the descriptor table always matches the
//! struct definition.
//!
//! ## Usage
//!
//! ```ignore
//! snmp_record! {
//!     pub struct SysInfo {
//!         sys_desc: text => oid ".1.3.6.1.2.1.1.1.0",
//!         sys_uptime: uint64 => oid ".1.3.6.1.2.1.1.3.0",
//!         if_desc: text_table => pattern r"\.1\.3\.6\.1\.2\.1\.2\.2\.1\.2\.(\d+)",
//!         location: text,
//!         intfs: record InterfaceInfo,
//!         extra: optional ExtraInfo,
//!     }
//! }
//! ```
//!
//! Kind keywords: `text`, `int32`, `int64`, `uint32`, `uint64`,
//! `float32`, `float64`, `bytes`, the table forms `text_table`,
//! `int_table`, `uint_table`, `float_table`, plus `record T` (nested by
//! value) and `optional T` (owned, null until first write). Nested
//! record types must implement `Default`. Fields are always public;
//! the struct derives `Debug`, `Clone`, `Default` and `PartialEq`, and
//! attributes placed before `struct` (doc comments, extra derives) are
//! passed through.

/// Declares a record struct and generates its `SnmpRecord` impl.
///
/// See the module-level docs in `schema::macros` for the field grammar.
#[macro_export]
macro_rules! snmp_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident { $($body:tt)* }
    ) => {
        $crate::snmp_record!(@parse
            meta [ $(#[$meta])* ]
            vis [ $vis ]
            name $name
            fields [ ]
            rest [ $($body)* ]
        );
    };

    // Field forms. Nested records are matched before the generic kind
    // rules so `record`/`optional` never parse as kind keywords.
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : record $nested:ident , $($rest:tt)* ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( record $nested ) ( ) ( ) ] ]
            rest [ $($rest)* ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : record $nested:ident ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( record $nested ) ( ) ( ) ] ]
            rest [ ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : optional $nested:ident , $($rest:tt)* ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( optional $nested ) ( ) ( ) ] ]
            rest [ $($rest)* ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : optional $nested:ident ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( optional $nested ) ( ) ( ) ] ]
            rest [ ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : $kind:ident => oid $oid:literal , $($rest:tt)* ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( $kind ) ( $oid ) ( ) ] ]
            rest [ $($rest)* ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : $kind:ident => oid $oid:literal ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( $kind ) ( $oid ) ( ) ] ]
            rest [ ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : $kind:ident => pattern $pat:literal , $($rest:tt)* ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( $kind ) ( ) ( $pat ) ] ]
            rest [ $($rest)* ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : $kind:ident => pattern $pat:literal ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( $kind ) ( ) ( $pat ) ] ]
            rest [ ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : $kind:ident , $($rest:tt)* ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( $kind ) ( ) ( ) ] ]
            rest [ $($rest)* ]);
    };
    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ $field:ident : $kind:ident ]) => {
        $crate::snmp_record!(@parse meta [ $($meta)* ] vis [ $($vis)* ] name $name
            fields [ $($fields)* [ $field ( $kind ) ( ) ( ) ] ]
            rest [ ]);
    };

    (@parse meta [ $($meta:tt)* ] vis [ $($vis:tt)* ] name $name:ident fields [ $($fields:tt)* ]
        rest [ ]) => {
        $crate::snmp_record!(@emit
            meta [ $($meta)* ]
            vis [ $($vis)* ]
            name $name
            fields [ $($fields)* ]
        );
    };

    (@emit
        meta [ $($meta:tt)* ]
        vis [ $($vis:tt)* ]
        name $name:ident
        fields [ $( [ $field:ident ( $($kind:tt)+ ) ( $($oid:literal)? ) ( $($pat:literal)? ) ] )* ]
    ) => {
        $($meta)*
        #[derive(Debug, Clone, Default, PartialEq)]
        $($vis)* struct $name {
            $( pub $field: $crate::snmp_record!(@ty $($kind)+), )*
        }

        impl $crate::schema::SnmpRecord for $name {
            fn fields(&self) -> &'static [$crate::schema::FieldSpec] {
                const FIELDS: &[$crate::schema::FieldSpec] = &[
                    $(
                        $crate::schema::FieldSpec {
                            name: stringify!($field),
                            oid: $crate::snmp_record!(@opt $($oid)?),
                            pattern: $crate::snmp_record!(@opt $($pat)?),
                        },
                    )*
                ];
                FIELDS
            }

            fn field_ref(&self, name: &str) -> ::std::option::Option<$crate::schema::FieldRef<'_>> {
                match name {
                    $(
                        n if n == stringify!($field) => ::std::option::Option::Some(
                            $crate::snmp_record!(@field_ref self.$field, $($kind)+),
                        ),
                    )*
                    _ => ::std::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::std::option::Option<$crate::schema::FieldMut<'_>> {
                match name {
                    $(
                        n if n == stringify!($field) => ::std::option::Option::Some(
                            $crate::snmp_record!(@field_mut self.$field, $($kind)+),
                        ),
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };

    // Optional binding literal -> Option.
    (@opt) => { ::std::option::Option::None };
    (@opt $binding:literal) => { ::std::option::Option::Some($binding) };

    // Kind keyword -> storage type.
    (@ty text) => { ::std::string::String };
    (@ty int32) => { i32 };
    (@ty int64) => { i64 };
    (@ty uint32) => { u32 };
    (@ty uint64) => { u64 };
    (@ty float32) => { f32 };
    (@ty float64) => { f64 };
    (@ty bytes) => { ::std::vec::Vec<u8> };
    (@ty text_table) => {
        ::std::option::Option<::std::collections::HashMap<::std::string::String, ::std::string::String>>
    };
    (@ty int_table) => {
        ::std::option::Option<::std::collections::HashMap<::std::string::String, i64>>
    };
    (@ty uint_table) => {
        ::std::option::Option<::std::collections::HashMap<::std::string::String, u64>>
    };
    (@ty float_table) => {
        ::std::option::Option<::std::collections::HashMap<::std::string::String, f64>>
    };
    (@ty record $nested:ident) => { $nested };
    (@ty optional $nested:ident) => { ::std::option::Option<::std::boxed::Box<$nested>> };

    // Kind keyword -> immutable structural view.
    (@field_ref $slot:expr, record $nested:ident) => {
        $crate::schema::FieldRef::Record(&$slot)
    };
    (@field_ref $slot:expr, optional $nested:ident) => {
        $crate::schema::FieldRef::OptionalRecord($crate::schema::RecordSlot::get(&$slot))
    };
    (@field_ref $slot:expr, $kind:ident) => { $crate::schema::FieldRef::Leaf };

    // Kind keyword -> mutable assignment view.
    (@field_mut $slot:expr, text) => { $crate::schema::FieldMut::Text(&mut $slot) };
    (@field_mut $slot:expr, int32) => { $crate::schema::FieldMut::I32(&mut $slot) };
    (@field_mut $slot:expr, int64) => { $crate::schema::FieldMut::I64(&mut $slot) };
    (@field_mut $slot:expr, uint32) => { $crate::schema::FieldMut::U32(&mut $slot) };
    (@field_mut $slot:expr, uint64) => { $crate::schema::FieldMut::U64(&mut $slot) };
    (@field_mut $slot:expr, float32) => { $crate::schema::FieldMut::F32(&mut $slot) };
    (@field_mut $slot:expr, float64) => { $crate::schema::FieldMut::F64(&mut $slot) };
    (@field_mut $slot:expr, bytes) => { $crate::schema::FieldMut::Bytes(&mut $slot) };
    (@field_mut $slot:expr, text_table) => { $crate::schema::FieldMut::TextTable(&mut $slot) };
    (@field_mut $slot:expr, int_table) => { $crate::schema::FieldMut::IntTable(&mut $slot) };
    (@field_mut $slot:expr, uint_table) => { $crate::schema::FieldMut::UintTable(&mut $slot) };
    (@field_mut $slot:expr, float_table) => { $crate::schema::FieldMut::FloatTable(&mut $slot) };
    (@field_mut $slot:expr, record $nested:ident) => { $crate::schema::FieldMut::Record(&mut $slot) };
    (@field_mut $slot:expr, optional $nested:ident) => {
        $crate::schema::FieldMut::OptionalRecord(&mut $slot)
    };
}

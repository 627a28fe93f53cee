/*!
Size, alignment and field offsets of the declared C types.

[DECLARED] is computed by rustc from [crate::sys]. With the `verify-layout` feature it is checked
against [GENERATED], computed the same way from bindings bindgen produced from the installed
headers during the build. The same feature compares [DECLARED_CONSTANTS] with
[GENERATED_CONSTANTS] and checks at compile time that every declared `extern` function has the
signature of its generated counterpart.

[snapshot] is a regression pin: the declared layout recorded for 64-bit Linux, kept so that builds
without libclang still notice a declaration changing. Only its glibc
entries (`in_addr`, `in6_addr`, `timeval`) are checked against an independent source, the `libc`
crate.

A declaration that does not match is a build-breaking ABI bug, not something to handle at
runtime.
*/
use itertools::Itertools;
use std::fmt::{Display, Formatter};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldLayout {
    pub name: &'static str,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeLayout {
    pub name: &'static str,
    pub size: usize,
    pub align: usize,
    pub fields: &'static [FieldLayout],
}

/// Value of an integer constant, widened to `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConstantValue {
    pub name: &'static str,
    pub value: u64,
}

impl TypeLayout {
    pub fn field(&self, name: &str) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Display for TypeLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}/{} {{{}}}",
            self.name,
            self.size,
            self.align,
            self.fields
                .iter()
                .map(|field| format!("{}@{}", field.name, field.offset))
                .join(", ")
        )
    }
}

/// Finds a type by name in a layout table.
pub fn find<'a>(table: &'a [TypeLayout], name: &str) -> Option<&'a TypeLayout> {
    table.iter().find(|t| t.name == name)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutMismatch {
    #[error("type {name} is missing")]
    MissingType { name: &'static str },
    #[error("field {type_name}.{field} is missing")]
    MissingField {
        type_name: &'static str,
        field: &'static str,
    },
    #[error("size of {name} is {actual}, expected {expected}")]
    Size {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("alignment of {name} is {actual}, expected {expected}")]
    Align {
        name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("offset of {type_name}.{field} is {actual}, expected {expected}")]
    Offset {
        type_name: &'static str,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("constant {name} is missing")]
    MissingConstant { name: &'static str },
    #[error("constant {name} is {actual:#x}, expected {expected:#x}")]
    Constant {
        name: &'static str,
        expected: u64,
        actual: u64,
    },
}

/// Checks every type and field of `expected` against `actual`. Types and fields only present in
/// `actual` are not reported.
pub fn verify(expected: &[TypeLayout], actual: &[TypeLayout]) -> Result<(), Vec<LayoutMismatch>> {
    let mut mismatches = Vec::new();

    for exp in expected {
        let Some(act) = find(actual, exp.name) else {
            mismatches.push(LayoutMismatch::MissingType { name: exp.name });
            continue;
        };

        if exp.size != act.size {
            mismatches.push(LayoutMismatch::Size {
                name: exp.name,
                expected: exp.size,
                actual: act.size,
            });
        }
        if exp.align != act.align {
            mismatches.push(LayoutMismatch::Align {
                name: exp.name,
                expected: exp.align,
                actual: act.align,
            });
        }

        for field in exp.fields {
            match act.field(field.name) {
                None => mismatches.push(LayoutMismatch::MissingField {
                    type_name: exp.name,
                    field: field.name,
                }),
                Some(f) if f.offset != field.offset => {
                    mismatches.push(LayoutMismatch::Offset {
                        type_name: exp.name,
                        field: field.name,
                        expected: field.offset,
                        actual: f.offset,
                    })
                }
                Some(_) => {}
            }
        }
    }

    match mismatches.is_empty() {
        true => Ok(()),
        false => Err(mismatches),
    }
}

/// Checks every constant of `expected` against the one of the same name in `actual`.
pub fn verify_constants(
    expected: &[ConstantValue],
    actual: &[ConstantValue],
) -> Result<(), Vec<LayoutMismatch>> {
    let mismatches = expected
        .iter()
        .filter_map(|exp| match actual.iter().find(|c| c.name == exp.name) {
            None => Some(LayoutMismatch::MissingConstant { name: exp.name }),
            Some(act) if act.value != exp.value => Some(LayoutMismatch::Constant {
                name: exp.name,
                expected: exp.value,
                actual: act.value,
            }),
            Some(_) => None,
        })
        .collect::<Vec<_>>();

    match mismatches.is_empty() {
        true => Ok(()),
        false => Err(mismatches),
    }
}

/// Calls `$callback!` with every checked type and the fields whose offsets are compared.
macro_rules! with_checked_types {
    ($callback:ident) => {
        $callback! {
            in_addr { s_addr }
            in6_addr { __in6_u }
            timeval { tv_sec, tv_usec }
            host_addr { family, address }
            host_mask { family, len, mask }
            rd_t { type_, as_, val }
            rd_ip { type_, ip, val }
            rd_as { type_, as_, val }
            rd_as4 { type_, as_, val }
            prefix { family, prefixlen, u }
            aspath { refcnt, length, count, data, str_ }
            community { refcnt, size, val, str_ }
            ecommunity { refcnt, size, val, str_ }
            lcommunity { refcnt, size, val, str_ }
            bgp_attr {
                aspath, community, ecommunity, lcommunity, refcnt, rpki_maxlen, nexthop,
                mp_nexthop, med, local_pref, origin, bitmap
            }
            cap_per_af { cap, afi_max, safi_max }
            cap_per_af_u16 { cap, afi_max, safi_max }
            bmp_common_hdr { version, len, type_ }
            bmp_peer_hdr { type_, flags, rd, addr, asn, bgp_id, tstamp_sec, tstamp_usec }
            bmp_tlv_hdr { type_, len }
            bmp_peer_up_hdr { loc_addr, loc_port, rem_port }
            bmp_peer_down_hdr { reason }
            bmp_stats_hdr { count }
            bmp_stats_cnt_hdr { type_, len }
            bmp_chars { peer_type, is_post, is_2b_asn, is_filtered, is_out, is_loc, rd, tlvs }
            bmp_data { family, peer_ip, bgp_id, peer_asn, chars, tstamp, tstamp_arrival }
            bmp_log_stats { cnt_type, cnt_afi, cnt_safi, cnt_data }
            bmp_log_peer_up { local_ip, loc_port, rem_port }
            bmp_log_peer_down { reason, loc_code }
            bmp_log_tlv { pen, type_, len, val }
            plugin_type_entry { id, string, func }
        }
    };
}

macro_rules! layout_table {
    ($($ty:ident { $($field:ident),* $(,)? })*) => {
        &[$(
            TypeLayout {
                name: stringify!($ty),
                size: ::std::mem::size_of::<$ty>(),
                align: ::std::mem::align_of::<$ty>(),
                fields: &[$(
                    FieldLayout {
                        name: stringify!($field),
                        offset: ::std::mem::offset_of!($ty, $field),
                    },
                )*],
            },
        )*]
    };
}

/// Calls `$callback!` with every constant pmacct's headers define and [crate::sys] mirrors.
macro_rules! with_checked_constants {
    ($callback:ident) => {
        $callback! {
            AFI_IP AFI_IP6 AFI_BGP_LS AFI_MAX
            SAFI_UNICAST SAFI_MULTICAST SAFI_MPLS_LABEL SAFI_EVPN SAFI_BGP_LS SAFI_MPLS_VPN SAFI_MAX
            RD_LEN RD_TYPE_AS RD_TYPE_IP RD_TYPE_AS4 RD_TYPE_MASK
            RD_ORIGIN_UNKNOWN RD_ORIGIN_MAP RD_ORIGIN_FLOW RD_ORIGIN_BGP RD_ORIGIN_BMP
            RD_ORIGIN_MASK RD_ORIGIN_FUNC_TYPE_MAX
            BMP_V3 BMP_V4 BMP_CMN_HDRLEN BMP_PEER_HDRLEN
            BMP_MSG_ROUTE_MONITOR BMP_MSG_STATS BMP_MSG_PEER_DOWN BMP_MSG_PEER_UP BMP_MSG_INIT
            BMP_MSG_TERM BMP_MSG_ROUTE_MIRROR
            BMP_PEER_TYPE_GLOBAL BMP_PEER_TYPE_L3VPN BMP_PEER_TYPE_LOCAL BMP_PEER_TYPE_LOC_RIB
            BMP_PEER_FLAGS_ARI_V BMP_PEER_FLAGS_ARI_L BMP_PEER_FLAGS_ARI_A BMP_PEER_FLAGS_ARO_O
            BMP_PEER_FLAGS_LR_F
            BMP_PEER_DOWN_RESERVED BMP_PEER_DOWN_LOC_NOT_MSG BMP_PEER_DOWN_LOC_CODE
            BMP_PEER_DOWN_REM_NOT_MSG BMP_PEER_DOWN_REM_CODE BMP_PEER_DOWN_DECFG
        }
    };
}

macro_rules! constant_table {
    ($($name:ident)*) => {
        &[$(
            ConstantValue {
                name: stringify!($name),
                value: $name as u64,
            },
        )*]
    };
}

/// Calls `$callback!` with the C signature of every declared `extern` function, spelled with the
/// type names both [crate::sys] and the generated bindings use.
macro_rules! with_checked_functions {
    ($callback:ident) => {
        $callback! {
            // addr
            str_to_addr: unsafe extern "C" fn(*const c_char, *mut host_addr) -> c_uint;
            addr_to_str: unsafe extern "C" fn(*mut c_char, *const host_addr) -> c_uint;
            addr_to_str2: unsafe extern "C" fn(*mut c_char, *const host_addr, c_int) -> c_uint;
            str_to_addr_mask:
                unsafe extern "C" fn(*const c_char, *mut host_addr, *mut host_mask) -> c_uint;
            addr_mask_to_str: unsafe extern "C" fn(
                *mut c_char,
                c_int,
                *const host_addr,
                *const host_mask,
            ) -> c_uint;
            addr_to_sa: unsafe extern "C" fn(*mut sockaddr, *mut host_addr, u_int16_t) -> c_uint;
            sa_to_addr:
                unsafe extern "C" fn(*mut sockaddr, *mut host_addr, *mut u_int16_t) -> c_uint;
            host_addr_cmp: unsafe extern "C" fn(*mut host_addr, *mut host_addr) -> c_int;
            host_addr_mask_cmp:
                unsafe extern "C" fn(*mut host_addr, *mut host_mask, *mut host_addr) -> c_int;
            raw_to_addr: unsafe extern "C" fn(*mut host_addr, *mut u_char, u_int8_t) -> c_uint;
            is_any: unsafe extern "C" fn(*mut host_addr) -> c_int;
            etype_to_af: unsafe extern "C" fn(u_int16_t) -> u_int8_t;
            af_to_etype: unsafe extern "C" fn(u_int8_t) -> u_int16_t;
            // bgp
            bgp_afi2family: unsafe extern "C" fn(c_int) -> c_int;
            bgp_rd_type_get: unsafe extern "C" fn(u_int16_t) -> u_int16_t;
            bgp_rd_origin_get: unsafe extern "C" fn(u_int16_t) -> u_int16_t;
            bgp_rd_origin_set: unsafe extern "C" fn(*mut rd_t, u_int16_t);
            bgp_rd2str: unsafe extern "C" fn(*mut c_char, *mut rd_t) -> c_int;
            bgp_str2rd: unsafe extern "C" fn(*mut rd_t, *mut c_char) -> c_int;
            bgp_rd_ntoh: unsafe extern "C" fn(*mut rd_t) -> c_int;
            prefix2str: unsafe extern "C" fn(*const prefix, *mut c_char, c_int) -> c_int;
            str2prefix: unsafe extern "C" fn(*const c_char, *mut prefix) -> c_int;
            prefix_new: unsafe extern "C" fn() -> *mut prefix;
            prefix_free: unsafe extern "C" fn(*mut prefix);
            // bmp
            bmp_process_packet: unsafe extern "C" fn(
                *mut c_char,
                u_int32_t,
                *mut bmp_peer,
                *mut c_int,
            ) -> u_int32_t;
            bmp_get_and_check_length:
                unsafe extern "C" fn(*mut *mut c_char, *mut u_int32_t, u_int32_t) -> *mut c_char;
            bmp_tlv_list_new: unsafe extern "C" fn(
                Option<unsafe extern "C" fn(*mut c_void, *mut c_void) -> c_int>,
                Option<unsafe extern "C" fn(*mut c_void)>,
            ) -> *mut pm_list;
            bmp_tlv_list_add: unsafe extern "C" fn(
                *mut pm_list,
                u_int32_t,
                u_int16_t,
                u_int16_t,
                *mut c_char,
            ) -> c_int;
            bmp_tlv_list_destroy: unsafe extern "C" fn(*mut pm_list);
            // plugin hooks
            load_plugins: unsafe extern "C" fn(*mut plugin_requests);
            exec_plugins: unsafe extern "C" fn(*mut packet_ptrs, *mut plugin_requests);
        }
    };
}

/// Coerces each function to its signature, so a mismatch fails the build. Also lists the names.
macro_rules! signature_checks {
    ($($name:ident: $ty:ty;)*) => {
        $(const _: $ty = $name;)*

        #[allow(dead_code)]
        pub const FUNCTIONS: &[&str] = &[$(stringify!($name),)*];
    };
}

mod declared {
    use super::{ConstantValue, FieldLayout, TypeLayout};
    use crate::sys::*;
    use libc::sockaddr;
    use std::ffi::c_void;
    use std::os::raw::{c_char, c_int, c_uint};

    pub const TABLE: &[TypeLayout] = with_checked_types!(layout_table);
    pub const CONSTANTS: &[ConstantValue] = with_checked_constants!(constant_table);

    with_checked_functions!(signature_checks);
}

#[cfg(feature = "verify-layout")]
mod generated {
    use super::{ConstantValue, FieldLayout, TypeLayout};
    use crate::sys::generated::*;
    use std::ffi::c_void;
    use std::os::raw::{c_char, c_int, c_uint};

    pub const TABLE: &[TypeLayout] = with_checked_types!(layout_table);
    pub const CONSTANTS: &[ConstantValue] = with_checked_constants!(constant_table);

    with_checked_functions!(signature_checks);
}

/// Layout of the declarations in [crate::sys].
pub const DECLARED: &[TypeLayout] = declared::TABLE;

/// Layout of the bindings generated from the installed headers during the build.
#[cfg(feature = "verify-layout")]
pub const GENERATED: &[TypeLayout] = generated::TABLE;

/// Values of the constants declared in [crate::sys].
pub const DECLARED_CONSTANTS: &[ConstantValue] = declared::CONSTANTS;

/// Values of the same constants in the generated bindings.
#[cfg(feature = "verify-layout")]
pub const GENERATED_CONSTANTS: &[ConstantValue] = generated::CONSTANTS;

/// Names of the `extern` functions whose signatures are checked against the generated bindings.
pub const CHECKED_FUNCTIONS: &[&str] = declared::FUNCTIONS;

/// Recorded C layout for the current target, if one is known.
pub fn snapshot() -> Option<&'static [TypeLayout]> {
    #[cfg(all(target_os = "linux", target_pointer_width = "64"))]
    {
        Some(LP64_LINUX)
    }
    #[cfg(not(all(target_os = "linux", target_pointer_width = "64")))]
    {
        None
    }
}

macro_rules! recorded {
    ($($ty:ident $size:literal / $align:literal { $($field:ident @ $offset:literal),* $(,)? })*) => {
        &[$(
            TypeLayout {
                name: stringify!($ty),
                size: $size,
                align: $align,
                fields: &[$(FieldLayout { name: stringify!($field), offset: $offset },)*],
            },
        )*]
    };
}

/// Declared layout on 64-bit Linux, pinned for builds without `verify-layout`.
#[cfg(all(target_os = "linux", target_pointer_width = "64"))]
const LP64_LINUX: &[TypeLayout] = recorded! {
    in_addr 4/4 { s_addr @ 0 }
    in6_addr 16/4 { __in6_u @ 0 }
    timeval 16/8 { tv_sec @ 0, tv_usec @ 8 }
    host_addr 20/4 { family @ 0, address @ 4 }
    host_mask 20/4 { family @ 0, len @ 1, mask @ 4 }
    rd_t 8/4 { type_ @ 0, as_ @ 2, val @ 4 }
    rd_ip 8/1 { type_ @ 0, ip @ 2, val @ 6 }
    rd_as 8/1 { type_ @ 0, as_ @ 2, val @ 4 }
    rd_as4 8/1 { type_ @ 0, as_ @ 2, val @ 6 }
    prefix 24/8 { family @ 0, prefixlen @ 1, u @ 8 }
    aspath 32/8 { refcnt @ 0, length @ 8, count @ 12, data @ 16, str_ @ 24 }
    community 32/8 { refcnt @ 0, size @ 8, val @ 16, str_ @ 24 }
    ecommunity 32/8 { refcnt @ 0, size @ 8, val @ 16, str_ @ 24 }
    lcommunity 32/8 { refcnt @ 0, size @ 8, val @ 16, str_ @ 24 }
    bgp_attr 80/8 {
        aspath @ 0, community @ 8, ecommunity @ 16, lcommunity @ 24, refcnt @ 32,
        rpki_maxlen @ 40, nexthop @ 44, mp_nexthop @ 48, med @ 68, local_pref @ 72,
        origin @ 76, bitmap @ 77
    }
    cap_per_af 392/2 { cap @ 0, afi_max @ 388, safi_max @ 390 }
    cap_per_af_u16 778/2 { cap @ 0, afi_max @ 774, safi_max @ 776 }
    bmp_common_hdr 6/1 { version @ 0, len @ 1, type_ @ 5 }
    bmp_peer_hdr 42/1 {
        type_ @ 0, flags @ 1, rd @ 2, addr @ 10, asn @ 26, bgp_id @ 30, tstamp_sec @ 34,
        tstamp_usec @ 38
    }
    bmp_tlv_hdr 4/1 { type_ @ 0, len @ 2 }
    bmp_peer_up_hdr 20/1 { loc_addr @ 0, loc_port @ 16, rem_port @ 18 }
    bmp_peer_down_hdr 1/1 { reason @ 0 }
    bmp_stats_hdr 4/1 { count @ 0 }
    bmp_stats_cnt_hdr 4/1 { type_ @ 0, len @ 2 }
    bmp_chars 24/8 {
        peer_type @ 0, is_post @ 1, is_2b_asn @ 2, is_filtered @ 3, is_out @ 4, is_loc @ 5,
        rd @ 8, tlvs @ 16
    }
    bmp_data 104/8 {
        family @ 0, peer_ip @ 4, bgp_id @ 24, peer_asn @ 44, chars @ 48, tstamp @ 72,
        tstamp_arrival @ 88
    }
    bmp_log_stats 16/8 { cnt_type @ 0, cnt_afi @ 2, cnt_safi @ 4, cnt_data @ 8 }
    bmp_log_peer_up 24/4 { local_ip @ 0, loc_port @ 20, rem_port @ 22 }
    bmp_log_peer_down 4/2 { reason @ 0, loc_code @ 2 }
    bmp_log_tlv 16/8 { pen @ 0, type_ @ 4, len @ 6, val @ 8 }
    plugin_type_entry 32/8 { id @ 0, string @ 4, func @ 24 }
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_types() {
        assert_eq!(DECLARED.len(), 31);
        assert!(DECLARED.iter().map(|t| t.name).all_unique());

        let rd = find(DECLARED, "rd_ip").unwrap();
        assert_eq!(rd.size, 8);
        assert_eq!(rd.field("val").unwrap().offset, 6);
        assert_eq!(rd.to_string(), "rd_ip 8/1 {type_@0, ip@2, val@6}");

        let stats = find(DECLARED, "bmp_log_stats").unwrap();
        assert_eq!(stats.fields.len(), 4);
        assert!(stats.field("got_data").is_none());
        assert_eq!(stats.field("cnt_data").unwrap().offset, 8);
    }

    #[test]
    fn test_declared_constants() {
        assert!(DECLARED_CONSTANTS.iter().map(|c| c.name).all_unique());

        let value = |name: &str| {
            DECLARED_CONSTANTS
                .iter()
                .find(|c| c.name == name)
                .map(|c| c.value)
        };
        assert_eq!(value("RD_ORIGIN_MAP"), Some(0x1000));
        assert_eq!(value("RD_ORIGIN_FUNC_TYPE_MAX"), Some(2));
        assert_eq!(value("BMP_PEER_HDRLEN"), Some(42));

        // every checked constant is one bindgen is asked to emit
        for constant in DECLARED_CONSTANTS {
            let allowlisted = crate::surface::CONSTANTS.iter().any(|pattern| {
                let prefix = pattern.split(['.', '[']).next().unwrap();
                constant.name.starts_with(prefix)
            });
            assert!(allowlisted, "{} is not in the surface", constant.name);
        }
    }

    #[test]
    fn test_checked_functions_cover_surface() {
        let checked = CHECKED_FUNCTIONS.iter().sorted().collect::<Vec<_>>();
        let surface = crate::surface::FUNCTIONS.iter().sorted().collect::<Vec<_>>();
        assert_eq!(checked, surface);
    }

    #[test]
    fn test_verify_constants_reports_mismatches() {
        const EXPECTED: &[ConstantValue] = &[
            ConstantValue {
                name: "RD_ORIGIN_MASK",
                value: 0xF000,
            },
            ConstantValue {
                name: "RD_ORIGIN_MAP",
                value: 0x1000,
            },
        ];
        const ACTUAL: &[ConstantValue] = &[ConstantValue {
            name: "RD_ORIGIN_MASK",
            value: 0xE000,
        }];

        assert_eq!(verify_constants(EXPECTED, EXPECTED), Ok(()));
        assert_eq!(
            verify_constants(EXPECTED, ACTUAL).unwrap_err(),
            vec![
                LayoutMismatch::Constant {
                    name: "RD_ORIGIN_MASK",
                    expected: 0xF000,
                    actual: 0xE000
                },
                LayoutMismatch::MissingConstant {
                    name: "RD_ORIGIN_MAP"
                },
            ]
        );
        assert_eq!(
            LayoutMismatch::Constant {
                name: "RD_ORIGIN_MASK",
                expected: 0xF000,
                actual: 0xE000
            }
            .to_string(),
            "constant RD_ORIGIN_MASK is 0xe000, expected 0xf000"
        );
    }

    #[test]
    #[cfg(all(target_os = "linux", target_pointer_width = "64"))]
    fn test_snapshot_system_types_match_libc() {
        use std::mem::{align_of, offset_of, size_of};

        let snapshot = snapshot().unwrap();
        let recorded = |name: &str| find(snapshot, name).unwrap();

        assert_eq!(recorded("in_addr").size, size_of::<libc::in_addr>());
        assert_eq!(recorded("in_addr").align, align_of::<libc::in_addr>());
        assert_eq!(recorded("in6_addr").size, size_of::<libc::in6_addr>());
        assert_eq!(recorded("in6_addr").align, align_of::<libc::in6_addr>());

        let timeval = recorded("timeval");
        assert_eq!(timeval.size, size_of::<libc::timeval>());
        assert_eq!(timeval.align, align_of::<libc::timeval>());
        assert_eq!(
            timeval.field("tv_usec").unwrap().offset,
            offset_of!(libc::timeval, tv_usec)
        );
    }

    #[test]
    fn test_verify_reports_mismatches() {
        const EXPECTED: &[TypeLayout] = recorded! {
            rd_t 8/4 { type_ @ 0, as_ @ 2, val @ 4 }
            missing 1/1 {}
        };
        const ACTUAL: &[TypeLayout] = recorded! {
            rd_t 12/4 { type_ @ 0, val @ 8 }
        };

        assert_eq!(verify(EXPECTED, EXPECTED), Ok(()));
        assert_eq!(
            verify(EXPECTED, ACTUAL).unwrap_err(),
            vec![
                LayoutMismatch::Size {
                    name: "rd_t",
                    expected: 8,
                    actual: 12
                },
                LayoutMismatch::MissingField {
                    type_name: "rd_t",
                    field: "as_"
                },
                LayoutMismatch::Offset {
                    type_name: "rd_t",
                    field: "val",
                    expected: 4,
                    actual: 8
                },
                LayoutMismatch::MissingType { name: "missing" },
            ]
        );
    }

    #[test]
    #[cfg(all(target_os = "linux", target_pointer_width = "64"))]
    fn test_snapshot_covers_declared() {
        let snapshot = snapshot().unwrap();
        assert_eq!(snapshot.len(), DECLARED.len());
        for (recorded, declared) in snapshot.iter().zip(DECLARED) {
            assert_eq!(recorded.name, declared.name);
            assert_eq!(recorded.fields.len(), declared.fields.len());
        }
    }
}

/*!
The binding surface: which headers are pulled in and which symbols from them the crate declares.

This module has no dependencies besides `std` because `build.rs` includes it verbatim to drive
bindgen. The lists here are the single source for the wrapper header, the bindgen allowlist and the
hand-written declarations in [`sys`](crate::sys).
*/
use std::fmt::Write;

/// System headers that pmacct's own headers rely on without including them.
pub const SYSTEM_HEADERS: &[&str] = &["stdlib.h", "arpa/inet.h", "sys/types.h", "pcap.h"];

/// pmacct headers of the core include list, relative to `<pmacct/src/...>`.
pub const CORE_HEADERS: &[&str] = &[
    "pmacct.h",
    "addr.h",
    "plugin_hooks.h",
    "network.h",
    "bgp/bgp.h",
    "bmp/bmp.h",
];

/// Additional BGP/BMP headers of the extended include list.
pub const EXTENDED_HEADERS: &[&str] = &[
    "bgp/bgp_prefix.h",
    "bgp/bgp_msg.h",
    "bmp/bmp_msg.h",
    "bmp/bmp_logdump.h",
];

/// Which include list the wrapper header is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeaderSet {
    #[default]
    Core,
    Extended,
}

impl HeaderSet {
    /// Header set selected by the crate features of the current build.
    pub const fn from_features() -> HeaderSet {
        if cfg!(feature = "extended-headers") {
            HeaderSet::Extended
        } else {
            HeaderSet::Core
        }
    }

    /// pmacct headers of this set, in include order.
    pub fn headers(self) -> impl Iterator<Item = &'static str> {
        let extended: &[&str] = match self {
            HeaderSet::Core => &[],
            HeaderSet::Extended => EXTENDED_HEADERS,
        };
        CORE_HEADERS.iter().chain(extended.iter()).copied()
    }
}

/// Structs and typedefs the crate mirrors. Anonymous unions are reached through their parents.
pub const TYPES: &[&str] = &[
    // system
    "in_addr",
    "in6_addr",
    "timeval",
    // network.h / addr.h
    "host_addr",
    "host_mask",
    // bgp
    "afi_t",
    "safi_t",
    "rd_t",
    "rd_ip",
    "rd_as",
    "rd_as4",
    "prefix",
    "aspath",
    "community",
    "ecommunity",
    "lcommunity",
    "bgp_attr",
    "cap_per_af",
    "cap_per_af_u16",
    // bmp wire headers
    "bmp_common_hdr",
    "bmp_peer_hdr",
    "bmp_tlv_hdr",
    "bmp_peer_up_hdr",
    "bmp_peer_down_hdr",
    "bmp_stats_hdr",
    "bmp_stats_cnt_hdr",
    // bmp internal and log structures
    "bmp_chars",
    "bmp_data",
    "bmp_log_stats",
    "bmp_log_peer_up",
    "bmp_log_peer_down",
    "bmp_log_tlv",
    // plugin hooks
    "plugin_type_entry",
];

/// Types only ever used behind a pointer. They are declared opaque.
pub const OPAQUE_TYPES: &[&str] = &[
    "pm_list",
    "bgp_peer",
    "bmp_peer",
    "configuration",
    "plugin_requests",
    "packet_ptrs",
];

/// Functions declared in `extern "C"` blocks.
pub const FUNCTIONS: &[&str] = &[
    // addr.h
    "str_to_addr",
    "addr_to_str",
    "addr_to_str2",
    "str_to_addr_mask",
    "addr_mask_to_str",
    "addr_to_sa",
    "sa_to_addr",
    "host_addr_cmp",
    "host_addr_mask_cmp",
    "raw_to_addr",
    "is_any",
    "etype_to_af",
    "af_to_etype",
    // bgp
    "bgp_afi2family",
    "bgp_rd_type_get",
    "bgp_rd_origin_get",
    "bgp_rd_origin_set",
    "bgp_rd2str",
    "bgp_str2rd",
    "bgp_rd_ntoh",
    "prefix2str",
    "str2prefix",
    "prefix_new",
    "prefix_free",
    // bmp
    "bmp_process_packet",
    "bmp_get_and_check_length",
    "bmp_tlv_list_new",
    "bmp_tlv_list_add",
    "bmp_tlv_list_destroy",
    // plugin hooks
    "load_plugins",
    "exec_plugins",
];

/// Constant name patterns (bindgen regular expressions).
pub const CONSTANTS: &[&str] = &[
    "AFI_.*",
    "SAFI_.*",
    "RD_TYPE_.*",
    "RD_ORIGIN_.*",
    "RD_LEN",
    "BMP_V[34]",
    "BMP_MSG_.*",
    "BMP_PEER_TYPE_.*",
    "BMP_PEER_FLAGS_.*",
    "BMP_PEER_DOWN_.*",
    "BMP_CMN_HDRLEN",
    "BMP_PEER_HDRLEN",
];

/// Macros that clang reports twice through glibc and that bindgen must skip.
pub const IGNORED_MACROS: &[&str] = &[
    "FP_INFINITE",
    "FP_NAN",
    "FP_NORMAL",
    "FP_SUBNORMAL",
    "FP_ZERO",
    "IPPORT_RESERVED",
];

/// Whether `symbol` is a declared type, opaque type or function of the surface.
pub fn is_allowlisted(symbol: &str) -> bool {
    TYPES.contains(&symbol) || OPAQUE_TYPES.contains(&symbol) || FUNCTIONS.contains(&symbol)
}

/// Renders the wrapper header bindgen consumes.
///
/// The output only depends on `set`.
pub fn render_wrapper(set: HeaderSet) -> String {
    let mut out = String::new();
    out.push_str("// Generated from src/surface.rs, do not edit.\n\n");

    out.push_str("// system headers pmacct relies on\n");
    for header in SYSTEM_HEADERS {
        let _ = writeln!(out, "#include <{}>", header);
    }

    out.push_str("\n// pmacct headers\n");
    for header in set.headers() {
        let _ = writeln!(out, "#include <pmacct/src/{}>", header);
    }
    out
}

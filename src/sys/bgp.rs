//! BGP structures and constants from `bgp/bgp.h` and the headers it pulls in.
use super::addr::host_addr;
use super::net::{caddr_t, in6_addr, in_addr, u_char, u_int16_t, u_int32_t, u_int8_t};
use std::os::raw::{c_char, c_int, c_ulong};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

pub type afi_t = u_int16_t;
pub type safi_t = u_int8_t;

pub const AFI_IP: afi_t = 1;
pub const AFI_IP6: afi_t = 2;
pub const AFI_BGP_LS: afi_t = 16388;
/// Upper bound (exclusive) of the AFIs indexable in per-AF matrices.
pub const AFI_MAX: afi_t = 3;

pub const SAFI_UNICAST: safi_t = 1;
pub const SAFI_MULTICAST: safi_t = 2;
pub const SAFI_MPLS_LABEL: safi_t = 4;
pub const SAFI_EVPN: safi_t = 70;
pub const SAFI_BGP_LS: safi_t = 71;
pub const SAFI_MPLS_VPN: safi_t = 128;
/// Upper bound (exclusive) of the SAFIs indexable in per-AF matrices.
pub const SAFI_MAX: safi_t = 129;

pub const RD_LEN: usize = 8;

pub const RD_TYPE_AS: u16 = 0;
pub const RD_TYPE_IP: u16 = 1;
pub const RD_TYPE_AS4: u16 = 2;
pub const RD_TYPE_MASK: u16 = 0x0FFF;

// pmacct keeps where an RD was learnt in the top nibble of its type, one bit per origin
pub const RD_ORIGIN_UNKNOWN: u16 = 0x0000;
pub const RD_ORIGIN_MAP: u16 = 0x1000;
pub const RD_ORIGIN_FLOW: u16 = 0x2000;
pub const RD_ORIGIN_BGP: u16 = 0x4000;
pub const RD_ORIGIN_BMP: u16 = 0x8000;
pub const RD_ORIGIN_MASK: u16 = 0xF000;
/// Number of origin lookup functions pmacct keeps per RD origin.
pub const RD_ORIGIN_FUNC_TYPE_MAX: u16 = 2;

pub const ECOMMUNITY_SIZE: usize = 8;
pub const LCOMMUNITY_SIZE: usize = 12;

/// Route distinguisher in its generic form. The concrete layout depends on the type and is
/// given by [rd_as], [rd_ip] or [rd_as4].
#[repr(C)]
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, FromBytes, IntoBytes, KnownLayout, Immutable,
)]
pub struct rd_t {
    pub type_: u_int16_t,
    pub as_: u_int16_t,
    pub val: u_int32_t,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct rd_ip {
    pub type_: u_int16_t,
    pub ip: in_addr,
    pub val: u_int16_t,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct rd_as {
    pub type_: u_int16_t,
    pub as_: u_int16_t,
    pub val: u_int32_t,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct rd_as4 {
    pub type_: u_int16_t,
    pub as_: u_int32_t,
    pub val: u_int16_t,
}

/// A network prefix. `family` selects the active member of `u`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct prefix {
    pub family: u_char,
    pub prefixlen: u_char,
    pub u: prefix__bindgen_ty_1,
}

#[repr(C, align(8))]
#[derive(Copy, Clone)]
pub union prefix__bindgen_ty_1 {
    pub prefix: u_char,
    pub prefix4: in_addr,
    pub prefix6: in6_addr,
    pub lp: prefix__bindgen_ty_1__bindgen_ty_1,
    pub val: [u_char; 8],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct prefix__bindgen_ty_1__bindgen_ty_1 {
    pub id: in_addr,
    pub adv_router: in_addr,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct aspath {
    pub refcnt: c_ulong,
    pub length: c_int,
    pub count: c_int,
    pub data: caddr_t,
    pub str_: *mut c_char,
}

/// Standard communities, `size` 32 bit values.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct community {
    pub refcnt: c_ulong,
    pub size: c_int,
    pub val: *mut u_int32_t,
    pub str_: *mut c_char,
}

/// Extended communities, `size` entries of [ECOMMUNITY_SIZE] bytes.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct ecommunity {
    pub refcnt: c_ulong,
    pub size: c_int,
    pub val: *mut u_int8_t,
    pub str_: *mut c_char,
}

/// Large communities, `size` entries of [LCOMMUNITY_SIZE] bytes.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct lcommunity {
    pub refcnt: c_ulong,
    pub size: c_int,
    pub val: *mut u_char,
    pub str_: *mut c_char,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct bgp_attr {
    pub aspath: *mut aspath,
    pub community: *mut community,
    pub ecommunity: *mut ecommunity,
    pub lcommunity: *mut lcommunity,
    pub refcnt: c_ulong,
    pub rpki_maxlen: u_int8_t,
    pub nexthop: in_addr,
    pub mp_nexthop: host_addr,
    pub med: u_int32_t,
    pub local_pref: u_int32_t,
    pub origin: u_int8_t,
    pub bitmap: u_int8_t,
}

/// One byte of capability data per (AFI, SAFI), for example ADD-PATH send/receive modes.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct cap_per_af {
    pub cap: [[u_int8_t; SAFI_MAX as usize]; AFI_MAX as usize],
    pub afi_max: afi_t,
    pub safi_max: safi_t,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct cap_per_af_u16 {
    pub cap: [[u_int16_t; SAFI_MAX as usize]; AFI_MAX as usize],
    pub afi_max: afi_t,
    pub safi_max: safi_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct bgp_peer {
    _unused: [u8; 0],
}

extern "C" {
    pub fn bgp_afi2family(afi: c_int) -> c_int;
    pub fn bgp_rd_type_get(type_: u_int16_t) -> u_int16_t;
    pub fn bgp_rd_origin_get(type_: u_int16_t) -> u_int16_t;
    pub fn bgp_rd_origin_set(rd: *mut rd_t, origin: u_int16_t);
    pub fn bgp_rd2str(str_: *mut c_char, rd: *mut rd_t) -> c_int;
    pub fn bgp_str2rd(rd: *mut rd_t, str_: *mut c_char) -> c_int;
    pub fn bgp_rd_ntoh(rd: *mut rd_t) -> c_int;
    pub fn prefix2str(p: *const prefix, str_: *mut c_char, size: c_int) -> c_int;
    pub fn str2prefix(str_: *const c_char, p: *mut prefix) -> c_int;
    pub fn prefix_new() -> *mut prefix;
    pub fn prefix_free(p: *mut prefix);
}

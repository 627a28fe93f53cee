//! BMP wire headers, message/log structures and constants from `bmp/bmp.h`.
//!
//! The `*_hdr` structures are packed images of RFC 7854 headers, multi-byte fields in network
//! byte order. The `bmp_log_*`, `bmp_chars` and `bmp_data` structures are pmacct's decoded
//! representation, in host byte order.
use super::addr::host_addr;
use super::bgp::{afi_t, rd_t, safi_t, RD_LEN};
use super::net::{timeval, u_char, u_int16_t, u_int32_t, u_int64_t, u_int8_t};
use std::os::raw::{c_char, c_int, c_void};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

pub const BMP_V3: u8 = 3;
pub const BMP_V4: u8 = 4;

pub const BMP_CMN_HDRLEN: usize = 6;
pub const BMP_PEER_HDRLEN: usize = 42;

pub const BMP_MSG_ROUTE_MONITOR: u8 = 0;
pub const BMP_MSG_STATS: u8 = 1;
pub const BMP_MSG_PEER_DOWN: u8 = 2;
pub const BMP_MSG_PEER_UP: u8 = 3;
pub const BMP_MSG_INIT: u8 = 4;
pub const BMP_MSG_TERM: u8 = 5;
pub const BMP_MSG_ROUTE_MIRROR: u8 = 6;

pub const BMP_PEER_TYPE_GLOBAL: u8 = 0;
pub const BMP_PEER_TYPE_L3VPN: u8 = 1;
pub const BMP_PEER_TYPE_LOCAL: u8 = 2;
pub const BMP_PEER_TYPE_LOC_RIB: u8 = 3;

pub const BMP_PEER_FLAGS_ARI_V: u8 = 0x80;
pub const BMP_PEER_FLAGS_ARI_L: u8 = 0x40;
pub const BMP_PEER_FLAGS_ARI_A: u8 = 0x20;
pub const BMP_PEER_FLAGS_ARO_O: u8 = 0x10;
pub const BMP_PEER_FLAGS_LR_F: u8 = 0x80;

pub const BMP_PEER_DOWN_RESERVED: u8 = 0;
pub const BMP_PEER_DOWN_LOC_NOT_MSG: u8 = 1;
pub const BMP_PEER_DOWN_LOC_CODE: u8 = 2;
pub const BMP_PEER_DOWN_REM_NOT_MSG: u8 = 3;
pub const BMP_PEER_DOWN_REM_CODE: u8 = 4;
pub const BMP_PEER_DOWN_DECFG: u8 = 5;

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct bmp_common_hdr {
    pub version: u_char,
    pub len: u_int32_t,
    pub type_: u_char,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct bmp_peer_hdr {
    pub type_: u_char,
    pub flags: u_char,
    pub rd: [u_char; RD_LEN],
    pub addr: [u_int32_t; 4],
    pub asn: u_int32_t,
    pub bgp_id: u_int32_t,
    pub tstamp_sec: u_int32_t,
    pub tstamp_usec: u_int32_t,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct bmp_tlv_hdr {
    pub type_: u_int16_t,
    pub len: u_int16_t,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct bmp_peer_up_hdr {
    pub loc_addr: [u_int32_t; 4],
    pub loc_port: u_int16_t,
    pub rem_port: u_int16_t,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct bmp_peer_down_hdr {
    pub reason: u_char,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct bmp_stats_hdr {
    pub count: u_int32_t,
}

#[repr(C, packed)]
#[derive(Debug, Copy, Clone, Default, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct bmp_stats_cnt_hdr {
    pub type_: u_int16_t,
    pub len: u_int16_t,
}

/// Characteristics identifying a BMP peer's RIB view. The first seven fields form the key pmacct
/// looks peers up by.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct bmp_chars {
    pub peer_type: u_int8_t,
    pub is_post: u_int8_t,
    pub is_2b_asn: u_int8_t,
    pub is_filtered: u_int8_t,
    pub is_out: u_int8_t,
    pub is_loc: u_int8_t,
    pub rd: rd_t,
    pub tlvs: *mut pm_list,
}

/// Per-peer data decoded from a BMP per-peer header.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct bmp_data {
    pub family: u_int8_t,
    pub peer_ip: host_addr,
    pub bgp_id: host_addr,
    pub peer_asn: u_int32_t,
    pub chars: bmp_chars,
    pub tstamp: timeval,
    pub tstamp_arrival: timeval,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct bmp_log_stats {
    pub cnt_type: u_int16_t,
    pub cnt_afi: afi_t,
    pub cnt_safi: safi_t,
    pub cnt_data: u_int64_t,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct bmp_log_peer_up {
    pub local_ip: host_addr,
    pub loc_port: u_int16_t,
    pub rem_port: u_int16_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct bmp_log_peer_down {
    pub reason: u_char,
    pub loc_code: u_int16_t,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct bmp_log_tlv {
    pub pen: u_int32_t,
    pub type_: u_int16_t,
    pub len: u_int16_t,
    pub val: *mut c_void,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct pm_list {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct bmp_peer {
    _unused: [u8; 0],
}

extern "C" {
    pub fn bmp_process_packet(
        bmp_packet: *mut c_char,
        len: u_int32_t,
        bmpp: *mut bmp_peer,
        do_term: *mut c_int,
    ) -> u_int32_t;
    pub fn bmp_get_and_check_length(
        bmp_packet_ptr: *mut *mut c_char,
        pkt_size: *mut u_int32_t,
        len: u_int32_t,
    ) -> *mut c_char;
    pub fn bmp_tlv_list_new(
        cmp: Option<unsafe extern "C" fn(*mut c_void, *mut c_void) -> c_int>,
        del: Option<unsafe extern "C" fn(*mut c_void)>,
    ) -> *mut pm_list;
    pub fn bmp_tlv_list_add(
        tlvs: *mut pm_list,
        pen: u_int32_t,
        type_: u_int16_t,
        len: u_int16_t,
        val: *mut c_char,
    ) -> c_int;
    pub fn bmp_tlv_list_destroy(tlvs: *mut pm_list);
}

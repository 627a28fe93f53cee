//! System types (glibc) that appear inside pmacct structures.
use std::os::raw::{c_char, c_long, c_uchar};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

pub type u_char = c_uchar;
pub type u_int8_t = u8;
pub type u_int16_t = u16;
pub type u_int32_t = u32;
pub type u_int64_t = u64;
pub type caddr_t = *mut c_char;
pub type in_addr_t = u32;
pub type __time_t = c_long;
pub type __suseconds_t = c_long;

pub const INET_ADDRSTRLEN: usize = 16;
pub const INET6_ADDRSTRLEN: usize = 46;
pub const ETH_ADDR_LEN: usize = 6;

/// IPv4 address, `s_addr` in network byte order.
#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, FromBytes, IntoBytes, KnownLayout, Immutable)]
pub struct in_addr {
    pub s_addr: in_addr_t,
}

/// IPv6 address with the glibc union representation.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct in6_addr {
    pub __in6_u: in6_addr__bindgen_ty_1,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union in6_addr__bindgen_ty_1 {
    pub __u6_addr8: [u8; 16],
    pub __u6_addr16: [u16; 8],
    pub __u6_addr32: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct timeval {
    pub tv_sec: __time_t,
    pub tv_usec: __suseconds_t,
}

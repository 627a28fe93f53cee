//! `network.h` address structures and the `addr.h` helpers operating on them.
use super::net::{in6_addr, in_addr, u_char, u_int16_t, u_int32_t, u_int8_t};
use libc::sockaddr;
use std::os::raw::{c_char, c_int, c_uint};

/// An IPv4 or IPv6 host address. `family` is `AF_INET` or `AF_INET6` and selects the active
/// member of `address`.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct host_addr {
    pub family: u_int8_t,
    pub address: host_addr__bindgen_ty_1,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union host_addr__bindgen_ty_1 {
    pub ipv4: in_addr,
    pub ipv6: in6_addr,
}

/// A netmask. `len` is the prefix length, `mask` the expanded mask bits.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct host_mask {
    pub family: u_int8_t,
    pub len: u_int8_t,
    pub mask: host_mask__bindgen_ty_1,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub union host_mask__bindgen_ty_1 {
    pub m4: u_int32_t,
    pub m6: [u_int8_t; 16],
}

extern "C" {
    pub fn str_to_addr(str_: *const c_char, a: *mut host_addr) -> c_uint;
    pub fn addr_to_str(str_: *mut c_char, a: *const host_addr) -> c_uint;
    pub fn addr_to_str2(str_: *mut c_char, a: *const host_addr, swap_af: c_int) -> c_uint;
    pub fn str_to_addr_mask(str_: *const c_char, a: *mut host_addr, m: *mut host_mask) -> c_uint;
    pub fn addr_mask_to_str(
        str_: *mut c_char,
        len: c_int,
        a: *const host_addr,
        m: *const host_mask,
    ) -> c_uint;
    pub fn addr_to_sa(sa: *mut sockaddr, a: *mut host_addr, port: u_int16_t) -> c_uint;
    pub fn sa_to_addr(sa: *mut sockaddr, a: *mut host_addr, port: *mut u_int16_t) -> c_uint;
    pub fn host_addr_cmp(a1: *mut host_addr, a2: *mut host_addr) -> c_int;
    pub fn host_addr_mask_cmp(a1: *mut host_addr, m1: *mut host_mask, a2: *mut host_addr)
        -> c_int;
    pub fn raw_to_addr(ha: *mut host_addr, raw: *mut u_char, family: u_int8_t) -> c_uint;
    pub fn is_any(a: *mut host_addr) -> c_int;
    pub fn etype_to_af(etype: u_int16_t) -> u_int8_t;
    pub fn af_to_etype(af: u_int8_t) -> u_int16_t;
}

//! Plugin registration and hook entry points from `plugin_hooks.h`.
use std::os::raw::{c_char, c_int, c_void};

/// Entry of pmacct's plugin type table: a numeric id, the name used in configuration and the
/// plugin's main function.
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct plugin_type_entry {
    pub id: c_int,
    pub string: [c_char; 16],
    pub func: Option<unsafe extern "C" fn(c_int, *mut configuration, *mut c_void)>,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct configuration {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct plugin_requests {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct packet_ptrs {
    _unused: [u8; 0],
}

extern "C" {
    pub fn load_plugins(req: *mut plugin_requests);
    pub fn exec_plugins(pptrs: *mut packet_ptrs, req: *mut plugin_requests);
}

use super::{c_str, raw_slice};
use crate::sys::{aspath, community, ecommunity, lcommunity, ECOMMUNITY_SIZE, LCOMMUNITY_SIZE};
use itertools::Itertools;
use std::fmt::{Debug, Display, Formatter};
use std::os::raw::c_int;

const COMMUNITY_NO_EXPORT: u32 = 0xFFFFFF01;
const COMMUNITY_NO_ADVERTISE: u32 = 0xFFFFFF02;
const COMMUNITY_NO_EXPORT_SUBCONFED: u32 = 0xFFFFFF03;

fn community_str(value: u32) -> String {
    match value {
        COMMUNITY_NO_EXPORT => "no-export".to_string(),
        COMMUNITY_NO_ADVERTISE => "no-advertise".to_string(),
        COMMUNITY_NO_EXPORT_SUBCONFED => "local-AS".to_string(),
        value => format!("{}:{}", value >> 16, value & 0xFFFF),
    }
}

impl community {
    /// Values in host byte order. pmacct keeps them as received, in network byte order.
    pub fn values(&self) -> Vec<u32> {
        unsafe { raw_slice(self.val, self.size) }
            .iter()
            .map(|v| u32::from_be(*v))
            .collect()
    }
}

impl ecommunity {
    /// Raw 8 byte entries.
    pub fn entries(&self) -> Vec<[u8; ECOMMUNITY_SIZE]> {
        let bytes = unsafe { raw_slice(self.val, entries_len(self.size, ECOMMUNITY_SIZE)) };
        bytes
            .chunks_exact(ECOMMUNITY_SIZE)
            .filter_map(|c| c.try_into().ok())
            .collect()
    }
}

impl lcommunity {
    /// `(global administrator, local data 1, local data 2)` of each entry.
    pub fn entries(&self) -> Vec<(u32, u32, u32)> {
        let bytes = unsafe { raw_slice(self.val, entries_len(self.size, LCOMMUNITY_SIZE)) };
        bytes
            .chunks_exact(LCOMMUNITY_SIZE)
            .map(|c| {
                (
                    u32::from_be_bytes([c[0], c[1], c[2], c[3]]),
                    u32::from_be_bytes([c[4], c[5], c[6], c[7]]),
                    u32::from_be_bytes([c[8], c[9], c[10], c[11]]),
                )
            })
            .collect()
    }
}

/// Byte length of `size` entries, 0 when it does not fit a `c_int`.
fn entries_len(size: c_int, entry: usize) -> c_int {
    usize::try_from(size)
        .ok()
        .and_then(|size| size.checked_mul(entry))
        .and_then(|len| c_int::try_from(len).ok())
        .unwrap_or(0)
}

macro_rules! impl_community_print {
    ($ty:ident, $values:ident, $render:expr) => {
        impl Display for $ty {
            /// The string pmacct cached in `str_` if any, the rendered values otherwise.
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                match unsafe { c_str(self.str_) } {
                    Some(s) => write!(f, "{}", s.to_string_lossy()),
                    None => write!(f, "{}", self.$values().into_iter().map($render).join(" ")),
                }
            }
        }

        impl Debug for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($ty))
                    .field("refcnt", &self.refcnt)
                    .field("size", &self.size)
                    .field("val", &self.$values())
                    .field("str_", &unsafe { c_str(self.str_) })
                    .finish()
            }
        }
    };
}

impl_community_print!(community, values, community_str);
impl_community_print!(ecommunity, entries, |e: [u8; ECOMMUNITY_SIZE]| {
    format!("0x{:016x}", u64::from_be_bytes(e))
});
impl_community_print!(lcommunity, entries, |(a, b, c): (u32, u32, u32)| {
    format!("{}:{}:{}", a, b, c)
});

impl Display for aspath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match unsafe { c_str(self.str_) } {
            Some(s) => write!(f, "{}", s.to_string_lossy()),
            None => Ok(()),
        }
    }
}

impl Debug for aspath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("aspath")
            .field("refcnt", &self.refcnt)
            .field("length", &self.length)
            .field("count", &self.count)
            .field("data", &self.data)
            .field("str_", &unsafe { c_str(self.str_) })
            .finish()
    }
}

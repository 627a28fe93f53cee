/*!
Conversions between the C declarations and Rust types.

Conversions that cannot fail are `From` impls, everything reading a discriminated union or a
numeric code is `TryFrom` returning [BindingsError].
*/
mod afi;
mod bmp;
pub mod ipaddr;
mod rd;
mod timeval;

use crate::error::BindingsError;
use std::any::type_name;
use std::mem::size_of;
use zerocopy::FromBytes;

/// Copies a structure out of a native memory image, for example a buffer received from pmacct.
///
/// Only the first `size_of::<T>()` bytes are read, trailing bytes are ignored. The image is
/// taken as is, byte order is whatever the native side wrote.
pub fn read_native<T: FromBytes>(bytes: &[u8]) -> Result<T, BindingsError> {
    T::read_from_prefix(bytes)
        .map(|(value, _)| value)
        .map_err(|_| BindingsError::Truncated {
            type_name: short_type_name::<T>(),
            needed: size_of::<T>(),
            available: bytes.len(),
        })
}

fn short_type_name<T>() -> &'static str {
    let name = type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/*!
`Debug` and `Display` for C types whose derived output would be wrong or unreadable.

Unions are printed through the member their discriminant selects, raw pointers owned by pmacct
are followed but never freed.
*/
mod attr;
mod bmp;
mod cap;
mod community;
mod ipaddr;
mod prefix;
mod rd;

use std::ffi::CStr;
use std::os::raw::{c_char, c_int};
use std::slice;

/// Borrows the `len` elements at `ptr`. Null pointers and non-positive lengths give an empty
/// slice.
///
/// # Safety
///
/// A non-null `ptr` must point to at least `len` initialized elements that outlive `'a`.
unsafe fn raw_slice<'a, T>(ptr: *const T, len: c_int) -> &'a [T] {
    match usize::try_from(len) {
        Ok(len) if !ptr.is_null() && len > 0 => slice::from_raw_parts(ptr, len),
        _ => &[],
    }
}

/// Borrows a nul terminated C string, `None` for a null pointer.
///
/// # Safety
///
/// A non-null `ptr` must point to a nul terminated string that outlives `'a`.
unsafe fn c_str<'a>(ptr: *const c_char) -> Option<&'a CStr> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr))
    }
}

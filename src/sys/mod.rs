/*!
Declarations mirroring the pmacct C ABI.

Each item keeps the C name, so code reads the same on both sides of the boundary. Rust keywords are
suffixed with `_` and anonymous unions are named `<parent>__bindgen_ty_N`, the names bindgen gives
them. That lets the [layout](crate::layout) tables compare these declarations one to one with
freshly generated bindings.

Nothing here is safe to call without the native library linked in, see the `link` feature.
*/
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

mod addr;
mod bgp;
mod bmp;
mod net;
mod plugin_hooks;

pub use addr::*;
pub use bgp::*;
pub use bmp::*;
pub use net::*;
pub use plugin_hooks::*;

/// Bindings bindgen generated from the installed pmacct headers during this build.
#[cfg(feature = "verify-layout")]
#[allow(dead_code, improper_ctypes, clippy::all)]
pub mod generated {
    include!(concat!(env!("OUT_DIR"), "/pmacct_generated.rs"));
}

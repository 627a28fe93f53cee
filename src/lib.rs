/*!
Rust declarations of the pmacct C interface: the address, BGP and BMP structures, the constants
and the functions a Rust component needs to exchange data with pmacct in-process.

The declarations live in [sys] and are re-exported at the crate root under their C names. Their
layout is pinned by [layout], which compares them against the C compiler's layout of the same
headers. On top of the raw types the crate offers safe conversions to `std`, `ipnet` and `chrono`
types ([convert]), readable `Debug`/`Display` output ([print]) and helpers filling pmacct
matrices ([utils]).

# Example

```
use ipnet::IpNet;
use pmacct_bindings::{host_addr, prefix};
use std::net::IpAddr;

let addr = host_addr::from("192.0.2.1".parse::<IpAddr>().unwrap());
assert_eq!(addr.to_string(), "192.0.2.1");
assert_eq!(IpAddr::try_from(&addr).unwrap(), "192.0.2.1".parse::<IpAddr>().unwrap());

let net: IpNet = "2001:db8::/32".parse().unwrap();
let p = prefix::from(&net);
assert_eq!(IpNet::try_from(&p).unwrap(), net);
```

# Features

- `link`: emit the link directives for the native library, see the build script for the
  environment variables it reads. Required before calling any `extern` function.
- `extended-headers`: use the extended header set when rendering the wrapper header.
- `verify-layout`: generate bindings from the installed headers with bindgen and expose their
  layout as [layout::GENERATED].
- `serde`: serialize the models and layout tables.
- `cli`: the `pmacct-bindings` binary.
*/

pub mod convert;
pub mod error;
pub mod layout;
pub mod models;
mod print;
pub mod surface;
pub mod sys;
pub mod utils;

pub use convert::read_native;
pub use error::BindingsError;
pub use sys::*;

/// All-zero value of a C structure, the way pmacct initializes them with `memset`.
///
/// # Safety
///
/// Implementors must be valid when every byte is zero: integers, raw pointers, optional
/// function pointers and unions or arrays of those.
pub unsafe trait DefaultZeroed: Sized {
    fn default_zeroed() -> Self {
        unsafe { std::mem::zeroed() }
    }
}

macro_rules! impl_default_zeroed {
    ($($ty:ty),* $(,)?) => {
        $(unsafe impl DefaultZeroed for $ty {})*
    };
}

impl_default_zeroed!(
    in6_addr,
    host_addr,
    host_mask,
    prefix,
    aspath,
    community,
    ecommunity,
    lcommunity,
    bgp_attr,
    cap_per_af,
    cap_per_af_u16,
    bmp_chars,
    bmp_data,
    bmp_log_stats,
    bmp_log_peer_up,
    bmp_log_peer_down,
    bmp_log_tlv,
    plugin_type_entry,
);

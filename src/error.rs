/*!
error module defines the error types used when converting between pmacct's C structures and Rust
types.
*/
use crate::models::AddressType;
use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingsError {
    /// The `family` field of an address or prefix is neither `AF_INET` nor `AF_INET6`, so no union
    /// member can be read.
    ///
    /// ## Occurs during:
    ///  - Converting `host_addr`, `host_mask` or `prefix` into `std::net`/`ipnet` types
    #[error("unknown address family {0}")]
    UnknownAddressFamily(u8),
    /// This error represents a [ipnet::PrefixLenError] error. It occurs if a prefix length is
    /// larger than the length of the address it is applied to.
    #[error("invalid network prefix mask")]
    InvalidPrefixLength(#[from] ipnet::PrefixLenError),
    /// This error represents a [num_enum::TryFromPrimitiveError] error for any of a number of
    /// different types.
    ///
    /// ## Occurs during:
    ///  - Reading AFI, SAFI, BMP peer type or message type fields
    #[error("unrecognized value {value} for {type_name}")]
    UnrecognizedEnumVariant { type_name: &'static str, value: u64 },
    /// The type of an `rd_t`, origin bits masked off, is not one of `RD_TYPE_AS`, `RD_TYPE_IP`
    /// or `RD_TYPE_AS4`.
    #[error("unknown route distinguisher type {0:#06x}")]
    UnknownRdType(u16),
    /// The address type has no slot in pmacct's per-AFI/SAFI matrices.
    #[error("address type {0:?} is not supported by pmacct")]
    AddressTypeNotSupported(AddressType),
    /// A `timeval` holds a time outside of what `chrono` can represent.
    #[error("invalid timestamp {sec}.{usec:06}")]
    InvalidTimestamp { sec: i64, usec: i64 },
    /// Not enough bytes to read a structure from a native memory image.
    #[error("{type_name} needs {needed} bytes, got {available}")]
    Truncated {
        type_name: &'static str,
        needed: usize,
        available: usize,
    },
}

impl<T> From<TryFromPrimitiveError<T>> for BindingsError
where
    T: TryFromPrimitive,
    T::Primitive: Into<u64>,
{
    #[inline]
    fn from(value: TryFromPrimitiveError<T>) -> Self {
        BindingsError::UnrecognizedEnumVariant {
            type_name: T::NAME,
            value: value.number.into(),
        }
    }
}

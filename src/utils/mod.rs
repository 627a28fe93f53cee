//! Helpers filling pmacct structures from Rust collections.
pub mod cap_per_af;

pub use cap_per_af::PerAddressTypeCapability;

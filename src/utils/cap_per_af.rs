use crate::error::BindingsError;
use crate::models::AddressType;
use crate::sys::{afi_t, cap_per_af, cap_per_af_u16, safi_t};
use crate::DefaultZeroed;
use log::debug;
use std::cmp::max;

/// A pmacct matrix holding one capability value per (AFI, SAFI), such as the ADD-PATH modes
/// negotiated with a peer.
pub trait PerAddressTypeCapability<T>: DefaultZeroed {
    /// Builds a matrix from `(address type, value)` pairs. Address types pmacct cannot index are
    /// skipped and returned next to the matrix.
    fn from_iter<I>(iterator: I) -> (Self, Vec<BindingsError>)
    where
        I: IntoIterator<Item = (AddressType, T)>,
    {
        let mut matrix = Self::default_zeroed();
        let mut errors = Vec::new();

        for (address_type, value) in iterator {
            if let Err(e) = matrix.set_value(address_type, value) {
                debug!("skipping capability for {:?}: {}", address_type, e);
                errors.push(e);
            }
        }

        (matrix, errors)
    }

    /// Writes `cap[afi][safi]` and raises `afi_max`/`safi_max` to cover it.
    fn set_value(&mut self, address_type: AddressType, value: T) -> Result<(), BindingsError>;

    /// Value stored for an address type, `None` if it has no slot.
    fn value(&self, address_type: AddressType) -> Option<T>;
}

macro_rules! impl_per_address_type_capability {
    ($ty:ty, $value:ty) => {
        impl PerAddressTypeCapability<$value> for $ty {
            fn set_value(
                &mut self,
                address_type: AddressType,
                value: $value,
            ) -> Result<(), BindingsError> {
                // bounded by AFI_MAX and SAFI_MAX
                let (afi, safi) = <(afi_t, safi_t)>::try_from(address_type)?;

                self.cap[afi as usize][safi as usize] = value;
                self.afi_max = max(self.afi_max, afi);
                self.safi_max = max(self.safi_max, safi);

                Ok(())
            }

            fn value(&self, address_type: AddressType) -> Option<$value> {
                let (afi, safi) = <(afi_t, safi_t)>::try_from(address_type).ok()?;
                Some(self.cap[afi as usize][safi as usize])
            }
        }
    };
}

impl_per_address_type_capability!(cap_per_af, u8);
impl_per_address_type_capability!(cap_per_af_u16, u16);

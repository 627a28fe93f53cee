use crate::sys::{cap_per_af, cap_per_af_u16};
use std::fmt::{Debug, Formatter};

/// Non-zero entries as `(afi, safi) => value`, the full matrix is mostly zeroes.
macro_rules! impl_cap_debug {
    ($ty:ident) => {
        impl Debug for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let entries = self.cap.iter().enumerate().flat_map(|(afi, row)| {
                    row.iter()
                        .enumerate()
                        .filter(|(_, value)| **value != 0)
                        .map(move |(safi, value)| ((afi, safi), *value))
                });

                f.debug_struct(stringify!($ty))
                    .field("cap", &DebugEntries(entries))
                    .field("afi_max", &self.afi_max)
                    .field("safi_max", &self.safi_max)
                    .finish()
            }
        }
    };
}

struct DebugEntries<I>(I);

impl<I, K, V> Debug for DebugEntries<I>
where
    I: Iterator<Item = (K, V)> + Clone,
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.0.clone()).finish()
    }
}

impl_cap_debug!(cap_per_af);
impl_cap_debug!(cap_per_af_u16);

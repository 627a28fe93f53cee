use crate::convert::ipaddr::{FAMILY_INET, FAMILY_INET6};
use crate::error::BindingsError;
use crate::models::{AddressType, Afi, Safi};
use crate::sys::{afi_t, safi_t, AFI_MAX, SAFI_MAX};

impl Afi {
    /// Socket address family of this AFI, as `bgp_afi2family` answers it. `None` where the native
    /// function returns 0.
    pub const fn family(self) -> Option<u8> {
        match self {
            Afi::Ipv4 => Some(FAMILY_INET),
            Afi::Ipv6 => Some(FAMILY_INET6),
            Afi::L2vpn | Afi::BgpLs => None,
        }
    }

    pub fn from_family(family: u8) -> Result<Afi, BindingsError> {
        match family {
            FAMILY_INET => Ok(Afi::Ipv4),
            FAMILY_INET6 => Ok(Afi::Ipv6),
            family => Err(BindingsError::UnknownAddressFamily(family)),
        }
    }
}

impl TryFrom<AddressType> for (afi_t, safi_t) {
    type Error = BindingsError;

    /// pmacct only indexes AFIs below `AFI_MAX` and SAFIs below `SAFI_MAX`.
    fn try_from(value: AddressType) -> Result<Self, Self::Error> {
        let afi = afi_t::from(value.afi);
        let safi = safi_t::from(value.safi);

        if afi < AFI_MAX && safi < SAFI_MAX {
            Ok((afi, safi))
        } else {
            Err(BindingsError::AddressTypeNotSupported(value))
        }
    }
}

impl TryFrom<(afi_t, safi_t)> for AddressType {
    type Error = BindingsError;

    fn try_from((afi, safi): (afi_t, safi_t)) -> Result<Self, Self::Error> {
        Ok(AddressType::new(Afi::try_from(afi)?, Safi::try_from(safi)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::{AFI_IP, AFI_IP6, SAFI_MPLS_VPN, SAFI_UNICAST};

    #[test]
    fn test_family() {
        assert_eq!(Afi::Ipv4.family(), Some(libc::AF_INET as u8));
        assert_eq!(Afi::Ipv6.family(), Some(libc::AF_INET6 as u8));
        assert_eq!(Afi::BgpLs.family(), None);

        assert_eq!(Afi::from_family(libc::AF_INET6 as u8).unwrap(), Afi::Ipv6);
        assert!(Afi::from_family(0).is_err());
    }

    #[test]
    fn test_address_type_to_native() {
        assert_eq!(
            <(afi_t, safi_t)>::try_from(AddressType::IPV4_UNICAST).unwrap(),
            (AFI_IP, SAFI_UNICAST)
        );
        assert_eq!(
            <(afi_t, safi_t)>::try_from(AddressType::IPV6_MPLS_VPN).unwrap(),
            (AFI_IP6, SAFI_MPLS_VPN)
        );
        assert_eq!(
            <(afi_t, safi_t)>::try_from(AddressType::BGP_LS_VPN),
            Err(BindingsError::AddressTypeNotSupported(
                AddressType::BGP_LS_VPN
            ))
        );
        assert!(<(afi_t, safi_t)>::try_from(AddressType::L2VPN_EVPN).is_err());
    }

    #[test]
    fn test_address_type_from_native() {
        assert_eq!(
            AddressType::try_from((AFI_IP6, SAFI_UNICAST)).unwrap(),
            AddressType::IPV6_UNICAST
        );
        assert_eq!(
            AddressType::try_from((9u16, SAFI_UNICAST)),
            Err(BindingsError::UnrecognizedEnumVariant {
                type_name: "Afi",
                value: 9
            })
        );
    }
}

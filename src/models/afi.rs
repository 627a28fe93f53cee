use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::net::IpAddr;

/// AFI -- Address Family Identifier
///
/// <https://www.iana.org/assignments/address-family-numbers/address-family-numbers.xhtml>
#[derive(Debug, PartialEq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Afi {
    Ipv4 = 1,
    Ipv6 = 2,
    L2vpn = 25,
    BgpLs = 16388,
}

impl From<IpAddr> for Afi {
    #[inline]
    fn from(value: IpAddr) -> Self {
        match value {
            IpAddr::V4(_) => Afi::Ipv4,
            IpAddr::V6(_) => Afi::Ipv6,
        }
    }
}

/// SAFI -- Subsequent Address Family Identifier
///
/// <https://www.iana.org/assignments/safi-namespace/safi-namespace.xhtml>
#[derive(Debug, PartialEq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Safi {
    Unicast = 1,
    Multicast = 2,
    MplsLabel = 4,
    Evpn = 70,
    BgpLs = 71,
    BgpLsVpn = 72,
    MplsVpn = 128,
}

/// An (AFI, SAFI) pair, the unit BGP capabilities are negotiated per.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddressType {
    pub afi: Afi,
    pub safi: Safi,
}

impl AddressType {
    pub const IPV4_UNICAST: AddressType = AddressType::new(Afi::Ipv4, Safi::Unicast);
    pub const IPV4_MULTICAST: AddressType = AddressType::new(Afi::Ipv4, Safi::Multicast);
    pub const IPV4_MPLS_LABELED: AddressType = AddressType::new(Afi::Ipv4, Safi::MplsLabel);
    pub const IPV4_MPLS_VPN: AddressType = AddressType::new(Afi::Ipv4, Safi::MplsVpn);
    pub const IPV6_UNICAST: AddressType = AddressType::new(Afi::Ipv6, Safi::Unicast);
    pub const IPV6_MULTICAST: AddressType = AddressType::new(Afi::Ipv6, Safi::Multicast);
    pub const IPV6_MPLS_LABELED: AddressType = AddressType::new(Afi::Ipv6, Safi::MplsLabel);
    pub const IPV6_MPLS_VPN: AddressType = AddressType::new(Afi::Ipv6, Safi::MplsVpn);
    pub const L2VPN_EVPN: AddressType = AddressType::new(Afi::L2vpn, Safi::Evpn);
    pub const BGP_LS: AddressType = AddressType::new(Afi::BgpLs, Safi::BgpLs);
    pub const BGP_LS_VPN: AddressType = AddressType::new(Afi::BgpLs, Safi::BgpLsVpn);

    pub const fn new(afi: Afi, safi: Safi) -> Self {
        AddressType { afi, safi }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_afi_from() {
        assert_eq!(
            Afi::from(IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1))),
            Afi::Ipv4
        );
        assert_eq!(
            Afi::from(IpAddr::V6(std::net::Ipv6Addr::new(0, 0, 0, 0, 0, 0, 0, 1))),
            Afi::Ipv6
        );
    }

    #[test]
    fn test_afi_safi_repr() {
        assert_eq!(Afi::Ipv4 as u16, 1);
        assert_eq!(Afi::Ipv6 as u16, 2);
        assert_eq!(Afi::BgpLs as u16, 16388);

        assert_eq!(Safi::Unicast as u8, 1);
        assert_eq!(Safi::MplsVpn as u8, 128);

        assert_eq!(Afi::try_from(2u16).unwrap(), Afi::Ipv6);
        assert!(Afi::try_from(3u16).is_err());
        assert_eq!(Safi::try_from(70u8).unwrap(), Safi::Evpn);
        assert!(Safi::try_from(3u8).is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_address_type_serde() {
        let serialized = serde_json::to_string(&AddressType::IPV6_MPLS_VPN).unwrap();
        assert_eq!(serialized, r#"{"afi":"Ipv6","safi":"MplsVpn"}"#);
        let deserialized: AddressType = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, AddressType::IPV6_MPLS_VPN);
    }
}

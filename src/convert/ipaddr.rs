use crate::error::BindingsError;
use crate::sys::{host_addr, host_mask, in6_addr, in6_addr__bindgen_ty_1, in_addr, prefix};
use crate::DefaultZeroed;
use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use log::warn;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// `AF_INET` as stored in the one byte `family` fields.
pub const FAMILY_INET: u8 = libc::AF_INET as u8;
/// `AF_INET6` as stored in the one byte `family` fields.
pub const FAMILY_INET6: u8 = libc::AF_INET6 as u8;

impl From<&Ipv4Addr> for in_addr {
    fn from(value: &Ipv4Addr) -> Self {
        in_addr {
            s_addr: value.to_bits().to_be(),
        }
    }
}

impl From<Ipv4Addr> for in_addr {
    fn from(value: Ipv4Addr) -> Self {
        (&value).into()
    }
}

impl From<&in_addr> for Ipv4Addr {
    fn from(value: &in_addr) -> Self {
        (*value).into()
    }
}

impl From<in_addr> for Ipv4Addr {
    fn from(value: in_addr) -> Self {
        Ipv4Addr::from_bits(u32::from_be(value.s_addr))
    }
}

impl in6_addr {
    pub const fn from_octets(octets: [u8; 16]) -> Self {
        in6_addr {
            __in6_u: in6_addr__bindgen_ty_1 {
                __u6_addr8: octets,
            },
        }
    }

    pub fn octets(&self) -> [u8; 16] {
        // all members cover the same 16 bytes and any bit pattern is valid
        unsafe { self.__in6_u.__u6_addr8 }
    }
}

impl PartialEq for in6_addr {
    fn eq(&self, other: &Self) -> bool {
        self.octets() == other.octets()
    }
}

impl Eq for in6_addr {}

impl From<&Ipv6Addr> for in6_addr {
    fn from(value: &Ipv6Addr) -> Self {
        in6_addr::from_octets(value.octets())
    }
}

impl From<Ipv6Addr> for in6_addr {
    fn from(value: Ipv6Addr) -> Self {
        (&value).into()
    }
}

impl From<&in6_addr> for Ipv6Addr {
    fn from(value: &in6_addr) -> Self {
        Ipv6Addr::from(value.octets())
    }
}

impl From<in6_addr> for Ipv6Addr {
    fn from(value: in6_addr) -> Self {
        (&value).into()
    }
}

impl host_addr {
    pub fn default_ipv4() -> Self {
        let mut addr = host_addr::default_zeroed();
        addr.family = FAMILY_INET;
        addr
    }

    pub fn default_ipv6() -> Self {
        let mut addr = host_addr::default_zeroed();
        addr.family = FAMILY_INET6;
        addr
    }
}

impl From<&Ipv4Addr> for host_addr {
    fn from(value: &Ipv4Addr) -> Self {
        let mut addr = host_addr::default_ipv4();
        addr.address.ipv4 = value.into();
        addr
    }
}

impl From<&Ipv6Addr> for host_addr {
    fn from(value: &Ipv6Addr) -> Self {
        let mut addr = host_addr::default_ipv6();
        addr.address.ipv6 = value.into();
        addr
    }
}

impl From<&IpAddr> for host_addr {
    fn from(value: &IpAddr) -> Self {
        match value {
            IpAddr::V4(v4) => v4.into(),
            IpAddr::V6(v6) => v6.into(),
        }
    }
}

impl From<IpAddr> for host_addr {
    fn from(value: IpAddr) -> Self {
        (&value).into()
    }
}

impl TryFrom<&host_addr> for IpAddr {
    type Error = BindingsError;

    fn try_from(value: &host_addr) -> Result<Self, Self::Error> {
        // the family tells which union member the native side wrote
        match value.family {
            FAMILY_INET => Ok(IpAddr::V4(unsafe { value.address.ipv4 }.into())),
            FAMILY_INET6 => Ok(IpAddr::V6(unsafe { value.address.ipv6 }.into())),
            family => {
                warn!("host_addr with unknown address family {}", family);
                Err(BindingsError::UnknownAddressFamily(family))
            }
        }
    }
}

impl TryFrom<host_addr> for IpAddr {
    type Error = BindingsError;

    fn try_from(value: host_addr) -> Result<Self, Self::Error> {
        IpAddr::try_from(&value)
    }
}

impl host_mask {
    /// Netmask of `len` leading one bits. The IPv4 mask is stored in network byte order.
    pub fn new(family: u8, len: u8) -> Result<Self, BindingsError> {
        let mut mask = host_mask::default_zeroed();
        mask.family = family;
        mask.len = len;

        match family {
            FAMILY_INET => {
                let netmask = Ipv4Net::new(Ipv4Addr::UNSPECIFIED, len)?.netmask();
                mask.mask.m4 = netmask.to_bits().to_be();
            }
            FAMILY_INET6 => {
                let netmask = Ipv6Net::new(Ipv6Addr::UNSPECIFIED, len)?.netmask();
                mask.mask.m6 = netmask.octets();
            }
            family => {
                warn!("host_mask with unknown address family {}", family);
                return Err(BindingsError::UnknownAddressFamily(family));
            }
        }

        Ok(mask)
    }
}

impl host_addr {
    /// Network of this address under `mask`. Host bits are kept, use [IpNet::trunc] for the
    /// network address.
    pub fn to_net(&self, mask: &host_mask) -> Result<IpNet, BindingsError> {
        if self.family != mask.family {
            warn!(
                "host_addr family {} does not match host_mask family {}",
                self.family, mask.family
            );
            return Err(BindingsError::UnknownAddressFamily(mask.family));
        }

        Ok(IpNet::new(IpAddr::try_from(self)?, mask.len)?)
    }
}

impl prefix {
    pub fn default_ipv4() -> Self {
        let mut prefix = prefix::default_zeroed();
        prefix.family = FAMILY_INET;
        prefix
    }

    pub fn default_ipv6() -> Self {
        let mut prefix = prefix::default_zeroed();
        prefix.family = FAMILY_INET6;
        prefix
    }
}

impl From<&Ipv4Net> for prefix {
    fn from(value: &Ipv4Net) -> Self {
        let mut prefix = prefix::default_ipv4();
        prefix.prefixlen = value.prefix_len();
        prefix.u.prefix4 = value.network().into();
        prefix
    }
}

impl From<&Ipv6Net> for prefix {
    fn from(value: &Ipv6Net) -> Self {
        let mut prefix = prefix::default_ipv6();
        prefix.prefixlen = value.prefix_len();
        prefix.u.prefix6 = value.network().into();
        prefix
    }
}

impl From<&IpNet> for prefix {
    fn from(value: &IpNet) -> Self {
        match value {
            IpNet::V4(v4) => v4.into(),
            IpNet::V6(v6) => v6.into(),
        }
    }
}

impl TryFrom<&prefix> for IpNet {
    type Error = BindingsError;

    fn try_from(value: &prefix) -> Result<Self, Self::Error> {
        match value.family {
            FAMILY_INET => {
                let addr = Ipv4Addr::from(unsafe { value.u.prefix4 });
                Ok(IpNet::V4(Ipv4Net::new(addr, value.prefixlen)?))
            }
            FAMILY_INET6 => {
                let addr = Ipv6Addr::from(unsafe { value.u.prefix6 });
                Ok(IpNet::V6(Ipv6Net::new(addr, value.prefixlen)?))
            }
            family => {
                warn!("prefix with unknown address family {}", family);
                Err(BindingsError::UnknownAddressFamily(family))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_in_addr_byte_order() {
        let addr = in_addr::from(Ipv4Addr::new(192, 0, 2, 1));
        assert_eq!(addr.s_addr.to_ne_bytes(), [192, 0, 2, 1]);
        assert_eq!(Ipv4Addr::from(addr), Ipv4Addr::new(192, 0, 2, 1));
    }

    #[test]
    fn test_in6_addr() {
        let ip = Ipv6Addr::from_str("2001:db8::1").unwrap();
        let addr = in6_addr::from(ip);
        assert_eq!(addr.octets(), ip.octets());
        assert_eq!(Ipv6Addr::from(addr), ip);
        assert_eq!(addr, in6_addr::from_octets(ip.octets()));
    }

    #[test]
    fn test_host_addr() {
        let ip = IpAddr::from_str("10.1.2.3").unwrap();
        let addr = host_addr::from(ip);
        assert_eq!(addr.family, FAMILY_INET);
        assert_eq!(IpAddr::try_from(&addr).unwrap(), ip);

        let ip = IpAddr::from_str("2001:db8::42").unwrap();
        let addr = host_addr::from(ip);
        assert_eq!(addr.family, FAMILY_INET6);
        assert_eq!(IpAddr::try_from(addr).unwrap(), ip);

        let mut addr = host_addr::default_ipv4();
        addr.family = 0;
        assert_eq!(
            IpAddr::try_from(&addr),
            Err(BindingsError::UnknownAddressFamily(0))
        );
    }

    #[test]
    fn test_host_mask() {
        let mask = host_mask::new(FAMILY_INET, 24).unwrap();
        assert_eq!(unsafe { mask.mask.m4 }.to_ne_bytes(), [255, 255, 255, 0]);

        let mask = host_mask::new(FAMILY_INET6, 33).unwrap();
        let m6 = unsafe { mask.mask.m6 };
        assert_eq!(&m6[..5], &[255, 255, 255, 255, 128]);
        assert!(m6[5..].iter().all(|b| *b == 0));

        assert!(matches!(
            host_mask::new(FAMILY_INET, 33),
            Err(BindingsError::InvalidPrefixLength(_))
        ));
        assert_eq!(
            host_mask::new(7, 8).unwrap_err(),
            BindingsError::UnknownAddressFamily(7)
        );

        let addr = host_addr::from(IpAddr::from_str("192.0.2.77").unwrap());
        let mask = host_mask::new(FAMILY_INET, 24).unwrap();
        let net = addr.to_net(&mask).unwrap();
        assert_eq!(net.to_string(), "192.0.2.77/24");
        assert_eq!(net.trunc().to_string(), "192.0.2.0/24");

        let v6_mask = host_mask::new(FAMILY_INET6, 64).unwrap();
        assert_eq!(
            addr.to_net(&v6_mask).unwrap_err(),
            BindingsError::UnknownAddressFamily(FAMILY_INET6)
        );

        let mut unknown = addr;
        unknown.family = 0;
        let mut unknown_mask = mask;
        unknown_mask.family = 0;
        assert_eq!(
            unknown.to_net(&unknown_mask).unwrap_err(),
            BindingsError::UnknownAddressFamily(0)
        );
    }

    #[test]
    fn test_prefix() {
        let net = IpNet::from_str("192.168.10.0/23").unwrap();
        let p = prefix::from(&net);
        assert_eq!(p.family, FAMILY_INET);
        assert_eq!(p.prefixlen, 23);
        assert_eq!(IpNet::try_from(&p).unwrap(), net);

        // host bits are dropped on the way in
        let p = prefix::from(&IpNet::from_str("2001:db8::1/32").unwrap());
        assert_eq!(
            IpNet::try_from(&p).unwrap(),
            IpNet::from_str("2001:db8::/32").unwrap()
        );

        let mut p = prefix::default_ipv4();
        p.prefixlen = 40;
        assert!(matches!(
            IpNet::try_from(&p),
            Err(BindingsError::InvalidPrefixLength(_))
        ));
    }
}

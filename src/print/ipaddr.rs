use crate::convert::ipaddr::{FAMILY_INET, FAMILY_INET6};
use crate::sys::{host_addr, host_mask, in6_addr, in_addr};
use std::fmt::{Debug, Display, Formatter};
use std::net::{Ipv4Addr, Ipv6Addr};

impl Display for in_addr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&Ipv4Addr::from(self), f)
    }
}

impl Debug for in_addr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "in_addr({})", self)
    }
}

impl Display for in6_addr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&Ipv6Addr::from(self), f)
    }
}

impl Debug for in6_addr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "in6_addr({})", self)
    }
}

impl Debug for host_addr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("host_addr");
        debug.field("family", &self.family);

        // only the member selected by family was written
        match self.family {
            FAMILY_INET => debug.field("address.ipv4", unsafe { &self.address.ipv4 }),
            FAMILY_INET6 => debug.field("address.ipv6", unsafe { &self.address.ipv6 }),
            _ => debug.field("address", &format_args!("<unknown family>")),
        };

        debug.finish()
    }
}

impl Display for host_addr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.family {
            FAMILY_INET => Display::fmt(unsafe { &self.address.ipv4 }, f),
            FAMILY_INET6 => Display::fmt(unsafe { &self.address.ipv6 }, f),
            family => write!(f, "<unknown family {}>", family),
        }
    }
}

impl Debug for host_mask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("host_mask");
        debug.field("family", &self.family);
        debug.field("len", &self.len);

        match self.family {
            FAMILY_INET => {
                let m4 = unsafe { self.mask.m4 };
                debug.field("mask.m4", &Ipv4Addr::from(m4.to_ne_bytes()))
            }
            FAMILY_INET6 => debug.field("mask.m6", &Ipv6Addr::from(unsafe { self.mask.m6 })),
            _ => debug.field("mask", &format_args!("<unknown family>")),
        };

        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::IpAddr;

    #[test]
    fn test_display() {
        let addr = host_addr::from(IpAddr::from([192, 0, 2, 1]));
        assert_eq!(addr.to_string(), "192.0.2.1");
        assert_eq!(unsafe { addr.address.ipv4 }.to_string(), "192.0.2.1");

        let ip: Ipv6Addr = "2001:db8::1".parse().unwrap();
        let addr = host_addr::from(&ip);
        assert_eq!(addr.to_string(), "2001:db8::1");
        assert_eq!(in6_addr::from(ip).to_string(), "2001:db8::1");
    }

    #[test]
    fn test_debug() {
        let addr = host_addr::from(IpAddr::from([10, 0, 0, 1]));
        assert_eq!(
            format!("{:?}", addr),
            format!(
                "host_addr {{ family: {}, address.ipv4: in_addr(10.0.0.1) }}",
                FAMILY_INET
            )
        );

        let mask = host_mask::new(FAMILY_INET, 20).unwrap();
        assert!(format!("{:?}", mask).contains("mask.m4: 255.255.240.0"));
    }

    #[test]
    fn test_unknown_family() {
        let mut addr = host_addr::from(IpAddr::from([10, 0, 0, 1]));
        addr.family = 0;
        assert_eq!(addr.to_string(), "<unknown family 0>");
        assert!(format!("{:?}", addr).contains("address: <unknown family>"));
    }
}

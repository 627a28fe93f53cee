use crate::convert::ipaddr::{FAMILY_INET, FAMILY_INET6};
use crate::sys::prefix;
use std::fmt::{Debug, Display, Formatter};

impl Debug for prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("prefix");
        debug
            .field("family", &self.family)
            .field("prefixlen", &self.prefixlen);

        match self.family {
            FAMILY_INET => debug.field("u.prefix4", unsafe { &self.u.prefix4 }),
            FAMILY_INET6 => debug.field("u.prefix6", unsafe { &self.u.prefix6 }),
            // the first 8 bytes are always initialized, `val` covers them
            _ => debug.field("u.val", unsafe { &self.u.val }),
        };

        debug.finish()
    }
}

impl Display for prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.family {
            FAMILY_INET => write!(f, "{}/{}", unsafe { self.u.prefix4 }, self.prefixlen),
            FAMILY_INET6 => write!(f, "{}/{}", unsafe { self.u.prefix6 }, self.prefixlen),
            family => write!(f, "<unknown family {}>/{}", family, self.prefixlen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipnet::IpNet;
    use std::str::FromStr;

    #[test]
    fn test_prefix_display() {
        let p = prefix::from(&IpNet::from_str("203.0.113.0/24").unwrap());
        assert_eq!(p.to_string(), "203.0.113.0/24");

        let p = prefix::from(&IpNet::from_str("2001:db8:1::/48").unwrap());
        assert_eq!(p.to_string(), "2001:db8:1::/48");
        assert!(format!("{:?}", p).contains("u.prefix6: in6_addr(2001:db8:1::)"));
    }

    #[test]
    fn test_prefix_unknown_family() {
        let mut p = prefix::default_ipv4();
        p.family = 0;
        p.prefixlen = 8;
        assert_eq!(p.to_string(), "<unknown family 0>/8");
        assert!(format!("{:?}", p).contains("u.val: [0, 0, 0, 0, 0, 0, 0, 0]"));
    }
}

use crate::sys::bgp_attr;
use std::fmt::{Debug, Formatter};

impl Debug for bgp_attr {
    /// Pointers to the refcounted sub-structures are printed as addresses, pmacct may share
    /// or release them independently of the attribute.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("bgp_attr");

        debug.field("aspath", &self.aspath);
        debug.field("community", &self.community);
        debug.field("ecommunity", &self.ecommunity);
        debug.field("lcommunity", &self.lcommunity);
        debug.field("refcnt", &self.refcnt);
        debug.field("rpki_maxlen", &self.rpki_maxlen);
        debug.field("nexthop", &self.nexthop);
        debug.field("mp_nexthop", &self.mp_nexthop);
        debug.field("med", &self.med);
        debug.field("local_pref", &self.local_pref);
        debug.field("origin", &self.origin);
        debug.field("bitmap", &self.bitmap);

        debug.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DefaultZeroed;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_bgp_attr_debug() {
        let mut attr = bgp_attr::default_zeroed();
        attr.nexthop = Ipv4Addr::new(192, 0, 2, 254).into();
        attr.mp_nexthop = IpAddr::from([192, 0, 2, 254]).into();
        attr.local_pref = 200;

        let debug = format!("{:?}", attr);
        assert!(debug.starts_with("bgp_attr { aspath: 0x0,"));
        assert!(debug.contains("nexthop: in_addr(192.0.2.254)"));
        assert!(debug.contains("address.ipv4: in_addr(192.0.2.254)"));
        assert!(debug.contains("local_pref: 200"));
    }
}

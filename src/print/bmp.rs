use crate::sys::{bmp_chars, bmp_data, bmp_log_peer_up};
use std::fmt::{Debug, Formatter};

impl Debug for bmp_chars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("bmp_chars")
            .field("peer_type", &self.peer_type)
            .field("is_post", &self.is_post)
            .field("is_2b_asn", &self.is_2b_asn)
            .field("is_filtered", &self.is_filtered)
            .field("is_out", &self.is_out)
            .field("is_loc", &self.is_loc)
            .field("rd", &format_args!("{}", self.rd))
            .field("tlvs", &self.tlvs)
            .finish()
    }
}

impl Debug for bmp_data {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("bmp_data");
        debug.field("family", &self.family);
        debug.field("peer_ip", &self.peer_ip);
        debug.field("bgp_id", &self.bgp_id);
        debug.field("peer_asn", &self.peer_asn);
        debug.field("chars", &self.chars);
        debug.field("tstamp", &self.tstamp);
        debug.field("tstamp_arrival", &self.tstamp_arrival);
        debug.finish()
    }
}

impl Debug for bmp_log_peer_up {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("bmp_log_peer_up")
            .field("local_ip", &self.local_ip)
            .field("loc_port", &self.loc_port)
            .field("rem_port", &self.rem_port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RouteDistinguisher;
    use crate::sys::{host_addr, rd_t, timeval};
    use std::net::IpAddr;
    use std::ptr;

    #[test]
    fn test_bmp_data_debug() {
        let peer_ip = host_addr::from(IpAddr::from([192, 0, 2, 1]));
        let data = bmp_data {
            family: peer_ip.family,
            peer_ip,
            bgp_id: host_addr::from(IpAddr::from([10, 0, 0, 1])),
            peer_asn: 65001,
            chars: bmp_chars {
                peer_type: 1,
                is_post: 1,
                is_2b_asn: 0,
                is_filtered: 0,
                is_out: 0,
                is_loc: 0,
                rd: rd_t::from(RouteDistinguisher::As4Administrator {
                    asn4: 4200000000,
                    number: 5,
                }),
                tlvs: ptr::null_mut(),
            },
            tstamp: timeval::default(),
            tstamp_arrival: timeval::default(),
        };

        let debug = format!("{:?}", data);
        assert!(debug.contains("peer_asn: 65001"));
        assert!(debug.contains("rd: 4200000000:5"));
        assert!(debug.contains("address.ipv4: in_addr(10.0.0.1)"));
        assert!(debug.contains("tlvs: 0x0"));
    }

    #[test]
    fn test_peer_up_debug() {
        let up = bmp_log_peer_up {
            local_ip: host_addr::from(IpAddr::from([198, 51, 100, 1])),
            loc_port: 179,
            rem_port: 40000,
        };
        assert!(format!("{:?}", up).contains("loc_port: 179, rem_port: 40000"));
    }
}

use crate::error::BindingsError;
use crate::models::{BmpMsgType, PeerFlags, PeerType, RouteDistinguisher};
use crate::sys::{
    __suseconds_t, __time_t, bmp_chars, bmp_common_hdr, bmp_data, bmp_peer_hdr, bmp_peer_up_hdr,
    bmp_stats_cnt_hdr, bmp_stats_hdr, bmp_tlv_hdr, host_addr, rd_t, timeval, RD_ORIGIN_BMP,
    RD_TYPE_AS, RD_TYPE_AS4, RD_TYPE_IP, RD_TYPE_MASK,
};
use chrono::{DateTime, Utc};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::ptr;

/// Address carried in a 16 byte BMP address field. IPv4 addresses sit in the last four bytes.
fn address_from_words(words: [u32; 4], ipv6: bool) -> IpAddr {
    let mut octets = [0u8; 16];
    for (chunk, word) in octets.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_ne_bytes());
    }

    if ipv6 {
        IpAddr::V6(Ipv6Addr::from(octets))
    } else {
        IpAddr::V4(Ipv4Addr::new(octets[12], octets[13], octets[14], octets[15]))
    }
}

impl bmp_common_hdr {
    /// Total length of the message, common header included.
    pub fn message_len(&self) -> u32 {
        u32::from_be(self.len)
    }

    pub fn message_type(&self) -> Result<BmpMsgType, BindingsError> {
        Ok(BmpMsgType::try_from(self.type_)?)
    }
}

impl bmp_peer_hdr {
    pub fn peer_type(&self) -> Result<PeerType, BindingsError> {
        Ok(PeerType::try_from(self.type_)?)
    }

    pub fn peer_flags(&self) -> PeerFlags {
        PeerFlags::from_bits_truncate(self.flags)
    }

    fn is_loc_rib(&self) -> bool {
        self.type_ == u8::from(PeerType::LocRib)
    }

    /// Whether the peer address is IPv6. Loc-RIB peers reuse the V bit as the F flag.
    pub fn is_ipv6(&self) -> bool {
        !self.is_loc_rib() && self.peer_flags().contains(PeerFlags::ADDRESS_IPV6)
    }

    pub fn peer_address(&self) -> IpAddr {
        address_from_words(self.addr, self.is_ipv6())
    }

    pub fn peer_asn(&self) -> u32 {
        u32::from_be(self.asn)
    }

    pub fn bgp_id(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.bgp_id.to_ne_bytes())
    }

    /// Peer distinguisher read from its wire form.
    pub fn route_distinguisher(&self) -> Result<RouteDistinguisher, BindingsError> {
        let rd = self.rd;
        let rd_type = u16::from_be_bytes([rd[0], rd[1]]) & RD_TYPE_MASK;

        match rd_type {
            RD_TYPE_AS => Ok(RouteDistinguisher::As2Administrator {
                asn2: u16::from_be_bytes([rd[2], rd[3]]),
                number: u32::from_be_bytes([rd[4], rd[5], rd[6], rd[7]]),
            }),
            RD_TYPE_IP => Ok(RouteDistinguisher::Ipv4Administrator {
                ip: Ipv4Addr::new(rd[2], rd[3], rd[4], rd[5]),
                number: u16::from_be_bytes([rd[6], rd[7]]),
            }),
            RD_TYPE_AS4 => Ok(RouteDistinguisher::As4Administrator {
                asn4: u32::from_be_bytes([rd[2], rd[3], rd[4], rd[5]]),
                number: u16::from_be_bytes([rd[6], rd[7]]),
            }),
            rd_type => Err(BindingsError::UnknownRdType(rd_type)),
        }
    }

    fn raw_timestamp(&self) -> timeval {
        timeval {
            tv_sec: u32::from_be(self.tstamp_sec) as __time_t,
            tv_usec: u32::from_be(self.tstamp_usec) as __suseconds_t,
        }
    }

    pub fn timestamp(&self) -> Result<DateTime<Utc>, BindingsError> {
        DateTime::try_from(&self.raw_timestamp())
    }
}

impl bmp_peer_up_hdr {
    pub fn local_address(&self, ipv6: bool) -> IpAddr {
        address_from_words(self.loc_addr, ipv6)
    }

    pub fn local_port(&self) -> u16 {
        u16::from_be(self.loc_port)
    }

    pub fn remote_port(&self) -> u16 {
        u16::from_be(self.rem_port)
    }
}

impl bmp_tlv_hdr {
    pub fn tlv_type(&self) -> u16 {
        u16::from_be(self.type_)
    }

    pub fn tlv_len(&self) -> u16 {
        u16::from_be(self.len)
    }
}

impl bmp_stats_hdr {
    pub fn stats_count(&self) -> u32 {
        u32::from_be(self.count)
    }
}

impl bmp_stats_cnt_hdr {
    pub fn counter_type(&self) -> u16 {
        u16::from_be(self.type_)
    }

    pub fn counter_len(&self) -> u16 {
        u16::from_be(self.len)
    }
}

impl bmp_chars {
    pub fn peer_type(&self) -> Result<PeerType, BindingsError> {
        Ok(PeerType::try_from(self.peer_type)?)
    }

    pub fn route_distinguisher(&self) -> Result<RouteDistinguisher, BindingsError> {
        RouteDistinguisher::try_from(&self.rd)
    }
}

impl bmp_data {
    pub fn peer_ip(&self) -> Result<IpAddr, BindingsError> {
        IpAddr::try_from(&self.peer_ip)
    }

    /// Fills the per-peer data pmacct keeps for a message from its per-peer header, the way
    /// `bmp_peer_hdr_get_*` do. `tlvs` is left null and the arrival time is now.
    pub fn from_peer_hdr(hdr: &bmp_peer_hdr) -> Result<bmp_data, BindingsError> {
        let peer_type = hdr.peer_type()?;
        let flags = hdr.peer_flags();
        let is_loc = peer_type == PeerType::LocRib;
        let peer_ip = host_addr::from(&hdr.peer_address());

        let rd = match peer_type {
            PeerType::Rd => {
                let mut rd = rd_t::from(hdr.route_distinguisher()?);
                rd.set_origin(RD_ORIGIN_BMP);
                rd
            }
            _ => rd_t::default(),
        };

        Ok(bmp_data {
            family: peer_ip.family,
            peer_ip,
            bgp_id: host_addr::from(&hdr.bgp_id()),
            peer_asn: hdr.peer_asn(),
            chars: bmp_chars {
                peer_type: peer_type.into(),
                is_post: u8::from(!is_loc && flags.contains(PeerFlags::POST_POLICY)),
                is_2b_asn: u8::from(flags.contains(PeerFlags::AS_PATH_2_BYTE)),
                is_filtered: u8::from(is_loc && flags.contains(PeerFlags::LOC_RIB_FILTERED)),
                is_out: u8::from(!is_loc && flags.contains(PeerFlags::ADJ_RIB_OUT)),
                is_loc: u8::from(is_loc),
                rd,
                tlvs: ptr::null_mut(),
            },
            tstamp: hdr.raw_timestamp(),
            tstamp_arrival: timeval::now(),
        })
    }
}

use crate::error::BindingsError;
use crate::models::{RdOrigin, RouteDistinguisher};
use crate::sys::{
    rd_as, rd_as4, rd_ip, rd_t, RD_ORIGIN_MASK, RD_TYPE_AS, RD_TYPE_AS4, RD_TYPE_IP, RD_TYPE_MASK,
};
use log::warn;
use std::net::Ipv4Addr;
use zerocopy::transmute;

impl rd_t {
    /// RD type with the origin bits masked off, like `bgp_rd_type_get`.
    pub const fn rd_type(&self) -> u16 {
        self.type_ & RD_TYPE_MASK
    }

    /// Origin bits (`RD_ORIGIN_*`), like `bgp_rd_origin_get`.
    pub const fn origin(&self) -> u16 {
        self.type_ & RD_ORIGIN_MASK
    }

    /// Origin bits decoded as an [RdOrigin].
    pub fn rd_origin(&self) -> Result<RdOrigin, BindingsError> {
        Ok(RdOrigin::try_from(self.origin())?)
    }

    /// Replaces the origin bits, like `bgp_rd_origin_set`.
    pub fn set_origin(&mut self, origin: u16) {
        self.type_ = self.rd_type() | (origin & RD_ORIGIN_MASK);
    }
}

impl From<RouteDistinguisher> for rd_t {
    fn from(value: RouteDistinguisher) -> Self {
        match value {
            RouteDistinguisher::As2Administrator { asn2, number } => transmute!(rd_as {
                type_: RD_TYPE_AS,
                as_: asn2,
                val: number,
            }),
            RouteDistinguisher::Ipv4Administrator { ip, number } => transmute!(rd_ip {
                type_: RD_TYPE_IP,
                ip: ip.into(),
                val: number,
            }),
            RouteDistinguisher::As4Administrator { asn4, number } => transmute!(rd_as4 {
                type_: RD_TYPE_AS4,
                as_: asn4,
                val: number,
            }),
        }
    }
}

impl TryFrom<rd_t> for RouteDistinguisher {
    type Error = BindingsError;

    fn try_from(value: rd_t) -> Result<Self, Self::Error> {
        match value.rd_type() {
            RD_TYPE_AS => {
                let rd: rd_as = transmute!(value);
                Ok(RouteDistinguisher::As2Administrator {
                    asn2: rd.as_,
                    number: rd.val,
                })
            }
            RD_TYPE_IP => {
                let rd: rd_ip = transmute!(value);
                let ip = rd.ip;
                Ok(RouteDistinguisher::Ipv4Administrator {
                    ip: Ipv4Addr::from(ip),
                    number: rd.val,
                })
            }
            RD_TYPE_AS4 => {
                let rd: rd_as4 = transmute!(value);
                Ok(RouteDistinguisher::As4Administrator {
                    asn4: rd.as_,
                    number: rd.val,
                })
            }
            rd_type => {
                warn!("unknown route distinguisher type {:#06x}", value.type_);
                Err(BindingsError::UnknownRdType(rd_type))
            }
        }
    }
}

impl TryFrom<&rd_t> for RouteDistinguisher {
    type Error = BindingsError;

    fn try_from(value: &rd_t) -> Result<Self, Self::Error> {
        RouteDistinguisher::try_from(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sys::{
        RD_ORIGIN_BGP, RD_ORIGIN_BMP, RD_ORIGIN_FLOW, RD_ORIGIN_MAP, RD_ORIGIN_UNKNOWN,
    };
    use zerocopy::IntoBytes;

    #[test]
    fn test_rd_as2() {
        let rd = RouteDistinguisher::As2Administrator {
            asn2: 65000,
            number: 100,
        };
        let native = rd_t::from(rd);
        assert_eq!(native.type_, RD_TYPE_AS);
        assert_eq!(native.as_, 65000);
        assert_eq!(native.val, 100);
        assert_eq!(RouteDistinguisher::try_from(native).unwrap(), rd);
    }

    #[test]
    fn test_rd_ip_layout() {
        let rd = RouteDistinguisher::Ipv4Administrator {
            ip: Ipv4Addr::new(192, 0, 2, 1),
            number: 7,
        };
        let native = rd_t::from(rd);
        let bytes = native.as_bytes();

        // type, then the address in network byte order right after it
        assert_eq!(&bytes[0..2], &RD_TYPE_IP.to_ne_bytes());
        assert_eq!(&bytes[2..6], &[192, 0, 2, 1]);
        assert_eq!(&bytes[6..8], &7u16.to_ne_bytes());
        assert_eq!(RouteDistinguisher::try_from(&native).unwrap(), rd);
    }

    #[test]
    fn test_rd_as4() {
        let rd = RouteDistinguisher::As4Administrator {
            asn4: 4200000000,
            number: 12,
        };
        let native = rd_t::from(rd);
        assert_eq!(&native.as_bytes()[2..6], &4200000000u32.to_ne_bytes());
        assert_eq!(RouteDistinguisher::try_from(native).unwrap(), rd);
    }

    #[test]
    fn test_rd_origin() {
        let mut native = rd_t::from(RouteDistinguisher::As4Administrator {
            asn4: 65551,
            number: 1,
        });
        native.set_origin(RD_ORIGIN_BMP);
        assert_eq!(native.origin(), RD_ORIGIN_BMP);
        assert_eq!(native.rd_type(), RD_TYPE_AS4);
        assert!(RouteDistinguisher::try_from(native).is_ok());

        native.set_origin(RD_ORIGIN_FLOW);
        assert_eq!(native.type_, RD_TYPE_AS4 | RD_ORIGIN_FLOW);
    }

    #[test]
    fn test_rd_origin_map() {
        let mut native = rd_t::from(RouteDistinguisher::Ipv4Administrator {
            ip: Ipv4Addr::new(198, 51, 100, 1),
            number: 3,
        });
        native.set_origin(RD_ORIGIN_MAP);
        assert_eq!(native.origin(), RD_ORIGIN_MAP);
        assert_eq!(native.rd_type(), RD_TYPE_IP);
        assert_eq!(native.rd_origin().unwrap(), RdOrigin::Map);
        assert!(RouteDistinguisher::try_from(native).is_ok());
    }

    #[test]
    fn test_rd_origin_bits() {
        let origins = [
            (RD_ORIGIN_UNKNOWN, RdOrigin::Unknown),
            (RD_ORIGIN_MAP, RdOrigin::Map),
            (RD_ORIGIN_FLOW, RdOrigin::Flow),
            (RD_ORIGIN_BGP, RdOrigin::Bgp),
            (RD_ORIGIN_BMP, RdOrigin::Bmp),
        ];
        for (bits, origin) in origins {
            assert_eq!(bits & RD_TYPE_MASK, 0);
            assert_eq!(bits & RD_ORIGIN_MASK, bits);
            assert_eq!(u16::from(origin), bits);
        }
        assert_eq!(RD_ORIGIN_MASK | RD_TYPE_MASK, u16::MAX);
        assert_eq!(RD_ORIGIN_MASK & RD_TYPE_MASK, 0);
    }

    #[test]
    fn test_rd_unknown_type() {
        let native = rd_t {
            type_: 5 | RD_ORIGIN_BMP,
            as_: 0,
            val: 0,
        };
        assert_eq!(
            RouteDistinguisher::try_from(native),
            Err(BindingsError::UnknownRdType(5))
        );
    }
}

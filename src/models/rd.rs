use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt::{Display, Formatter};
use std::net::Ipv4Addr;

/// Route Distinguisher as defined in [RFC4364](https://datatracker.ietf.org/doc/html/rfc4364#section-4.2).
///
/// ## Display
///
/// Displayed as `ADMINISTRATOR:ASSIGNED_NUMBER`, e.g. `65000:100` or `192.0.2.1:7`.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteDistinguisher {
    /// Type 0: 2-octet AS administrator, 4-octet assigned number
    As2Administrator { asn2: u16, number: u32 },
    /// Type 1: IPv4 administrator, 2-octet assigned number
    Ipv4Administrator { ip: Ipv4Addr, number: u16 },
    /// Type 2: 4-octet AS administrator, 2-octet assigned number
    As4Administrator { asn4: u32, number: u16 },
}

impl RouteDistinguisher {
    /// Type field of the encoded route distinguisher.
    pub const fn rd_type(&self) -> u16 {
        match self {
            RouteDistinguisher::As2Administrator { .. } => 0,
            RouteDistinguisher::Ipv4Administrator { .. } => 1,
            RouteDistinguisher::As4Administrator { .. } => 2,
        }
    }
}

/// Where pmacct learnt a route distinguisher, kept in the top bits of its type field.
#[derive(Debug, PartialEq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum RdOrigin {
    Unknown = 0x0000,
    Map = 0x1000,
    Flow = 0x2000,
    Bgp = 0x4000,
    Bmp = 0x8000,
}

impl Display for RouteDistinguisher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteDistinguisher::As2Administrator { asn2, number } => {
                write!(f, "{}:{}", asn2, number)
            }
            RouteDistinguisher::Ipv4Administrator { ip, number } => write!(f, "{}:{}", ip, number),
            RouteDistinguisher::As4Administrator { asn4, number } => {
                write!(f, "{}:{}", asn4, number)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rd = RouteDistinguisher::As2Administrator {
            asn2: 65000,
            number: 100,
        };
        assert_eq!(rd.to_string(), "65000:100");
        assert_eq!(rd.rd_type(), 0);

        let rd = RouteDistinguisher::Ipv4Administrator {
            ip: Ipv4Addr::new(192, 0, 2, 1),
            number: 7,
        };
        assert_eq!(rd.to_string(), "192.0.2.1:7");
        assert_eq!(rd.rd_type(), 1);

        let rd = RouteDistinguisher::As4Administrator {
            asn4: 4200000000,
            number: 1,
        };
        assert_eq!(rd.to_string(), "4200000000:1");
        assert_eq!(rd.rd_type(), 2);
    }

    #[test]
    fn test_rd_origin() {
        assert_eq!(RdOrigin::try_from(0x1000u16).unwrap(), RdOrigin::Map);
        assert_eq!(u16::from(RdOrigin::Bmp), 0x8000);
        assert!(RdOrigin::try_from(0x3000u16).is_err());
    }
}

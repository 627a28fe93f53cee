use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// BMP message type.
///
/// ```text
///    o  Message Type (1 byte): This identifies the type of the BMP
///       message.  A BMP implementation MUST ignore unrecognized message
///       types upon receipt.
///
///       *  Type = 0: Route Monitoring
///       *  Type = 1: Statistics Report
///       *  Type = 2: Peer Down Notification
///       *  Type = 3: Peer Up Notification
///       *  Type = 4: Initiation Message
///       *  Type = 5: Termination Message
///       *  Type = 6: Route Mirroring Message
/// ```
#[derive(Debug, PartialEq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BmpMsgType {
    RouteMonitoring = 0,
    StatisticsReport = 1,
    PeerDownNotification = 2,
    PeerUpNotification = 3,
    InitiationMessage = 4,
    TerminationMessage = 5,
    RouteMirroringMessage = 6,
}

/// BMP peer type.
///
/// ```text
///    o  Peer Type (1 byte): Identifies the type of peer.  Currently, three
///       types of peers are identified:
///
///       *  Peer Type = 0: Global Instance Peer
///       *  Peer Type = 1: RD Instance Peer
///       *  Peer Type = 2: Local Instance Peer
///       *  Peer Type = 3: Loc-RIB Instance Peer (RFC 9069)
/// ```
#[derive(Debug, PartialEq, TryFromPrimitive, IntoPrimitive, Clone, Copy, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum PeerType {
    Global = 0,
    Rd = 1,
    Local = 2,
    LocRib = 3,
}

bitflags! {
    /// BMP per-peer header flags.
    ///
    /// ```text
    ///        0 1 2 3 4 5 6 7
    ///       +-+-+-+-+-+-+-+-+
    ///       |V|L|A|O| Resv  |
    ///       +-+-+-+-+-+-+-+-+
    /// ```
    ///
    /// For Loc-RIB peers the top bit is the F (filtered) flag instead of V.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PeerFlags: u8 {
        const ADDRESS_IPV6 = 0x80;
        const POST_POLICY = 0x40;
        const AS_PATH_2_BYTE = 0x20;
        const ADJ_RIB_OUT = 0x10;
    }
}

impl PeerFlags {
    /// F flag of Loc-RIB peers, sharing the bit of [PeerFlags::ADDRESS_IPV6].
    pub const LOC_RIB_FILTERED: PeerFlags = PeerFlags::ADDRESS_IPV6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msg_type() {
        assert_eq!(
            BmpMsgType::try_from(3u8).unwrap(),
            BmpMsgType::PeerUpNotification
        );
        assert!(BmpMsgType::try_from(7u8).is_err());
        assert_eq!(u8::from(BmpMsgType::RouteMirroringMessage), 6);
    }

    #[test]
    fn test_peer_type() {
        assert_eq!(PeerType::try_from(1u8).unwrap(), PeerType::Rd);
        assert_eq!(PeerType::try_from(3u8).unwrap(), PeerType::LocRib);
        assert!(PeerType::try_from(4u8).is_err());
    }

    #[test]
    fn test_peer_flags() {
        let flags = PeerFlags::from_bits_truncate(0xA0);
        assert!(flags.contains(PeerFlags::ADDRESS_IPV6));
        assert!(flags.contains(PeerFlags::AS_PATH_2_BYTE));
        assert!(!flags.contains(PeerFlags::POST_POLICY));

        // reserved bits are dropped
        assert_eq!(PeerFlags::from_bits_truncate(0x0F), PeerFlags::empty());
    }
}

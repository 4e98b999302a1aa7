//! Interface classes and the high-byte band layout of event identifiers.

use serde::{Deserialize, Serialize};

/// Bit position of the channel band inside a raw event identifier.
pub const CHANNEL_SHIFT: u32 = 24;

/// Selects the channel band of a raw event identifier.
pub const CHANNEL_MASK: u32 = 0xFF00_0000;

/// Selects the ordinal of a raw event identifier.
pub const ORDINAL_MASK: u32 = !CHANNEL_MASK;

/// Largest ordinal a channel can hold without touching the band bits.
pub const ORDINAL_MAX: u32 = ORDINAL_MASK;

/// Interface class an event belongs to.
///
/// Each channel owns one value of the top byte of the 32-bit identifier.
/// The band values are part of the published numeric contract and must
/// never be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Channel {
    /// Radio-access link between UE and gNB.
    #[serde(rename = "UU")]
    Uu = 0x1,
    /// NAS signaling between UE and AMF.
    #[serde(rename = "N1")]
    N1 = 0x2,
    /// NGAP signaling between gNB and AMF.
    #[serde(rename = "N2")]
    N2 = 0x3,
    /// User-plane link between gNB and UPF.
    #[serde(rename = "N3")]
    N3 = 0x4,
    /// Profile driver to simulated UE.
    #[serde(rename = "PROFILE-SIMUE")]
    ProfileSimUe = 0x5,
    /// Simulated UE to its real UE peer.
    #[serde(rename = "SIMUE-REALUE")]
    SimUeRealUe = 0x6,
    /// Coordination between internal modules.
    #[serde(rename = "COMMON")]
    Common = 0x7,
}

impl Channel {
    /// All channels in ascending band order.
    pub const ALL: [Channel; 7] = [
        Self::Uu,
        Self::N1,
        Self::N2,
        Self::N3,
        Self::ProfileSimUe,
        Self::SimUeRealUe,
        Self::Common,
    ];

    /// Returns the band value stored in the top byte.
    pub const fn band(self) -> u8 {
        self as u8
    }

    /// Returns the raw base value of this channel (band shifted into the top byte).
    pub const fn base(self) -> u32 {
        (self as u32) << CHANNEL_SHIFT
    }

    /// Maps a band value back to its channel.
    pub const fn from_band(band: u8) -> Option<Self> {
        match band {
            0x1 => Some(Self::Uu),
            0x2 => Some(Self::N1),
            0x3 => Some(Self::N2),
            0x4 => Some(Self::N3),
            0x5 => Some(Self::ProfileSimUe),
            0x6 => Some(Self::SimUeRealUe),
            0x7 => Some(Self::Common),
            _ => None,
        }
    }

    /// Recovers the channel of a raw identifier from its high byte alone.
    pub const fn of_raw(raw: u32) -> Option<Self> {
        Self::from_band((raw >> CHANNEL_SHIFT) as u8)
    }

    /// Returns the canonical label for this channel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uu => "UU",
            Self::N1 => "N1",
            Self::N2 => "N2",
            Self::N3 => "N3",
            Self::ProfileSimUe => "PROFILE-SIMUE",
            Self::SimUeRealUe => "SIMUE-REALUE",
            Self::Common => "COMMON",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Channel {
    type Err = ParseChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|channel| channel.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseChannelError(s.to_string()))
    }
}

/// Error returned when parsing an unknown channel label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel: {0}")]
pub struct ParseChannelError(pub String);

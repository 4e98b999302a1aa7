//! NAS message type mapping for the N1 channel.

use serde::{Deserialize, Serialize};

use crate::channel::Channel;
use crate::event::EventType;
use crate::registry;

/// Sub-ranges of the N1 ordinal space, aligned with the NAS message type
/// numbering of 3GPP TS 24.501 §9.7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum N1Subrange {
    /// 5GS mobility management messages (`0x40..0xC0`).
    #[serde(rename = "5GMM")]
    MobilityManagement,
    /// 5GS session management messages (`0xC0..0x100`).
    #[serde(rename = "5GSM")]
    SessionManagement,
}

impl N1Subrange {
    /// First ordinal of the sub-range. The base itself is never named.
    pub const fn base(self) -> u32 {
        match self {
            Self::MobilityManagement => 0x40,
            Self::SessionManagement => 0xC0,
        }
    }

    /// One past the last ordinal of the sub-range.
    pub const fn end(self) -> u32 {
        match self {
            Self::MobilityManagement => 0xC0,
            Self::SessionManagement => 0x100,
        }
    }

    /// Returns true if `ordinal` falls inside this sub-range.
    pub const fn contains(self, ordinal: u32) -> bool {
        ordinal >= self.base() && ordinal < self.end()
    }

    /// Classifies an N1 ordinal.
    pub const fn of_ordinal(ordinal: u32) -> Option<Self> {
        if Self::MobilityManagement.contains(ordinal) {
            Some(Self::MobilityManagement)
        } else if Self::SessionManagement.contains(ordinal) {
            Some(Self::SessionManagement)
        } else {
            None
        }
    }

    /// Returns the canonical label for this sub-range.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MobilityManagement => "5GMM",
            Self::SessionManagement => "5GSM",
        }
    }
}

impl std::fmt::Display for N1Subrange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EventType {
    /// Returns the NAS sub-range of an N1 event.
    pub const fn n1_subrange(self) -> Option<N1Subrange> {
        match self.channel() {
            Channel::N1 => N1Subrange::of_ordinal(self.ordinal()),
            _ => None,
        }
    }

    /// Returns the NAS message type code an N1 event mirrors.
    pub fn nas_message_type(self) -> Option<u8> {
        self.n1_subrange()?;
        u8::try_from(self.ordinal()).ok()
    }
}

/// Maps a received NAS message type code to its event.
///
/// No translation table is involved: the event is the N1 base plus the code.
/// Returns `None` for codes with no named event.
pub fn from_nas_message_type(code: u8) -> Option<EventType> {
    let id = EventType::new(Channel::N1, u32::from(code));
    if id.n1_subrange().is_some() && registry::is_defined(id) {
        Some(id)
    } else {
        None
    }
}

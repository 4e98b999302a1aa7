//! The `EventType` identifier and its scalar encoding.

use serde::{Deserialize, Serialize};

use crate::channel::{Channel, ORDINAL_MASK, ORDINAL_MAX};
use crate::error::RegistryError;

/// Identifier tagging every message exchanged inside the simulator.
///
/// Held as an explicit `(channel, ordinal)` pair. On the wire, in logs and in
/// serialized fixtures it is the single `u32` produced by [`EventType::to_raw`]:
/// the channel band in the top byte and the ordinal below it. Ordering
/// follows the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct EventType {
    channel: Channel,
    ordinal: u32,
}

impl EventType {
    /// Builds an identifier from its parts.
    ///
    /// Intended for constants: an ordinal above [`ORDINAL_MAX`] fails const
    /// evaluation. Use [`EventType::try_new`] for values known only at runtime.
    pub const fn new(channel: Channel, ordinal: u32) -> Self {
        assert!(ordinal <= ORDINAL_MAX, "ordinal overflows the channel band");
        Self { channel, ordinal }
    }

    /// Builds an identifier from its parts, rejecting oversized ordinals.
    pub const fn try_new(channel: Channel, ordinal: u32) -> Result<Self, RegistryError> {
        if ordinal > ORDINAL_MAX {
            return Err(RegistryError::OrdinalOutOfRange { channel, ordinal });
        }
        Ok(Self { channel, ordinal })
    }

    /// The base marker of a channel. Base markers are valid values but are
    /// never given a name.
    pub const fn base(channel: Channel) -> Self {
        Self {
            channel,
            ordinal: 0,
        }
    }

    /// Returns the channel this event belongs to.
    pub const fn channel(self) -> Channel {
        self.channel
    }

    /// Returns the offset of this event within its channel.
    pub const fn ordinal(self) -> u32 {
        self.ordinal
    }

    /// Returns true for channel base markers.
    pub const fn is_base(self) -> bool {
        self.ordinal == 0
    }

    /// Encodes the identifier into its published scalar form.
    pub const fn to_raw(self) -> u32 {
        self.channel.base() | self.ordinal
    }

    /// Decodes a scalar identifier.
    ///
    /// Only the high byte decides the channel; any ordinal is accepted.
    pub const fn from_raw(raw: u32) -> Result<Self, RegistryError> {
        match Channel::of_raw(raw) {
            Some(channel) => Ok(Self {
                channel,
                ordinal: raw & ORDINAL_MASK,
            }),
            None => Err(RegistryError::UnknownChannel { raw }),
        }
    }

    /// Parses `0x`-prefixed hex or plain decimal without decoding the band.
    pub fn parse_raw(s: &str) -> Result<u32, ParseEventTypeError> {
        let trimmed = s.trim();
        match trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            Some(hex) => u32::from_str_radix(hex, 16),
            None => trimmed.parse::<u32>(),
        }
        .map_err(|source| ParseEventTypeError::Number {
            input: s.to_string(),
            source,
        })
    }
}

impl From<EventType> for u32 {
    fn from(id: EventType) -> Self {
        id.to_raw()
    }
}

impl TryFrom<u32> for EventType {
    type Error = RegistryError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

/// Renders the raw value as zero-padded hex. Never consults the name table.
impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#010x}", self.to_raw())
    }
}

impl std::str::FromStr for EventType {
    type Err = ParseEventTypeError;

    /// Parses `0x`-prefixed hex or plain decimal, then decodes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_raw(Self::parse_raw(s)?)?)
    }
}

/// Error returned when parsing an event identifier from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseEventTypeError {
    /// The text is not a hex or decimal `u32`.
    #[error("not an event id: {input:?}: {source}")]
    Number {
        /// The rejected input.
        input: String,
        /// Underlying integer parse failure.
        source: std::num::ParseIntError,
    },

    /// The number parsed but does not decode.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

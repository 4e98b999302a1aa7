//! Error types for the event identifier registry.

use crate::channel::Channel;
use crate::check::CatalogViolation;
use crate::event::EventType;

/// Errors produced while decoding or resolving event identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The high byte of a raw value is not a known channel band.
    #[error("event id {raw:#010x} carries no known channel band")]
    UnknownChannel {
        /// The raw value that failed to decode.
        raw: u32,
    },

    /// An ordinal does not fit below the channel band.
    #[error("ordinal {ordinal:#x} overflows the {channel} channel band")]
    OrdinalOutOfRange {
        /// Channel the ordinal was meant for.
        channel: Channel,
        /// The rejected ordinal.
        ordinal: u32,
    },

    /// The identifier is well-formed but has no entry in the name table.
    #[error("invalid event id {0}: no entry in the name table")]
    Unnamed(EventType),

    /// The compiled-in name table failed its self-check.
    #[error("event name table is inconsistent ({} violation(s))", .0.len())]
    Inconsistent(Vec<CatalogViolation>),
}

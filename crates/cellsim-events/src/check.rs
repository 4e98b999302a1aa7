//! Consistency checks over the name table.

use std::collections::HashMap;

use crate::catalog::{CatalogEntry, CATALOG};
use crate::channel::Channel;
use crate::error::RegistryError;
use crate::event::EventType;

/// A defect found in a name table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogViolation {
    /// An entry does not sort strictly above its predecessor.
    #[error("{symbol} ({event}) does not sort above the preceding entry {previous}")]
    NotAscending {
        /// Constant name of the offending entry.
        symbol: &'static str,
        /// Its value.
        event: EventType,
        /// Value of the entry before it.
        previous: EventType,
    },

    /// A channel base marker was given a name.
    #[error("{symbol} names the {channel} base marker")]
    BaseMarkerNamed {
        /// Constant name of the offending entry.
        symbol: &'static str,
        /// Channel whose base was named.
        channel: Channel,
    },

    /// An entry has a blank display name.
    #[error("{symbol} ({event}) has an empty display name")]
    EmptyName {
        /// Constant name of the offending entry.
        symbol: &'static str,
        /// Its value.
        event: EventType,
    },

    /// Two entries share a display name.
    #[error("display name {name} is used by both {first} and {second}")]
    DuplicateName {
        /// The shared name.
        name: &'static str,
        /// First value carrying it.
        first: EventType,
        /// Second value carrying it.
        second: EventType,
    },

    /// Two entries share a constant name.
    #[error("constant {symbol} is declared for both {first} and {second}")]
    DuplicateSymbol {
        /// The shared constant name.
        symbol: &'static str,
        /// First value carrying it.
        first: EventType,
        /// Second value carrying it.
        second: EventType,
    },

    /// An N1 entry lies outside both NAS message type sub-ranges.
    #[error("{symbol} ({event}) lies outside the NAS message type ranges")]
    MisplacedNasCode {
        /// Constant name of the offending entry.
        symbol: &'static str,
        /// Its value.
        event: EventType,
    },
}

/// Checks `entries` and returns every defect found, in table order.
pub fn verify_catalog(entries: &[CatalogEntry]) -> Vec<CatalogViolation> {
    let mut violations = Vec::new();
    let mut names: HashMap<&'static str, EventType> = HashMap::with_capacity(entries.len());
    let mut symbols: HashMap<&'static str, EventType> = HashMap::with_capacity(entries.len());
    let mut previous: Option<EventType> = None;

    for entry in entries {
        let event = entry.event;

        if let Some(previous) = previous {
            if event <= previous {
                violations.push(CatalogViolation::NotAscending {
                    symbol: entry.symbol,
                    event,
                    previous,
                });
            }
        }
        previous = Some(event);

        if event.is_base() {
            violations.push(CatalogViolation::BaseMarkerNamed {
                symbol: entry.symbol,
                channel: event.channel(),
            });
        }

        if entry.name.trim().is_empty() {
            violations.push(CatalogViolation::EmptyName {
                symbol: entry.symbol,
                event,
            });
        } else if let Some(&first) = names.get(entry.name) {
            violations.push(CatalogViolation::DuplicateName {
                name: entry.name,
                first,
                second: event,
            });
        } else {
            names.insert(entry.name, event);
        }

        if let Some(&first) = symbols.get(entry.symbol) {
            violations.push(CatalogViolation::DuplicateSymbol {
                symbol: entry.symbol,
                first,
                second: event,
            });
        } else {
            symbols.insert(entry.symbol, event);
        }

        if event.channel() == Channel::N1 && !event.is_base() && event.n1_subrange().is_none() {
            violations.push(CatalogViolation::MisplacedNasCode {
                symbol: entry.symbol,
                event,
            });
        }
    }

    violations
}

/// Verifies the compiled-in table.
///
/// Returns the number of verified entries. Every violation is logged before
/// the error is returned.
pub fn self_check() -> Result<usize, RegistryError> {
    let violations = verify_catalog(CATALOG);
    if violations.is_empty() {
        tracing::info!(entries = CATALOG.len(), "event registry self-check passed");
        return Ok(CATALOG.len());
    }

    for violation in &violations {
        tracing::error!(%violation, "event registry inconsistency");
    }
    Err(RegistryError::Inconsistent(violations))
}

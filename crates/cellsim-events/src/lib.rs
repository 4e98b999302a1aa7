//! Event identifier registry for the cellular network-element simulator.
//!
//! Every message exchanged between the simulator's actors, and across the
//! radio, control-plane and user-plane interfaces it emulates, is tagged
//! with an [`EventType`]. This crate owns that identifier space and the
//! mapping from identifiers to display names used by logs and traces.
//!
//! # Identifier layout
//!
//! An identifier is a `u32`: the [`Channel`] band in the top byte and a
//! per-channel ordinal below it. Channels can never collide, and the channel
//! of any value is recovered from the high byte alone.
//!
//! | Band | Channel | Carries |
//! |------|---------|---------|
//! | `0x1` | `UU` | UE and gNB radio link |
//! | `0x2` | `N1` | NAS between UE and core (ordinals = NAS message types) |
//! | `0x3` | `N2` | gNB and AMF |
//! | `0x4` | `N3` | gNB and UPF user plane |
//! | `0x5` | `PROFILE-SIMUE` | profile driver to simulated UE |
//! | `0x6` | `SIMUE-REALUE` | simulated UE to real UE |
//! | `0x7` | `COMMON` | internal coordination |
//!
//! The numeric values are a published contract: persisted logs and test
//! fixtures record them raw.
//!
//! # Usage
//!
//! ```rust
//! use cellsim_events::{name_of, EventType};
//!
//! assert_eq!(name_of(EventType::REG_REQUEST), Ok("REGESTRATION-REQUEST-EVENT"));
//! assert_eq!(EventType::PDU_SESS_EST_REQUEST.to_raw(), 0x0200_00C1);
//! ```

mod catalog;
mod channel;
mod check;
mod error;
mod event;
mod nas;
mod registry;

pub use catalog::{channel_entries, entries, find_by_name, CatalogEntry, CATALOG};
pub use channel::{
    Channel, ParseChannelError, CHANNEL_MASK, CHANNEL_SHIFT, ORDINAL_MASK, ORDINAL_MAX,
};
pub use check::{self_check, verify_catalog, CatalogViolation};
pub use error::RegistryError;
pub use event::{EventType, ParseEventTypeError};
pub use nas::{from_nas_message_type, N1Subrange};
pub use registry::{entry, is_defined, name_of, name_of_raw, name_or_exit, raw_name_or_exit};

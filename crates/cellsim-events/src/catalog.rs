//! The identifier space: every named event and its display name.
//!
//! Each line of the catalog below declares one constant on [`EventType`] and
//! its row in the name table at the same time, so a constant cannot exist
//! without a name. Rows are kept in ascending numeric order; the table is
//! searched by bisection and a const assertion rejects a build that breaks
//! the order.
//!
//! Values are published. Add new events with a fresh ordinal; never
//! renumber or reuse one. Display names are matched by log tooling and keep
//! their historical spelling (`REGESTRATION-*`).
//!
//! # N1 ordinals
//!
//! N1 ordinals equal the NAS message type codes of 3GPP TS 24.501 §9.7, so a
//! received NAS message maps to its event by adding the N1 base. See
//! [`crate::nas`].

use serde::Serialize;

use crate::channel::Channel;
use crate::event::EventType;

/// One row of the name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// The identifier.
    pub event: EventType,
    /// The Rust constant name, e.g. `REG_REQUEST`.
    pub symbol: &'static str,
    /// The display name written to logs.
    pub name: &'static str,
}

/// Declares event constants together with their name table rows.
macro_rules! event_catalog {
    (
        $(
            $(#[$meta:meta])*
            $symbol:ident = ($channel:ident, $ordinal:expr) => $name:literal;
        )*
    ) => {
        impl EventType {
            $(
                $(#[$meta])*
                pub const $symbol: EventType = EventType::new(Channel::$channel, $ordinal);
            )*
        }

        /// Every named event in ascending numeric order.
        pub const CATALOG: &[CatalogEntry] = &[
            $(
                CatalogEntry {
                    event: EventType::$symbol,
                    symbol: stringify!($symbol),
                    name: $name,
                },
            )*
        ];
    };
}

event_catalog! {
    // UE <-> gNB radio link.
    CONNECTION_REQUEST = (Uu, 0x01) => "CONNECTION-REQUEST-EVENT";
    CONNECTION_RELEASE_REQUEST = (Uu, 0x02) => "CONNECTION-RELEASE-REQUEST-EVENT";
    UL_INFO_TRANSFER = (Uu, 0x03) => "UL-INFO-TRANSFER-EVENT";
    DL_INFO_TRANSFER = (Uu, 0x04) => "DL-INFO-TRANSFER-EVENT";
    UL_UE_DATA_TRANSFER = (Uu, 0x05) => "UL-UE-DATA-TRANSFER-EVENT";
    DL_UE_DATA_TRANSFER = (Uu, 0x06) => "DL-UE-DATA-TRANSFER-EVENT";
    END_MARKER = (Uu, 0x07) => "END-MARKER-EVENT";
    DATA_BEARER_SETUP_REQUEST = (Uu, 0x08) => "DATA-BEARER-SETUP-REQUEST-EVENT";
    DATA_BEARER_SETUP_RESPONSE = (Uu, 0x09) => "DATA-BEARER-SETUP-RESPONSE-EVENT";
    /// gNB acknowledges the release of a UE context to the simulated UE.
    CTX_RELEASE_ACKNOWLEDGEMENT = (Uu, 0x0A) => "CONTEXT-RELEASE-ACKNOWLEDGEMENT-EVENT";
    /// Simulated UE asks the gNB to start a RAN connection release, which in
    /// turn triggers a gNB-initiated UE Context Release Request.
    TRIGGER_AN_RELEASE = (Uu, 0x0B) => "TRIGGER-AN-RELEASE-EVENT";

    // UE <-> AMF, 5GS mobility management.
    REG_REQUEST = (N1, 0x41) => "REGESTRATION-REQUEST-EVENT";
    REG_ACCEPT = (N1, 0x42) => "REGESTRATION-ACCEPT-EVENT";
    REG_COMPLETE = (N1, 0x43) => "REGESTRATION-COMPLETE-EVENT";
    REG_REJECT = (N1, 0x44) => "REGESTRATION-REJECT-EVENT";
    DEREG_REQUEST_UE_ORIG = (N1, 0x45) => "DEREGISTRATION-REQUEST-UE-ORIG-EVENT";
    DEREG_ACCEPT_UE_ORIG = (N1, 0x46) => "DEREGISTRATION-ACCEPT-UE-ORIG-EVENT";
    DEREG_REQUEST_UE_TERM = (N1, 0x47) => "DEREGISTRATION-REQUEST-UE-TERM-EVENT";
    DEREG_ACCEPT_UE_TERM = (N1, 0x48) => "DEREGISTRATION-ACCEPT-UE-TERM-EVENT";
    SERVICE_REQUEST = (N1, 0x4C) => "SERVICE-REQUEST-EVENT";
    SERVICE_REJECT = (N1, 0x4D) => "SERVICE-REJECT-EVENT";
    SERVICE_ACCEPT = (N1, 0x4E) => "SERVICE-ACCEPT-EVENT";
    AUTH_REQUEST = (N1, 0x56) => "AUTHENTICATION-REQUEST-EVENT";
    AUTH_RESPONSE = (N1, 0x57) => "AUTHENTICATION-RESPONSE-EVENT";
    AUTH_REJECT = (N1, 0x58) => "AUTHENTICATION-REJECT-EVENT";
    AUTH_FAILURE = (N1, 0x59) => "AUTHENTICATION-FAILURE-EVENT";
    AUTH_RESULT = (N1, 0x5A) => "AUTHENTICATION-RESULT-EVENT";
    ID_REQUEST = (N1, 0x5B) => "ID-REQUEST-EVENT";
    ID_RESPONSE = (N1, 0x5C) => "ID-RESPONSE-EVENT";
    SEC_MOD_COMMAND = (N1, 0x5D) => "SECURITY-MODE-COMMAND-EVENT";
    SEC_MOD_COMPLETE = (N1, 0x5E) => "SECURITY-MODE-COMPLETE-EVENT";
    SEC_MOD_REJECT = (N1, 0x5F) => "SECURITY-MODE-REJECT-EVENT";
    FIVE_GMM_STATUS = (N1, 0x64) => "FIVE-GMM-STATUS-EVENT";
    NOTIFICATION = (N1, 0x65) => "NOTIFICATION-EVENT";
    NOTIFICATION_RESPONSE = (N1, 0x66) => "NOTIFICATION-RESPONSE-EVENT";
    UL_NAS_TRANSPORT = (N1, 0x67) => "UL-NAS-TRANSPORT-EVENT";
    DL_NAS_TRANSPORT = (N1, 0x68) => "DL-NAS-TRANSPORT-EVENT";

    // UE <-> SMF over N1, 5GS session management.
    PDU_SESS_EST_REQUEST = (N1, 0xC1) => "PDU-SESSION-ESTABLISHMENT-REQUEST-EVENT";
    PDU_SESS_EST_ACCEPT = (N1, 0xC2) => "PDU-SESSION-ESTABLISHMENT-ACCEPT-EVENT";
    PDU_SESS_EST_REJECT = (N1, 0xC3) => "PDU-SESSION-ESTABLISHMENT-REJECT-EVENT";
    PDU_SESS_AUTH_COMMAND = (N1, 0xC5) => "PDU-SESSION-AUTHENTICATION-COMMAND-EVENT";
    PDU_SESS_AUTH_COMPLETE = (N1, 0xC6) => "PDU-SESSION-AUTHENTICATION-COMPLETE-EVENT";
    PDU_SESS_AUTH_RESULT = (N1, 0xC7) => "PDU-SESSION-AUTHENTICATION-RESULT-EVENT";
    PDU_SESS_MOD_REQUEST = (N1, 0xC9) => "PDU-SESSION-MODIFICATION-REQUEST-EVENT";
    PDU_SESS_MOD_REJECT = (N1, 0xCA) => "PDU-SESSION-MODIFICATION-REJECT-EVENT";
    PDU_SESS_MOD_COMMAND = (N1, 0xCB) => "PDU-SESSION-MODIFICATION-COMMAND-EVENT";
    PDU_SESS_MOD_COMPLETE = (N1, 0xCC) => "PDU-SESSION-MODIFICATION-COMPLETE-EVENT";
    PDU_SESS_MOD_CMD_REJECT = (N1, 0xCD) => "PDU-SESSION-MODIFICATION-COMMAND-REJECT-EVENT";
    PDU_SESS_REL_REQUEST = (N1, 0xD1) => "PDU-SESSION-RELEASE-REQUEST-EVENT";
    PDU_SESS_REL_REJECT = (N1, 0xD2) => "PDU-SESSION-RELEASE-REJECT-EVENT";
    PDU_SESS_REL_COMMAND = (N1, 0xD3) => "PDU-SESSION-RELEASE-COMMAND-EVENT";
    PDU_SESS_REL_COMPLETE = (N1, 0xD4) => "PDU-SESSION-RELEASE-COMPLETE-EVENT";
    FIVEGSM_STATUS = (N1, 0xD6) => "FIVEGSM-STATUS-EVENT";

    // gNB <-> AMF.
    DOWNLINK_NAS_TRANSPORT = (N2, 0x01) => "DOWNLINK-NAS-TRANSPORT-EVENT";
    INITIAL_CTX_SETUP_REQUEST = (N2, 0x02) => "INITIAL-CONTEXT-SETUP-REQUEST-EVENT";
    PDU_SESS_RESOURCE_SETUP_REQUEST = (N2, 0x03) => "PDU-SESSION-RESOURCE-SETUP-REQUEST-EVENT";
    UE_CTX_RELEASE_COMMAND = (N2, 0x04) => "UE-CONTEXT-RELEASE-COMMAND-EVENT";

    // gNB <-> UPF.
    DL_UE_DATA_TRANSPORT = (N3, 0x01) => "DL-UE-DATA-TRANSPORT-EVENT";

    PROFILE_START = (ProfileSimUe, 0x01) => "PROFILE-START-EVENT";
    PROFILE_PASS = (ProfileSimUe, 0x02) => "PROFILE-PASS-EVENT";
    PROFILE_FAIL = (ProfileSimUe, 0x03) => "PROFILE-FAIL-EVENT";

    DATA_PKT_GEN_REQUEST = (SimUeRealUe, 0x01) => "DATA-PACKET-GENERATION-REQUEST-EVENT";
    DATA_PKT_GEN_SUCCESS = (SimUeRealUe, 0x02) => "DATA-PACKET-SUCCESS-EVENT";
    DATA_PKT_GEN_FAILURE = (SimUeRealUe, 0x03) => "DATA-PACKET-FAILURE-EVENT";

    INIT = (Common, 0x01) => "INIT-EVENT";
    QUIT = (Common, 0x02) => "QUIT-EVENT";
    ERROR = (Common, 0x03) => "ERROR-EVENT";
}

const fn is_strictly_ascending_without_bases(entries: &[CatalogEntry]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        if entries[i].event.is_base() {
            return false;
        }
        if i > 0 && entries[i - 1].event.to_raw() >= entries[i].event.to_raw() {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(
    is_strictly_ascending_without_bases(CATALOG),
    "event catalog must be strictly ascending and must not name a base marker"
);

/// Returns the full name table.
pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// Returns the contiguous slice of the table belonging to `channel`.
pub fn channel_entries(channel: Channel) -> &'static [CatalogEntry] {
    let start = CATALOG.partition_point(|entry| entry.event.channel() < channel);
    let end = CATALOG.partition_point(|entry| entry.event.channel() <= channel);
    &CATALOG[start..end]
}

/// Looks up a row by display name or by constant name.
pub fn find_by_name(name: &str) -> Option<&'static CatalogEntry> {
    let name = name.trim();
    CATALOG
        .iter()
        .find(|entry| entry.name == name || entry.symbol == name)
}

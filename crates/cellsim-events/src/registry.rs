//! Name resolution over the compiled-in catalog.
//!
//! Lookups are a bisection over a `'static` table: no locks, no allocation,
//! safe from any number of threads. [`name_of`] reports a missing id as an
//! error; [`name_or_exit`] is for callers that treat the catalog as a closed
//! contract and terminates the process instead.

use crate::catalog::{CatalogEntry, CATALOG};
use crate::error::RegistryError;
use crate::event::EventType;

/// Returns the table row for `id`, if it is named.
pub fn entry(id: EventType) -> Option<&'static CatalogEntry> {
    CATALOG
        .binary_search_by_key(&id, |entry| entry.event)
        .ok()
        .and_then(|index| CATALOG.get(index))
}

/// Returns true if `id` is a named event.
pub fn is_defined(id: EventType) -> bool {
    entry(id).is_some()
}

/// Resolves `id` to its display name.
///
/// Base markers and unassigned ordinals are [`RegistryError::Unnamed`].
pub fn name_of(id: EventType) -> Result<&'static str, RegistryError> {
    entry(id)
        .map(|entry| entry.name)
        .ok_or(RegistryError::Unnamed(id))
}

/// Decodes a raw identifier and resolves it to its display name.
pub fn name_of_raw(raw: u32) -> Result<&'static str, RegistryError> {
    name_of(EventType::from_raw(raw)?)
}

/// Resolves `id`, terminating the process if it is not named.
///
/// An unnamed id here can only come from a defect (a constant without a
/// table row, a corrupted channel computation, an uninitialised value), so
/// the offending value is reported and the process exits with status 1.
pub fn name_or_exit(id: EventType) -> &'static str {
    match name_of(id) {
        Ok(name) => name,
        Err(err) => terminate(id.to_raw(), &err),
    }
}

/// Raw-value form of [`name_or_exit`]. Undecodable values are fatal too.
pub fn raw_name_or_exit(raw: u32) -> &'static str {
    match name_of_raw(raw) {
        Ok(name) => name,
        Err(err) => terminate(raw, &err),
    }
}

fn terminate(raw: u32, err: &RegistryError) -> ! {
    let event_id = format!("{raw:#010x}");
    // The report must survive a filter that drops this callsite.
    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(event_id = %event_id, error = %err, "invalid event id, terminating");
    } else {
        eprintln!("fatal: invalid event id {event_id}: {err}");
    }
    std::process::exit(1)
}

//! Command implementations. Each returns the text to print on stdout.

use cellsim_events::{self as events, Channel, EventType, N1Subrange};
use serde::Serialize;

use crate::cli::Command;
use crate::config::OutputFormat;
use crate::EvtctlError;

/// One event as shown by `list`, `decode` and `lookup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow {
    /// Raw value as zero-padded hex.
    pub id: String,
    /// Raw value.
    pub raw: u32,
    /// Channel decoded from the high byte.
    pub channel: Channel,
    /// Offset within the channel.
    pub ordinal: u32,
    /// Constant name, if the id is named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    /// Display name, if the id is named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'static str>,
    /// NAS sub-range, for N1 ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nas_subrange: Option<N1Subrange>,
    /// NAS message type code, for N1 ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nas_message_type: Option<u8>,
}

impl EventRow {
    /// Describes `id` without requiring it to be named.
    pub fn describe(id: EventType) -> Self {
        let entry = events::entry(id);
        Self {
            id: id.to_string(),
            raw: id.to_raw(),
            channel: id.channel(),
            ordinal: id.ordinal(),
            symbol: entry.map(|entry| entry.symbol),
            name: entry.map(|entry| entry.name),
            nas_subrange: id.n1_subrange(),
            nas_message_type: id.nas_message_type(),
        }
    }

    fn text_line(&self) -> String {
        let nas = match (self.nas_subrange, self.nas_message_type) {
            (Some(subrange), Some(code)) => format!("{subrange}:{code:#04x}"),
            _ => "-".to_string(),
        };
        format!(
            "{:<10}  {:<13}  {:>#8x}  {:<9}  {:<32}  {}",
            self.id,
            self.channel.as_str(),
            self.ordinal,
            nas,
            self.symbol.unwrap_or("-"),
            self.name.unwrap_or("-"),
        )
    }
}

/// A resolved id as printed by `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    /// Raw value as zero-padded hex.
    pub id: String,
    /// Display name.
    pub name: &'static str,
}

/// Runs `command` and returns its output.
pub fn run(command: &Command, format: OutputFormat) -> Result<String, EvtctlError> {
    match command {
        Command::List { channel } => list(*channel, format),
        Command::Resolve { ids } => resolve(ids, format),
        Command::Decode { ids } => decode(ids, format),
        Command::Lookup { name } => lookup(name, format),
        Command::Check => check(format),
    }
}

/// Lists every named event, optionally restricted to one channel.
pub fn list(channel: Option<Channel>, format: OutputFormat) -> Result<String, EvtctlError> {
    let entries = match channel {
        Some(channel) => events::channel_entries(channel),
        None => events::entries(),
    };
    let rows: Vec<EventRow> = entries
        .iter()
        .map(|entry| EventRow::describe(entry.event))
        .collect();
    tracing::debug!(rows = rows.len(), "listing events");
    render_rows(&rows, format)
}

/// Resolves each id to its display name.
///
/// Every id is parsed before any is resolved. Resolution follows the
/// registry's fatal policy: the first unnamed or undecodable id terminates
/// the process with status 1.
pub fn resolve(ids: &[String], format: OutputFormat) -> Result<String, EvtctlError> {
    let raws = ids
        .iter()
        .map(|id| EventType::parse_raw(id))
        .collect::<Result<Vec<_>, _>>()?;

    let resolved: Vec<Resolved> = raws
        .into_iter()
        .map(|raw| Resolved {
            id: format!("{raw:#010x}"),
            name: events::raw_name_or_exit(raw),
        })
        .collect();

    match format {
        OutputFormat::Text => Ok(resolved
            .iter()
            .map(|item| format!("{}  {}\n", item.id, item.name))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&resolved)?)),
    }
}

/// Splits each id into channel and ordinal.
pub fn decode(ids: &[String], format: OutputFormat) -> Result<String, EvtctlError> {
    let rows = ids
        .iter()
        .map(|id| id.parse::<EventType>().map(EventRow::describe))
        .collect::<Result<Vec<_>, _>>()?;
    render_rows(&rows, format)
}

/// Finds an event by display name or constant name.
pub fn lookup(name: &str, format: OutputFormat) -> Result<String, EvtctlError> {
    let entry =
        events::find_by_name(name).ok_or_else(|| EvtctlError::UnknownName(name.to_string()))?;
    let row = EventRow::describe(entry.event);
    match format {
        OutputFormat::Text => Ok(format!("{}\n", row.text_line())),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&row)?)),
    }
}

/// Runs the registry self-check.
pub fn check(format: OutputFormat) -> Result<String, EvtctlError> {
    let count = events::self_check()?;
    match format {
        OutputFormat::Text => Ok(format!("event registry consistent: {count} entries\n")),
        OutputFormat::Json => Ok(format!(
            "{}\n",
            serde_json::to_string_pretty(&serde_json::json!({
                "consistent": true,
                "entries": count,
            }))?
        )),
    }
}

fn render_rows(rows: &[EventRow], format: OutputFormat) -> Result<String, EvtctlError> {
    match format {
        OutputFormat::Text => Ok(rows
            .iter()
            .map(|row| format!("{}\n", row.text_line()))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(rows)?)),
    }
}

//! Event Viewer system log

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum EventLevel {
    Error,
    Warning,
    Information,
}

impl EventLevel {
    /// Icon sprite name for the level column
    pub fn icon(&self) -> &'static str {
        match self {
            EventLevel::Error => "error",
            EventLevel::Warning => "warning",
            EventLevel::Information => "info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EventEntry {
    pub level: EventLevel,
    pub source: &'static str,
    pub id: u32,
    pub message: &'static str,
}

const fn entry(
    level: EventLevel,
    source: &'static str,
    id: u32,
    message: &'static str,
) -> EventEntry {
    EventEntry {
        level,
        source,
        id,
        message,
    }
}

/// Windows Logs > System
pub const EVENT_LOG: [EventEntry; 6] = [
    entry(
        EventLevel::Error,
        "Kernel-Power",
        41,
        "The system has rebooted without cleanly shutting down first.",
    ),
    entry(
        EventLevel::Warning,
        "DNS-Client",
        1014,
        "Name resolution for the name _ldap._tcp.paskanet2.local timed out.",
    ),
    entry(
        EventLevel::Information,
        "Service Control Manager",
        7036,
        "The Print Spooler service entered the running state.",
    ),
    entry(
        EventLevel::Information,
        "P2-Agent",
        100,
        "Successfully polled server PN2-WEB-01.",
    ),
    entry(EventLevel::Error, "P2-Agent", 205, "Failed to connect to PN2-DB-01."),
    entry(
        EventLevel::Warning,
        "Disk",
        153,
        "The IO operation at logical block address ... was retried.",
    ),
];

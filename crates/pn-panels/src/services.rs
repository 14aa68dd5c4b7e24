//! Services panel
//!
//! Start and Stop flip a status immediately. Restart stops the service and
//! schedules a start half a second later, which `tick` applies.

use serde::Serialize;
use tracing::debug;

use crate::error::{PanelError, PanelResult};

/// Delay between the stop and start halves of a restart
pub const RESTART_DELAY_MS: f64 = 500.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ServiceStatus {
    Running,
    Stopped,
}

/// Toolbar buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceAction {
    Start,
    Stop,
    Restart,
}

impl ServiceAction {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceAction::Start => "start",
            ServiceAction::Stop => "stop",
            ServiceAction::Restart => "restart",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Service {
    pub name: &'static str,
    pub status: ServiceStatus,
    pub description: &'static str,
}

/// A restart waiting for its start half
#[derive(Clone, Debug, PartialEq)]
struct PendingStart {
    name: &'static str,
    due_ms: f64,
}

#[derive(Clone, Debug)]
pub struct ServiceList {
    services: Vec<Service>,
    selected: Option<&'static str>,
    pending: Vec<PendingStart>,
}

impl Default for ServiceList {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceList {
    pub fn new() -> Self {
        use ServiceStatus::{Running, Stopped};
        let service = |name, status, description| Service {
            name,
            status,
            description,
        };
        Self {
            services: vec![
                service("Print Spooler", Running, "Manages all print jobs."),
                service(
                    "Windows Update",
                    Stopped,
                    "Enables the detection, download, and installation of updates.",
                ),
                service("Paskanet II Agent", Running, "Monitors Paskanet II services."),
                service("Remote Desktop Service", Running, "Allows users to connect remotely."),
                service("Windows Defender", Running, "Protects against malware."),
                service("DNS Client", Running, "Resolves and caches DNS names."),
                service("DHCP Client", Stopped, "Manages network configuration."),
            ],
            selected: None,
            pending: Vec::new(),
        }
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn get(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Highlight a row
    pub fn select(&mut self, name: &str) -> PanelResult<()> {
        let service = self
            .get(name)
            .ok_or_else(|| PanelError::UnknownService(name.to_string()))?;
        self.selected = Some(service.name);
        Ok(())
    }

    pub fn selected(&self) -> Option<&Service> {
        self.selected.and_then(|name| self.get(name))
    }

    /// Whether a toolbar button is enabled for the current selection
    pub fn is_enabled(&self, action: ServiceAction) -> bool {
        match (self.selected(), action) {
            (None, _) => false,
            (Some(s), ServiceAction::Start) => s.status != ServiceStatus::Running,
            (Some(s), ServiceAction::Stop) => s.status != ServiceStatus::Stopped,
            (Some(_), ServiceAction::Restart) => true,
        }
    }

    /// Press a toolbar button for the selected service
    pub fn apply_selected(&mut self, action: ServiceAction, now_ms: f64) -> PanelResult<()> {
        if !self.is_enabled(action) {
            return Err(PanelError::ActionUnavailable {
                action: action.label(),
                reason: match self.selected {
                    None => "no service selected",
                    Some(_) => "service is already in that state",
                },
            });
        }
        match self.selected {
            Some(name) => self.apply(name, action, now_ms),
            None => Ok(()),
        }
    }

    /// Apply an action to a service by name
    pub fn apply(&mut self, name: &str, action: ServiceAction, now_ms: f64) -> PanelResult<()> {
        let service = self
            .services
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| PanelError::UnknownService(name.to_string()))?;

        debug!("Service {}: {}", service.name, action.label());
        match action {
            ServiceAction::Start => service.status = ServiceStatus::Running,
            ServiceAction::Stop => service.status = ServiceStatus::Stopped,
            ServiceAction::Restart => {
                service.status = ServiceStatus::Stopped;
                let name = service.name;
                self.pending.push(PendingStart {
                    name,
                    due_ms: now_ms + RESTART_DELAY_MS,
                });
            }
        }
        Ok(())
    }

    /// Complete restarts whose delay has elapsed
    pub fn tick(&mut self, now_ms: f64) {
        let (due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|p| p.due_ms <= now_ms);
        self.pending = waiting;
        for start in due {
            if let Some(service) = self.services.iter_mut().find(|s| s.name == start.name) {
                service.status = ServiceStatus::Running;
            }
        }
    }

    /// Whether a restart is still waiting to start its service
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

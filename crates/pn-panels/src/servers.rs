//! Server Manager fleet dashboard

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::feed::MetricFeed;

/// Server Manager tick
pub const FLEET_INTERVAL_MS: f64 = 1500.0;

/// Installed memory per server, in GB
pub const SERVER_MEMORY_GB: f32 = 32.0;

/// Fixed lines of the System log tab
pub const SERVER_LOG: [&str; 4] = [
    "[Info] Server startup sequence initiated.",
    "[Info] Paskanet II Agent v2.1.0 connected.",
    "[Warning] High memory usage detected: 92%",
    "[Error] Failed to connect to database replica on PN2-DB-02.",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Online,
    Warning,
    Offline,
}

/// Sidebar cluster a server is listed under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ServerGroup {
    Web,
    Database,
    Other,
}

impl ServerGroup {
    /// Sidebar order
    pub const ALL: [ServerGroup; 3] = [
        ServerGroup::Web,
        ServerGroup::Database,
        ServerGroup::Other,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            ServerGroup::Web => "Web Servers",
            ServerGroup::Database => "Database Servers",
            ServerGroup::Other => "Other Servers",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Server {
    pub name: &'static str,
    pub ip: &'static str,
    pub status: ServerStatus,
    /// Percent
    pub cpu: i32,
    /// Percent
    pub mem: i32,
    /// Percent
    pub disk: i32,
    /// Mbps sent
    pub net_up: f32,
    /// Mbps received
    pub net_down: f32,
}

impl Server {
    /// Grouping is by host name: WEB before DB, everything else is Other
    pub fn group(&self) -> ServerGroup {
        if self.name.contains("WEB") {
            ServerGroup::Web
        } else if self.name.contains("DB") {
            ServerGroup::Database
        } else {
            ServerGroup::Other
        }
    }

    pub fn memory_gb(&self) -> f32 {
        self.mem as f32 / 100.0 * SERVER_MEMORY_GB
    }

    /// Restart and Stop are disabled for offline hosts
    pub fn actions_enabled(&self) -> bool {
        self.status != ServerStatus::Offline
    }
}

/// All monitored servers plus the dashboard selection
#[derive(Clone, Debug)]
pub struct ServerFleet {
    servers: Vec<Server>,
    selected: usize,
}

impl Default for ServerFleet {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerFleet {
    pub fn new() -> Self {
        let server = |name, ip, status, cpu, mem, disk, net_up, net_down| Server {
            name,
            ip,
            status,
            cpu,
            mem,
            disk,
            net_up,
            net_down,
        };
        Self {
            servers: vec![
                server("PN2-WEB-01", "192.168.1.10", ServerStatus::Online, 34, 68, 45, 1.2, 5.4),
                server("PN2-WEB-02", "192.168.1.11", ServerStatus::Online, 28, 75, 50, 0.8, 3.1),
                server("PN2-DB-01", "192.168.1.20", ServerStatus::Warning, 88, 92, 80, 10.5, 2.2),
                server("PN2-CACHE-01", "192.168.1.30", ServerStatus::Offline, 0, 0, 0, 0.0, 0.0),
            ],
            selected: 0,
        }
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// Servers listed under one sidebar heading
    pub fn in_group(&self, group: ServerGroup) -> impl Iterator<Item = &Server> {
        self.servers.iter().filter(move |s| s.group() == group)
    }

    /// Select by host name. Returns false for an unknown name.
    pub fn select(&mut self, name: &str) -> bool {
        match self.servers.iter().position(|s| s.name == name) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// The server shown on the dashboard, first server by default
    pub fn selected(&self) -> Option<&Server> {
        self.servers.get(self.selected)
    }
}

impl MetricFeed for ServerFleet {
    type Snapshot = Vec<Server>;

    fn advance(&mut self, rng: &mut dyn RngCore) -> Vec<Server> {
        for s in &mut self.servers {
            if s.status == ServerStatus::Offline {
                continue;
            }
            s.cpu = (s.cpu + rng.gen_range(-3..=3)).clamp(10, 99);
            s.mem = (s.mem + rng.gen_range(-2..=2)).clamp(10, 99);
        }
        self.snapshot()
    }

    fn snapshot(&self) -> Vec<Server> {
        self.servers.clone()
    }
}

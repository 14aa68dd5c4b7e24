//! Per-window panel hosts
//!
//! A host is created when its window opens and dropped when the window
//! closes. Dropping it drops any feed subscription it owns, so no update
//! can arrive for a window that no longer exists.

use pn_console::Console;
use pn_desktop::Tool;
use pn_panels::disk::CLEANUP_FILES;
use pn_panels::monitor::{CPU_INTERVAL_MS, PROCESS_INTERVAL_MS};
use pn_panels::servers::FLEET_INTERVAL_MS;
use pn_panels::{
    subscribe, CleanupStep, CpuHistory, DiskCleanup, Drive, DriveOptimizer, EventEntry,
    PanelResult, Process, ProcessTable, Server, ServerFleet, ServerGroup, Service, ServiceAction,
    ServiceList, Subscription, EVENT_LOG, SERVER_LOG,
};
use serde::Serialize;

/// Body state of one open window
#[derive(Debug)]
pub enum PanelHost {
    Console(Console),
    ServerManager(Subscription<ServerFleet>),
    PerformanceMonitor(Subscription<CpuHistory>),
    ResourceMonitor(Subscription<ProcessTable>),
    Services(ServiceList),
    EventViewer,
    DiskCleanup(DiskCleanup),
    DriveOptimizer(DriveOptimizer),
}

/// Button presses and selections inside a panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PanelCommand {
    SelectServer(String),
    SelectService(String),
    /// Toolbar action on the selected service
    Service(ServiceAction),
    ScanDisk,
    CleanDisk,
    OptimizeDrives,
}

impl PanelCommand {
    pub fn name(&self) -> &'static str {
        match self {
            PanelCommand::SelectServer(_) => "select-server",
            PanelCommand::SelectService(_) => "select-service",
            PanelCommand::Service(action) => action.label(),
            PanelCommand::ScanDisk => "scan",
            PanelCommand::CleanDisk => "clean",
            PanelCommand::OptimizeDrives => "optimize",
        }
    }
}

/// Outcome of routing a command to a host
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Routed {
    Done,
    /// The host is a different kind of panel
    Rejected,
}

impl PanelHost {
    /// Attach the panel for `tool`, starting any feeds at `now_ms`
    pub fn for_tool(tool: Tool, now_ms: f64, seed: u64) -> Self {
        match tool {
            Tool::CommandPrompt => PanelHost::Console(Console::new()),
            Tool::ServerManager => PanelHost::ServerManager(subscribe(
                ServerFleet::new(),
                FLEET_INTERVAL_MS,
                now_ms,
                seed,
            )),
            Tool::PerformanceMonitor => PanelHost::PerformanceMonitor(subscribe(
                CpuHistory::new(),
                CPU_INTERVAL_MS,
                now_ms,
                seed,
            )),
            Tool::ResourceMonitor => PanelHost::ResourceMonitor(subscribe(
                ProcessTable::new(),
                PROCESS_INTERVAL_MS,
                now_ms,
                seed,
            )),
            Tool::Services => PanelHost::Services(ServiceList::new()),
            Tool::EventViewer => PanelHost::EventViewer,
            Tool::DiskCleanup => PanelHost::DiskCleanup(DiskCleanup::new()),
            Tool::DefragmentAndOptimizeDrives => PanelHost::DriveOptimizer(DriveOptimizer::new()),
        }
    }

    /// Advance feeds and pending timers
    pub fn tick(&mut self, now_ms: f64) {
        match self {
            PanelHost::ServerManager(sub) => {
                sub.poll(now_ms);
            }
            PanelHost::PerformanceMonitor(sub) => {
                sub.poll(now_ms);
            }
            PanelHost::ResourceMonitor(sub) => {
                sub.poll(now_ms);
            }
            PanelHost::Services(list) => list.tick(now_ms),
            PanelHost::DiskCleanup(cleanup) => cleanup.tick(now_ms),
            PanelHost::DriveOptimizer(optimizer) => optimizer.tick(now_ms),
            PanelHost::Console(_) | PanelHost::EventViewer => {}
        }
    }

    pub fn console_mut(&mut self) -> Option<&mut Console> {
        match self {
            PanelHost::Console(console) => Some(console),
            _ => None,
        }
    }

    pub(crate) fn apply(&mut self, command: &PanelCommand, now_ms: f64) -> PanelResult<Routed> {
        match (self, command) {
            (PanelHost::ServerManager(sub), PanelCommand::SelectServer(name)) => {
                // unknown names keep the current selection
                sub.feed_mut().select(name);
            }
            (PanelHost::Services(list), PanelCommand::SelectService(name)) => list.select(name)?,
            (PanelHost::Services(list), PanelCommand::Service(action)) => {
                list.apply_selected(*action, now_ms)?
            }
            (PanelHost::DiskCleanup(cleanup), PanelCommand::ScanDisk) => {
                cleanup.start_scan(now_ms)?
            }
            (PanelHost::DiskCleanup(cleanup), PanelCommand::CleanDisk) => cleanup.clean(now_ms)?,
            (PanelHost::DriveOptimizer(optimizer), PanelCommand::OptimizeDrives) => {
                optimizer.optimize(now_ms)?
            }
            _ => return Ok(Routed::Rejected),
        }
        Ok(Routed::Done)
    }

    /// Serializable body for the view layer
    pub fn view(&self) -> PanelView {
        match self {
            PanelHost::Console(console) => PanelView::Console {
                transcript: console.transcript().to_vec(),
            },
            PanelHost::ServerManager(sub) => {
                let fleet = sub.feed();
                PanelView::ServerManager {
                    servers: fleet.servers().iter().cloned().map(ServerRow::from).collect(),
                    groups: ServerGroup::ALL
                        .iter()
                        .map(|group| ServerGroupView {
                            group: *group,
                            heading: group.heading(),
                            servers: fleet.in_group(*group).map(|s| s.name).collect(),
                        })
                        .collect(),
                    selected: fleet.selected().map(|s| s.name),
                    log: SERVER_LOG.to_vec(),
                }
            }
            PanelHost::PerformanceMonitor(sub) => {
                PanelView::PerformanceMonitor { cpu: sub.latest() }
            }
            PanelHost::ResourceMonitor(sub) => PanelView::ResourceMonitor {
                processes: sub.latest(),
            },
            PanelHost::Services(list) => PanelView::Services {
                services: list.services().to_vec(),
                selected: list.selected().map(|s| s.name),
            },
            PanelHost::EventViewer => PanelView::EventViewer {
                events: EVENT_LOG
                    .iter()
                    .map(|entry| EventRow {
                        entry: *entry,
                        icon: entry.level.icon(),
                    })
                    .collect(),
            },
            PanelHost::DiskCleanup(cleanup) => PanelView::DiskCleanup {
                step: cleanup.step(),
                progress: cleanup.progress(),
                files: match cleanup.step() {
                    CleanupStep::Results => CLEANUP_FILES.to_vec(),
                    _ => Vec::new(),
                },
            },
            PanelHost::DriveOptimizer(optimizer) => PanelView::DriveOptimizer {
                drives: optimizer
                    .drives()
                    .iter()
                    .map(|drive| DriveRow {
                        status: drive.status_label(optimizer.is_optimizing()),
                        drive: drive.clone(),
                    })
                    .collect(),
                optimizing: optimizer.is_optimizing(),
                can_optimize: optimizer.can_optimize(),
            },
        }
    }
}

/// Server Manager sidebar row and dashboard card data
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServerRow {
    #[serde(flatten)]
    pub server: Server,
    pub group: ServerGroup,
    pub memory_gb: f32,
    /// Restart and Stop buttons
    pub actions_enabled: bool,
}

impl From<Server> for ServerRow {
    fn from(server: Server) -> Self {
        Self {
            group: server.group(),
            memory_gb: server.memory_gb(),
            actions_enabled: server.actions_enabled(),
            server,
        }
    }
}

/// One sidebar cluster, servers listed by name
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServerGroupView {
    pub group: ServerGroup,
    pub heading: &'static str,
    pub servers: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventRow {
    #[serde(flatten)]
    pub entry: EventEntry,
    pub icon: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DriveRow {
    #[serde(flatten)]
    pub drive: Drive,
    /// Current status column text
    pub status: &'static str,
}

/// Panel body as the view layer paints it
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PanelView {
    Console {
        transcript: Vec<String>,
    },
    ServerManager {
        servers: Vec<ServerRow>,
        groups: Vec<ServerGroupView>,
        selected: Option<&'static str>,
        log: Vec<&'static str>,
    },
    PerformanceMonitor {
        cpu: Vec<f32>,
    },
    ResourceMonitor {
        processes: Vec<Process>,
    },
    Services {
        services: Vec<Service>,
        selected: Option<&'static str>,
    },
    EventViewer {
        events: Vec<EventRow>,
    },
    DiskCleanup {
        step: CleanupStep,
        progress: u8,
        files: Vec<&'static str>,
    },
    DriveOptimizer {
        drives: Vec<DriveRow>,
        optimizing: bool,
        can_optimize: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tool_gets_matching_panel() {
        for tool in Tool::all() {
            let host = PanelHost::for_tool(*tool, 0.0, 1);
            let matches = matches!(
                (tool, &host),
                (Tool::CommandPrompt, PanelHost::Console(_))
                    | (Tool::ServerManager, PanelHost::ServerManager(_))
                    | (Tool::PerformanceMonitor, PanelHost::PerformanceMonitor(_))
                    | (Tool::ResourceMonitor, PanelHost::ResourceMonitor(_))
                    | (Tool::Services, PanelHost::Services(_))
                    | (Tool::EventViewer, PanelHost::EventViewer)
                    | (Tool::DiskCleanup, PanelHost::DiskCleanup(_))
                    | (Tool::DefragmentAndOptimizeDrives, PanelHost::DriveOptimizer(_))
            );
            assert!(matches, "{:?} got {:?}", tool, host);
        }
    }

    #[test]
    fn test_wrong_panel_is_rejected() {
        let mut host = PanelHost::for_tool(Tool::EventViewer, 0.0, 1);
        assert_eq!(host.apply(&PanelCommand::ScanDisk, 0.0), Ok(Routed::Rejected));
    }

    #[test]
    fn test_disk_cleanup_through_host() {
        let mut host = PanelHost::for_tool(Tool::DiskCleanup, 0.0, 1);
        assert_eq!(host.apply(&PanelCommand::ScanDisk, 0.0), Ok(Routed::Done));
        host.tick(2100.0);

        match host.view() {
            PanelView::DiskCleanup { step, files, .. } => {
                assert_eq!(step, CleanupStep::Results);
                assert_eq!(files.len(), 3);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_monitor_ticks_through_host() {
        let mut host = PanelHost::for_tool(Tool::PerformanceMonitor, 0.0, 9);
        host.tick(1000.0);
        match host.view() {
            PanelView::PerformanceMonitor { cpu } => assert!(cpu[cpu.len() - 1] >= 10.0),
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_view_is_tagged() {
        let host = PanelHost::for_tool(Tool::EventViewer, 0.0, 1);
        let json = serde_json::to_value(host.view()).unwrap();
        assert_eq!(json["kind"], "event-viewer");
        assert_eq!(json["events"].as_array().map(|a| a.len()), Some(6));
        assert_eq!(json["events"][0]["source"], "Kernel-Power");
        assert_eq!(json["events"][0]["icon"], "error");
    }

    #[test]
    fn test_server_view_rows_and_groups() {
        let host = PanelHost::for_tool(Tool::ServerManager, 0.0, 1);
        let PanelView::ServerManager { servers, groups, .. } = host.view() else {
            panic!("expected server manager view");
        };

        let db = &servers[2];
        assert_eq!(db.group, ServerGroup::Database);
        assert!((db.memory_gb - 29.44).abs() < 0.001);
        assert!(db.actions_enabled);
        assert!(!servers[3].actions_enabled);

        let headings: Vec<_> = groups.iter().map(|g| g.heading).collect();
        assert_eq!(headings, vec!["Web Servers", "Database Servers", "Other Servers"]);
        assert_eq!(groups[0].servers, vec!["PN2-WEB-01", "PN2-WEB-02"]);
        assert_eq!(groups[2].servers, vec!["PN2-CACHE-01"]);
    }

    #[test]
    fn test_drive_rows_show_running_pass() {
        let mut host = PanelHost::for_tool(Tool::DefragmentAndOptimizeDrives, 0.0, 1);
        host.apply(&PanelCommand::OptimizeDrives, 0.0).unwrap();

        let PanelView::DriveOptimizer { drives, .. } = host.view() else {
            panic!("expected drive optimizer view");
        };
        let status: Vec<_> = drives.iter().map(|d| d.status).collect();
        assert_eq!(status, vec!["OK", "Optimizing..."]);

        host.tick(3000.0);
        let json = serde_json::to_value(host.view()).unwrap();
        assert_eq!(json["drives"][1]["status"], "OK");
        assert_eq!(json["drives"][1]["name"], "(D:) Recovery");
    }
}

//! Panel models for the Paskanet II shell tools
//!
//! Everything here is cosmetic state behind the tool windows: jittering
//! metrics, mock tables, and the small step machines of the disk and
//! service tools. The window manager never depends on this crate; a host
//! owns one panel per open window and drops it when the window closes.
//!
//! ## Feeds
//!
//! Periodic metrics are modelled as [`MetricFeed`]s wrapped in a
//! [`Subscription`] that emits one snapshot per elapsed interval:
//!
//! ```rust
//! use pn_panels::{subscribe, CpuHistory};
//!
//! let mut cpu = subscribe(CpuHistory::new(), 1000.0, 0.0, 42);
//! assert!(cpu.poll(999.0).is_empty());
//! assert_eq!(cpu.poll(1000.0).len(), 1);
//! ```
//!
//! Time is passed in as `now_ms`; nothing here reads a clock.

pub mod disk;
pub mod error;
pub mod events;
pub mod feed;
pub mod monitor;
pub mod servers;
pub mod services;

pub use disk::{CleanupStep, DiskCleanup, Drive, DriveOptimizer};
pub use error::{PanelError, PanelResult};
pub use events::{EventEntry, EventLevel, EVENT_LOG};
pub use feed::{subscribe, MetricFeed, Subscription};
pub use monitor::{CpuHistory, Process, ProcessTable};
pub use servers::{Server, ServerFleet, ServerGroup, ServerStatus, SERVER_LOG};
pub use services::{Service, ServiceAction, ServiceList, ServiceStatus};

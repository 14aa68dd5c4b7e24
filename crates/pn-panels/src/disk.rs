//! Disk Cleanup and Optimize Drives panels

use serde::Serialize;
use tracing::debug;

use crate::error::{PanelError, PanelResult};

/// Progress bar step period
pub const CLEANUP_STEP_MS: f64 = 100.0;

/// Progress added per step, in percent
pub const CLEANUP_PROGRESS_STEP: u8 = 5;

/// How long an optimization pass runs
pub const OPTIMIZE_DURATION_MS: f64 = 3000.0;

/// Categories offered for deletion after a scan
pub const CLEANUP_FILES: [&str; 3] = [
    "Downloaded Program Files (1.2 MB)",
    "Temporary Internet Files (34.5 MB)",
    "Recycle Bin (15.7 MB)",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum CleanupStep {
    #[default]
    Initial,
    Scanning,
    Results,
    Cleaning,
    Complete,
}

impl CleanupStep {
    /// Whether the progress bar is running
    pub fn is_busy(&self) -> bool {
        matches!(self, CleanupStep::Scanning | CleanupStep::Cleaning)
    }

    fn next(self) -> Self {
        match self {
            CleanupStep::Initial => CleanupStep::Scanning,
            CleanupStep::Scanning => CleanupStep::Results,
            CleanupStep::Results => CleanupStep::Cleaning,
            CleanupStep::Cleaning | CleanupStep::Complete => CleanupStep::Complete,
        }
    }
}

/// Scan, review, clean
///
/// Each busy step fills the bar in 5% increments and moves on one step
/// period after reaching 100%.
#[derive(Clone, Debug, Default)]
pub struct DiskCleanup {
    step: CleanupStep,
    progress: u8,
    next_step_ms: f64,
}

impl DiskCleanup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> CleanupStep {
        self.step
    }

    /// Percent, 0..=100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// "Scan Disk"
    pub fn start_scan(&mut self, now_ms: f64) -> PanelResult<()> {
        self.advance_from(CleanupStep::Initial, "scan", now_ms)
    }

    /// "Clean up system files"
    pub fn clean(&mut self, now_ms: f64) -> PanelResult<()> {
        self.advance_from(CleanupStep::Results, "clean", now_ms)
    }

    fn advance_from(
        &mut self,
        expected: CleanupStep,
        action: &'static str,
        now_ms: f64,
    ) -> PanelResult<()> {
        if self.step != expected {
            return Err(PanelError::ActionUnavailable {
                action,
                reason: "disk cleanup is in another step",
            });
        }
        self.step = self.step.next();
        self.progress = 0;
        self.next_step_ms = now_ms + CLEANUP_STEP_MS;
        Ok(())
    }

    pub fn tick(&mut self, now_ms: f64) {
        while self.step.is_busy() && now_ms >= self.next_step_ms {
            if self.progress >= 100 {
                self.step = self.step.next();
                debug!("Disk cleanup moved to {:?}", self.step);
                break;
            }
            self.progress = (self.progress + CLEANUP_PROGRESS_STEP).min(100);
            self.next_step_ms += CLEANUP_STEP_MS;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Drive {
    pub name: &'static str,
    pub media: &'static str,
    pub needs_optimization: bool,
}

impl Drive {
    /// Current status column text. Drives waiting on a running pass show
    /// as in progress.
    pub fn status_label(&self, optimizing: bool) -> &'static str {
        match (self.needs_optimization, optimizing) {
            (false, _) => "OK",
            (true, true) => "Optimizing...",
            (true, false) => "Needs optimization",
        }
    }
}

#[derive(Clone, Debug)]
pub struct DriveOptimizer {
    drives: Vec<Drive>,
    /// Completion time of the running pass
    finishes_at: Option<f64>,
}

impl Default for DriveOptimizer {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveOptimizer {
    pub fn new() -> Self {
        Self {
            drives: vec![
                Drive {
                    name: "(C:)",
                    media: "Solid state drive",
                    needs_optimization: false,
                },
                Drive {
                    name: "(D:) Recovery",
                    media: "Hard disk drive",
                    needs_optimization: true,
                },
            ],
            finishes_at: None,
        }
    }

    pub fn drives(&self) -> &[Drive] {
        &self.drives
    }

    pub fn is_optimizing(&self) -> bool {
        self.finishes_at.is_some()
    }

    /// The Optimize button is disabled mid-pass and when nothing needs work
    pub fn can_optimize(&self) -> bool {
        !self.is_optimizing() && self.drives.iter().any(|d| d.needs_optimization)
    }

    pub fn optimize(&mut self, now_ms: f64) -> PanelResult<()> {
        if self.is_optimizing() {
            return Err(PanelError::ActionUnavailable {
                action: "optimize",
                reason: "optimization already running",
            });
        }
        if !self.can_optimize() {
            return Err(PanelError::ActionUnavailable {
                action: "optimize",
                reason: "all drives are OK",
            });
        }
        self.finishes_at = Some(now_ms + OPTIMIZE_DURATION_MS);
        Ok(())
    }

    pub fn tick(&mut self, now_ms: f64) {
        if matches!(self.finishes_at, Some(done) if now_ms >= done) {
            for drive in &mut self.drives {
                drive.needs_optimization = false;
            }
            self.finishes_at = None;
            debug!("Drive optimization complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleanup_full_run() {
        let mut cleanup = DiskCleanup::new();
        assert_eq!(cleanup.step(), CleanupStep::Initial);

        cleanup.start_scan(0.0).unwrap();
        assert_eq!(cleanup.step(), CleanupStep::Scanning);

        cleanup.tick(100.0);
        assert_eq!(cleanup.progress(), 5);

        // 20 steps to reach 100%, the 21st moves on
        cleanup.tick(2000.0);
        assert_eq!(cleanup.progress(), 100);
        assert_eq!(cleanup.step(), CleanupStep::Scanning);
        cleanup.tick(2100.0);
        assert_eq!(cleanup.step(), CleanupStep::Results);

        cleanup.clean(5000.0).unwrap();
        assert_eq!(cleanup.progress(), 0);
        cleanup.tick(7100.0);
        assert_eq!(cleanup.step(), CleanupStep::Complete);
    }

    #[test]
    fn test_cleanup_rejects_out_of_order() {
        let mut cleanup = DiskCleanup::new();
        assert!(cleanup.clean(0.0).is_err());
        cleanup.start_scan(0.0).unwrap();
        assert!(cleanup.start_scan(0.0).is_err());
    }

    #[test]
    fn test_cleanup_idle_tick_is_noop() {
        let mut cleanup = DiskCleanup::new();
        cleanup.tick(10_000.0);
        assert_eq!(cleanup.step(), CleanupStep::Initial);
        assert_eq!(cleanup.progress(), 0);
    }

    #[test]
    fn test_optimize_drives() {
        let mut opt = DriveOptimizer::new();
        assert_eq!(opt.drives()[1].status_label(false), "Needs optimization");
        assert!(opt.can_optimize());

        opt.optimize(1000.0).unwrap();
        assert!(opt.is_optimizing());
        assert_eq!(opt.drives()[0].status_label(true), "OK");
        assert_eq!(opt.drives()[1].status_label(true), "Optimizing...");
        assert!(!opt.can_optimize());
        assert!(opt.optimize(1500.0).is_err());

        opt.tick(3999.0);
        assert!(opt.is_optimizing());
        opt.tick(4000.0);
        assert!(!opt.is_optimizing());
        assert!(opt.drives().iter().all(|d| d.status_label(false) == "OK"));

        let err = opt.optimize(5000.0).unwrap_err();
        assert_eq!(
            err,
            PanelError::ActionUnavailable {
                action: "optimize",
                reason: "all drives are OK",
            }
        );
    }
}

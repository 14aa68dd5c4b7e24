//! Performance Monitor and Resource Monitor feeds

use std::collections::VecDeque;

use rand::{Rng, RngCore};
use serde::Serialize;

use crate::feed::MetricFeed;

/// Samples kept by the CPU chart
pub const CPU_HISTORY_LEN: usize = 60;

/// Performance Monitor tick
pub const CPU_INTERVAL_MS: f64 = 1000.0;

/// Resource Monitor tick
pub const PROCESS_INTERVAL_MS: f64 = 1500.0;

/// Rolling CPU usage chart, oldest sample first
#[derive(Clone, Debug)]
pub struct CpuHistory {
    samples: VecDeque<f32>,
}

impl Default for CpuHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuHistory {
    /// A flat-zero chart
    pub fn new() -> Self {
        Self {
            samples: std::iter::repeat(0.0).take(CPU_HISTORY_LEN).collect(),
        }
    }
}

impl MetricFeed for CpuHistory {
    type Snapshot = Vec<f32>;

    fn advance(&mut self, rng: &mut dyn RngCore) -> Vec<f32> {
        self.samples.pop_front();
        self.samples.push_back(rng.gen_range(10.0..90.0));
        self.snapshot()
    }

    fn snapshot(&self) -> Vec<f32> {
        self.samples.iter().copied().collect()
    }
}

/// One row of the Resource Monitor table
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Process {
    pub name: &'static str,
    pub pid: u32,
    /// Percent, 0..=100
    pub cpu: i32,
    /// Megabytes
    pub memory: f32,
}

impl Process {
    const fn new(name: &'static str, pid: u32, cpu: i32, memory: f32) -> Self {
        Self {
            name,
            pid,
            cpu,
            memory,
        }
    }
}

/// Resource Monitor process table
#[derive(Clone, Debug)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable {
    pub fn new() -> Self {
        Self {
            processes: vec![
                Process::new("System", 4, 15, 128.0),
                Process::new("svchost.exe", 1120, 5, 64.0),
                Process::new("explorer.exe", 4132, 8, 256.0),
                Process::new("chrome.exe", 5123, 25, 512.0),
                Process::new("P2Manager.exe", 6012, 12, 180.0),
                Process::new("services.exe", 888, 2, 48.0),
            ],
        }
    }
}

impl MetricFeed for ProcessTable {
    /// Rows sorted by CPU, busiest first
    type Snapshot = Vec<Process>;

    fn advance(&mut self, rng: &mut dyn RngCore) -> Vec<Process> {
        for p in &mut self.processes {
            p.cpu = (p.cpu + rng.gen_range(-2..=2)).clamp(0, 100);
            // memory drifts by a few MB but never more than 5% per tick
            let drifted = p.memory + rng.gen_range(-5..=4) as f32;
            p.memory = drifted.clamp(p.memory * 0.95, p.memory * 1.05);
        }
        self.snapshot()
    }

    fn snapshot(&self) -> Vec<Process> {
        let mut rows = self.processes.clone();
        rows.sort_by(|a, b| b.cpu.cmp(&a.cpu));
        rows
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        /// Jitter keeps CPU within 0..=100 and memory within 5% per tick
        #[test]
        fn process_jitter_bounded(seed in any::<u64>(), ticks in 1usize..200) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut table = ProcessTable::new();
            for _ in 0..ticks {
                let before = table.processes.clone();
                table.advance(&mut rng);
                for (old, new) in before.iter().zip(&table.processes) {
                    prop_assert!((0..=100).contains(&new.cpu));
                    prop_assert!((new.cpu - old.cpu).abs() <= 2);
                    prop_assert!(new.memory >= old.memory * 0.95 - 0.001);
                    prop_assert!(new.memory <= old.memory * 1.05 + 0.001);
                }
            }
        }
    }
}

#[cfg(feature = "cli")]
use sysinfo::{Pid, System};
use std::time::{Duration, Instant};

/// Resource snapshot taken at the end of a pipeline stage.
#[derive(Debug, Clone)]
pub struct StageStats {
    pub stage: String,
    pub stage_time: Duration,
    pub total_time: Duration,
    pub memory_mb: Option<u64>,
}

/// Times pipeline stages and, with the `cli` feature, samples process memory.
pub struct RunMonitor {
    enabled: bool,
    started: Instant,
    stage_started: Instant,
    peak_memory_mb: u64,
    #[cfg(feature = "cli")]
    system: System,
    #[cfg(feature = "cli")]
    pid: Option<Pid>,
}

impl RunMonitor {
    pub fn new(enabled: bool) -> Self {
        let now = Instant::now();
        Self {
            enabled,
            started: now,
            stage_started: now,
            peak_memory_mb: 0,
            #[cfg(feature = "cli")]
            system: System::new(),
            #[cfg(feature = "cli")]
            pid: sysinfo::get_current_pid().ok(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[cfg(feature = "cli")]
    fn sample_memory_mb(&mut self) -> Option<u64> {
        let pid = self.pid?;
        self.system.refresh_all();
        let memory = self.system.process(pid)?.memory() / 1024 / 1024;
        self.peak_memory_mb = self.peak_memory_mb.max(memory);
        Some(memory)
    }

    #[cfg(not(feature = "cli"))]
    fn sample_memory_mb(&mut self) -> Option<u64> {
        None
    }

    /// Closes the current stage and starts timing the next one.
    pub fn finish_stage(&mut self, stage: &str) -> Option<StageStats> {
        if !self.enabled {
            return None;
        }

        let stats = StageStats {
            stage: stage.to_string(),
            stage_time: self.stage_started.elapsed(),
            total_time: self.started.elapsed(),
            memory_mb: self.sample_memory_mb(),
        };
        self.stage_started = Instant::now();

        match stats.memory_mb {
            Some(memory) => tracing::info!(
                "📊 {} took {:?} (total {:?}), memory {}MB",
                stats.stage,
                stats.stage_time,
                stats.total_time,
                memory
            ),
            None => tracing::info!(
                "📊 {} took {:?} (total {:?})",
                stats.stage,
                stats.stage_time,
                stats.total_time
            ),
        }
        Some(stats)
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!(
                "📊 Final Stats - Total Time: {:?}, Peak Memory: {}MB",
                self.started.elapsed(),
                self.peak_memory_mb
            );
        }
    }
}

impl Default for RunMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

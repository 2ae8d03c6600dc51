use crate::core::{MatchReport, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;

/// What a finished run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output_path: String,
    pub report: MatchReport,
}

pub struct MatchEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> MatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    /// Extract, transform and load. The output file is only written once the
    /// full ranking table has been built.
    pub async fn run(&self) -> Result<RunSummary> {
        let mut monitor = RunMonitor::new(self.monitor_enabled);
        tracing::info!("Starting mentor matching");

        let surveys = self.pipeline.extract().await?;
        tracing::info!(
            "Extracted {} mentee rows and {} mentor rows",
            surveys.mentees.row_count(),
            surveys.mentors.row_count()
        );
        monitor.finish_stage("extract");

        let report = self.pipeline.transform(surveys).await?;
        tracing::info!(
            "Ranked {} mentors for {} mentees",
            report.rank_columns(),
            report.rankings.len()
        );
        if !report.excluded.is_empty() {
            tracing::info!("Excluded {} mentees with no interests", report.excluded.len());
        }
        monitor.finish_stage("transform");

        let output_path = self.pipeline.load(&report).await?;
        tracing::info!("Output saved to: {}", output_path);
        monitor.finish_stage("load");
        monitor.log_final_stats();

        Ok(RunSummary {
            output_path,
            report,
        })
    }
}

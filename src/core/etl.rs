use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Runs extract, transform and load once, in that order.
pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting user analysis...");
        self.monitor.log_stats("Start");

        // Extract
        let table = self.pipeline.extract()?;
        tracing::info!("Loaded {} user records", table.len());
        self.monitor.log_stats("Extract");

        // Transform
        let result = self.pipeline.transform(table)?;
        tracing::info!(
            "Aggregated {} users ({} occupations ranked, {} email domains)",
            result.analysis.total_users,
            result.analysis.top_occupations.len(),
            result.analysis.email_domains.len()
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Report saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

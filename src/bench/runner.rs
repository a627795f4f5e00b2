//! Benchmark execution engine
//!
//! Processes models strictly sequentially: load the engine, measure one
//! summarization call, record the result. Only the summarization call sits
//! inside the measured window; loading and rendering stay outside it.

use tracing::{debug, info, warn};

use crate::engine::{EngineProvider, SummarizationEngine};
use crate::error::BenchError;
use crate::models::{BenchmarkReport, Device, ModelRecord, SummarizationRequest};
use crate::monitor::ResourceMonitor;

/// Sequential benchmark runner
pub struct BenchmarkRunner<P, M> {
    provider: P,
    monitor: M,
    fail_fast: bool,
}

impl<P, M> BenchmarkRunner<P, M>
where
    P: EngineProvider,
    M: ResourceMonitor,
{
    /// Create a runner over an engine provider and a resource monitor
    pub fn new(provider: P, monitor: M) -> Self {
        Self {
            provider,
            monitor,
            fail_fast: false,
        }
    }

    /// Abort the whole run on the first per-model failure instead of
    /// recording it and continuing
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Benchmark every model in order against the shared request template.
    ///
    /// The returned report has exactly one record per input model, in input
    /// order. Per-model failures become failed records unless fail-fast is
    /// set.
    pub async fn run(
        &mut self,
        models: &[String],
        request: &SummarizationRequest,
        device: Device,
    ) -> Result<BenchmarkReport, BenchError> {
        if models.is_empty() {
            return Err(BenchError::invalid_request("model list is empty"));
        }
        request.validate()?;

        let mut report = BenchmarkReport::new(
            device,
            request.max_length,
            request.min_length,
            request.text.chars().count(),
        );

        for model in models {
            info!("Benchmarking model: {model}");

            match self.measure(model, request, device).await {
                Ok(record) => {
                    info!("{record}");
                    report.push(record);
                }
                Err(error) if self.fail_fast => return Err(error),
                Err(error) => {
                    warn!("{error}");
                    report.push(ModelRecord::failure(model, &error));
                }
            }
        }

        Ok(report)
    }

    async fn measure(
        &mut self,
        model: &str,
        request: &SummarizationRequest,
        device: Device,
    ) -> Result<ModelRecord, BenchError> {
        let engine = self.provider.load(model, device).await?;

        self.monitor.start()?;
        let outcome = engine.summarize(request).await;
        let usage = self.monitor.stop()?;
        debug!(
            "measured window: {:.4}s, current {} bytes, peak {} bytes",
            usage.elapsed.as_secs_f64(),
            usage.current_bytes,
            usage.peak_bytes
        );

        let mut candidates = outcome?.into_iter();
        let summary = candidates
            .next()
            .ok_or_else(|| BenchError::inference(model, "engine returned no candidates"))?;

        Ok(ModelRecord::success(
            model,
            usage.elapsed.as_secs_f64(),
            usage.peak_bytes,
            summary,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use crate::models::ModelOutcome;
    use crate::monitor::ResourceUsage;
    use std::collections::{HashMap, HashSet, VecDeque};
    use std::time::Duration;

    struct StubEngine {
        candidates: Vec<String>,
        fail: bool,
    }

    impl SummarizationEngine for StubEngine {
        async fn summarize(
            &self,
            _request: &SummarizationRequest,
        ) -> Result<Vec<String>, BenchError> {
            if self.fail {
                return Err(BenchError::inference("stub", "forced inference failure"));
            }
            Ok(self.candidates.clone())
        }
    }

    #[derive(Default)]
    struct StubProvider {
        /// model -> candidate summaries; unlisted models get a default
        summaries: HashMap<String, Vec<String>>,
        load_failures: HashSet<String>,
        inference_failures: HashSet<String>,
    }

    impl StubProvider {
        fn with_summary(mut self, model: &str, summary: &str) -> Self {
            self.summaries
                .insert(model.to_string(), vec![summary.to_string()]);
            self
        }

        fn failing_load(mut self, model: &str) -> Self {
            self.load_failures.insert(model.to_string());
            self
        }

        fn failing_inference(mut self, model: &str) -> Self {
            self.inference_failures.insert(model.to_string());
            self
        }
    }

    impl EngineProvider for StubProvider {
        type Engine = StubEngine;

        async fn load(&self, model: &str, _device: Device) -> Result<Self::Engine, BenchError> {
            if self.load_failures.contains(model) {
                return Err(BenchError::engine_load(model, "model cannot be resolved"));
            }
            Ok(StubEngine {
                candidates: self
                    .summaries
                    .get(model)
                    .cloned()
                    .unwrap_or_else(|| vec!["hello world".to_string()]),
                fail: self.inference_failures.contains(model),
            })
        }
    }

    /// Monitor that replays scripted (elapsed, peak) figures in order
    struct ScriptedMonitor {
        script: VecDeque<(f64, u64)>,
        started: bool,
    }

    impl ScriptedMonitor {
        fn new(script: &[(f64, u64)]) -> Self {
            Self {
                script: script.iter().copied().collect(),
                started: false,
            }
        }
    }

    impl ResourceMonitor for ScriptedMonitor {
        fn start(&mut self) -> Result<(), BenchError> {
            self.started = true;
            Ok(())
        }

        fn stop(&mut self) -> Result<ResourceUsage, BenchError> {
            assert!(self.started, "stop without start");
            self.started = false;
            let (secs, peak) = self
                .script
                .pop_front()
                .ok_or_else(|| BenchError::measurement("script exhausted"))?;
            Ok(ResourceUsage {
                elapsed: Duration::from_secs_f64(secs),
                current_bytes: peak,
                peak_bytes: peak,
            })
        }
    }

    fn models(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn request() -> SummarizationRequest {
        SummarizationRequest::new("A long input document about nothing in particular.")
    }

    #[tokio::test]
    async fn test_report_matches_input_length_and_order() {
        let monitor = ScriptedMonitor::new(&[(0.1, 1_000), (0.2, 2_000), (0.3, 3_000)]);
        let mut runner = BenchmarkRunner::new(StubProvider::default(), monitor);

        let input = models(&["m-one", "m-two", "m-three"]);
        let report = runner.run(&input, &request(), Device::Cpu).await.unwrap();

        assert_eq!(report.len(), input.len());
        let order: Vec<_> = report.records.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(order, vec!["m-one", "m-two", "m-three"]);
    }

    #[tokio::test]
    async fn test_success_figures_are_nonnegative() {
        let monitor = ScriptedMonitor::new(&[(0.0, 0)]);
        let mut runner = BenchmarkRunner::new(StubProvider::default(), monitor);

        let report = runner
            .run(&models(&["m"]), &request(), Device::Cpu)
            .await
            .unwrap();

        match &report.records[0].outcome {
            ModelOutcome::Ok {
                execution_seconds,
                peak_memory_bytes,
                ..
            } => {
                assert!(*execution_seconds >= 0.0);
                assert!(*peak_memory_bytes == 0);
            }
            _ => panic!("expected success"),
        }
    }

    #[tokio::test]
    async fn test_memory_peaks_do_not_leak_between_models() {
        // The second model allocates less than the first; its recorded peak
        // must reflect its own window, not the earlier high-water mark.
        let monitor = ScriptedMonitor::new(&[(1.0, 12_000_000), (1.0, 8_000_000)]);
        let mut runner = BenchmarkRunner::new(StubProvider::default(), monitor);

        let report = runner
            .run(&models(&["big", "small"]), &request(), Device::Cpu)
            .await
            .unwrap();

        let peaks: Vec<u64> = report
            .records
            .iter()
            .map(|r| match &r.outcome {
                ModelOutcome::Ok {
                    peak_memory_bytes, ..
                } => *peak_memory_bytes,
                _ => panic!("expected success"),
            })
            .collect();
        assert_eq!(peaks, vec![12_000_000, 8_000_000]);
    }

    #[tokio::test]
    async fn test_first_candidate_is_recorded() {
        let provider = StubProvider {
            summaries: HashMap::from([(
                "m".to_string(),
                vec!["first candidate".to_string(), "second candidate".to_string()],
            )]),
            ..Default::default()
        };
        let monitor = ScriptedMonitor::new(&[(0.1, 100)]);
        let mut runner = BenchmarkRunner::new(provider, monitor);

        let report = runner
            .run(&models(&["m"]), &request(), Device::Cpu)
            .await
            .unwrap();

        match &report.records[0].outcome {
            ModelOutcome::Ok { summary, .. } => assert_eq!(summary, "first candidate"),
            _ => panic!("expected success"),
        }
    }

    #[tokio::test]
    async fn test_load_failure_does_not_abort_remaining_models() {
        let provider = StubProvider::default()
            .with_summary("model-A", "summary A")
            .failing_load("model-B");
        let monitor = ScriptedMonitor::new(&[(0.1, 100), (0.1, 100)]);
        let mut runner = BenchmarkRunner::new(provider, monitor);

        let report = runner
            .run(&models(&["model-A", "model-B"]), &request(), Device::Cpu)
            .await
            .unwrap();

        assert_eq!(report.len(), 2);
        assert!(report.records[0].is_success());
        match &report.records[1].outcome {
            ModelOutcome::Failed { kind, .. } => assert_eq!(*kind, FailureKind::EngineLoad),
            _ => panic!("expected failure for model-B"),
        }
    }

    #[tokio::test]
    async fn test_inference_failure_is_recorded_and_run_continues() {
        let provider = StubProvider::default().failing_inference("bad");
        let monitor = ScriptedMonitor::new(&[(0.1, 100), (0.1, 100)]);
        let mut runner = BenchmarkRunner::new(provider, monitor);

        let report = runner
            .run(&models(&["bad", "good"]), &request(), Device::Cpu)
            .await
            .unwrap();

        assert!(!report.records[0].is_success());
        assert!(report.records[1].is_success());
    }

    #[tokio::test]
    async fn test_fail_fast_aborts_the_run() {
        let provider = StubProvider::default().failing_load("model-B");
        let monitor = ScriptedMonitor::new(&[(0.1, 100), (0.1, 100)]);
        let mut runner = BenchmarkRunner::new(provider, monitor).with_fail_fast(true);

        let result = runner
            .run(&models(&["model-B", "model-A"]), &request(), Device::Cpu)
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_scenario_end_to_end_rendering() {
        use crate::bench::{ReportFormat, ReportRenderer};

        let provider = StubProvider::default()
            .with_summary("model-A", "hello world")
            .with_summary("model-B", "a shorter take");
        let monitor = ScriptedMonitor::new(&[(1.2345, 12_000_000), (0.5, 8_000_000)]);
        let mut runner = BenchmarkRunner::new(provider, monitor);

        let report = runner
            .run(&models(&["model-A", "model-B"]), &request(), Device::Cpu)
            .await
            .unwrap();
        let text = ReportRenderer::render(&report, ReportFormat::Text);

        assert!(text.contains("Execution Time: 1.2345 seconds"));
        assert!(text.contains("Memory Usage: 12.00 MB"));
        assert!(text.contains("Execution Time: 0.5000 seconds"));
        assert!(text.contains("Memory Usage: 8.00 MB"));
        assert!(text.contains("Summary Output: hello world"));
        assert!(
            text.find("Model: model-A").unwrap() < text.find("Model: model-B").unwrap()
        );
    }

    #[tokio::test]
    async fn test_empty_model_list_is_rejected() {
        let monitor = ScriptedMonitor::new(&[]);
        let mut runner = BenchmarkRunner::new(StubProvider::default(), monitor);

        let result = runner.run(&[], &request(), Device::Cpu).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_invalid_request_template_fails_before_any_model() {
        let monitor = ScriptedMonitor::new(&[(0.1, 100)]);
        let mut runner = BenchmarkRunner::new(StubProvider::default(), monitor);

        let bad = SummarizationRequest::new("text").with_lengths(200, 100);
        let result = runner.run(&models(&["m"]), &bad, Device::Cpu).await;
        assert!(result.is_err());
    }
}

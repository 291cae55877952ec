//! Sequential multi-figure batch driver.
//!
//! Pure sequencing: figures render one after another, each outcome is
//! tracked independently, and a failure never aborts the remaining jobs.
//! The summary reports "N of M succeeded".

use log::{error, info, warn};

use stencil_core::model::DiagramSpec;

use crate::render::{RenderError, RenderOutcome, RenderTarget, Renderer};

/// One unit of work for the batch driver.
pub struct Job<'a> {
    name: String,
    spec: &'a DiagramSpec,
    renderer: &'a dyn Renderer,
    target: RenderTarget,
}

impl<'a> Job<'a> {
    /// Create a batch job rendering `spec` through `renderer` into `target`.
    pub fn new(
        name: impl Into<String>,
        spec: &'a DiagramSpec,
        renderer: &'a dyn Renderer,
        target: RenderTarget,
    ) -> Self {
        Self {
            name: name.into(),
            spec,
            renderer,
            target,
        }
    }

    /// The job's display name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Per-figure outcomes of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    results: Vec<(String, Result<RenderOutcome, RenderError>)>,
}

impl BatchSummary {
    /// Number of figures attempted.
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Number of figures rendered successfully.
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|(_, r)| r.is_ok()).count()
    }

    /// Names and errors of the figures that failed.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &RenderError)> {
        self.results
            .iter()
            .filter_map(|(name, r)| r.as_ref().err().map(|e| (name.as_str(), e)))
    }

    /// True when every figure rendered.
    pub fn is_all_ok(&self) -> bool {
        self.succeeded() == self.total()
    }

    /// Human-readable one-line summary.
    pub fn report(&self) -> String {
        format!("{} of {} figures succeeded", self.succeeded(), self.total())
    }

    /// All per-figure results in execution order.
    pub fn results(&self) -> &[(String, Result<RenderOutcome, RenderError>)] {
        &self.results
    }
}

/// Run jobs strictly in sequence, continuing past failures.
pub fn run_batch<'a>(jobs: impl IntoIterator<Item = Job<'a>>) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for job in jobs {
        info!(figure = job.name(); "Rendering figure");

        let result = job.renderer.render(job.spec, &job.target);
        match &result {
            Ok(outcome) => {
                info!(
                    figure = job.name(),
                    files = outcome.written().len();
                    "Figure generated"
                );
            }
            Err(err) if err.is_recoverable() => {
                warn!(figure = job.name(); "Figure skipped: {err}");
            }
            Err(err) => {
                error!(figure = job.name(); "Figure failed: {err}");
            }
        }

        summary.results.push((job.name, result));
    }

    summary
}

#[cfg(test)]
mod tests {
    use stencil_core::geometry::Size;

    use super::*;
    use crate::render::{MermaidRenderer, SvgRenderer};

    fn empty_spec() -> DiagramSpec {
        DiagramSpec::new("Empty", Size::new(100.0, 100.0))
    }

    #[test]
    fn test_empty_batch() {
        let summary = run_batch(Vec::new());
        assert_eq!(summary.total(), 0);
        assert!(summary.is_all_ok());
        assert_eq!(summary.report(), "0 of 0 figures succeeded");
    }

    #[test]
    fn test_failure_does_not_abort_remaining_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let spec = empty_spec();

        let svg = SvgRenderer::new();
        // A renderer pointing at a binary that cannot exist
        let broken = MermaidRenderer::new("stencil-test-no-such-binary");

        let jobs = vec![
            Job::new(
                "first",
                &spec,
                &svg,
                RenderTarget::new(dir.path().join("first.svg"), 100, 100),
            ),
            Job::new(
                "second",
                &spec,
                &broken,
                RenderTarget::new(dir.path().join("second.png"), 100, 100),
            ),
            Job::new(
                "third",
                &spec,
                &svg,
                RenderTarget::new(dir.path().join("third.svg"), 100, 100),
            ),
        ];

        let summary = run_batch(jobs);

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.succeeded(), 2);
        assert!(!summary.is_all_ok());
        assert_eq!(summary.report(), "2 of 3 figures succeeded");

        let failed: Vec<&str> = summary.failures().map(|(name, _)| name).collect();
        assert_eq!(failed, ["second"]);

        // Both independent jobs around the failure still produced output
        assert!(dir.path().join("first.svg").exists());
        assert!(dir.path().join("third.svg").exists());
    }
}

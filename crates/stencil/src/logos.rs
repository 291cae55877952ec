//! Technology logo fetching over plain HTTP.
//!
//! Downloads the logo set used alongside the architecture figure from the
//! Simple Icons CDN. Each logo is an independent unit of work: a failed
//! download is reported and the run continues, finishing with a
//! success/failure tally. No retries, no integrity checks beyond the HTTP
//! status code.

use std::{fs, path::Path, time::Duration};

use log::{info, warn};
use thiserror::Error;
use ureq::Agent;

use crate::StencilError;

/// CDN serving Simple Icons SVG files.
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/npm/simple-icons@v10.9.0/icons/";

/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Technology name to upstream icon file. The OpenJDK icon stands in for
/// Java, which has no icon of its own upstream.
pub const DEFAULT_MANIFEST: &[(&str, &str)] = &[
    ("angular", "angular.svg"),
    ("spring", "spring.svg"),
    ("springboot", "springboot.svg"),
    ("fastapi", "fastapi.svg"),
    ("python", "python.svg"),
    ("mysql", "mysql.svg"),
    ("docker", "docker.svg"),
    ("kubernetes", "kubernetes.svg"),
    ("gitlab", "gitlab.svg"),
    ("javascript", "javascript.svg"),
    ("typescript", "typescript.svg"),
    ("html5", "html5.svg"),
    ("css3", "css3.svg"),
    ("git", "git.svg"),
    ("visualstudiocode", "visualstudiocode.svg"),
    ("postman", "postman.svg"),
    ("java", "openjdk.svg"),
];

/// A single logo download failure.
#[derive(Debug, Error)]
pub enum LogoError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Tally of a logo fetch run.
#[derive(Debug, Default)]
pub struct LogoSummary {
    fetched: Vec<String>,
    failed: Vec<(String, LogoError)>,
}

impl LogoSummary {
    /// Names of the logos written to disk.
    pub fn fetched(&self) -> &[String] {
        &self.fetched
    }

    /// Names and errors of the logos that failed.
    pub fn failed(&self) -> &[(String, LogoError)] {
        &self.failed
    }

    /// Number of logos attempted.
    pub fn total(&self) -> usize {
        self.fetched.len() + self.failed.len()
    }

    /// Human-readable one-line summary.
    pub fn report(&self) -> String {
        format!(
            "Downloaded {} of {} logos",
            self.fetched.len(),
            self.total()
        )
    }
}

/// HTTP client fetching logos one by one.
pub struct LogoFetcher {
    agent: Agent,
    base_url: String,
}

impl LogoFetcher {
    /// Create a fetcher against the given base URL with a request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    /// Fetch every manifest entry into `dest`, writing
    /// `<dest>/<name>-logo.svg` per success and continuing past failures.
    ///
    /// # Errors
    ///
    /// Only creating the destination directory is fatal; individual
    /// download failures are recorded in the summary.
    pub fn fetch_all(
        &self,
        dest: &Path,
        manifest: &[(&str, &str)],
    ) -> Result<LogoSummary, StencilError> {
        fs::create_dir_all(dest)?;

        let mut summary = LogoSummary::default();

        for (name, file) in manifest {
            match self.fetch_one(dest, name, file) {
                Ok(()) => {
                    info!(logo = *name; "Downloaded logo");
                    summary.fetched.push((*name).to_string());
                }
                Err(err) => {
                    warn!(logo = *name; "Failed to download logo: {err}");
                    summary.failed.push(((*name).to_string(), err));
                }
            }
        }

        Ok(summary)
    }

    fn fetch_one(&self, dest: &Path, name: &str, file: &str) -> Result<(), LogoError> {
        let url = format!("{}{}", self.base_url, file);

        let response = self
            .agent
            .get(&url)
            .call()
            .map_err(|e| LogoError::Http(e.to_string()))?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(LogoError::Status(status));
        }

        let body = response
            .into_body()
            .read_to_vec()
            .map_err(|e| LogoError::Http(e.to_string()))?;

        let path = dest.join(format!("{name}-logo.svg"));
        fs::write(path, body)?;
        Ok(())
    }
}

impl Default for LogoFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_names_are_unique() {
        let mut names: Vec<&str> = DEFAULT_MANIFEST.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DEFAULT_MANIFEST.len());
    }

    #[test]
    fn test_manifest_targets_svg_files() {
        for (_, file) in DEFAULT_MANIFEST {
            assert!(file.ends_with(".svg"), "{file} is not an SVG");
        }
    }

    #[test]
    fn test_unreachable_source_reports_all_failures_and_continues() {
        let dir = tempfile::tempdir().unwrap();
        // A port in TEST-NET space that nothing listens on; each entry fails
        // independently and the run still completes.
        let fetcher = LogoFetcher::new(
            "http://127.0.0.1:1/icons/",
            Duration::from_millis(200),
        );

        let manifest = &[("angular", "angular.svg"), ("mysql", "mysql.svg")];
        let summary = fetcher.fetch_all(dir.path(), manifest).unwrap();

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.fetched().len(), 0);
        assert_eq!(summary.failed().len(), 2);
        assert_eq!(summary.report(), "Downloaded 0 of 2 logos");
    }
}

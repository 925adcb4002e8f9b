// Scenario runner - sequential, isolated, failure-tolerant
//
// Scenarios run in registration order against a shared browser session.
// Each one gets a fresh fixture, and the fixture is released on every
// exit path: success, error, or panic. A failing scenario is recorded
// and the run moves on; only session launch failure aborts the suite.

use std::panic::AssertUnwindSafe;
use std::time::{Duration, Instant};

use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::error::Result;
use crate::fixture::PageFixture;
use crate::session::BrowserSession;

/// A boxed scenario body.
pub type ScenarioFuture = BoxFuture<'static, Result<()>>;

type ScenarioFn = Box<dyn Fn(PageFixture) -> ScenarioFuture + Send + Sync>;

struct Scenario {
    name: &'static str,
    run: ScenarioFn,
}

/// An ordered collection of named scenarios.
#[derive(Default)]
pub struct Suite {
    scenarios: Vec<Scenario>,
}

impl Suite {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named scenario.
    ///
    /// The body receives a fixture clone; the suite keeps its own handle
    /// so teardown runs even when the body panics.
    pub fn register<F>(&mut self, name: &'static str, run: F) -> &mut Self
    where
        F: Fn(PageFixture) -> ScenarioFuture + Send + Sync + 'static,
    {
        self.scenarios.push(Scenario {
            name,
            run: Box::new(run),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Runs every scenario sequentially and reports per-scenario
    /// outcomes.
    pub async fn run(&self, session: &BrowserSession) -> SuiteReport {
        let mut results = Vec::with_capacity(self.scenarios.len());

        for scenario in &self.scenarios {
            tracing::info!(name = scenario.name, "scenario starting");
            let started = Instant::now();

            let outcome = match PageFixture::acquire(session).await {
                Err(e) => Outcome::Failed(format!("fixture setup failed: {e}")),
                Ok(fixture) => {
                    let body = (scenario.run)(fixture.clone());
                    let outcome = match AssertUnwindSafe(body).catch_unwind().await {
                        Ok(Ok(())) => Outcome::Passed,
                        Ok(Err(e)) => Outcome::Failed(e.to_string()),
                        Err(payload) => {
                            Outcome::Failed(format!("scenario panicked: {}", panic_message(&payload)))
                        }
                    };

                    // Teardown runs regardless of the scenario's outcome.
                    if let Err(e) = fixture.release().await {
                        tracing::warn!(name = scenario.name, error = %e, "context teardown failed");
                    }

                    outcome
                }
            };

            let elapsed = started.elapsed();
            match &outcome {
                Outcome::Passed => {
                    tracing::info!(name = scenario.name, ?elapsed, "scenario passed");
                }
                Outcome::Failed(message) => {
                    tracing::error!(name = scenario.name, ?elapsed, %message, "scenario failed");
                }
            }

            results.push(ScenarioResult {
                name: scenario.name,
                outcome,
                elapsed,
            });
        }

        SuiteReport { results }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Outcome of a single scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Failed(String),
}

/// One scenario's recorded result.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub name: &'static str,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }
}

/// Per-scenario outcomes for a whole run.
#[derive(Debug, Clone, Default)]
pub struct SuiteReport {
    results: Vec<ScenarioResult>,
}

impl SuiteReport {
    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed())
    }
}

impl std::fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for result in &self.results {
            match &result.outcome {
                Outcome::Passed => {
                    writeln!(f, "PASS {} ({:.1?})", result.name, result.elapsed)?;
                }
                Outcome::Failed(message) => {
                    writeln!(f, "FAIL {} ({:.1?}): {}", result.name, result.elapsed, message)?;
                }
            }
        }
        write!(f, "{} passed, {} failed", self.passed(), self.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &'static str, outcome: Outcome) -> ScenarioResult {
        ScenarioResult {
            name,
            outcome,
            elapsed: Duration::from_millis(10),
        }
    }

    #[test]
    fn test_report_counts() {
        let report = SuiteReport {
            results: vec![
                result("title", Outcome::Passed),
                result("search", Outcome::Failed("no results".to_string())),
                result("tabs", Outcome::Passed),
            ],
        };
        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn test_report_display_lists_failures() {
        let report = SuiteReport {
            results: vec![
                result("title", Outcome::Passed),
                result("search", Outcome::Failed("no results".to_string())),
            ],
        };
        let rendered = report.to_string();
        assert!(rendered.contains("PASS"));
        assert!(rendered.contains("FAIL"));
        assert!(rendered.contains("no results"));
        assert!(rendered.contains("1 passed, 1 failed"));
    }

    #[test]
    fn test_panic_message_downcasts() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn std::any::Any + Send> = Box::new("boom".to_string());
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload: Box<dyn std::any::Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(payload.as_ref()), "non-string panic payload");
    }

    #[test]
    fn test_empty_suite() {
        let suite = Suite::new();
        assert!(suite.is_empty());
        assert_eq!(suite.len(), 0);
    }
}

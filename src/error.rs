// Error types for the playwright.dev end-to-end suite

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while driving the suite.
///
/// Launch failures are fatal and abort the whole run; everything else is
/// local to the scenario that raised it. Library-level failures (locator
/// timeouts, protocol errors, the built-in locator assertions) arrive
/// through the `Playwright` variant.
#[derive(Debug, Error)]
pub enum Error {
    /// Browser or driver could not be started
    ///
    /// The run cannot continue without a browser process.
    #[error("Failed to launch browser session: {0}")]
    Launch(String),

    /// Navigation did not reach the target URL
    ///
    /// The URL was unreachable or the load-completion condition was not
    /// met within the timeout. Fails the current scenario only.
    #[error("Navigation to '{url}' failed: {reason}")]
    Navigation { url: String, reason: String },

    /// Page-level expectation did not hold before its deadline
    ///
    /// Carries the expected and last-observed values.
    #[error("Assertion timeout: {0}")]
    Assertion(String),

    /// Injected script threw or returned an incompatible type
    #[error("Script evaluation failed: {0}")]
    Script(String),

    /// Error surfaced by the automation library
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),
}

impl Error {
    /// Whether this error should abort the whole run rather than one
    /// scenario.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Launch(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_error_names_url_and_reason() {
        let err = Error::Navigation {
            url: "https://playwright.dev/".to_string(),
            reason: "net::ERR_NAME_NOT_RESOLVED".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("https://playwright.dev/"));
        assert!(message.contains("ERR_NAME_NOT_RESOLVED"));
    }

    #[test]
    fn test_only_launch_errors_are_fatal() {
        assert!(Error::Launch("no executable".to_string()).is_fatal());
        assert!(!Error::Assertion("title mismatch".to_string()).is_fatal());
        assert!(
            !Error::Navigation {
                url: "https://playwright.dev/".to_string(),
                reason: "timeout".to_string(),
            }
            .is_fatal()
        );
    }
}

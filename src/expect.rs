// Page-level expectations with bounded-retry polling
//
// The automation library ships auto-retrying assertions for locators
// (`playwright_rs::expect`); titles and URLs live on the page itself, so
// the suite polls those explicitly: re-evaluate the predicate at a fixed
// interval until it holds or the deadline passes, then fail with the
// expected and last-observed values in the message.

use std::time::Duration;

use playwright_rs::Page;
use url::Url;

use crate::error::{Error, Result};

/// Default timeout for page expectations (5 seconds, matching the
/// library's locator assertions)
const DEFAULT_EXPECTATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval (100ms)
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a retrying expectation over a page's title or URL.
pub fn expect_page(page: &Page) -> PageExpectation {
    PageExpectation::new(page.clone())
}

/// Wraps a page and provides title/URL assertions with bounded retry.
pub struct PageExpectation {
    page: Page,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

// to_* methods consume self, mirroring the library's expect API
#[allow(clippy::wrong_self_convention)]
impl PageExpectation {
    pub(crate) fn new(page: Page) -> Self {
        Self {
            page,
            timeout: DEFAULT_EXPECTATION_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            negate: false,
        }
    }

    /// Sets a custom deadline for this expectation.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets a custom poll interval. Default is 100ms.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Negates the expectation.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Asserts that the page title equals `expected` exactly.
    pub async fn to_have_title(self, expected: &str) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            let actual = self.page.title().await?;

            let matches = if self.negate {
                actual != expected
            } else {
                actual == expected
            };

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected page NOT to have title '{}', but it did after {:?}",
                        expected, self.timeout
                    )
                } else {
                    format!(
                        "Expected page to have title '{}', but had '{}' after {:?}",
                        expected, actual, self.timeout
                    )
                };
                return Err(Error::Assertion(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asserts that the page title matches the regex `pattern`.
    pub async fn to_have_title_matching(self, pattern: &str) -> Result<()> {
        let start = std::time::Instant::now();
        let re = regex::Regex::new(pattern)
            .map_err(|e| Error::Assertion(format!("Invalid title pattern '{pattern}': {e}")))?;

        loop {
            let actual = self.page.title().await?;

            let matches = if self.negate {
                !re.is_match(&actual)
            } else {
                re.is_match(&actual)
            };

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected page title NOT to match '{}', but it did after {:?}",
                        pattern, self.timeout
                    )
                } else {
                    format!(
                        "Expected page title to match '{}', but had '{}' after {:?}",
                        pattern, actual, self.timeout
                    )
                };
                return Err(Error::Assertion(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asserts that the page URL equals `expected`.
    ///
    /// Both sides are parsed so that serializations of the same URL
    /// compare equal (trailing slash on an empty path, default port).
    pub async fn to_have_url(self, expected: &str) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            let actual = self.page.url();

            let equal = urls_equal(&actual, expected);
            let matches = if self.negate { !equal } else { equal };

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected page NOT to have URL '{}', but it did after {:?}",
                        expected, self.timeout
                    )
                } else {
                    format!(
                        "Expected page to have URL '{}', but had '{}' after {:?}",
                        expected, actual, self.timeout
                    )
                };
                return Err(Error::Assertion(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    /// Asserts that the page URL contains the substring `fragment`.
    pub async fn to_have_url_containing(self, fragment: &str) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            let actual = self.page.url();

            let contains = actual.contains(fragment);
            let matches = if self.negate { !contains } else { contains };

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected page URL NOT to contain '{}', but had '{}' after {:?}",
                        fragment, actual, self.timeout
                    )
                } else {
                    format!(
                        "Expected page URL to contain '{}', but had '{}' after {:?}",
                        fragment, actual, self.timeout
                    )
                };
                return Err(Error::Assertion(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Compares two URLs, parsed when possible so that equivalent
/// serializations match.
fn urls_equal(a: &str, b: &str) -> bool {
    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

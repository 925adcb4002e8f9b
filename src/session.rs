// Browser session management - one browser process per suite run
//
// The session is created once before any scenario runs and shut down
// once after the last scenario. Individual scenarios never mutate it;
// they only derive fresh contexts from it.

use playwright_rs::api::LaunchOptions;
use playwright_rs::{Browser, BrowserContext, Playwright};

use crate::error::{Error, Result};

/// Which browser engine the session launches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

/// Launch configuration for the suite's single browser session.
///
/// Defaults to headless chromium. `from_env` mirrors how the suite is
/// driven in CI:
///
/// - `E2E_BROWSER` = `chromium` (default) | `firefox` | `webkit`
/// - `E2E_HEADED` = `1` to run with a visible window
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub browser: BrowserKind,
    pub headless: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            browser: BrowserKind::Chromium,
            headless: true,
        }
    }
}

impl SessionConfig {
    /// Reads the configuration from the environment, falling back to
    /// headless chromium.
    pub fn from_env() -> Self {
        let browser = match std::env::var("E2E_BROWSER").as_deref() {
            Ok("firefox") => BrowserKind::Firefox,
            Ok("webkit") => BrowserKind::Webkit,
            _ => BrowserKind::Chromium,
        };
        let headless = std::env::var("E2E_HEADED").as_deref() != Ok("1");
        Self { browser, headless }
    }
}

/// Owns the Playwright driver connection and the single browser process
/// for the whole run.
pub struct BrowserSession {
    playwright: Playwright,
    browser: Browser,
    config: SessionConfig,
}

impl BrowserSession {
    /// Launches the driver and one browser using the environment
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Launch`] if the driver or the browser process
    /// cannot be started. This is fatal: without a browser there is
    /// nothing to run scenarios against.
    pub async fn launch() -> Result<Self> {
        Self::launch_with(SessionConfig::from_env()).await
    }

    /// Launches the driver and one browser with an explicit
    /// configuration.
    pub async fn launch_with(config: SessionConfig) -> Result<Self> {
        tracing::info!(
            browser = config.browser.as_str(),
            headless = config.headless,
            "launching browser session"
        );

        let playwright = Playwright::launch()
            .await
            .map_err(|e| Error::Launch(format!("Playwright driver: {e}")))?;

        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };

        let browser = browser_type
            .launch_with_options(LaunchOptions::new().headless(config.headless))
            .await
            .map_err(|e| Error::Launch(format!("{} browser: {e}", config.browser.as_str())))?;

        tracing::info!(
            name = browser.name(),
            version = browser.version(),
            "browser session ready"
        );

        Ok(Self {
            playwright,
            browser,
            config,
        })
    }

    /// The browser handle shared by every scenario.
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// The configuration the session was launched with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Creates a fresh, storage-isolated browsing context.
    pub async fn new_context(&self) -> Result<BrowserContext> {
        Ok(self.browser.new_context().await?)
    }

    /// Closes the browser and the driver connection.
    ///
    /// Called once at the end of the run; every context must already be
    /// closed by its scenario's teardown.
    pub async fn shutdown(self) -> Result<()> {
        tracing::info!("shutting down browser session");
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_headless_chromium() {
        let config = SessionConfig::default();
        assert_eq!(config.browser, BrowserKind::Chromium);
        assert!(config.headless);
    }

    #[test]
    fn test_browser_kind_names() {
        assert_eq!(BrowserKind::Chromium.as_str(), "chromium");
        assert_eq!(BrowserKind::Firefox.as_str(), "firefox");
        assert_eq!(BrowserKind::Webkit.as_str(), "webkit");
    }
}

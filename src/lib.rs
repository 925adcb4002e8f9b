//! playwright-dev-e2e: end-to-end UI test harness for the playwright.dev
//! documentation site.
//!
//! Browser automation comes from the `playwright-rs` crate; this crate
//! is the glue around it: one browser session per run, one isolated
//! browsing context per scenario, and a sequential runner that records
//! per-scenario outcomes and guarantees context teardown on every exit
//! path.
//!
//! # Example
//!
//! ```ignore
//! use playwright_dev_e2e::{BrowserSession, Suite, expect_page};
//!
//! #[tokio::main]
//! async fn main() -> playwright_dev_e2e::Result<()> {
//!     let session = BrowserSession::launch().await?;
//!
//!     let mut suite = Suite::new();
//!     suite.register("title contains Playwright", |fx| {
//!         Box::pin(async move {
//!             fx.goto("https://playwright.dev/").await?;
//!             expect_page(fx.page())
//!                 .to_have_title_matching("Playwright")
//!                 .await
//!         })
//!     });
//!
//!     let report = suite.run(&session).await;
//!     session.shutdown().await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

mod error;
pub mod expect;
pub mod fixture;
pub mod query;
pub mod session;
pub mod suite;

pub use error::{Error, Result};
pub use expect::{PageExpectation, expect_page};
pub use fixture::PageFixture;
pub use query::ElementQuery;
pub use session::{BrowserKind, BrowserSession, SessionConfig};
pub use suite::{Outcome, ScenarioFuture, Suite, SuiteReport};

/// Root of the site under test.
pub const BASE_URL: &str = "https://playwright.dev/";

/// Baseline documentation page used by the search and navigation
/// scenarios.
pub const DOCS_INTRO_URL: &str = "https://playwright.dev/docs/intro";

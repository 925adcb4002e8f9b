// Per-scenario fixtures - isolated context plus page
//
// Each scenario gets a context with empty cookies and storage, derived
// from the shared browser session. The runner releases the fixture on
// every exit path so nothing leaks into the next scenario.

use playwright_rs::{BrowserContext, GotoOptions, Page, WaitUntil};

use crate::error::{Error, Result};
use crate::session::BrowserSession;

/// An isolated browsing context and its initial page, scoped to one
/// scenario.
#[derive(Clone)]
pub struct PageFixture {
    context: BrowserContext,
    page: Page,
}

impl PageFixture {
    /// Acquires a fresh context and page from the shared session.
    pub async fn acquire(session: &BrowserSession) -> Result<Self> {
        let context = session.new_context().await?;
        let page = context.new_page().await?;
        Ok(Self { context, page })
    }

    /// The scenario's primary page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The isolated context owning this fixture's pages.
    pub fn context(&self) -> &BrowserContext {
        &self.context
    }

    /// Opens a sibling page (tab) in the same context.
    ///
    /// The new page shares cookies and storage with the fixture's
    /// primary page but navigates independently.
    pub async fn open_page(&self) -> Result<Page> {
        Ok(self.context.new_page().await?)
    }

    /// Navigates the primary page, waiting for the default load event.
    pub async fn goto(&self, url: &str) -> Result<()> {
        navigate(&self.page, url, None).await
    }

    /// Navigates the primary page, waiting for the given load-completion
    /// condition.
    pub async fn goto_until(&self, url: &str, wait_until: WaitUntil) -> Result<()> {
        navigate(&self.page, url, Some(wait_until)).await
    }

    /// Closes the context and every page within it.
    pub async fn release(self) -> Result<()> {
        self.context.close().await?;
        Ok(())
    }
}

/// Navigates a page and maps failures into the suite's navigation error.
pub async fn navigate(page: &Page, url: &str, wait_until: Option<WaitUntil>) -> Result<()> {
    let options = wait_until.map(|w| GotoOptions::new().wait_until(w));
    page.goto(url, options).await.map_err(|e| Error::Navigation {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    Ok(())
}

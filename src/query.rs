// Element queries - lazy, string-keyed locator lookups
//
// A query is rendered to a Playwright selector and resolved against the
// live DOM at the moment an action or assertion runs. Nothing is cached:
// resolving the same query twice can match different elements if the
// page changed in between.

use playwright_rs::{Locator, Page};

/// A deferred element lookup, in one of the selector dialects the suite
/// uses against playwright.dev.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementQuery {
    /// Match by visible text (`text=` engine, substring semantics).
    Text(String),
    /// Raw CSS selector, passed through unchanged.
    Css(String),
    /// Match an input by its `placeholder` attribute.
    Placeholder(String),
    /// Match by ARIA role and accessible name.
    Role { role: String, name: String },
}

impl ElementQuery {
    pub fn text(text: impl Into<String>) -> Self {
        ElementQuery::Text(text.into())
    }

    pub fn css(selector: impl Into<String>) -> Self {
        ElementQuery::Css(selector.into())
    }

    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        ElementQuery::Placeholder(placeholder.into())
    }

    pub fn role(role: impl Into<String>, name: impl Into<String>) -> Self {
        ElementQuery::Role {
            role: role.into(),
            name: name.into(),
        }
    }

    /// Renders the query as a Playwright selector string.
    pub fn to_selector(&self) -> String {
        match self {
            ElementQuery::Text(text) => format!("text={text}"),
            ElementQuery::Css(selector) => selector.clone(),
            ElementQuery::Placeholder(placeholder) => {
                format!("[placeholder=\"{placeholder}\"]")
            }
            ElementQuery::Role { role, name } => format!("role={role}[name=\"{name}\"]"),
        }
    }

    /// Resolves the query against a page, producing a locator.
    ///
    /// The locator itself stays lazy; the library re-evaluates it on
    /// every action and assertion.
    pub async fn resolve(&self, page: &Page) -> Locator {
        page.locator(&self.to_selector()).await
    }
}

impl std::fmt::Display for ElementQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_selector())
    }
}

//! Header search widget state.
//!
//! ```text
//!            submit (non-empty)           response / failure
//!   Idle ──────────────────────▶ Searching ─────────────────▶ ShowingResults
//!    ▲                               ▲                            │
//!    │ select                        │ submit                     │ outside click
//!    └───────────────────────────────┴──────── Dismissed ◀────────┘
//! ```
//!
//! The same widget backs the desktop and the narrow-viewport header; each
//! layout keeps its own state.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::ProductRepository;
use crate::route::Route;
use crate::types::{ProductId, SearchResult};

/// Which header layout a widget instance renders in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchLayout {
    #[default]
    Desktop,
    Mobile,
}

impl SearchLayout {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
        }
    }
}

impl fmt::Display for SearchLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Observable state of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Searching,
    ShowingResults,
    Dismissed,
}

/// Query text, results and the busy/visible flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchWidget {
    query: String,
    results: Vec<SearchResult>,
    is_searching: bool,
    show_results: bool,
    dismissed: bool,
}

impl SearchWidget {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    #[must_use]
    pub const fn is_searching(&self) -> bool {
        self.is_searching
    }

    #[must_use]
    pub const fn show_results(&self) -> bool {
        self.show_results
    }

    #[must_use]
    pub const fn phase(&self) -> SearchPhase {
        if self.is_searching {
            SearchPhase::Searching
        } else if self.show_results {
            SearchPhase::ShowingResults
        } else if self.dismissed {
            SearchPhase::Dismissed
        } else {
            SearchPhase::Idle
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search for the current query.
    ///
    /// Returns the trimmed query to send, or `None` (and changes nothing)
    /// when it is blank.
    pub fn begin(&mut self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            return None;
        }
        let trimmed = trimmed.to_string();
        self.is_searching = true;
        self.show_results = true;
        self.dismissed = false;
        Some(trimmed)
    }

    /// Finish a search. Any failure becomes an empty result list.
    pub fn complete<E: fmt::Display>(&mut self, outcome: Result<Vec<SearchResult>, E>) {
        self.results = match outcome {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!(error = %e, "Search error");
                Vec::new()
            }
        };
        self.is_searching = false;
    }

    /// Run a search against `repo` if the query is non-blank.
    pub async fn submit<R: ProductRepository>(&mut self, repo: &R) {
        let Some(query) = self.begin() else {
            return;
        };
        let outcome = repo.search_by_brand(&query).await;
        self.complete(outcome);
    }

    /// A pointer interaction landed outside the widget.
    ///
    /// Hides the dropdown; the stored results stay as they are.
    pub fn dismiss(&mut self) {
        if self.show_results {
            self.show_results = false;
            self.dismissed = true;
        }
    }

    /// The visitor picked a result: reset the query and hide the dropdown.
    pub fn select(&mut self, id: ProductId) -> Route {
        self.query.clear();
        self.show_results = false;
        self.dismissed = false;
        Route::Product(id)
    }
}

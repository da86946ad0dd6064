//! Search-term rotation.
//!
//! Every "page" of the feed is a fresh search for the next term in a fixed
//! list; the API's own `page` parameter is never advanced.  Successive pages
//! are therefore unrelated result sets.

use anyhow::{bail, Result};

/// Terms used when the configuration does not override them.
pub const DEFAULT_SEARCH_TERMS: [&str; 16] = [
    "space",
    "apollo",
    "mars",
    "earth",
    "galaxy",
    "nebula",
    "satellite",
    "astronaut",
    "moon",
    "jupiter",
    "saturn",
    "hubble",
    "telescope",
    "solar",
    "planet",
    "comet",
];

/// Cycles through a fixed, non-empty list of terms forever.
///
/// Not synchronised: the owner must serialise calls to [`next`](Self::next).
/// In this application the rotator lives inside the fetcher, which is owned
/// by the single fetch worker task.
#[derive(Debug, Clone)]
pub struct SearchTermRotator {
    terms: Vec<String>,
    cursor: u64,
}

impl SearchTermRotator {
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();
        if terms.is_empty() {
            bail!("search term list must not be empty");
        }
        Ok(Self { terms, cursor: 0 })
    }

    /// Return the current term and advance.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> &str {
        let index = self.index();
        self.cursor = self.cursor.wrapping_add(1);
        &self.terms[index]
    }

    /// The term the next call to [`next`](Self::next) will return.
    pub fn peek(&self) -> &str {
        &self.terms[self.index()]
    }

    fn index(&self) -> usize {
        (self.cursor % self.terms.len() as u64) as usize
    }
}

impl Default for SearchTermRotator {
    fn default() -> Self {
        Self {
            terms: DEFAULT_SEARCH_TERMS.iter().map(|t| t.to_string()).collect(),
            cursor: 0,
        }
    }
}

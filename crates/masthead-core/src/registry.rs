//! The `Press` context: owner of every author, magazine and article.
//!
//! The magazine and article registries are append-only and keep insertion
//! order. Nothing is ever removed or reset; a fresh `Press` starts empty.
//! All mutation goes through `&mut Press`, so append and scan can never race.
//! Every press carries a process-unique tag that is stamped into the ids it
//! mints; lookups reject ids stamped by any other press.

use crate::article::Article;
use crate::author::Author;
use crate::config::MastheadConfig;
use crate::error::ValidationError;
use crate::ids::{ArticleId, AuthorId, MagazineId};
use crate::magazine::Magazine;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PRESS_TAG: AtomicU64 = AtomicU64::new(1);

/// Registry-backed relationship graph of authors, magazines and articles.
///
/// A clone keeps the tag of its source, so ids stay valid in both copies.
#[derive(Debug, Clone)]
pub struct Press {
    pub(crate) tag: u64,
    pub(crate) config: MastheadConfig,
    pub(crate) authors: Vec<Author>,
    /// Every magazine ever constructed, in registration order.
    pub(crate) magazines: Vec<Magazine>,
    /// Every article ever constructed, in registration order.
    pub(crate) articles: Vec<Article>,
}

/// Aggregate counts over the registries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PressStats {
    pub authors: usize,
    pub magazines: usize,
    pub articles: usize,
    /// Magazines with at least one article.
    pub active_magazines: usize,
    /// Authors with at least one article.
    pub active_authors: usize,
}

impl Press {
    /// Create an empty press with default field limits.
    pub fn new() -> Self {
        Self {
            tag: NEXT_PRESS_TAG.fetch_add(1, Ordering::Relaxed),
            config: MastheadConfig::default(),
            authors: Vec::new(),
            magazines: Vec::new(),
            articles: Vec::new(),
        }
    }

    /// Create an empty press whose validators use `config`'s limits.
    ///
    /// Fails when the limits are inconsistent or looser than the defaults.
    pub fn with_config(config: MastheadConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &MastheadConfig {
        &self.config
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// All magazines in registration order.
    pub fn magazines(&self) -> &[Magazine] {
        &self.magazines
    }

    /// All articles in registration order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Look up an author. `None` for ids minted by another press.
    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        if id.press() != self.tag {
            return None;
        }
        self.authors.get(id.index())
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        if id.press() != self.tag {
            return None;
        }
        self.magazines.get(id.index())
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        if id.press() != self.tag {
            return None;
        }
        self.articles.get(id.index())
    }

    pub fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        if id.press() != self.tag {
            return None;
        }
        self.authors.get_mut(id.index())
    }

    pub fn magazine_mut(&mut self, id: MagazineId) -> Option<&mut Magazine> {
        if id.press() != self.tag {
            return None;
        }
        self.magazines.get_mut(id.index())
    }

    pub fn article_mut(&mut self, id: ArticleId) -> Option<&mut Article> {
        if id.press() != self.tag {
            return None;
        }
        self.articles.get_mut(id.index())
    }

    /// Recompute registry counts.
    pub fn stats(&self) -> PressStats {
        let active_magazines: BTreeSet<MagazineId> =
            self.articles.iter().map(Article::magazine).collect();
        let active_authors: BTreeSet<AuthorId> =
            self.articles.iter().map(Article::author).collect();
        PressStats {
            authors: self.authors.len(),
            magazines: self.magazines.len(),
            articles: self.articles.len(),
            active_magazines: active_magazines.len(),
            active_authors: active_authors.len(),
        }
    }

    pub(crate) fn require_author(&self, id: AuthorId) -> Result<(), ValidationError> {
        if self.author(id).is_none() {
            return Err(ValidationError::UnknownAuthor(id));
        }
        Ok(())
    }

    pub(crate) fn require_magazine(&self, id: MagazineId) -> Result<(), ValidationError> {
        if self.magazine(id).is_none() {
            return Err(ValidationError::UnknownMagazine(id));
        }
        Ok(())
    }
}

impl Default for Press {
    fn default() -> Self {
        Self::new()
    }
}

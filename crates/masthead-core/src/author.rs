//! Authors and the queries derived from the articles they wrote.

use crate::article::Article;
use crate::error::ValidationError;
use crate::ids::{ArticleId, AuthorId, MagazineId};
use crate::registry::Press;
use crate::validation;
use std::collections::BTreeSet;

/// A named contributor. The name is fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Always a no-op: author names are immutable and the attempt is not an error.
    pub fn set_name(&mut self, name: &str) {
        tracing::trace!("ignored rename of {} to {:?}", self.id, name);
    }
}

impl Press {
    /// Register a new author.
    ///
    /// Fails with [`ValidationError::EmptyAuthorName`] when `name` is empty.
    pub fn create_author(&mut self, name: impl Into<String>) -> Result<AuthorId, ValidationError> {
        let name = name.into();
        validation::validate_author_name(&name)?;
        let id = AuthorId::new(self.tag, self.authors.len());
        tracing::debug!("registered {} {:?}", id, name);
        self.authors.push(Author { id, name });
        Ok(id)
    }

    /// Articles written by `author`, in registry order.
    pub fn author_articles(&self, author: AuthorId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.author() == author)
            .collect()
    }

    /// Distinct magazines `author` has written for.
    pub fn author_magazines(&self, author: AuthorId) -> BTreeSet<MagazineId> {
        self.author_articles(author)
            .into_iter()
            .map(Article::magazine)
            .collect()
    }

    /// Create an article by `author` in `magazine`.
    ///
    /// Validation is that of [`Press::create_article`].
    pub fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, ValidationError> {
        self.create_article(author, magazine, title)
    }

    /// Distinct categories of the magazines `author` has written for.
    ///
    /// `None` when the author has no articles at all.
    pub fn author_topic_areas(&self, author: AuthorId) -> Option<BTreeSet<&str>> {
        if self.author_articles(author).is_empty() {
            return None;
        }
        Some(
            self.author_magazines(author)
                .into_iter()
                .filter_map(|id| self.magazine(id))
                .map(|m| m.category())
                .collect(),
        )
    }
}

//! Articles: the join records linking one author to one magazine.

use crate::error::ValidationError;
use crate::ids::{ArticleId, AuthorId, MagazineId};
use crate::registry::Press;
use crate::validation;

/// A titled piece written by one author for one magazine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    pub fn id(&self) -> ArticleId {
        self.id
    }

    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Always a no-op: titles are immutable and the attempt is not an error.
    pub fn set_title(&mut self, title: &str) {
        tracing::trace!("ignored retitle of {} to {:?}", self.id, title);
    }
}

impl Press {
    /// Register a new article linking `author` and `magazine`.
    ///
    /// Both ids must resolve in this press and the title must satisfy the
    /// configured length bounds (5..=50 by default).
    pub fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: impl Into<String>,
    ) -> Result<ArticleId, ValidationError> {
        let title = title.into();
        self.require_author(author)?;
        self.require_magazine(magazine)?;
        validation::validate_title(&title, self.config.limits.article_title)?;

        let id = ArticleId::new(self.tag, self.articles.len());
        tracing::debug!("registered {} by {} in {}: {:?}", id, author, magazine, title);
        self.articles.push(Article {
            id,
            author,
            magazine,
            title,
        });
        Ok(id)
    }

    /// Reassign the author of `article`.
    ///
    /// Strict: an author unknown to this press is an error and the article
    /// keeps its current author.
    pub fn set_article_author(
        &mut self,
        article: ArticleId,
        author: AuthorId,
    ) -> Result<(), ValidationError> {
        if let Err(err) = self.require_author(author) {
            tracing::debug!("rejected author reassignment of {}: {}", article, err);
            return Err(err);
        }
        let record = self
            .article_mut(article)
            .ok_or(ValidationError::UnknownArticle(article))?;
        record.author = author;
        Ok(())
    }

    /// Reassign the magazine of `article`. Same contract as [`Press::set_article_author`].
    pub fn set_article_magazine(
        &mut self,
        article: ArticleId,
        magazine: MagazineId,
    ) -> Result<(), ValidationError> {
        if let Err(err) = self.require_magazine(magazine) {
            tracing::debug!("rejected magazine reassignment of {}: {}", article, err);
            return Err(err);
        }
        let record = self
            .article_mut(article)
            .ok_or(ValidationError::UnknownArticle(article))?;
        record.magazine = magazine;
        Ok(())
    }
}

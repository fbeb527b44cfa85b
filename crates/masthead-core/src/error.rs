//! Validation errors raised by constructors and strict setters.

use crate::ids::{ArticleId, AuthorId, MagazineId};

/// The single error kind of the relationship graph.
///
/// Raised synchronously at the construction or assignment call site; nothing
/// is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("author name must be a non-empty string")]
    EmptyAuthorName,
    #[error("magazine name must be between {min} and {max} characters, got {len}")]
    MagazineName { len: usize, min: usize, max: usize },
    #[error("magazine category must be a non-empty string")]
    EmptyCategory,
    #[error("article title must be between {min} and {max} characters, got {len}")]
    ArticleTitle { len: usize, min: usize, max: usize },
    #[error("author must be an author registered in this press ({0} not found)")]
    UnknownAuthor(AuthorId),
    #[error("magazine must be a magazine registered in this press ({0} not found)")]
    UnknownMagazine(MagazineId),
    #[error("article {0} not found")]
    UnknownArticle(ArticleId),
}

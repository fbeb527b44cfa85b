//! Core types for the masthead relationship graph.
//!
//! Models authors, magazines and the articles that join them, all owned by a
//! single [`registry::Press`] context. Relationships are established only by
//! creating articles; every query ([`registry::Press::author_magazines`],
//! [`registry::Press::top_publisher`], ...) rescans the registries on demand.

pub mod article;
pub mod author;
pub mod config;
pub mod error;
pub mod ids;
pub mod magazine;
pub mod registry;
pub mod validation;

pub use article::Article;
pub use author::Author;
pub use config::{LengthLimit, LimitsConfig, MastheadConfig};
pub use error::ValidationError;
pub use ids::{ArticleId, AuthorId, MagazineId};
pub use magazine::Magazine;
pub use registry::{Press, PressStats};

//! Magazines, their contributors, and the registry-wide top publisher.

use crate::article::Article;
use crate::config::LengthLimit;
use crate::error::ValidationError;
use crate::ids::{AuthorId, MagazineId};
use crate::registry::Press;
use crate::validation;
use std::collections::BTreeSet;

/// Contributors need strictly more than this many articles in a magazine to
/// count as contributing authors.
const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// A named, categorized publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    /// Name bounds in force when the magazine was registered.
    name_limit: LengthLimit,
}

impl Magazine {
    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replace the name if it satisfies the length bounds.
    ///
    /// An invalid name is silently ignored and the previous name kept.
    pub fn set_name(&mut self, name: &str) {
        if validation::validate_magazine_name(name, self.name_limit).is_ok() {
            self.name = name.to_string();
        } else {
            tracing::trace!("ignored invalid name {:?} for {}", name, self.id);
        }
    }

    /// Replace the category if it is non-empty, otherwise silently keep the old one.
    pub fn set_category(&mut self, category: &str) {
        if validation::validate_category(category).is_ok() {
            self.category = category.to_string();
        } else {
            tracing::trace!("ignored empty category for {}", self.id);
        }
    }
}

impl Press {
    /// Register a new magazine at the end of the magazine registry.
    pub fn create_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<MagazineId, ValidationError> {
        let name = name.into();
        let category = category.into();
        let name_limit = self.config.limits.magazine_name;
        validation::validate_magazine_name(&name, name_limit)?;
        validation::validate_category(&category)?;

        let id = MagazineId::new(self.tag, self.magazines.len());
        tracing::debug!("registered {} {:?} in {:?}", id, name, category);
        self.magazines.push(Magazine {
            id,
            name,
            category,
            name_limit,
        });
        Ok(id)
    }

    /// Articles published in `magazine`, in registry order.
    pub fn magazine_articles(&self, magazine: MagazineId) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.magazine() == magazine)
            .collect()
    }

    /// Distinct authors who have written for `magazine`.
    pub fn magazine_contributors(&self, magazine: MagazineId) -> BTreeSet<AuthorId> {
        self.magazine_articles(magazine)
            .into_iter()
            .map(Article::author)
            .collect()
    }

    /// Titles of the magazine's articles, ordered as [`Press::magazine_articles`].
    ///
    /// `None` when the magazine has no articles.
    pub fn magazine_article_titles(&self, magazine: MagazineId) -> Option<Vec<&str>> {
        let articles = self.magazine_articles(magazine);
        if articles.is_empty() {
            return None;
        }
        Some(articles.into_iter().map(Article::title).collect())
    }

    /// Contributors with more than two articles in `magazine`.
    ///
    /// Ordered by contributor iteration order (registration order of the
    /// author), not by article count. `None` when nobody qualifies.
    pub fn magazine_contributing_authors(&self, magazine: MagazineId) -> Option<Vec<AuthorId>> {
        let articles = self.magazine_articles(magazine);
        let authors: Vec<AuthorId> = self
            .magazine_contributors(magazine)
            .into_iter()
            .filter(|&author| {
                articles.iter().filter(|a| a.author() == author).count()
                    > CONTRIBUTING_AUTHOR_THRESHOLD
            })
            .collect();
        if authors.is_empty() {
            None
        } else {
            Some(authors)
        }
    }

    /// The magazine with the most articles across the whole registry.
    ///
    /// Ties go to the magazine registered first. `None` when no article
    /// exists anywhere.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        if self.articles.is_empty() {
            return None;
        }
        let mut counts = vec![0usize; self.magazines.len()];
        for article in &self.articles {
            if let Some(count) = counts.get_mut(article.magazine().index()) {
                *count += 1;
            }
        }

        let mut best: Option<(usize, &Magazine)> = None;
        for (magazine, &count) in self.magazines.iter().zip(&counts) {
            // Strict comparison keeps the earliest magazine among equals.
            if best.is_none_or(|(best_count, _)| count > best_count) {
                best = Some((count, magazine));
            }
        }
        best.map(|(_, magazine)| magazine)
    }
}

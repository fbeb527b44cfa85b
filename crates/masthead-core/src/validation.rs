//! String-field validation shared by constructors and mutators.
//!
//! Lengths count Unicode scalar values, not bytes.

use crate::config::LengthLimit;
use crate::error::ValidationError;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyAuthorName);
    }
    Ok(())
}

pub fn validate_magazine_name(name: &str, limit: LengthLimit) -> Result<(), ValidationError> {
    let len = char_len(name);
    if !limit.contains(len) {
        return Err(ValidationError::MagazineName {
            len,
            min: limit.min,
            max: limit.max,
        });
    }
    Ok(())
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }
    Ok(())
}

pub fn validate_title(title: &str, limit: LengthLimit) -> Result<(), ValidationError> {
    let len = char_len(title);
    if !limit.contains(len) {
        return Err(ValidationError::ArticleTitle {
            len,
            min: limit.min,
            max: limit.max,
        });
    }
    Ok(())
}

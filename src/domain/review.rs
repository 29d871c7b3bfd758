//! Review domain model
//!
//! Reviews are ephemeral per-recipe-page state; they are never written to
//! the persistent store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::{Error, Result};

/// A user review of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    /// 1-5 integer rating
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
    pub helpful_count: u32,
}

impl Review {
    /// Create a new review dated today.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the rating is outside 1-5 or the
    /// comment is blank.
    pub fn new(
        user_id: Uuid,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self> {
        if !(1..=5).contains(&rating) {
            return Err(Error::validation(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }

        let comment = comment.into().trim().to_string();
        if comment.is_empty() {
            return Err(Error::validation("review comment cannot be empty"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            user_name: user_name.into(),
            rating,
            comment,
            date: chrono::Utc::now().date_naive(),
            helpful_count: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_review() {
        let review = Review::new(Uuid::new_v4(), "Test User", 5, "Delicious!").unwrap();
        assert_eq!(review.rating, 5);
        assert_eq!(review.helpful_count, 0);
    }

    #[test]
    fn test_rating_out_of_range_is_rejected() {
        assert!(Review::new(Uuid::new_v4(), "Test User", 0, "meh").is_err());
        assert!(Review::new(Uuid::new_v4(), "Test User", 6, "wow").is_err());
    }

    #[test]
    fn test_blank_comment_is_rejected() {
        let result = Review::new(Uuid::new_v4(), "Test User", 4, "   ");
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_comment_is_trimmed() {
        let review = Review::new(Uuid::new_v4(), "Test User", 4, "  tasty  ").unwrap();
        assert_eq!(review.comment, "tasty");
    }
}

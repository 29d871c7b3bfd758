//! Review service - ephemeral per-recipe reviews
//!
//! Reviews live only for the lifetime of this service; nothing here touches
//! the persistent store. Each recipe page starts from the same canned
//! sample reviews, and submissions go through the usual simulated round
//! trip before landing at the front of the list.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::result::Result;
use crate::domain::{Recipe, Review, User};

/// Review state for the recipe pages of one session
pub struct ReviewService {
    submit_delay: Duration,
    reviews: RwLock<HashMap<String, Vec<Review>>>,
}

impl ReviewService {
    pub fn new(submit_delay: Duration) -> Self {
        Self {
            submit_delay,
            reviews: RwLock::new(HashMap::new()),
        }
    }

    /// The reviews for a recipe, newest first.
    ///
    /// The first read of a recipe seeds the sample reviews.
    pub fn reviews_for(&self, recipe_id: &str) -> Vec<Review> {
        let mut reviews = self
            .reviews
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        reviews
            .entry(recipe_id.to_string())
            .or_insert_with(sample_reviews)
            .clone()
    }

    /// Submit a review for a recipe after the simulated round trip.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an out-of-range rating or a blank
    /// comment; the round trip itself cannot fail.
    pub async fn submit(
        &self,
        recipe_id: &str,
        user: &User,
        rating: u8,
        comment: &str,
    ) -> Result<Review> {
        let review = Review::new(user.id, user.name.clone(), rating, comment)?;

        if !self.submit_delay.is_zero() {
            tokio::time::sleep(self.submit_delay).await;
        }

        let mut reviews = self
            .reviews
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        reviews
            .entry(recipe_id.to_string())
            .or_insert_with(sample_reviews)
            .insert(0, review.clone());

        tracing::debug!(recipe_id, rating, "review submitted");
        Ok(review)
    }

    /// Count a helpful vote for a review. Returns `false` when the review
    /// is unknown.
    pub fn mark_helpful(&self, recipe_id: &str, review_id: Uuid) -> bool {
        let mut reviews = self
            .reviews
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        match reviews
            .get_mut(recipe_id)
            .and_then(|list| list.iter_mut().find(|review| review.id == review_id))
        {
            Some(review) => {
                review.helpful_count += 1;
                true
            }
            None => false,
        }
    }

    /// The average review rating for a recipe, falling back to the catalog
    /// rating when nobody has reviewed it yet.
    pub fn average_rating(&self, recipe: &Recipe) -> f32 {
        let reviews = self.reviews_for(&recipe.id);
        if reviews.is_empty() {
            return recipe.rating;
        }

        let total: u32 = reviews.iter().map(|review| review.rating as u32).sum();
        total as f32 / reviews.len() as f32
    }
}

/// The canned reviews every recipe page starts from
fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            id: Uuid::parse_str("a1a1a1a1-a1a1-a1a1-a1a1-a1a1a1a1a1a1").unwrap(),
            user_id: Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap(),
            user_name: "Sarah Johnson".to_string(),
            rating: 5,
            comment: "Absolutely delicious! My family loved it. The instructions were clear and easy to follow.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            helpful_count: 12,
        },
        Review {
            id: Uuid::parse_str("b2b2b2b2-b2b2-b2b2-b2b2-b2b2b2b2b2b2").unwrap(),
            user_id: Uuid::parse_str("22222222-2222-2222-2222-222222222222").unwrap(),
            user_name: "Mike Chen".to_string(),
            rating: 4,
            comment: "Great recipe! I made a few modifications and it turned out amazing. Will definitely make again.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            helpful_count: 8,
        },
        Review {
            id: Uuid::parse_str("c3c3c3c3-c3c3-c3c3-c3c3-c3c3c3c3c3c3").unwrap(),
            user_id: Uuid::parse_str("33333333-3333-3333-3333-333333333333").unwrap(),
            user_name: "Emma Davis".to_string(),
            rating: 5,
            comment: "Perfect for a weeknight dinner. Quick, easy, and so flavorful!".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            helpful_count: 15,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::RecipeCatalog;

    fn service() -> ReviewService {
        ReviewService::new(Duration::ZERO)
    }

    #[test]
    fn test_first_read_seeds_sample_reviews() {
        let svc = service();
        let reviews = svc.reviews_for("3");

        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].user_name, "Sarah Johnson");
    }

    #[tokio::test]
    async fn test_submit_prepends_newest_first() {
        let svc = service();
        let user = User::new("Test User", "test@example.com");

        let review = svc.submit("3", &user, 4, "Solid weeknight salad").await.unwrap();

        let reviews = svc.reviews_for("3");
        assert_eq!(reviews.len(), 4);
        assert_eq!(reviews[0], review);
        assert_eq!(reviews[0].helpful_count, 0);
    }

    #[tokio::test]
    async fn test_submit_validates_rating() {
        let svc = service();
        let user = User::new("Test User", "test@example.com");

        assert!(svc.submit("3", &user, 0, "bad").await.is_err());
        assert!(svc.submit("3", &user, 6, "too good").await.is_err());
    }

    #[test]
    fn test_mark_helpful_increments() {
        let svc = service();
        let first = svc.reviews_for("3")[0].clone();

        assert!(svc.mark_helpful("3", first.id));

        assert_eq!(svc.reviews_for("3")[0].helpful_count, first.helpful_count + 1);
        assert!(!svc.mark_helpful("3", Uuid::new_v4()));
    }

    #[test]
    fn test_average_rating_follows_reviews() {
        let svc = service();
        let catalog = RecipeCatalog::builtin();
        let recipe = catalog.get_by_id("3").unwrap();

        // Seeded reviews: 5, 4, 5
        let average = svc.average_rating(recipe);
        assert!((average - 14.0 / 3.0).abs() < f32::EPSILON);
    }
}

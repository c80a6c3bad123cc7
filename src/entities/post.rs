//! Blog post records

use crate::core::record::RecordId;
use crate::core::sort::SortOrder;
use crate::core::validation::RuleSet;
use crate::entities::member::seed_date;
use crate::impl_record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post as the blog grid lists them
///
/// Fields omitted from a submitted form default to their empty value
/// rather than failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: RecordId,
    pub title: String,
    pub excerpt: String,
    /// Category key: training, nutrition, recovery, mindset, news
    pub category: String,
    pub tags: Vec<String>,
    pub author: String,
    /// Featured posts pin to the top of the feed
    pub featured: bool,
    pub date: NaiveDate,
    pub views: i64,
    pub likes: i64,
}

impl_record!(
    Post,
    searchable = [title, excerpt, author, tags],
    fields = [title, excerpt, category, tags, author, featured, date, views, likes]
);

impl Post {
    /// Form rules for the editor: only the title is required
    pub fn rules() -> RuleSet {
        RuleSet::new().required("title")
    }

    /// The feed order: featured first, then newest, ties keeping
    /// their original order
    pub fn feed_order() -> SortOrder {
        SortOrder::Pinned {
            flag: "featured".to_string(),
            then: Box::new(SortOrder::Descending("date".to_string())),
        }
    }

    /// The mock feed the crate ships with
    pub fn seed() -> Vec<Post> {
        let post = |id: u64,
                    title: &str,
                    excerpt: &str,
                    category: &str,
                    tags: &[&str],
                    author: &str,
                    featured: bool,
                    date: &str,
                    views: i64,
                    likes: i64| Post {
            id: RecordId::from(id),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: author.to_string(),
            featured,
            date: seed_date(date),
            views,
            likes,
        };

        vec![
            post(1, "The 30 minute strength stack", "Three compound moves. Smart rest. Real gains.", "training", &["strength", "beginners"], "Coach Maya", true, "2025-10-02", 3100, 420),
            post(2, "Protein made simple", "How much, when, and from where.", "nutrition", &["protein"], "Ritika", false, "2025-10-01", 2100, 310),
            post(3, "Mobility reset after leg day", "Bring back range without losing strength.", "recovery", &["mobility", "flexibility"], "Anish", false, "2025-09-29", 1800, 220),
            post(4, "HIIT that respects your joints", "Power sessions without the pain.", "training", &["hiit", "fatloss"], "Coach Vikram", true, "2025-09-28", 3900, 560),
            post(5, "Sleep like an athlete", "Recovery rules that actually stick.", "recovery", &["mindset"], "Nisha", false, "2025-09-25", 1250, 140),
            post(6, "New class timetable for October", "More early morning slots and a fresh spin format.", "news", &["club"], "Team IronBase", false, "2025-09-24", 980, 85),
            post(7, "Fat loss without the fads", "Sustainable deficits beat detox teas.", "nutrition", &["fatloss", "recipe"], "Ritika", false, "2025-09-21", 1650, 190),
            post(8, "Coach tips: bracing basics", "Own your trunk before you load the bar.", "training", &["coachTips", "beginners"], "Coach Maya", false, "2025-09-18", 1420, 160),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::Record;

    #[test]
    fn test_feed_order_pins_featured() {
        let mut posts = Post::seed();
        Post::feed_order().apply(&mut posts);
        assert!(posts[0].featured);
        assert!(posts[1].featured);
        // Featured posts themselves are newest-first
        assert!(posts[0].date > posts[1].date);
        // The rest follow by date descending
        assert!(posts[2].date >= posts[3].date);
        assert!(!posts[2].featured);
    }

    #[test]
    fn test_tags_are_searchable() {
        let post = &Post::seed()[0];
        assert!(post.search_haystack().contains("beginners"));
    }

    #[test]
    fn test_rules_require_title() {
        let err = Post::rules()
            .check(
                serde_json::json!({"excerpt": "..." })
                    .as_object()
                    .expect("object"),
            )
            .expect_err("missing title");
        assert!(err.to_string().contains("title"));
    }
}

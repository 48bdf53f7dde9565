//! Initial dataset loaded when the service starts with seeding enabled.

use chrono::NaiveDate;

use crate::common::{AuthorId, PostId};
use crate::domains::posts::models::{Category, Post, PostStatus, Review};

/// Author ids the seed posts are attributed to.
pub struct SeedAuthors {
    pub sarah_chen: AuthorId,
    pub mark_sullivan: AuthorId,
    pub elena_rodriguez: AuthorId,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The three starting articles, newest store position first.
pub fn seed_posts(authors: &SeedAuthors) -> Vec<Post> {
    vec![
        Post {
            id: PostId::new(),
            title: "The Neuroscience of Habit Formation".to_string(),
            excerpt: "Understanding how our brains create and break loops can transform how we approach personal growth.".to_string(),
            content: "<p>Habits are the brain's way of saving effort. When you repeat a behavior, the brain creates a shortcut in the basal ganglia. This \"habit loop\" consists of a cue, a routine, and a reward.</p><p>To break a habit, one must identify the underlying cue and provide a different routine that leads to a similar reward. This is known as the Golden Rule of Habit Change. In this article, we explore how neuroplasticity plays a crucial role in rewiring these subconscious patterns.</p>".to_string(),
            author_id: authors.sarah_chen,
            date: date(2024, 5, 10),
            category: Category::Neuroscience,
            status: PostStatus::Published,
            image_url: "https://images.unsplash.com/photo-1559757175-5700dde675bc?auto=format&fit=crop&q=80&w=1200".to_string(),
            views: 1240,
            likes: 45,
            reviews: Vec::new(),
            featured: true,
            tags: Vec::new(),
            meta_description: "Discover the science behind how habits are formed and how to change them effectively.".to_string(),
            annotations: Vec::new(),
        },
        Post {
            id: PostId::new(),
            title: "Attachment Theory in Adult Relationships".to_string(),
            excerpt: "How early childhood bonds influence our romantic connections and emotional security in later life.".to_string(),
            content: "<p>Developed by John Bowlby and Mary Ainsworth, attachment theory suggests that the care we receive as infants creates a 'blueprint' for how we interact with others as adults. There are four primary attachment styles: Secure, Anxious-Preoccupied, Dismissive-Avoidant, and Fearful-Avoidant.</p><p>Understanding your own attachment style is the first step toward building healthier, more secure relationships. It allows you to recognize triggers and communicate your needs more effectively.</p>".to_string(),
            author_id: authors.mark_sullivan,
            date: date(2024, 5, 12),
            category: Category::Developmental,
            status: PostStatus::Published,
            image_url: "https://images.unsplash.com/photo-1523240795612-9a054b0db644?auto=format&fit=crop&q=80&w=800".to_string(),
            views: 856,
            likes: 32,
            reviews: Vec::new(),
            featured: false,
            tags: Vec::new(),
            meta_description: "Explore how early childhood attachment styles shape adult romantic relationships.".to_string(),
            annotations: Vec::new(),
        },
        Post {
            id: PostId::new(),
            title: "The Psychology of Resilience".to_string(),
            excerpt: "Building mental fortitude in an increasingly complex world through proven cognitive frameworks.".to_string(),
            content: "<p>Resilience is not a fixed trait; it is a dynamic process of adaptation. By practicing cognitive reframing, we can change our relationship with stress.</p>".to_string(),
            author_id: authors.elena_rodriguez,
            date: date(2024, 5, 20),
            category: Category::Wellness,
            status: PostStatus::Review,
            image_url: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?auto=format&fit=crop&q=80&w=800".to_string(),
            views: 120,
            likes: 18,
            reviews: vec![Review {
                resolved: true,
                author_response: Some("Thank you! I have added a new paragraph discussing cortisol levels and neuroplasticity in the prefrontal cortex.".to_string()),
                ..Review::new(
                    "Please add a section on the biological markers of resilience.",
                    "Prof. Miller",
                    date(2024, 5, 21),
                )
            }],
            featured: false,
            tags: Vec::new(),
            meta_description: "Learn about the psychological foundations of resilience and how to build mental strength.".to_string(),
            annotations: Vec::new(),
        },
    ]
}

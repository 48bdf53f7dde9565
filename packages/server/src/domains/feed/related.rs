use crate::domains::posts::models::Post;

pub const MAX_RELATED_POSTS: usize = 3;

/// Published posts sharing the category or at least one tag with `selected`,
/// in store order, capped at three.
pub fn related_posts<'a>(posts: &'a [Post], selected: &Post) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.id != selected.id && p.is_published())
        .filter(|p| p.category == selected.category || p.shares_tag_with(selected))
        .take(MAX_RELATED_POSTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{AppState, PostId};
    use crate::domains::posts::models::{Category, PostStatus};

    fn candidate(template: &Post, title: &str, category: Category, tags: &[&str]) -> Post {
        Post {
            id: PostId::new(),
            title: title.to_string(),
            category,
            status: PostStatus::Published,
            featured: false,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..template.clone()
        }
    }

    #[test]
    fn test_shared_category_or_tag() {
        let state = AppState::seeded();
        let template = &state.posts[0];

        let selected = candidate(template, "Selected", Category::Neuroscience, &["brain"]);
        let a = candidate(template, "A", Category::Neuroscience, &[]);
        let b = candidate(template, "B", Category::Social, &["brain"]);
        let c = candidate(template, "C", Category::Wellness, &[]);
        let posts = vec![selected.clone(), a.clone(), b.clone(), c];

        let titles: Vec<&str> = related_posts(&posts, &selected)
            .into_iter()
            .map(|p| p.title.as_str())
            .collect();

        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_unpublished_excluded_and_capped() {
        let state = AppState::seeded();
        let template = &state.posts[0];
        let selected = candidate(template, "Selected", Category::Clinical, &[]);

        let mut draft = candidate(template, "Draft", Category::Clinical, &[]);
        draft.status = PostStatus::Draft;
        let mut posts = vec![selected.clone(), draft];
        for i in 0..5 {
            posts.push(candidate(template, &format!("P{}", i), Category::Clinical, &[]));
        }

        let related = related_posts(&posts, &selected);

        assert_eq!(related.len(), MAX_RELATED_POSTS);
        assert_eq!(related[0].title, "P0");
        assert!(related.iter().all(|p| p.is_published()));
    }
}

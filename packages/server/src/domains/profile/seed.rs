use crate::domains::posts::seed::SeedAuthors;
use crate::domains::profile::models::{Author, Profile};

/// Author directory and profile for the initial dataset.
///
/// The profile belongs to the first author, so the seeded habit formation post
/// shows up on the profile page.
pub fn seed_directory() -> (Vec<Author>, Profile, SeedAuthors) {
    let sarah = Author::new("Dr. Sarah Chen");
    let mark = Author::new("Mark Sullivan");
    let elena = Author::new("Elena Rodriguez");

    let profile = Profile {
        author_id: sarah.id,
        display_name: sarah.name.clone(),
        suffix: "PhD".to_string(),
        bio: "Neuroscientist specializing in habit formation and cognitive behavioral therapy. Passionate about making complex brain science accessible to everyone.".to_string(),
        avatar_url: "https://ui-avatars.com/api/?name=Sarah+Chen&background=random".to_string(),
        followed_authors: Vec::new(),
    };

    let ids = SeedAuthors {
        sarah_chen: sarah.id,
        mark_sullivan: mark.id,
        elena_rodriguez: elena.id,
    };

    (vec![sarah, mark, elena], profile, ids)
}

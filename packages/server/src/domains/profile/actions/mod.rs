//! Profile domain actions

use tracing::debug;

use crate::common::{AppEvent, AppState, AuthorId, DomainError, DomainResult};
use crate::domains::profile::commands::ProfileCommand;
use crate::domains::profile::events::ProfileEvent;

pub fn apply(state: &mut AppState, command: ProfileCommand) -> DomainResult<Vec<AppEvent>> {
    debug!(?command, "Applying profile command");

    match command {
        ProfileCommand::Update {
            display_name,
            suffix,
            bio,
            avatar_url,
        } => update_profile(state, display_name, suffix, bio, avatar_url),
        ProfileCommand::Follow { author_id } => follow_author(state, author_id),
        ProfileCommand::Unfollow { author_id } => unfollow_author(state, author_id),
    }
}

pub fn update_profile(
    state: &mut AppState,
    display_name: String,
    suffix: String,
    bio: String,
    avatar_url: String,
) -> DomainResult<Vec<AppEvent>> {
    let display_name = display_name.trim().to_string();
    if display_name.is_empty() {
        return Err(DomainError::MissingField("display name"));
    }

    let author_id = state.profile.author_id;
    if let Some(author) = state.authors.iter_mut().find(|a| a.id == author_id) {
        author.name = display_name.clone();
    }

    let profile = &mut state.profile;
    profile.display_name = display_name;
    profile.suffix = suffix.trim().to_string();
    profile.bio = bio;
    profile.avatar_url = avatar_url;

    Ok(vec![ProfileEvent::ProfileUpdated { author_id }.into()])
}

pub fn follow_author(state: &mut AppState, author_id: AuthorId) -> DomainResult<Vec<AppEvent>> {
    if state.author(author_id).is_none() {
        return Err(DomainError::AuthorNotFound(author_id));
    }

    if !state.profile.is_following(author_id) {
        state.profile.followed_authors.push(author_id);
    }

    Ok(vec![ProfileEvent::AuthorFollowed { author_id }.into()])
}

pub fn unfollow_author(state: &mut AppState, author_id: AuthorId) -> DomainResult<Vec<AppEvent>> {
    state.profile.followed_authors.retain(|id| *id != author_id);

    Ok(vec![ProfileEvent::AuthorUnfollowed { author_id }.into()])
}

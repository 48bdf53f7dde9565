use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::common::AppState;
use crate::domains::posts::data::{gql_count, PostData};
use crate::domains::profile::models::{Author, Profile};
use crate::domains::profile::page::ProfilePage;

/// Author directory entry
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
pub struct AuthorData {
    pub id: String,
    pub name: String,
}

impl From<&Author> for AuthorData {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id.to_string(),
            name: author.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[graphql(description = "The writer's public identity")]
pub struct ProfileData {
    pub author_id: String,
    pub display_name: String,
    pub suffix: String,
    pub bio: String,
    pub avatar_url: String,
    pub followed_author_ids: Vec<String>,
}

impl From<&Profile> for ProfileData {
    fn from(profile: &Profile) -> Self {
        Self {
            author_id: profile.author_id.to_string(),
            display_name: profile.display_name.clone(),
            suffix: profile.suffix.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
            followed_author_ids: profile
                .followed_authors
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
pub struct ProfilePageData {
    pub profile: ProfileData,
    pub posts: Vec<PostData>,
    pub total_posts: i32,
    pub total_views: i32,
    pub followed_authors: Vec<AuthorData>,
}

impl ProfilePageData {
    pub fn from_page(page: &ProfilePage, state: &AppState) -> Self {
        Self {
            profile: ProfileData::from(&page.profile),
            posts: PostData::list(&page.posts, state),
            total_posts: gql_count(page.total_posts()),
            total_views: gql_count(page.total_views),
            followed_authors: page.followed.iter().map(AuthorData::from).collect(),
        }
    }
}

#[derive(Debug, Clone, juniper::GraphQLInputObject)]
pub struct UpdateProfileInput {
    pub display_name: String,
    pub suffix: String,
    pub bio: String,
    pub avatar_url: String,
}

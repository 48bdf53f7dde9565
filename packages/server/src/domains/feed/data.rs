use juniper::GraphQLObject;

use crate::common::AppState;
use crate::domains::feed::FeedView;
use crate::domains::posts::data::{gql_count, PostData};

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A reader feed page")]
pub struct FeedData {
    /// Hero post, only on the published tab while not searching
    pub featured: Option<PostData>,
    pub posts: Vec<PostData>,
    pub searching: bool,
    pub result_count: i32,
}

impl FeedData {
    pub fn from_view(view: &FeedView, state: &AppState) -> Self {
        Self {
            featured: view
                .featured
                .as_ref()
                .map(|post| PostData::from_post(post, state)),
            posts: PostData::list(&view.posts, state),
            searching: view.searching,
            result_count: gql_count(view.result_count()),
        }
    }
}

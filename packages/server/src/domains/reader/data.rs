use juniper::GraphQLObject;

use crate::common::AppState;
use crate::domains::posts::data::{gql_count, PostData};
use crate::domains::reader::detail::PostDetail;

#[derive(Debug, Clone, GraphQLObject)]
#[graphql(description = "A post opened in the reader detail view")]
pub struct PostDetailData {
    /// Pass to `likePost`; a new session is created on every open
    pub session_id: String,
    pub post: PostData,
    pub author_name: String,
    pub following: bool,
    pub unresolved_review_count: i32,
    pub related_posts: Vec<PostData>,
    pub has_liked: bool,
}

impl PostDetailData {
    pub fn from_detail(session_id: String, detail: &PostDetail, state: &AppState) -> Self {
        Self {
            session_id,
            post: PostData::from_post(&detail.post, state),
            author_name: detail.author_name.clone(),
            following: detail.following,
            unresolved_review_count: gql_count(detail.unresolved_reviews),
            related_posts: PostData::list(&detail.related, state),
            has_liked: detail.has_liked,
        }
    }
}

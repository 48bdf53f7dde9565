use crate::common::{PostId, ReaderSessionId};

/// One mount of the detail view.
///
/// Opening a post starts a session. The like guard lives here rather than in
/// the store, so reopening the post allows another like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderSession {
    pub id: ReaderSessionId,
    pub post_id: PostId,
    pub has_liked: bool,
}

impl ReaderSession {
    pub fn open(post_id: PostId) -> Self {
        Self {
            id: ReaderSessionId::new(),
            post_id,
            has_liked: false,
        }
    }

    /// Claim this session's like. Returns false when it was already used.
    pub fn claim_like(&mut self) -> bool {
        if self.has_liked {
            return false;
        }
        self.has_liked = true;
        true
    }
}

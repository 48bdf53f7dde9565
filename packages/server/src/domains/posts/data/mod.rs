pub mod post;

pub use post::{AnnotationData, PostData, ReviewData};

/// GraphQL has no unsigned 64-bit integer; counters saturate at `i32::MAX`.
pub(crate) fn gql_count(value: impl TryInto<i32>) -> i32 {
    value.try_into().unwrap_or(i32::MAX)
}

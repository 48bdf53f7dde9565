use std::sync::Arc;

use crate::kernel::AppController;

/// GraphQL request context
///
/// Shared resources available to all resolvers. There is no per-request
/// identity: the service has a single writer profile.
#[derive(Clone)]
pub struct GraphQLContext {
    pub controller: Arc<AppController>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(controller: Arc<AppController>) -> Self {
        Self { controller }
    }
}

//! GraphQL client for integration testing.
//!
//! Executes GraphQL queries directly against the schema without HTTP overhead.

use std::sync::Arc;

use juniper::Variables;
use psyche_core::kernel::AppController;
use psyche_core::server::graphql::{create_schema, GraphQLContext, Schema};
use serde_json::Value;

/// GraphQL client for executing queries and mutations in tests.
pub struct GraphQLClient {
    schema: Schema,
    context: GraphQLContext,
}

/// A field error with its `code` extension.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    pub message: String,
    pub code: Option<String>,
}

/// Result of a GraphQL execution.
#[derive(Debug)]
pub struct GraphQLResult {
    pub data: Option<Value>,
    pub errors: Vec<GraphQLError>,
}

impl GraphQLResult {
    /// Returns true if the execution had no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Unwraps the data, panicking if there were errors.
    pub fn unwrap(self) -> Value {
        if !self.errors.is_empty() {
            panic!("GraphQL errors: {:?}", self.errors);
        }
        self.data.expect("No data returned")
    }

    /// Code of the first error, if any.
    pub fn error_code(&self) -> Option<&str> {
        self.errors.first().and_then(|e| e.code.as_deref())
    }

    /// Gets a value at the given dotted path.
    pub fn get(&self, path: &str) -> Value {
        let data = self.data.as_ref().expect("No data returned");
        let mut current = data;
        for key in path.split('.') {
            current = &current[key];
        }
        current.clone()
    }
}

impl GraphQLClient {
    pub fn new(controller: Arc<AppController>) -> Self {
        Self {
            schema: create_schema(),
            context: GraphQLContext::new(controller),
        }
    }

    /// Execute a GraphQL query/mutation.
    pub async fn execute(&self, query: &str) -> GraphQLResult {
        self.execute_with_vars(query, Variables::new()).await
    }

    /// Execute a GraphQL query/mutation with variables.
    pub async fn execute_with_vars(&self, query: &str, variables: Variables) -> GraphQLResult {
        let (result, errors) =
            juniper::execute(query, None, &self.schema, &variables, &self.context)
                .await
                .expect("GraphQL execution failed");

        // Convert juniper::Value to serde_json::Value
        let data = Some(serde_json::to_value(&result).expect("Failed to serialize GraphQL result"));

        let errors = errors
            .iter()
            .map(|e| {
                let error = e.error();
                let code = error
                    .extensions()
                    .as_object_value()
                    .and_then(|o| o.get_field_value("code"))
                    .and_then(|v| v.as_string_value())
                    .map(str::to_string);
                GraphQLError {
                    message: error.message().to_string(),
                    code,
                }
            })
            .collect();

        GraphQLResult { data, errors }
    }

    /// Execute a query and expect success, returning the data.
    pub async fn query(&self, query: &str) -> Value {
        self.execute(query).await.unwrap()
    }

    /// Execute a query with variables and expect success.
    pub async fn query_with_vars(&self, query: &str, variables: Variables) -> Value {
        self.execute_with_vars(query, variables).await.unwrap()
    }
}

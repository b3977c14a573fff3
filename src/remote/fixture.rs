//! Fixture transport serving canned JSON.
//!
//! Routes are keyed by the resource string (`/posts?userId=3`). Requests for
//! unknown routes answer 404. Every request is recorded in order. The request
//! log is shared by clones and by transports derived with [`FixtureTransport::with_json`]
//! or [`FixtureTransport::with_status`]; routes belong to each instance.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use reqwest::StatusCode;
use serde_json::Value;

use crate::error::{PostviewError, Result};

use super::{Resource, Transport};

#[derive(Debug, Clone)]
enum Route {
    Json(Value),
    Status(StatusCode),
}

#[derive(Debug, Clone, Default)]
pub struct FixtureTransport {
    routes: Arc<HashMap<String, Route>>,
    requests: Arc<Mutex<Vec<Resource>>>,
}

impl FixtureTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load routes from a JSON object mapping resource strings to bodies
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PostviewError::Fixture(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        let Value::Object(map) = value else {
            return Err(PostviewError::Fixture(
                "fixture file must contain a JSON object keyed by resource".to_string(),
            ));
        };

        let routes = map
            .into_iter()
            .map(|(key, body)| (key, Route::Json(body)))
            .collect();

        Ok(Self {
            routes: Arc::new(routes),
            requests: Arc::default(),
        })
    }

    fn with_route(mut self, resource: Resource, route: Route) -> Self {
        Arc::make_mut(&mut self.routes).insert(resource.to_string(), route);
        self
    }

    /// Answer `resource` with a JSON body
    pub fn with_json(self, resource: Resource, body: Value) -> Self {
        self.with_route(resource, Route::Json(body))
    }

    /// Answer `resource` with a failing status code
    pub fn with_status(self, resource: Resource, status: u16) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.with_route(resource, Route::Status(status))
    }

    /// Every request issued so far, in order
    pub fn requests(&self) -> Vec<Resource> {
        self.requests.lock().clone()
    }

    /// How many times `resource` was requested
    pub fn request_count(&self, resource: Resource) -> usize {
        self.requests
            .lock()
            .iter()
            .filter(|r| **r == resource)
            .count()
    }
}

#[async_trait::async_trait]
impl Transport for FixtureTransport {
    async fn get(&self, resource: Resource) -> Result<Value> {
        self.requests.lock().push(resource);

        let key = resource.to_string();
        match self.routes.get(&key) {
            Some(Route::Json(body)) => Ok(body.clone()),
            Some(Route::Status(status)) => Err(PostviewError::Status {
                status: *status,
                url: key,
            }),
            None => Err(PostviewError::Status {
                status: StatusCode::NOT_FOUND,
                url: key,
            }),
        }
    }
}

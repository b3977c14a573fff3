//! Remote data gateway.
//!
//! Four read-only operations fetch employees, posts and comments from the
//! posts API. Every operation absorbs failure: a transport error, a non-2xx
//! response or an unparsable payload is logged and turned into `None`, so the
//! render pipeline never has to handle an error from this layer.

pub mod fixture;
pub mod http;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::{Comment, Employee, Post};

pub use fixture::FixtureTransport;
pub use http::HttpTransport;

/// A readable resource of the posts API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// `GET /users`
    Employees,
    /// `GET /users/{id}`
    Employee(u64),
    /// `GET /posts?userId={id}`
    EmployeePosts(u64),
    /// `GET /comments?postId={id}`
    PostComments(u64),
}

impl Resource {
    /// Path relative to the API base URL
    pub fn path(&self) -> String {
        match self {
            Resource::Employees => "/users".to_string(),
            Resource::Employee(id) => format!("/users/{id}"),
            Resource::EmployeePosts(_) => "/posts".to_string(),
            Resource::PostComments(_) => "/comments".to_string(),
        }
    }

    /// Query parameters, if the resource is a filtered listing
    pub fn query(&self) -> Option<(&'static str, String)> {
        match self {
            Resource::Employees | Resource::Employee(_) => None,
            Resource::EmployeePosts(id) => Some(("userId", id.to_string())),
            Resource::PostComments(id) => Some(("postId", id.to_string())),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())?;
        if let Some((key, value)) = self.query() {
            write!(f, "?{key}={value}")?;
        }
        Ok(())
    }
}

/// Issues a single GET for a resource and yields the decoded JSON body.
///
/// Implementations report every failure as an error; the [`Gateway`] decides
/// what to do with it.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, resource: Resource) -> Result<serde_json::Value>;
}

/// Typed, failure-absorbing access to the posts API
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for Gateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gateway").finish_non_exhaustive()
    }
}

impl Gateway {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Fetch all employees
    pub async fn fetch_employees(&self) -> Option<Vec<Employee>> {
        self.fetch(Resource::Employees).await
    }

    /// Fetch the posts written by one employee
    pub async fn fetch_employee_posts(&self, employee_id: u64) -> Option<Vec<Post>> {
        if employee_id == 0 {
            return None;
        }
        self.fetch(Resource::EmployeePosts(employee_id)).await
    }

    /// Fetch a single employee
    pub async fn fetch_employee(&self, employee_id: u64) -> Option<Employee> {
        if employee_id == 0 {
            return None;
        }
        self.fetch(Resource::Employee(employee_id)).await
    }

    /// Fetch the comments on one post
    pub async fn fetch_post_comments(&self, post_id: u64) -> Option<Vec<Comment>> {
        if post_id == 0 {
            return None;
        }
        self.fetch(Resource::PostComments(post_id)).await
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: Resource) -> Option<T> {
        tracing::debug!("GET {resource}");

        let value = match self.transport.get(resource).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to fetch {resource}: {e}");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::error!("Unexpected payload for {resource}: {e}");
                None
            }
        }
    }
}

pub mod cli;
pub mod commands;
pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod remote;
pub mod render;
pub mod types;

pub use config::Config;
pub use dom::{Dom, Event, EventKind, Listener, MemoryDom, NodeId, Query};
pub use error::{PostviewError, Result};
pub use page::{Dispatched, Page, RefreshOutcome, SelectionOutcome};
pub use remote::{FixtureTransport, Gateway, HttpTransport, Resource, Transport};
pub use render::ToggleOutcome;
pub use types::{Comment, Company, DEFAULT_EMPLOYEE_ID, Employee, Post};

//! The employee posts page.
//!
//! [`Page`] owns the document and the gateway and routes dispatched events to
//! their handlers. It is the only holder of page state; every handler gets the
//! document and the gateway passed in explicitly.

pub mod bootstrap;
pub mod refresh;
pub mod selection;

use crate::dom::{Dom, Event, EventKind, Listener, Query};
use crate::remote::Gateway;
use crate::render::{ToggleOutcome, toggle_comments};
use crate::types::Employee;

pub use bootstrap::{SELECT_MENU_ID, init_app, init_page, mount_skeleton, populate_select_menu};
pub use refresh::{RefreshOutcome, add_button_listeners, refresh_posts, remove_button_listeners};
pub use selection::{SelectionOutcome, handle_selection_change, parse_employee_id};

/// Both halves of a toggled pair: the comment section, then the button
pub type TogglePair<N> = (ToggleOutcome<N>, ToggleOutcome<N>);

/// Result of one listener run by [`Page::dispatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched<N> {
    Selection(Option<SelectionOutcome<N>>),
    Comments(Option<TogglePair<N>>),
}

pub struct Page<D: Dom> {
    dom: D,
    gateway: Gateway,
}

impl<D: Dom> Page<D> {
    pub fn new(dom: D, gateway: Gateway) -> Self {
        Self { dom, gateway }
    }

    /// Mount the page and load the employee list
    pub async fn init(&mut self) -> Option<Vec<Employee>> {
        init_app(&mut self.dom, &self.gateway).await
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    /// Run every listener bound to the event's target.
    ///
    /// A disabled target cannot originate events, so its events are dropped.
    pub async fn dispatch(&mut self, event: Event<D::Node>) -> Vec<Dispatched<D::Node>> {
        if self.dom.is_disabled(event.target) {
            tracing::debug!("Dropped {} event on disabled element", event.kind);
            return Vec::new();
        }

        let mut results = Vec::new();
        for listener in self.dom.listeners(event.target, event.kind) {
            let result = match listener {
                Listener::SelectEmployee => Dispatched::Selection(
                    handle_selection_change(&mut self.dom, &self.gateway, Some(&event)).await,
                ),
                Listener::ToggleComments { post_id } => {
                    Dispatched::Comments(toggle_comments(&mut self.dom, Some(&event), post_id))
                }
            };
            results.push(result);
        }
        results
    }

    /// Choose `value` in the dropdown and fire its change event
    pub async fn select_employee(&mut self, value: &str) -> Option<SelectionOutcome<D::Node>> {
        let select = self.dom.element_by_id(SELECT_MENU_ID)?;
        self.dom.set_value(select, value);

        self.dispatch(Event::new(EventKind::Change, select))
            .await
            .into_iter()
            .find_map(|result| match result {
                Dispatched::Selection(outcome) => outcome,
                Dispatched::Comments(_) => None,
            })
    }

    /// Click the button of a displayed post
    pub async fn click_post_button(&mut self, post_id: u64) -> Option<TogglePair<D::Node>> {
        let button = self
            .dom
            .query_selector(&Query::tag("button").data("post-id", post_id).within("main"))?;

        self.dispatch(Event::new(EventKind::Click, button))
            .await
            .into_iter()
            .find_map(|result| match result {
                Dispatched::Comments(pair) => pair,
                Dispatched::Selection(_) => None,
            })
    }

    /// The posts container
    pub fn main(&self) -> Option<D::Node> {
        self.dom.query_selector(&Query::tag("main"))
    }
}

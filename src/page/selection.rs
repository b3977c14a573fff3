//! Dropdown change handling.

use crate::dom::{Dom, Event};
use crate::remote::Gateway;
use crate::types::{DEFAULT_EMPLOYEE_ID, Post};

use super::refresh::{RefreshOutcome, refresh_posts};

/// Everything one selection change produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionOutcome<N> {
    pub employee_id: u64,
    pub posts: Vec<Post>,
    pub refresh: Option<RefreshOutcome<N>>,
}

/// Coerce a raw select value to an employee id.
///
/// Decimal, exponent and `0x`/`0o`/`0b` prefixed integers are accepted.
/// Empty, non-numeric, fractional and non-positive values all resolve to
/// [`DEFAULT_EMPLOYEE_ID`]; a selection is never rejected.
pub fn parse_employee_id(raw: Option<&str>) -> u64 {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return DEFAULT_EMPLOYEE_ID;
    }

    if let Some(id) = parse_prefixed(raw) {
        return id.filter(|id| *id >= 1).unwrap_or(DEFAULT_EMPLOYEE_ID);
    }

    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n.fract() == 0.0 && n >= 1.0 && n <= u64::MAX as f64 => n as u64,
        _ => DEFAULT_EMPLOYEE_ID,
    }
}

/// `Some` when `raw` carries a radix prefix, holding the value if the digits parse
fn parse_prefixed(raw: &str) -> Option<Option<u64>> {
    let (radix, digits) = match raw.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => (16, &raw[2..]),
        "0o" => (8, &raw[2..]),
        "0b" => (2, &raw[2..]),
        _ => return None,
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    Some(u64::from_str_radix(digits, radix).ok())
}

/// Load and display the posts of the employee chosen in the dropdown.
///
/// The control is disabled for the whole fetch-and-refresh so no second
/// change can start while this one runs.
pub async fn handle_selection_change<D: Dom>(
    dom: &mut D,
    gateway: &Gateway,
    event: Option<&Event<D::Node>>,
) -> Option<SelectionOutcome<D::Node>> {
    let select = event?.target;
    let employee_id = parse_employee_id(dom.value(select).as_deref());
    tracing::debug!("Selected employee {employee_id}");

    dom.set_disabled(select, true);
    let posts = gateway
        .fetch_employee_posts(employee_id)
        .await
        .unwrap_or_default();
    let refresh = refresh_posts(dom, gateway, Some(posts.as_slice())).await;
    dom.set_disabled(select, false);

    Some(SelectionOutcome {
        employee_id,
        posts,
        refresh,
    })
}

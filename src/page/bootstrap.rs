//! Initial page load.

use crate::dom::{Dom, EventKind, Listener};
use crate::remote::Gateway;
use crate::render::{build_element, build_select_options, display_posts};
use crate::types::Employee;

/// Id of the employee dropdown
pub const SELECT_MENU_ID: &str = "selectMenu";

/// Label of the placeholder option listed before the employees
pub const SELECT_PLACEHOLDER: &str = "Employees";

/// Build the static page markup: the employee dropdown and the posts container.
///
/// Returns the `<select>` and `<main>` nodes.
pub fn mount_skeleton<D: Dom>(dom: &mut D) -> (D::Node, D::Node) {
    let body = dom.body();

    let header = dom.create_element("header");
    let label = build_element(dom, "label", "Select an Employee", None);
    dom.set_attribute(label, "for", SELECT_MENU_ID);
    let select = dom.create_element("select");
    dom.set_attribute(select, "id", SELECT_MENU_ID);
    let placeholder = build_element(dom, "option", SELECT_PLACEHOLDER, None);
    dom.set_value(placeholder, "");
    dom.append_child(select, placeholder);
    dom.append_child(header, label);
    dom.append_child(header, select);

    let main = dom.create_element("main");
    dom.append_child(body, header);
    dom.append_child(body, main);

    (select, main)
}

/// Append one option per employee to the dropdown
pub fn populate_select_menu<D: Dom>(dom: &mut D, employees: Option<&[Employee]>) -> Option<D::Node> {
    let employees = employees?;
    let Some(menu) = dom.element_by_id(SELECT_MENU_ID) else {
        tracing::warn!("No #{SELECT_MENU_ID} element to populate");
        return None;
    };

    for option in build_select_options(dom, Some(employees)).unwrap_or_default() {
        dom.append_child(menu, option);
    }
    Some(menu)
}

/// Fetch the employees and fill the dropdown
pub async fn init_page<D: Dom>(
    dom: &mut D,
    gateway: &Gateway,
) -> (Option<Vec<Employee>>, Option<D::Node>) {
    let employees = gateway.fetch_employees().await;
    let select = populate_select_menu(dom, employees.as_deref());
    (employees, select)
}

/// Mount the page, load the employees, and wire the dropdown.
///
/// Stands in for the document-loaded hook of a browser page. Returns the
/// fetched employees, if any.
pub async fn init_app<D: Dom>(dom: &mut D, gateway: &Gateway) -> Option<Vec<Employee>> {
    let (select, _main) = mount_skeleton(dom);
    display_posts(dom, gateway, None).await;

    let (employees, _) = init_page(dom, gateway).await;
    dom.add_event_listener(select, EventKind::Change, Listener::SelectEmployee);
    tracing::debug!(
        "Page ready with {} employee(s)",
        employees.as_ref().map_or(0, Vec::len)
    );
    employees
}

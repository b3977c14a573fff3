use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::print_json;
use crate::dom::MemoryDom;
use crate::error::{PostviewError, Result};
use crate::page::Page;
use crate::remote::Gateway;

/// A row in the employee table
#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Company")]
    company: String,
}

/// List the employees the dropdown is populated with
pub async fn cmd_employees(gateway: Gateway, output_json: bool) -> Result<()> {
    let mut page = Page::new(MemoryDom::new(), gateway);
    let employees = page
        .init()
        .await
        .ok_or_else(|| PostviewError::Unavailable("employee list".to_string()))?;

    if output_json {
        let json_employees: Vec<serde_json::Value> = employees
            .iter()
            .map(|e| {
                json!({
                    "id": e.id,
                    "name": e.name,
                    "username": e.username,
                    "company": e.company.name,
                })
            })
            .collect();
        return print_json(&json!(json_employees));
    }

    if employees.is_empty() {
        println!("No employees found.");
        return Ok(());
    }

    let rows: Vec<EmployeeRow> = employees
        .iter()
        .map(|e| EmployeeRow {
            id: e.id,
            name: e.name.clone(),
            username: e.username.clone().unwrap_or_else(|| "-".to_string()),
            company: e.company.name.clone(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!("\n{} employee(s)", employees.len());
    Ok(())
}

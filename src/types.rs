//! Records served by the posts API.
//!
//! Only the fields the viewer renders are modeled; anything else in the
//! payload is ignored by serde. Ids are the only required fields, so one
//! partial record never drops the response it arrived in.

use serde::{Deserialize, Serialize};

/// Fallback employee id for selections that do not name a valid employee.
pub const DEFAULT_EMPLOYEE_ID: u64 = 1;

/// Default REST endpoint serving users, posts and comments.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Directory holding the local configuration file.
pub const CONFIG_DIR: &str = ".postview";

/// A user record, shown as an employee in the dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Company,
}

/// Missing company fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
}

/// A post authored by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    #[serde(default)]
    pub user_id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// A comment on a post. The owning post is implied by the query that fetched it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub name: String,
    pub body: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_deserializes_api_payload() {
        let json = r#"{
            "id": 3,
            "name": "Clementine Bauch",
            "username": "Samantha",
            "email": "Nathan@yesenia.net",
            "address": {"street": "Douglas Extension"},
            "company": {
                "name": "Romaguera-Jacobson",
                "catchPhrase": "Face to face bifurcated interface",
                "bs": "e-enable strategic applications"
            }
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 3);
        assert_eq!(employee.username.as_deref(), Some("Samantha"));
        assert_eq!(employee.company.name, "Romaguera-Jacobson");
        assert_eq!(
            employee.company.catch_phrase,
            "Face to face bifurcated interface"
        );
    }

    #[test]
    fn test_employee_without_optional_fields() {
        let json = r#"{"id":3,"name":"Ann","company":{"name":"Co","catchPhrase":"CP"}}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.username.is_none());
        assert!(employee.email.is_none());
    }

    #[test]
    fn test_post_uses_camel_case_user_id() {
        let json = r#"{"userId": 3, "id": 10, "title": "T", "body": "B"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 3);
        assert_eq!(post.id, 10);
    }

    #[test]
    fn test_comment_ignores_post_id_field() {
        let json = r#"{"postId": 10, "id": 1, "name": "X", "email": "z@e.com", "body": "Y"}"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.name, "X");
        assert_eq!(comment.email, "z@e.com");
    }

    #[test]
    fn test_employee_without_company() {
        let json = r#"[
            {"id": 1, "name": "Leanne Graham", "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}},
            {"id": 2, "name": "Ervin"}
        ]"#;
        let employees: Vec<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].name, "Ervin");
        assert_eq!(employees[1].company, Company::default());
    }

    #[test]
    fn test_company_without_catch_phrase() {
        let json = r#"{"id": 3, "name": "Ann", "company": {"name": "Co"}}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.company.name, "Co");
        assert!(employee.company.catch_phrase.is_empty());
    }

    #[test]
    fn test_post_missing_title_defaults_empty() {
        let json = r#"{"userId": 3, "id": 10, "body": "B"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.title.is_empty());
        assert_eq!(post.body, "B");
    }

    #[test]
    fn test_post_without_id_is_rejected() {
        let json = r#"{"userId": 3, "title": "T", "body": "B"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }
}

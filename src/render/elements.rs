//! Leaf element helpers. No network access, no page state.

use crate::dom::Dom;
use crate::types::{Comment, Employee};

/// Create an element with text content and an optional class
pub fn build_element<D: Dom>(dom: &mut D, tag: &str, text: &str, class: Option<&str>) -> D::Node {
    let node = dom.create_element(tag);
    dom.set_text_content(node, text);
    if let Some(class) = class {
        dom.set_attribute(node, "class", class);
    }
    node
}

/// One `<option>` per employee: value is the id, label is the name
pub fn build_select_options<D: Dom>(
    dom: &mut D,
    employees: Option<&[Employee]>,
) -> Option<Vec<D::Node>> {
    let employees = employees?;
    let options = employees
        .iter()
        .map(|employee| {
            let option = build_element(dom, "option", &employee.name, None);
            dom.set_value(option, &employee.id.to_string());
            option
        })
        .collect();
    Some(options)
}

/// A fragment with one `<article>` per comment
pub fn build_comments<D: Dom>(dom: &mut D, comments: Option<&[Comment]>) -> Option<D::Node> {
    let comments = comments?;
    let fragment = dom.create_fragment();
    for comment in comments {
        let article = dom.create_element("article");
        let heading = build_element(dom, "h3", &comment.name, None);
        let body = build_element(dom, "p", &comment.body, None);
        let from = build_element(dom, "p", &format!("From: {}", comment.email), None);
        dom.append_child(article, heading);
        dom.append_child(article, body);
        dom.append_child(article, from);
        dom.append_child(fragment, article);
    }
    Some(fragment)
}

/// Remove every child of `node` and hand it back
pub fn delete_child_elements<D: Dom>(dom: &mut D, node: Option<D::Node>) -> Option<D::Node> {
    let node = node?;
    dom.replace_children(node);
    Some(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDom;
    use crate::types::Company;

    fn employee(id: u64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            username: None,
            email: None,
            company: Company {
                name: "Co".to_string(),
                catch_phrase: "CP".to_string(),
            },
        }
    }

    #[test]
    fn test_build_element_with_class() {
        let mut dom = MemoryDom::new();
        let p = build_element(&mut dom, "p", "hello", Some("default-text"));
        assert_eq!(dom.html(p), "<p class=\"default-text\">hello</p>");
    }

    #[test]
    fn test_build_element_without_class() {
        let mut dom = MemoryDom::new();
        let h2 = build_element(&mut dom, "h2", "", None);
        assert_eq!(dom.html(h2), "<h2></h2>");
    }

    #[test]
    fn test_build_select_options() {
        let mut dom = MemoryDom::new();
        let employees = vec![employee(1, "Leanne"), employee(2, "Ervin")];
        let options = build_select_options(&mut dom, Some(employees.as_slice())).unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(dom.html(options[1]), "<option value=\"2\">Ervin</option>");
    }

    #[test]
    fn test_build_select_options_absent() {
        let mut dom = MemoryDom::new();
        assert!(build_select_options(&mut dom, None).is_none());
        assert_eq!(build_select_options(&mut dom, Some(&[][..])), Some(vec![]));
    }

    #[test]
    fn test_build_comments() {
        let mut dom = MemoryDom::new();
        let comments = vec![Comment {
            name: "X".to_string(),
            body: "Y".to_string(),
            email: "z@e.com".to_string(),
        }];
        let fragment = build_comments(&mut dom, Some(comments.as_slice())).unwrap();

        assert_eq!(
            dom.html(fragment),
            "<article><h3>X</h3><p>Y</p><p>From: z@e.com</p></article>"
        );
        assert!(build_comments(&mut dom, None).is_none());
    }

    #[test]
    fn test_delete_child_elements() {
        let mut dom = MemoryDom::new();
        let main = dom.create_element("main");
        let p = build_element(&mut dom, "p", "x", None);
        dom.append_child(main, p);

        assert_eq!(delete_child_elements(&mut dom, Some(main)), Some(main));
        assert!(dom.children(main).is_empty());
        assert!(delete_child_elements::<MemoryDom>(&mut dom, None).is_none());
    }
}

//! Descriptor ordering.
//!
//! When a bean opts into sorting, attributes and operations are each
//! ordered by their sort value, falling back to the name when no sort
//! value was declared. The sort is stable, so entries that compare equal
//! keep their discovery order. Beans that do not opt in keep discovery
//! order untouched.

use mbean_core::{AttributeInfo, OperationInfo};

fn sort_key<'a>(sort_value: &'a str, name: &'a str) -> &'a str {
    if sort_value.is_empty() { name } else { sort_value }
}

/// Sort attribute descriptors by sort value, then name.
pub fn sort_attributes(attributes: &mut [AttributeInfo]) {
    attributes.sort_by(|a, b| {
        sort_key(&a.sort_value, &a.name).cmp(sort_key(&b.sort_value, &b.name))
    });
}

/// Sort operation descriptors by sort value, then name.
pub fn sort_operations(operations: &mut [OperationInfo]) {
    operations.sort_by(|a, b| {
        sort_key(&a.sort_value, &a.name).cmp(sort_key(&b.sort_value, &b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use mbean_core::{Access, TypeName};

    fn attribute(name: &str, sort_value: &str) -> AttributeInfo {
        AttributeInfo {
            name: name.to_string(),
            description: String::new(),
            data_type: TypeName::INT,
            access: Access::READ,
            boolean_style: false,
            sort_value: sort_value.to_string(),
        }
    }

    #[test]
    fn sort_values_override_names() {
        let mut attributes = vec![
            attribute("a3", "1"),
            attribute("a4", "2"),
            attribute("a2", "4"),
            attribute("a1", "3"),
        ];
        sort_attributes(&mut attributes);
        let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["a3", "a4", "a1", "a2"]);
    }

    #[test]
    fn names_fill_in_for_missing_sort_values() {
        let mut attributes = vec![
            attribute("b", ""),
            attribute("a", ""),
            attribute("c", "0"),
        ];
        sort_attributes(&mut attributes);
        let names: Vec<&str> = attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn equal_keys_keep_discovery_order() {
        let mut attributes = vec![
            attribute("first", "x"),
            attribute("second", "x"),
        ];
        sort_attributes(&mut attributes);
        assert_eq!(attributes[0].name, "first");
        assert_eq!(attributes[1].name, "second");
    }
}

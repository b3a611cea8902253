//! Tag-name classification predicates.

use crate::utils::config::{REPLACED_CONTENT_NODE_NAMES, SVG_NODE_NAMES, TABLE_NODE_NAMES};

fn matches_any(node_name: &str, names: &[&str]) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(node_name))
}

/// Element that may carry a meaningful `fill`
pub fn is_svg_node(node_name: &str) -> bool {
    matches_any(node_name, SVG_NODE_NAMES)
}

/// Element whose content comes from an external resource
pub fn is_replaced_content(node_name: &str) -> bool {
    matches_any(node_name, REPLACED_CONTENT_NODE_NAMES)
}

/// Table-structural element still using a `table*` display
///
/// An absent display never matches.
pub fn is_table_element_with_default_styles(node_name: &str, display: Option<&str>) -> bool {
    matches_any(node_name, TABLE_NODE_NAMES)
        && display.is_some_and(|display| display.starts_with("table"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_nodes_case_insensitive() {
        assert!(is_svg_node("svg"));
        assert!(is_svg_node("PATH"));
        assert!(is_svg_node("textPath"));
        assert!(!is_svg_node("div"));
        assert!(!is_svg_node(""));
    }

    #[test]
    fn test_replaced_content() {
        for name in ["IMG", "img", "iFrame", "VIDEO", "embed"] {
            assert!(is_replaced_content(name), "{} should be replaced content", name);
        }
        assert!(!is_replaced_content("object"));
    }

    #[test]
    fn test_table_elements() {
        assert!(is_table_element_with_default_styles("TD", Some("table-cell")));
        assert!(is_table_element_with_default_styles("tbody", Some("table-row-group")));
        assert!(!is_table_element_with_default_styles("TD", Some("block")));
        assert!(!is_table_element_with_default_styles("TD", None));
        assert!(!is_table_element_with_default_styles("DIV", Some("table")));
    }
}

//! Global stylesheet statistics.
//!
//! The CSSOM cannot be serialized over the debugging channel, so the page
//! runs [`STYLESHEET_PROBE`] itself and returns plain counts.
//! [`collect_stylesheet_stats`] applies the same classification to
//! stylesheets recorded in a capture file.

use crate::parser::protocol::{RemoteObject, StyleSheetSource};
use indexmap::IndexSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Expression evaluated in the inspected page
pub const STYLESHEET_PROBE: &str = r#"(function() {
  let styleRules = 0;
  let inlineStyles = 0;
  let externalSheets = 0;
  const stats = {
    type: new Set(),
    class: new Set(),
    id: new Set(),
    universal: new Set(),
    attribute: new Set(),
    nonSimple: new Set()
  };

  for (const styleSheet of document.styleSheets) {
    if (styleSheet.href) {
      externalSheets++;
    } else {
      inlineStyles++;
    }

    let rules;
    try {
      rules = styleSheet.rules;
    } catch (err) {
      continue;
    }

    for (const rule of rules) {
      if ('selectorText' in rule) {
        styleRules++;
        for (const selectorGroup of rule.selectorText.split(',')) {
          for (const selector of selectorGroup.split(/[\t\n\f\r ]+/g)) {
            if (selector.startsWith('.')) {
              stats.class.add(selector);
            } else if (selector.startsWith('#')) {
              stats.id.add(selector);
            } else if (selector.startsWith('*')) {
              stats.universal.add(selector);
            } else if (selector.startsWith('[')) {
              stats.attribute.add(selector);
            } else if (/[#\.:\[\]|\+>~]/.test(selector)) {
              stats.nonSimple.add(selector);
            } else {
              stats.type.add(selector);
            }
          }
        }
      }
    }
  }

  return {
    styleRules,
    inlineStyles,
    externalSheets,
    stats: {
      type: stats.type.size,
      class: stats.class.size,
      id: stats.id.size,
      universal: stats.universal.size,
      attribute: stats.attribute.size,
      nonSimple: stats.nonSimple.size
    }
  };
})()"#;

/// Kind of a single selector token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorKind {
    Type,
    Class,
    Id,
    Universal,
    Attribute,
    /// Contains combinators or pseudo syntax
    NonSimple,
}

const NON_SIMPLE_CHARS: &[char] = &['#', '.', ':', '[', ']', '|', '+', '>', '~'];

// CSS whitespace
const SELECTOR_SEPARATORS: &[char] = &['\t', '\n', '\x0C', '\r', ' '];

/// Split a selector group on runs of CSS whitespace
///
/// Leading or trailing whitespace yields an empty first or last token,
/// the way a regex split on `[\t\n\f\r ]+` does.
pub fn split_selector_group(group: &str) -> impl Iterator<Item = &str> {
    let last = group.matches(SELECTOR_SEPARATORS).count();
    group
        .split(SELECTOR_SEPARATORS)
        .enumerate()
        .filter(move |(position, token)| !token.is_empty() || *position == 0 || *position == last)
        .map(|(_, token)| token)
}

/// Classify one whitespace-free selector token
///
/// The empty token left by surrounding whitespace classifies as `Type`.
pub fn classify_selector(token: &str) -> SelectorKind {
    match token.chars().next() {
        Some('.') => SelectorKind::Class,
        Some('#') => SelectorKind::Id,
        Some('*') => SelectorKind::Universal,
        Some('[') => SelectorKind::Attribute,
        _ if token.contains(NON_SIMPLE_CHARS) => SelectorKind::NonSimple,
        _ => SelectorKind::Type,
    }
}

/// Distinct selectors per kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorStats {
    #[serde(rename = "type")]
    pub type_selectors: usize,
    pub class: usize,
    pub id: usize,
    pub universal: usize,
    pub attribute: usize,
    pub non_simple: usize,
}

/// Page-wide stylesheet statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylesheetStats {
    pub style_rules: usize,
    pub inline_styles: usize,
    pub external_sheets: usize,
    pub stats: SelectorStats,
}

impl StylesheetStats {
    /// Interpret an evaluation result
    ///
    /// Anything but an object of the expected shape yields `None`.
    pub fn from_remote(result: &RemoteObject) -> Option<Self> {
        if result.kind != "object" {
            debug!("Stylesheet probe returned {}", result.kind);
            return None;
        }

        let value = result.value.clone()?;
        match serde_json::from_value(value) {
            Ok(stats) => Some(stats),
            Err(e) => {
                warn!("Stylesheet probe returned an unexpected shape: {}", e);
                None
            }
        }
    }
}

/// Compute stylesheet statistics from recorded stylesheets
///
/// Sheets whose rule list is inaccessible still count as external or
/// inline but contribute no rules or selectors.
pub fn collect_stylesheet_stats(sheets: &[StyleSheetSource]) -> StylesheetStats {
    let mut result = StylesheetStats::default();
    let mut seen: [IndexSet<&str>; 6] = Default::default();

    for sheet in sheets {
        if sheet.href.is_some() {
            result.external_sheets += 1;
        } else {
            result.inline_styles += 1;
        }

        let Some(rules) = &sheet.rules else {
            debug!("Skipping inaccessible stylesheet {:?}", sheet.href);
            continue;
        };

        for selector_text in rules.iter().filter_map(|rule| rule.selector_text.as_deref()) {
            result.style_rules += 1;

            let tokens = selector_text
                .split(',')
                .flat_map(split_selector_group);

            for token in tokens {
                let slot = match classify_selector(token) {
                    SelectorKind::Type => 0,
                    SelectorKind::Class => 1,
                    SelectorKind::Id => 2,
                    SelectorKind::Universal => 3,
                    SelectorKind::Attribute => 4,
                    SelectorKind::NonSimple => 5,
                };
                seen[slot].insert(token);
            }
        }
    }

    let [type_selectors, class, id, universal, attribute, non_simple] = seen.map(|set| set.len());
    result.stats = SelectorStats {
        type_selectors,
        class,
        id,
        universal,
        attribute,
        non_simple,
    };

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::protocol::CssRuleSource;

    fn sheet(href: Option<&str>, selectors: Option<&[&str]>) -> StyleSheetSource {
        StyleSheetSource {
            href: href.map(str::to_string),
            rules: selectors.map(|selectors| {
                selectors
                    .iter()
                    .map(|s| CssRuleSource {
                        selector_text: Some(s.to_string()),
                    })
                    .collect()
            }),
        }
    }

    #[test]
    fn test_classify_selector() {
        assert_eq!(classify_selector("div"), SelectorKind::Type);
        assert_eq!(classify_selector(".btn"), SelectorKind::Class);
        assert_eq!(classify_selector("#main"), SelectorKind::Id);
        assert_eq!(classify_selector("*"), SelectorKind::Universal);
        assert_eq!(classify_selector("[hidden]"), SelectorKind::Attribute);
        assert_eq!(classify_selector("a:hover"), SelectorKind::NonSimple);
        assert_eq!(classify_selector("div.btn"), SelectorKind::NonSimple);
        assert_eq!(classify_selector(">"), SelectorKind::NonSimple);
        assert_eq!(classify_selector(""), SelectorKind::Type);
    }

    #[test]
    fn test_split_selector_group_on_whitespace_runs() {
        let split = |group: &'static str| split_selector_group(group).collect::<Vec<_>>();

        assert_eq!(split("div  >\tp"), vec!["div", ">", "p"]);
        assert_eq!(split(" .a"), vec!["", ".a"]);
        assert_eq!(split("  .a "), vec!["", ".a", ""]);
        assert_eq!(split("   "), vec!["", ""]);
        assert_eq!(split(""), vec![""]);
    }

    #[test]
    fn test_space_after_comma_counts_empty_type_selector() {
        let sheets = vec![sheet(None, Some(&["div, .a"]))];

        let stats = collect_stylesheet_stats(&sheets).stats;

        assert_eq!(stats.type_selectors, 2); // div, ""
        assert_eq!(stats.class, 1);
    }

    #[test]
    fn test_collect_counts_distinct_selectors() {
        let sheets = vec![
            sheet(None, Some(&["div, .a", "div > p", "a:hover"])),
            sheet(Some("https://example.com/site.css"), Some(&["#x", "*", "[type=text]", ".a"])),
        ];

        let stats = collect_stylesheet_stats(&sheets);

        assert_eq!(stats.style_rules, 7);
        assert_eq!(stats.inline_styles, 1);
        assert_eq!(stats.external_sheets, 1);
        assert_eq!(
            stats.stats,
            SelectorStats {
                type_selectors: 3, // div, "", p
                class: 1,          // .a
                id: 1,
                universal: 1,
                attribute: 1,
                non_simple: 2, // >, a:hover
            }
        );
    }

    #[test]
    fn test_inaccessible_sheet_skipped() {
        let sheets = vec![sheet(Some("https://cdn.example.com/x.css"), None)];

        let stats = collect_stylesheet_stats(&sheets);

        assert_eq!(stats.external_sheets, 1);
        assert_eq!(stats.style_rules, 0);
        assert_eq!(stats.stats, SelectorStats::default());
    }

    #[test]
    fn test_rules_without_selector_not_counted() {
        let sheets = vec![StyleSheetSource {
            href: None,
            rules: Some(vec![CssRuleSource { selector_text: None }]),
        }];

        assert_eq!(collect_stylesheet_stats(&sheets).style_rules, 0);
    }

    #[test]
    fn test_from_remote() {
        let value = serde_json::json!({
            "styleRules": 3,
            "inlineStyles": 1,
            "externalSheets": 2,
            "stats": {"type": 1, "class": 2, "id": 0, "universal": 0, "attribute": 0, "nonSimple": 4}
        });

        let stats = StylesheetStats::from_remote(&RemoteObject::object(value)).unwrap();
        assert_eq!(stats.style_rules, 3);
        assert_eq!(stats.stats.non_simple, 4);
        assert_eq!(stats.stats.type_selectors, 1);

        assert!(StylesheetStats::from_remote(&RemoteObject::undefined()).is_none());
        assert!(StylesheetStats::from_remote(&RemoteObject::object(serde_json::json!(5))).is_none());
    }
}

//! Media query grouping.

use crate::parser::protocol::{MediaQuery, MediaSource};
use indexmap::IndexMap;
use log::debug;

/// Query text -> descriptors declaring it, in encounter order
pub type MediaQueryGroups = IndexMap<String, Vec<MediaQuery>>;

/// Group declared media queries by their text
///
/// Queries implied by `<link media>` attributes are dropped; only rules
/// declared inside stylesheets are counted.
pub fn group_media_queries(queries: Option<&[MediaQuery]>) -> MediaQueryGroups {
    let mut groups = MediaQueryGroups::new();

    let Some(queries) = queries else {
        return groups;
    };

    for query in queries {
        if query.source == MediaSource::LinkedSheet {
            continue;
        }
        groups.entry(query.text.clone()).or_default().push(query.clone());
    }

    debug!(
        "Grouped {} media queries into {} distinct texts",
        queries.len(),
        groups.len()
    );

    groups
}

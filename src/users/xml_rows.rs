//! XML bodies: `<user>` documents holding one `<results>` element per user.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

use super::model::User;
use crate::error::UserError;

/// Element wrapping each user.
pub(crate) const USER_ELEMENT: &str = "results";

/// The `<user>` root; its name is not checked and `<info>` is skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct XmlDocument {
    results: Vec<User>,
}

/// Decode every `<results>` child of the root.
pub(crate) fn parse_users(body: &str) -> Result<Vec<User>, UserError> {
    let doc: XmlDocument = quick_xml::de::from_str(body)?;
    Ok(doc.results)
}

/// Source text of the `index`-th `tag` element directly under the root,
/// attributes and children included.
pub(crate) fn element_slice<'a>(body: &'a str, tag: &str, index: usize) -> Option<&'a str> {
    let mut reader = Reader::from_str(body);
    let mut depth = 0usize;
    let mut seen = 0usize;
    let mut start = None;

    // Start of the tag that was just read; `<` cannot occur inside a tag.
    let tag_start = |end: usize| body[..end].rfind('<');

    loop {
        let event = reader.read_event().ok()?;
        let end = reader.buffer_position() as usize;
        match event {
            Event::Start(e) => {
                if depth == 1 && e.local_name().as_ref() == tag.as_bytes() {
                    if seen == index {
                        start = tag_start(end);
                    }
                    seen += 1;
                }
                depth += 1;
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if depth == 1
                    && let Some(from) = start
                {
                    return body.get(from..end);
                }
            }
            Event::Empty(e) if depth == 1 && e.local_name().as_ref() == tag.as_bytes() => {
                if seen == index {
                    return body.get(tag_start(end)?..end);
                }
                seen += 1;
            }
            Event::Eof => return None,
            _ => {}
        }
    }
}

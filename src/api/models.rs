use std::fmt;

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::UpdateError;

/// Query parameters of a single update call.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct UpdateRequest<'a> {
    pub host: &'a str,
    pub domain: &'a str,
    pub password: &'a str,
    pub ip: &'a str,
}

impl fmt::Debug for UpdateRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateRequest")
            .field("host", &self.host)
            .field("domain", &self.domain)
            .field("password", &"<REDACTED>")
            .field("ip", &self.ip)
            .finish()
    }
}

/// The parts of an `<interface-response>` document the updater looks at.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UpdateResponse {
    /// Text of every `ErrCount` element, in document order.
    pub err_counts: Vec<String>,
    /// Provider error descriptions (`<errors><Err1>..</Err1></errors>`).
    pub errors: Vec<String>,
}

impl UpdateResponse {
    pub fn is_success(&self) -> bool {
        matches!(self.err_counts.as_slice(), [count] if count == "0")
    }
}

pub fn parse_update_response(body: &str) -> Result<UpdateResponse, UpdateError> {
    // The provider declares utf-16 in its prolog while serving utf-8, and
    // may include a doctype; neither matters here.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(body, options)?;

    let err_counts = doc
        .descendants()
        .filter(|n| has_qualified_name(n, "ErrCount"))
        .map(inner_text)
        .collect();

    let errors = doc
        .descendants()
        .filter(|n| n.has_tag_name("errors"))
        .flat_map(|n| n.children().filter(is_numbered_error))
        .map(inner_text)
        .collect();

    Ok(UpdateResponse { err_counts, errors })
}

/// Element named `name` as written in the source, prefix included, so
/// `<x:ErrCount>` does not match `ErrCount`.
fn has_qualified_name(node: &Node, name: &str) -> bool {
    node.is_element()
        && node
            .document()
            .input_text()
            .get(node.range())
            .and_then(|tag| tag.strip_prefix('<'))
            .and_then(|tag| tag.strip_prefix(name))
            .is_some_and(|rest| rest.starts_with(['>', '/', ' ', '\t', '\r', '\n']))
}

fn is_numbered_error(node: &Node) -> bool {
    node.is_element()
        && node
            .tag_name()
            .name()
            .strip_prefix("Err")
            .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

/// Concatenated text of all descendant text nodes. Whitespace-only nodes
/// are insignificant and skipped.
fn inner_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .filter(|text| !text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n')))
        .collect()
}

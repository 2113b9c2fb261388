//! Shard payload extraction from API responses

use thiserror::Error;

/// Errors raised while reading an API response body
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("response is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("response is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Extract the comma separated list held by the first `tag` element.
///
/// The root element itself is not considered, only its descendants. Pieces
/// are trimmed, blanks dropped, and the result sorted. A missing or empty
/// element yields an empty list.
pub fn extract_list(body: &[u8], tag: &str) -> Result<Vec<String>, ExtractError> {
    let text = std::str::from_utf8(body)?;
    let document = roxmltree::Document::parse(text)?;

    let Some(element) = document
        .root_element()
        .descendants()
        .skip(1)
        .find(|node| node.is_element() && node.has_tag_name(tag))
    else {
        return Ok(Vec::new());
    };

    let payload: String = element
        .descendants()
        .filter(|node| node.is_text())
        .filter_map(|node| node.text())
        .collect();

    let mut values: Vec<String> = payload
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect();
    values.sort();

    Ok(values)
}

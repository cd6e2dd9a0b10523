//! URL list extraction.
//!
//! Parses the search tool's textual output into a validated list of video
//! URLs. The format is strict: a JSON array of strings. Anything else is an
//! explicit error rather than a silent no-op, so a malformed tool result
//! can never stall the pipeline unnoticed.

use crate::error::{PlukkError, Result};

/// Parse tool output into a list of video URLs.
///
/// Accepts a JSON array of strings, optionally wrapped in a markdown code
/// fence. An empty list is an error: there is nothing to fan out over.
pub fn parse_url_list(content: &str) -> Result<Vec<String>> {
    let trimmed = strip_code_fence(content.trim());

    let value: serde_json::Value = serde_json::from_str(trimmed)
        .map_err(|e| PlukkError::Extraction(format!("Tool output is not valid JSON: {}", e)))?;

    let array = value.as_array().ok_or_else(|| {
        PlukkError::Extraction("Tool output must be a JSON array of URLs".to_string())
    })?;

    let urls = array
        .iter()
        .map(|v| {
            v.as_str().map(|s| s.to_string()).ok_or_else(|| {
                PlukkError::Extraction(format!("Expected a string URL, got: {}", v))
            })
        })
        .collect::<Result<Vec<String>>>()?;

    if urls.is_empty() {
        return Err(PlukkError::Extraction(
            "Tool output contained no URLs".to_string(),
        ));
    }

    Ok(urls)
}

/// Strip a surrounding markdown code fence, if present.
fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };

    // Drop an optional language tag on the opening fence
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest,
    };

    rest.strip_suffix("```").map(str::trim).unwrap_or(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_list() {
        let urls = parse_url_list(
            r#"["https://www.youtube.com/watch?v=aaaaaaaaaaa", "https://youtu.be/bbbbbbbbbbb"]"#,
        )
        .unwrap();
        assert_eq!(
            urls,
            vec![
                "https://www.youtube.com/watch?v=aaaaaaaaaaa",
                "https://youtu.be/bbbbbbbbbbb"
            ]
        );
    }

    #[test]
    fn test_parse_fenced_list() {
        let content = "```json\n[\"https://youtu.be/ccccccccccc\"]\n```";
        let urls = parse_url_list(content).unwrap();
        assert_eq!(urls, vec!["https://youtu.be/ccccccccccc"]);
    }

    #[test]
    fn test_parse_not_json_is_error() {
        let err = parse_url_list("here are some videos I found").unwrap_err();
        assert!(matches!(err, PlukkError::Extraction(_)));
    }

    #[test]
    fn test_parse_non_array_is_error() {
        let err = parse_url_list(r#"{"urls": []}"#).unwrap_err();
        assert!(matches!(err, PlukkError::Extraction(_)));
    }

    #[test]
    fn test_parse_non_string_element_is_error() {
        let err = parse_url_list(r#"["https://youtu.be/aaaaaaaaaaa", 42]"#).unwrap_err();
        assert!(matches!(err, PlukkError::Extraction(_)));
    }

    #[test]
    fn test_parse_empty_list_is_error() {
        let err = parse_url_list("[]").unwrap_err();
        assert!(matches!(err, PlukkError::Extraction(_)));
    }
}

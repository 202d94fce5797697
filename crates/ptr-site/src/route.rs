//! Route string normalization.
//!
//! Incoming routes are `/`-delimited URL paths. Normalization is total:
//! malformed input is cleaned up, never rejected.

use percent_encoding::percent_decode_str;

/// Split a route into its path segments.
///
/// Empty segments (leading, trailing, and duplicate slashes) are dropped,
/// and each segment is percent-decoded. Invalid UTF-8 in the decoded bytes
/// is replaced rather than rejected.
#[must_use]
pub fn normalize(route: &str) -> Vec<String> {
    route
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| percent_decode_str(segment).decode_utf8_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_route_has_no_segments() {
        assert!(normalize("").is_empty());
        assert!(normalize("/").is_empty());
    }

    #[test]
    fn test_plain_route_splits_on_slash() {
        assert_eq!(normalize("architecture/layers"), ["architecture", "layers"]);
    }

    #[test]
    fn test_leading_and_trailing_slashes_insignificant() {
        assert_eq!(normalize("/design/typography/"), ["design", "typography"]);
    }

    #[test]
    fn test_duplicate_slashes_collapse() {
        assert_eq!(normalize("components//maps"), ["components", "maps"]);
    }

    #[test]
    fn test_percent_encoded_segment_decodes() {
        assert_eq!(normalize("design/colo%75rs"), ["design", "colours"]);
    }

    #[test]
    fn test_malformed_encoding_normalized_not_rejected() {
        // A trailing '%' has no digits to decode; it passes through.
        assert_eq!(normalize("design/%"), ["design", "%"]);
        // Invalid UTF-8 after decoding is replaced, never an error.
        assert_eq!(normalize("%ff"), ["\u{fffd}"]);
    }
}

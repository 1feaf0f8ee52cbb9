//! HTTP byte-range handling for localplay
//!
//! This module parses `Range: bytes=<start>-[<end>]` headers and resolves
//! them against the size of the served file. Only a single ascending range
//! is understood; anything else degrades to a full-file response so that
//! browsers recover transparently.

/// An inclusive span of file bytes requested by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    /// First byte offset of the span
    pub start: u64,
    /// Last byte offset of the span (inclusive)
    pub end: u64,
}

impl ByteRange {
    /// Number of bytes covered by the span
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }

    /// Formats the span as a `Content-Range` header value
    pub fn content_range(&self, size: u64) -> String {
        format!("bytes {}-{}/{}", self.start, self.end, size)
    }
}

/// How an inbound request's `Range` header resolves against the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOutcome {
    /// No range requested, or the header was malformed: serve the whole file
    Full,
    /// A satisfiable range: serve the partial content
    Partial(ByteRange),
    /// A numeric range that cannot be satisfied: respond 416
    Unsatisfiable,
}

/// Resolves a request's `Range` header against the file size
///
/// The accepted grammar is `bytes=<start>-[<end>]` with decimal offsets.
/// Malformed headers (wrong unit, suffix-only ranges, non-numeric or
/// multiple ranges) resolve to [`RangeOutcome::Full`]. Numeric ranges
/// starting at or beyond the end of the file, or with `end < start`,
/// resolve to [`RangeOutcome::Unsatisfiable`]. An `end` beyond the last
/// byte is clamped to it.
///
/// # Arguments
/// * `header` - The raw `Range` header value, if the request carried one
/// * `size` - Total size of the served file in bytes
pub fn resolve_range(header: Option<&str>, size: u64) -> RangeOutcome {
    let Some(header) = header else {
        return RangeOutcome::Full;
    };

    let Some(offsets) = header.trim().strip_prefix("bytes=") else {
        return RangeOutcome::Full;
    };

    let Some((start_str, end_str)) = offsets.split_once('-') else {
        return RangeOutcome::Full;
    };

    // Suffix ranges (`bytes=-N`) are outside the accepted grammar
    let Ok(start) = start_str.parse::<u64>() else {
        return RangeOutcome::Full;
    };

    let end = if end_str.is_empty() {
        size.saturating_sub(1)
    } else {
        match end_str.parse::<u64>() {
            Ok(end) => end.min(size.saturating_sub(1)),
            Err(_) => return RangeOutcome::Full,
        }
    };

    if start >= size || end < start {
        return RangeOutcome::Unsatisfiable;
    }

    RangeOutcome::Partial(ByteRange { start, end })
}

/// Formats the `Content-Range` header value for a 416 response
pub fn unsatisfiable_content_range(size: u64) -> String {
    format!("bytes */{size}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header_serves_full_file() {
        assert_eq!(resolve_range(None, 100), RangeOutcome::Full);
    }

    #[test]
    fn test_bounded_range() {
        assert_eq!(
            resolve_range(Some("bytes=2-5"), 100),
            RangeOutcome::Partial(ByteRange { start: 2, end: 5 })
        );
    }

    #[test]
    fn test_open_ended_range_runs_to_last_byte() {
        assert_eq!(
            resolve_range(Some("bytes=0-"), 100),
            RangeOutcome::Partial(ByteRange { start: 0, end: 99 })
        );
        assert_eq!(
            resolve_range(Some("bytes=40-"), 100),
            RangeOutcome::Partial(ByteRange { start: 40, end: 99 })
        );
    }

    #[test]
    fn test_end_is_clamped_to_file_size() {
        assert_eq!(
            resolve_range(Some("bytes=10-5000"), 100),
            RangeOutcome::Partial(ByteRange { start: 10, end: 99 })
        );
    }

    #[test]
    fn test_start_beyond_eof_is_unsatisfiable() {
        assert_eq!(resolve_range(Some("bytes=100-"), 100), RangeOutcome::Unsatisfiable);
        assert_eq!(
            resolve_range(Some("bytes=500-600"), 100),
            RangeOutcome::Unsatisfiable
        );
    }

    #[test]
    fn test_inverted_range_is_unsatisfiable() {
        assert_eq!(resolve_range(Some("bytes=5-2"), 100), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn test_empty_file_range_is_unsatisfiable() {
        assert_eq!(resolve_range(Some("bytes=0-"), 0), RangeOutcome::Unsatisfiable);
    }

    #[test]
    fn test_malformed_headers_fall_back_to_full_file() {
        // Wrong unit
        assert_eq!(resolve_range(Some("items=0-5"), 100), RangeOutcome::Full);
        // Suffix range
        assert_eq!(resolve_range(Some("bytes=-5"), 100), RangeOutcome::Full);
        // Non-numeric offsets
        assert_eq!(resolve_range(Some("bytes=a-b"), 100), RangeOutcome::Full);
        // Multiple ranges
        assert_eq!(
            resolve_range(Some("bytes=0-5,10-15"), 100),
            RangeOutcome::Full
        );
        // No separator
        assert_eq!(resolve_range(Some("bytes=5"), 100), RangeOutcome::Full);
        // No offsets at all
        assert_eq!(resolve_range(Some("bytes="), 100), RangeOutcome::Full);
    }

    #[test]
    fn test_range_len_and_header_formatting() {
        let range = ByteRange { start: 2, end: 5 };
        assert_eq!(range.len(), 4);
        assert_eq!(range.content_range(100), "bytes 2-5/100");
        assert_eq!(unsatisfiable_content_range(100), "bytes */100");
    }
}

//! Core data records stored by the registry.

use chrono::{DateTime, Utc};

/// A stored short link: the target URL plus creation time.
///
/// Records are immutable once created; there is no update, expiry, or
/// delete. The URL is kept verbatim — validation is explicitly not this
/// layer's concern.
#[derive(Debug, Clone)]
pub struct LinkRecord {
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkRecord {
    /// Creates a record stamped with the current time.
    pub fn new(long_url: String) -> Self {
        Self {
            long_url,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_url_verbatim() {
        let record = LinkRecord::new("https://example.com/?q=a b&x=%20".to_string());
        assert_eq!(record.long_url, "https://example.com/?q=a b&x=%20");
    }

    #[test]
    fn test_record_stamps_creation_time() {
        let before = Utc::now();
        let record = LinkRecord::new("https://example.com".to_string());
        let after = Utc::now();
        assert!(record.created_at >= before && record.created_at <= after);
    }
}

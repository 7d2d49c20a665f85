//! Connectivity probe.
//!
//! A frontend calls this to confirm it can reach the backend process.

use crate::config::{PROBE_MESSAGE, PROBE_PATH};

/// Probe handler.
///
/// Always answers 200 with a fixed plaintext body. No state is read.
pub async fn connected() -> &'static str {
    PROBE_MESSAGE
}

/// Whether `path` names the probe, ignoring ASCII case and one trailing slash.
pub fn matches_path(path: &str) -> bool {
    let path = path.strip_suffix('/').unwrap_or(path);
    path.eq_ignore_ascii_case(PROBE_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_fixed_message() {
        assert_eq!(connected().await, "Backend is connected!");
    }

    #[test]
    fn matches_loose_spellings() {
        assert!(matches_path("/test"));
        assert!(matches_path("/test/"));
        assert!(matches_path("/TEST"));
        assert!(matches_path("/TeSt/"));
    }

    #[test]
    fn rejects_other_paths() {
        assert!(!matches_path("/"));
        assert!(!matches_path(""));
        assert!(!matches_path("/test//"));
        assert!(!matches_path("/test/extra"));
        assert!(!matches_path("/tests"));
    }
}

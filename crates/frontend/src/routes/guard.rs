//! Navigation guard: every outbound navigation target passes through
//! here before it reaches the history API or an anchor href.
//!
//! Relative targets are a defect but never fatal: a broken link is worse
//! than a logged warning, so the guard coerces and warns instead of
//! rejecting.

const EXTERNAL_SCHEMES: [&str; 4] = ["http://", "https://", "mailto:", "tel:"];

/// Outcome of normalizing a navigation target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTarget {
    pub path: String,
    pub was_relative: bool,
}

/// True for targets that leave the app (`http(s)://`, `mailto:`, `tel:`).
pub fn is_external(target: &str) -> bool {
    EXTERNAL_SCHEMES
        .iter()
        .any(|scheme| target.starts_with(scheme))
}

pub fn is_absolute(target: &str) -> bool {
    target.starts_with('/')
}

/// Classify and normalize a navigation target. Total: external and
/// absolute targets pass through unchanged; anything else is coerced to
/// absolute with a `/` prefix and flagged. Idempotent.
pub fn normalize_navigation_target(target: &str) -> NormalizedTarget {
    if is_external(target) || is_absolute(target) {
        return NormalizedTarget {
            path: target.to_string(),
            was_relative: false,
        };
    }
    log::warn!("relative navigation target '{}' coerced to absolute", target);
    NormalizedTarget {
        path: format!("/{}", target),
        was_relative: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_passes_through() {
        let n = normalize_navigation_target("/jobs/123");
        assert_eq!(n.path, "/jobs/123");
        assert!(!n.was_relative);
    }

    #[test]
    fn test_external_passes_through() {
        for target in [
            "https://example.com/x",
            "http://example.com",
            "mailto:ops@example.com",
            "tel:+441234567890",
        ] {
            let n = normalize_navigation_target(target);
            assert_eq!(n.path, target);
            assert!(!n.was_relative);
        }
    }

    #[test]
    fn test_relative_is_corrected() {
        let n = normalize_navigation_target("jobs/123");
        assert_eq!(n.path, "/jobs/123");
        assert!(n.was_relative);

        let n = normalize_navigation_target("");
        assert_eq!(n.path, "/");
        assert!(n.was_relative);
    }

    #[test]
    fn test_idempotent() {
        for target in ["/jobs", "jobs", "https://example.com", "mailto:a@b.c", ""] {
            let once = normalize_navigation_target(target);
            let twice = normalize_navigation_target(&once.path);
            assert_eq!(twice.path, once.path);
            assert!(!twice.was_relative);
        }
    }

    #[test]
    fn test_output_always_absolute_or_external() {
        for target in ["", "x", "/x", "https://e.com", "tel:1", "a/b/c", "404"] {
            let n = normalize_navigation_target(target);
            assert!(is_absolute(&n.path) || is_external(&n.path));
        }
    }
}

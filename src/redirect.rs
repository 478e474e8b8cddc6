use url::{ParseError, Url};

/// Returns true only for targets that cannot leave the origin: relative
/// references with no scheme and no authority. Empty, absolute,
/// protocol-relative, and unparseable targets are all unsafe.
pub fn is_safe(target: &str) -> bool {
    if target.is_empty() {
        return false;
    }
    // WHATWG parsers (browsers, the url crate) strip tabs and newlines
    // before parsing, so "\t//host" would slip past the prefix checks below
    // yet still leave the origin. A control character anywhere is unsafe.
    if target.chars().any(|c| c.is_ascii_control()) {
        return false;
    }
    // "//host/path" keeps the scheme but swaps the host; browsers fold
    // backslashes into slashes, so those count too.
    if target.starts_with("//") || target.starts_with("/\\") || target.starts_with('\\') {
        return false;
    }
    match Url::parse(target) {
        // Parsed outright means it carries a scheme.
        Ok(_) => false,
        Err(ParseError::RelativeUrlWithoutBase) => true,
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::is_safe;

    #[test]
    fn empty_is_unsafe() {
        assert!(!is_safe(""));
    }

    #[test]
    fn relative_paths_are_safe() {
        assert!(is_safe("/dashboard"));
        assert!(is_safe("/a/b?c=1"));
        assert!(is_safe("post/3"));
    }

    #[test]
    fn absolute_urls_are_unsafe() {
        assert!(!is_safe("https://evil.com"));
        assert!(!is_safe("http://evil.com/login"));
        assert!(!is_safe("HTTPS://evil.com"));
        assert!(!is_safe("javascript:alert(1)"));
    }

    #[test]
    fn protocol_relative_is_unsafe() {
        assert!(!is_safe("//evil.com"));
        assert!(!is_safe("//evil.com/path"));
        assert!(!is_safe("/\\evil.com"));
        assert!(!is_safe("\\\\evil.com"));
    }

    #[test]
    fn control_characters_are_unsafe() {
        assert!(!is_safe("\t//evil.com"));
        assert!(!is_safe("\n//evil.com"));
        assert!(!is_safe("\r\n//evil.com"));
        assert!(!is_safe("/\tdashboard"));
        assert!(!is_safe("https\t://evil.com"));
    }

    #[test]
    fn unparseable_is_unsafe() {
        assert!(!is_safe("http://["));
        assert!(!is_safe("https://"));
    }
}

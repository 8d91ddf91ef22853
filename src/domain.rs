/// Domain display helpers for tab rows
use url::Url;

/// Host shown under a tab's title.
///
/// Examples:
/// - https://www.google.com/search → www.google.com
/// - http://localhost:3000/app → localhost
/// - file:///home/me/notes.txt → file:///home/me/notes.txt
/// - about:blank → "" (parses, but has no host)
/// - not-a-url → not-a-url
pub fn display_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "file" => url.to_string(),
        Ok(parsed) => parsed.host_str().unwrap_or_default().to_string(),
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_domain_basic() {
        assert_eq!(display_domain("https://www.google.com"), "www.google.com");
        assert_eq!(display_domain("https://github.com/rust-lang/rust"), "github.com");
        assert_eq!(display_domain("https://www.google.com/search?q=rust"), "www.google.com");
    }

    #[test]
    fn test_display_domain_ports_and_ips() {
        assert_eq!(display_domain("http://localhost:3000/app"), "localhost");
        assert_eq!(display_domain("http://127.0.0.1:8080"), "127.0.0.1");
    }

    #[test]
    fn test_display_domain_file_urls() {
        assert_eq!(
            display_domain("file:///home/me/notes.txt"),
            "file:///home/me/notes.txt"
        );
    }

    #[test]
    fn test_display_domain_edge_cases() {
        assert_eq!(display_domain("not-a-url"), "not-a-url");
        assert_eq!(display_domain(""), "");
    }

    #[test]
    fn test_display_domain_hostless_urls() {
        assert_eq!(display_domain("about:blank"), "");
        assert_eq!(display_domain("data:text/plain,hello"), "");
    }
}

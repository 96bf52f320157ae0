use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

static URL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("valid url regex"));
static STRIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+|www\.\S+").expect("valid strip regex"));
static WHITESPACE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Returns every `http://` / `https://` URL in `text`, in order of appearance.
/// Duplicates are kept. Bare `www.` hosts are not matched.
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Removes URLs (including bare `www.` hosts) and collapses whitespace.
pub fn strip_urls(text: &str) -> String {
    let without_urls = STRIP_REGEX.replace_all(text, "");
    WHITESPACE_REGEX
        .replace_all(&without_urls, " ")
        .trim()
        .to_string()
}

/// Order-preserving dedup.
pub fn unique_urls(urls: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(urls.len());
    let mut unique = Vec::with_capacity(urls.len());
    for url in urls {
        if seen.insert(url.as_str()) {
            unique.push(url.clone());
        }
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_urls_in_order_with_duplicates() {
        let text = "see https://a.example/x and http://b.example then https://a.example/x";
        assert_eq!(
            extract_urls(text),
            vec![
                "https://a.example/x".to_string(),
                "http://b.example".to_string(),
                "https://a.example/x".to_string(),
            ]
        );
    }

    #[test]
    fn no_scheme_means_no_urls() {
        assert!(extract_urls("Hello, how are you?").is_empty());
        assert!(extract_urls("visit www.example.com today").is_empty());
        assert!(extract_urls("").is_empty());
    }

    #[test]
    fn url_runs_until_whitespace() {
        let urls = extract_urls("go (https://t.me/c/2485256729/1/205) now");
        assert_eq!(urls, vec!["https://t.me/c/2485256729/1/205)".to_string()]);
    }

    #[test]
    fn strips_scheme_and_www_urls() {
        let text = "Buy now!   http://bit.ly/freemoney\n\tor www.deal.example  today ";
        assert_eq!(strip_urls(text), "Buy now! or today");
    }

    #[test]
    fn buy_now_scenario() {
        let text = "Buy now! http://bit.ly/freemoney";
        assert_eq!(extract_urls(text), vec!["http://bit.ly/freemoney".to_string()]);
        assert_eq!(strip_urls(text), "Buy now!");
    }

    #[test]
    fn strip_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "plain text only",
            "a https://x.y/z b www.q.r c",
            "https://only.example",
            "multi\n\nline  http://u.v  text",
        ];
        for input in inputs {
            let once = strip_urls(input);
            assert_eq!(strip_urls(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn unique_keeps_first_occurrence_order() {
        let urls = vec![
            "https://b".to_string(),
            "https://a".to_string(),
            "https://b".to_string(),
        ];
        assert_eq!(
            unique_urls(&urls),
            vec!["https://b".to_string(), "https://a".to_string()]
        );
    }
}

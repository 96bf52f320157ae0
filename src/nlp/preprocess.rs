use rust_stemmers::{Algorithm, Stemmer};

use super::stopwords::{is_punctuation, is_stop_word};

const CONTRACTION_SUFFIXES: &[&str] = &["'s", "'re", "'ll", "'ve", "'d", "'m"];

/// Normalises free text into the stemmed token stream the spam vectorizer
/// was fitted on.
pub struct TextPreprocessor {
    stemmer: Stemmer,
}

impl TextPreprocessor {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn transform(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        tokenize(&lowered)
            .into_iter()
            .filter(|token| is_alnum(token))
            .filter(|token| !is_stop_word(token) && !is_punctuation(token))
            .map(|token| self.stemmer.stem(token).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Word tokenizer: splits on whitespace, detaches leading and trailing
/// punctuation into their own tokens and separates English contractions
/// (`don't` -> `do`, `n't`).
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let start = chunk
            .char_indices()
            .find(|(_, ch)| ch.is_alphanumeric())
            .map(|(idx, _)| idx)
            .unwrap_or(chunk.len());
        let end = chunk
            .char_indices()
            .rev()
            .find(|(_, ch)| ch.is_alphanumeric())
            .map(|(idx, ch)| idx + ch.len_utf8())
            .unwrap_or(start);

        push_chars(&chunk[..start], &mut tokens);
        if start < end {
            split_contraction(&chunk[start..end], &mut tokens);
        }
        push_chars(&chunk[end.max(start)..], &mut tokens);
    }
    tokens
}

fn push_chars<'a>(punct: &'a str, tokens: &mut Vec<&'a str>) {
    for (idx, ch) in punct.char_indices() {
        tokens.push(&punct[idx..idx + ch.len_utf8()]);
    }
}

fn split_contraction<'a>(word: &'a str, tokens: &mut Vec<&'a str>) {
    if word.len() > 3 && word.ends_with("n't") {
        let split = word.len() - 3;
        tokens.push(&word[..split]);
        tokens.push(&word[split..]);
        return;
    }
    for suffix in CONTRACTION_SUFFIXES {
        if word.len() > suffix.len() && word.ends_with(suffix) {
            let split = word.len() - suffix.len();
            tokens.push(&word[..split]);
            tokens.push(&word[split..]);
            return;
        }
    }
    tokens.push(word);
}

fn is_alnum(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_detaches_punctuation_and_contractions() {
        assert_eq!(
            tokenize("hello, world! don't (stop) it's"),
            vec!["hello", ",", "world", "!", "do", "n't", "(", "stop", ")", "it", "'s"]
        );
    }

    #[test]
    fn tokenize_keeps_inner_punctuation() {
        assert_eq!(tokenize("e-mail $5 ..."), vec!["e-mail", "$", "5", ".", ".", "."]);
    }

    #[test]
    fn transform_drops_stop_words_and_stems() {
        let pre = TextPreprocessor::new();
        assert_eq!(
            pre.transform("WINNER!! You have been selected to receive a FREE prize"),
            "winner select receiv free prize"
        );
    }

    #[test]
    fn transform_of_empty_text_is_empty() {
        let pre = TextPreprocessor::new();
        assert_eq!(pre.transform(""), "");
        assert_eq!(pre.transform("!!! ... ,"), "");
    }

    #[test]
    fn transform_discards_non_alphanumeric_tokens() {
        let pre = TextPreprocessor::new();
        assert_eq!(pre.transform("call e-mail now 2day"), "call 2day");
    }
}

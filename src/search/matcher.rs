//! Local lexicon matching.
//!
//! Queries are normalized into lowercase ASCII tokens and matched against the
//! name and keywords of every lexicon record. Short tokens must match a field
//! exactly; longer tokens match as substrings. A record qualifies as soon as
//! any token hits any field, and results come back in lexicon order.

use super::lexicon::EmojiDef;

/// Substring search produces a lot of noise for short words, so tokens below
/// this length only match a name or keyword exactly.
const MIN_TOKEN_LEN_FOR_SUBSTRING: usize = 4;

/// Splits a query on whitespace and strips each word down to lowercase ASCII
/// alphanumerics and underscores. Words that strip to nothing are dropped.
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

fn token_matches(token: &str, field: &str) -> bool {
    if token.len() < MIN_TOKEN_LEN_FOR_SUBSTRING {
        field == token
    } else {
        field.contains(token)
    }
}

/// Returns the characters of every record matching `query`, in record order.
pub fn search_lexicon(records: &[EmojiDef], query: &str) -> Vec<String> {
    let tokens = tokenize(query);
    if tokens.is_empty() {
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| {
            tokens.iter().any(|token| {
                token_matches(token, record.name)
                    || record.keywords.iter().any(|keyword| token_matches(token, keyword))
            })
        })
        .map(|record| record.character.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::lexicon::LEXICON;

    const RECORDS: &[EmojiDef] = &[
        EmojiDef { character: "🗂", name: "card_index_dividers", keywords: &["organizing", "category"] },
        EmojiDef { character: "🐈", name: "cat", keywords: &["animal", "pet"] },
        EmojiDef { character: "🐕", name: "dog", keywords: &["animal", "pet"] },
    ];

    #[test]
    fn tokenize_lowercases_and_strips_punctuation() {
        assert_eq!(tokenize("I love Unicorns!"), vec!["i", "love", "unicorns"]);
        assert_eq!(tokenize("  spaced   out  "), vec!["spaced", "out"]);
    }

    #[test]
    fn tokenize_drops_words_that_strip_to_nothing() {
        assert_eq!(tokenize("!!! ??? hello"), vec!["hello"]);
        assert!(tokenize("!!!").is_empty());
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn short_tokens_require_an_exact_field_match() {
        // "cat" must not reach "category" or "card_index_dividers".
        assert_eq!(search_lexicon(RECORDS, "cat"), vec!["🐈"]);
    }

    #[test]
    fn long_tokens_match_as_substrings() {
        assert_eq!(search_lexicon(RECORDS, "organ"), vec!["🗂"]);
        assert_eq!(search_lexicon(RECORDS, "divider"), vec!["🗂"]);
    }

    #[test]
    fn any_token_qualifies_a_record() {
        let results = search_lexicon(RECORDS, "category dog");
        assert_eq!(results, vec!["🗂", "🐕"]);
    }

    #[test]
    fn empty_and_punctuation_queries_match_nothing() {
        assert!(search_lexicon(RECORDS, "").is_empty());
        assert!(search_lexicon(RECORDS, "   ").is_empty());
        assert!(search_lexicon(RECORDS, "!!!").is_empty());
    }

    #[test]
    fn unicorn_comes_back_first() {
        let results = search_lexicon(LEXICON, "unicorn");
        assert_eq!(results.first().map(String::as_str), Some("🦄"));
    }

    #[test]
    fn crossed_finds_crossed_fingers() {
        let results = search_lexicon(LEXICON, "crossed");
        assert!(results.iter().any(|e| e == "🤞"), "missing 🤞 in {results:?}");
    }

    #[test]
    fn drool_finds_drooling_face() {
        let results = search_lexicon(LEXICON, "drool");
        assert!(results.iter().any(|e| e == "🤤"), "missing 🤤 in {results:?}");
    }

    #[test]
    fn cat_only_matches_the_cat_record() {
        assert_eq!(search_lexicon(LEXICON, "cat"), vec!["🐱"]);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(search_lexicon(LEXICON, "UNICORN"), search_lexicon(LEXICON, "unicorn"));
    }

    #[test]
    fn results_preserve_lexicon_order() {
        let results = search_lexicon(LEXICON, "horse");
        let positions: Vec<usize> = results
            .iter()
            .map(|e| LEXICON.iter().position(|def| def.character == e).expect("lexicon entry"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "out of order: {results:?}");
        assert!(results.contains(&"🐴".to_string()));
        assert!(results.contains(&"🎠".to_string()));
    }
}

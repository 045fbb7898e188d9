//! Best-effort English / Hindi / Marathi detection over user input.
//!
//! Devanagari text is split on a handful of characters and suffixes that are
//! common in Marathi but rare in Hindi. Latin text is matched against two
//! lists of Romanized words. Misclassification is expected; the result only
//! picks which language the model is asked to answer in.

use crate::domain::{Language, LanguageTag, Script};
use regex_lite::Regex;
use std::sync::LazyLock;

const MARATHI_WORDS: &[&str] = &[
    "kay", "kasa", "kaay", "aahe", "mala", "tula", "amhi", "tumhi", "majha", "tuza", "nahi",
    "honar", "zala", "mhanun", "pan", "ani", "sarva", "kiti", "koni", "kuthe", "kadhi", "kashala",
    "bara", "chhan", "bhau", "tai", "dada", "aai", "baba", "zhala", "zali", "zale", "kahich",
    "kahitari", "watla", "ashi", "asa", "ase",
];

const HINDI_WORDS: &[&str] = &[
    "kya", "kaise", "kaisa", "hai", "hain", "mujhe", "tujhe", "hum", "tum", "mera", "tera", "nahi",
    "hoga", "hua", "isliye", "lekin", "aur", "sab", "kitna", "kaun", "kaha", "kab", "kyun", "thik",
    "achha", "bhai", "didi", "maa", "papa", "hogaya", "hogayi", "hogaye", "kabhi", "kaisi", "kuch",
    "kuchh", "laga", "aisa", "aisi", "aise",
];

const MARATHI_DEVANAGARI_PATTERN: &str = r"[ळऱ]|ला\s|ची\s|चे\s|चा\s|ण्या|ळा|ळे|झाल";

static MARATHI_WORD_RE: LazyLock<Regex> = LazyLock::new(|| word_list_regex(MARATHI_WORDS));
static HINDI_WORD_RE: LazyLock<Regex> = LazyLock::new(|| word_list_regex(HINDI_WORDS));
static MARATHI_DEVANAGARI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(MARATHI_DEVANAGARI_PATTERN).expect("Marathi Devanagari pattern is valid")
});

fn word_list_regex(words: &[&str]) -> Regex {
    let pattern = format!(r"(?i)\b(?:{})\b", words.join("|"));
    Regex::new(&pattern).expect("word list pattern is valid")
}

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

pub fn detect_language(text: &str) -> LanguageTag {
    if text.chars().any(is_devanagari) {
        let language = if MARATHI_DEVANAGARI_RE.is_match(text) {
            Language::Marathi
        } else {
            Language::Hindi
        };
        return LanguageTag::new(language, Script::Devanagari);
    }

    let has_marathi = MARATHI_WORD_RE.is_match(text);
    let has_hindi = HINDI_WORD_RE.is_match(text);

    match (has_marathi, has_hindi) {
        (true, false) => LanguageTag::new(Language::Marathi, Script::Latin),
        (false, true) => LanguageTag::new(Language::Hindi, Script::Latin),
        (true, true) => {
            let marathi_matches = MARATHI_WORD_RE.find_iter(text).count();
            let hindi_matches = HINDI_WORD_RE.find_iter(text).count();
            // Ties go to Hindi.
            if marathi_matches > hindi_matches {
                LanguageTag::new(Language::Marathi, Script::Latin)
            } else {
                LanguageTag::new(Language::Hindi, Script::Latin)
            }
        }
        (false, false) => LanguageTag::ENGLISH,
    }
}

//! Insertion of soft hyphens, the invisible marks that tell the layout where a word may be
//! split.

use spandex_hyphenation::load::Load;
use spandex_hyphenation::{Hyphenator, Language, Standard};

use crate::layout::constants::SOFT_HYPHEN;
use crate::{Error, Result};

/// Something that marks the places where words may be split.
pub trait Hyphenate {
    /// Returns the text with a soft hyphen inserted at every place a word may be split.
    fn hyphenate(&self, text: &str) -> Result<String>;
}

/// Returns the embedded language matching a language code.
///
/// ```
/// # use boxes::hyphenate::language;
/// assert!(language("en-us").is_ok());
/// assert!(language("EN_GB").is_ok());
/// assert!(language("tlh").is_err());
/// ```
pub fn language(code: &str) -> Result<Language> {
    match code.to_lowercase().replace('_', "-").as_str() {
        "en" | "en-us" => Ok(Language::EnglishUS),
        "en-gb" => Ok(Language::EnglishGB),
        "fr" | "fr-fr" => Ok(Language::French),
        "de" | "de-de" | "de-1996" => Ok(Language::German1996),
        "es" | "es-es" => Ok(Language::Spanish),
        "it" | "it-it" => Ok(Language::Italian),
        _ => Err(Error::UnknownLanguage(String::from(code))),
    }
}

/// A hyphenation dictionary.
pub struct Dictionary {
    /// The patterns of the language.
    standard: Standard,
}

impl Dictionary {
    /// Loads the embedded dictionary of a language.
    pub fn load(code: &str) -> Result<Dictionary> {
        let standard = Standard::from_embedded(language(code)?)?;
        debug!("loaded hyphenation dictionary for {}", code);
        Ok(Dictionary { standard })
    }

    /// Returns the word with a soft hyphen at each of its break points.
    pub fn hyphenate_word(&self, word: &str) -> String {
        let breaks = self.standard.hyphenate(word).breaks;
        let mut output = String::with_capacity(word.len() + 2 * breaks.len());

        for (index, c) in word.char_indices() {
            if breaks.contains(&index) {
                output.push(SOFT_HYPHEN);
            }
            output.push(c);
        }

        output
    }
}

impl Hyphenate for Dictionary {
    fn hyphenate(&self, text: &str) -> Result<String> {
        Ok(text
            .lines()
            .map(|line| {
                line.split_whitespace()
                    .map(|word| self.hyphenate_word(word))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// Leaves the text untouched, no word is ever split.
#[derive(Debug, Copy, Clone, Default)]
pub struct Verbatim;

impl Hyphenate for Verbatim {
    fn hyphenate(&self, text: &str) -> Result<String> {
        Ok(String::from(text))
    }
}

#[cfg(test)]
mod tests {
    use crate::hyphenate::{Dictionary, Hyphenate, Verbatim};
    use crate::layout::constants::SOFT_HYPHEN;
    use crate::{Error, Result};

    #[test]
    fn verbatim_keeps_everything() -> Result<()> {
        let text = "  spaced   out\n\n";
        assert_eq!(Verbatim.hyphenate(text)?, text);
        Ok(())
    }

    #[test]
    fn dictionary_marks_breaks() -> Result<()> {
        let dictionary = Dictionary::load("en-us")?;
        let hyphenated = dictionary.hyphenate_word("hyphenation");

        assert!(hyphenated.contains(SOFT_HYPHEN));
        assert_eq!(hyphenated.replace(SOFT_HYPHEN, ""), "hyphenation");
        assert!(!hyphenated.starts_with(SOFT_HYPHEN));
        Ok(())
    }

    #[test]
    fn whitespace_collapses() -> Result<()> {
        let dictionary = Dictionary::load("en-us")?;
        let hyphenated = dictionary.hyphenate("a  b\tc\n\nd")?;
        assert_eq!(hyphenated, "a b c\n\nd");
        Ok(())
    }

    #[test]
    fn unknown_language() {
        match Dictionary::load("xx") {
            Err(Error::UnknownLanguage(code)) => assert_eq!(code, "xx"),
            _ => panic!("expected an unknown language error"),
        }
    }
}

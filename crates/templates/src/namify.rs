use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::acronyms::Acronyms;

static LEADING_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+").expect("leading digits pattern"));
static ALPHANUMERIC_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").expect("alphanumeric run pattern"));

/// Turns raw names into exported PascalCase identifiers.
///
/// ```
/// use asyncgen_templates::{Acronyms, Namifier};
///
/// let acronyms = Acronyms::builtin().with(["MQTT"]).unwrap();
/// let namifier = Namifier::new(acronyms.into());
/// assert_eq!(namifier.namify("mqtt_client-id"), "MQTTClientID");
/// ```
#[derive(Debug, Clone)]
pub struct Namifier {
    acronyms: Arc<Acronyms>,
}

impl Default for Namifier {
    fn default() -> Self {
        Self::new(Acronyms::builtin())
    }
}

impl Namifier {
    pub fn new(acronyms: Arc<Acronyms>) -> Self {
        Self { acronyms }
    }

    pub fn acronyms(&self) -> &Acronyms {
        &self.acronyms
    }

    /// Normalizes `raw` into a canonical identifier.
    ///
    /// Never fails: input without any ASCII letter or digit gives an empty
    /// string. The result never starts with a digit and `namify` is
    /// idempotent on its own output.
    pub fn namify(&self, raw: &str) -> String {
        let stripped = LEADING_DIGITS.replace(raw, "");

        let mut out = String::with_capacity(stripped.len());
        for word in split_words(&stripped) {
            // A separator can hide digits from the leading strip ("_0abc").
            let word = if out.is_empty() {
                word.trim_start_matches(|c: char| c.is_ascii_digit())
            } else {
                word
            };
            if word.is_empty() {
                continue;
            }
            match self.acronyms.lookup(word) {
                Some(acronym) => out.push_str(acronym),
                None => push_title_case(&mut out, word),
            }
        }

        if out.is_empty() && !raw.is_empty() {
            log::trace!("namify({raw:?}) produced an empty identifier");
        }
        out
    }
}

/// Normalizes `raw` with the built-in acronym table.
pub fn namify(raw: &str) -> String {
    static DEFAULT: Lazy<Namifier> = Lazy::new(Namifier::default);
    DEFAULT.namify(raw)
}

/// Splits `raw` into words.
///
/// Anything that is not an ASCII letter or digit separates words. Inside an
/// alphanumeric run a word starts at an uppercase letter following a
/// lowercase letter or a digit, and at the last uppercase letter of an
/// uppercase run followed by a lowercase letter or a digit ("HTTPServer" ->
/// "HTTP", "Server"; "ID2" -> "I", "D2").
fn split_words(raw: &str) -> impl Iterator<Item = &str> {
    ALPHANUMERIC_RUN
        .find_iter(raw)
        .flat_map(|run| split_humps(run.as_str()))
}

fn split_humps(run: &str) -> Vec<&str> {
    let bytes = run.as_bytes();
    let mut words = Vec::new();
    let mut start = 0;

    for i in 1..bytes.len() {
        if !bytes[i].is_ascii_uppercase() {
            continue;
        }
        let prev = bytes[i - 1];
        let ends_run = bytes
            .get(i + 1)
            .is_some_and(|next| next.is_ascii_lowercase() || next.is_ascii_digit());
        let boundary = prev.is_ascii_lowercase()
            || prev.is_ascii_digit()
            || (prev.is_ascii_uppercase() && ends_run);
        if boundary {
            words.push(&run[start..i]);
            start = i;
        }
    }
    words.push(&run[start..]);
    words
}

fn push_title_case(out: &mut String, word: &str) {
    // Uppercase runs ("AB", "XYZ") are already canonical; lowering them
    // would make the output tokenize differently on a second pass.
    if !word.bytes().any(|b| b.is_ascii_lowercase()) {
        out.push_str(word);
        return;
    }
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}

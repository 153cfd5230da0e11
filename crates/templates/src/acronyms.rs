use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::error::{NamingError, Result};

/// Initialisms rendered fully uppercase when they form a whole word.
pub const BUILTIN_ACRONYMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID", "IP",
    "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS", "TTL",
    "UDP", "UI", "UID", "URI", "URL", "UUID", "VM", "XML", "XMPP", "XSRF", "XSS",
];

static BUILTIN: Lazy<Arc<Acronyms>> = Lazy::new(|| {
    let mut acronyms = Acronyms::empty();
    for acronym in BUILTIN_ACRONYMS {
        acronyms.insert_unchecked(acronym);
    }
    Arc::new(acronyms)
});

/// Read-only acronym table, matched case-insensitively against whole words.
///
/// Tables are never mutated once shared: extending one builds a new table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Acronyms {
    // lowercase spelling -> canonical uppercase spelling
    by_lower: HashMap<String, String>,
}

impl Acronyms {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared built-in table, initialized on first use.
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Returns a copy of this table with `extra` acronyms added.
    ///
    /// Fails on the first acronym that is empty or not made of uppercase
    /// ASCII letters. Digits are refused: a digit ends an uppercase run during
    /// tokenization, so such an entry would rarely match a whole word.
    pub fn with<I, S>(&self, extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut acronyms = self.clone();
        for acronym in extra {
            let acronym = acronym.as_ref();
            validate_acronym(acronym)?;
            acronyms.insert_unchecked(acronym);
        }
        Ok(acronyms)
    }

    /// Canonical spelling of `word` if it is an acronym.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.by_lower
            .get(&word.to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.by_lower.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_lower.is_empty()
    }

    /// Canonical spellings, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.by_lower.values().map(String::as_str)
    }

    fn insert_unchecked(&mut self, acronym: &str) {
        self.by_lower
            .insert(acronym.to_ascii_lowercase(), acronym.to_string());
    }
}

pub(crate) fn validate_acronym(acronym: &str) -> Result<()> {
    let valid = !acronym.is_empty() && acronym.chars().all(|c| c.is_ascii_uppercase());
    if valid {
        Ok(())
    } else {
        Err(NamingError::invalid_acronym(acronym))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_is_case_insensitive() {
        let acronyms = Acronyms::builtin();
        assert_eq!(acronyms.lookup("id"), Some("ID"));
        assert_eq!(acronyms.lookup("Id"), Some("ID"));
        assert_eq!(acronyms.lookup("ID"), Some("ID"));
        assert_eq!(acronyms.lookup("Url"), Some("URL"));
        assert_eq!(acronyms.len(), BUILTIN_ACRONYMS.len());
    }

    #[test]
    fn lookup_matches_whole_words_only() {
        let acronyms = Acronyms::builtin();
        assert!(!acronyms.contains("identity"));
        assert!(!acronyms.contains("covid"));
        assert!(!acronyms.contains("i"));
    }

    #[test]
    fn builtin_is_shared() {
        assert!(Arc::ptr_eq(&Acronyms::builtin(), &Acronyms::builtin()));
    }

    #[test]
    fn with_builds_a_new_table() {
        let builtin = Acronyms::builtin();
        let extended = builtin.with(["AMQP", "MQTT"]).unwrap();

        assert!(extended.contains("amqp"));
        assert!(extended.contains("id"));
        assert!(!builtin.contains("amqp"));
        assert_eq!(extended.len(), builtin.len() + 2);
    }

    #[test]
    fn with_rejects_entries_that_cannot_match() {
        let acronyms = Acronyms::empty();
        for bad in ["", "Id", "A-B", "2FA", "UTF8", "ÉTÉ"] {
            assert!(
                matches!(acronyms.with([bad]), Err(NamingError::InvalidAcronym(_))),
                "{bad:?} should be rejected"
            );
        }
        assert!(acronyms.with(["AMQP", "NATS"]).is_ok());
    }
}

use super::{PatternError, PatternResult};
use hashbrown::HashMap as FastHashMap;
use regex::Regex;
use std::borrow::Cow;
use std::sync::Arc;

/// A compiled, fully anchored constraint together with its source text.
#[derive(Debug, Clone)]
pub struct Constraint {
    raw: Box<str>,
    compiled: Arc<Regex>,
}

impl Constraint {
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn is_match(&self, text: &str) -> bool {
        self.compiled.is_match(text)
    }
}

impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Constraint {}

/// Compiles each distinct constraint source once per tree. Entries are keyed
/// by separator as well, since the separator decides what `\<sep>` unescapes to.
#[derive(Debug, Clone, Default)]
pub struct ConstraintCache {
    compiled: FastHashMap<(u8, Box<str>), Arc<Regex>>,
}

impl ConstraintCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    /// `raw` is the source as written; an escaped separator is unescaped
    /// before compiling.
    pub fn compile(&mut self, name: &str, raw: &str, separator: u8) -> PatternResult<Constraint> {
        let key = (separator, Box::<str>::from(raw));
        if let Some(existing) = self.compiled.get(&key) {
            return Ok(Constraint {
                raw: raw.into(),
                compiled: existing.clone(),
            });
        }

        let source = unescape_separator(raw, separator);
        let anchored = format!("^(?:{})$", source);
        match Regex::new(&anchored) {
            Ok(regex) => {
                let compiled = Arc::new(regex);
                self.compiled.insert(key, compiled.clone());
                Ok(Constraint {
                    raw: raw.into(),
                    compiled,
                })
            }
            Err(err) => Err(PatternError::RegexConstraintInvalid {
                pattern: raw.to_string(),
                name: name.to_string(),
                error: err.to_string(),
            }),
        }
    }

    /// Takes over the entries of another cache, keeping our own on overlap.
    pub fn absorb(&mut self, other: ConstraintCache) {
        for (key, compiled) in other.compiled {
            self.compiled.entry(key).or_insert(compiled);
        }
    }
}

fn unescape_separator(raw: &str, separator: u8) -> Cow<'_, str> {
    let escaped = ['\\', separator as char].iter().collect::<String>();
    if raw.contains(escaped.as_str()) {
        Cow::Owned(raw.replace(escaped.as_str(), &(separator as char).to_string()))
    } else {
        Cow::Borrowed(raw)
    }
}

//! Abbreviation lookup over one keyword bucket.

use crate::model::Entry;
use std::collections::HashMap;

/// Short form → full form, last entry wins on duplicate short forms.
#[derive(Debug, Default)]
pub struct KeywordTable {
    by_short: HashMap<String, String>,
}

impl KeywordTable {
    pub fn new(entries: &[Entry]) -> Self {
        let by_short = entries
            .iter()
            .map(|e| (e.short.clone(), e.full.clone()))
            .collect();
        KeywordTable { by_short }
    }

    /// Whether `word` is a valid spelling of a known keyword: some short form
    /// is a prefix of `word` and `word` is a prefix of that short form's full
    /// spelling. The longest known prefix decides.
    pub fn is_keyword(&self, word: &str) -> bool {
        let len = word.chars().count();
        let ends = word
            .char_indices()
            .map(|(i, c)| i + c.len_utf8())
            .collect::<Vec<_>>();

        for end in ends.into_iter().rev() {
            if let Some(full) = self.by_short.get(&word[..end]) {
                let truncated: String = full.chars().take(len).collect();
                return truncated == word;
            }
        }
        false
    }
}

/// Entries whose own bucket does not resolve them back to their full form.
pub fn ambiguous(entries: &[Entry]) -> Vec<&Entry> {
    let table = KeywordTable::new(entries);
    entries
        .iter()
        .filter(|e| {
            !(e.is_consistent() && table.is_keyword(&e.full) && table.is_keyword(&e.short))
        })
        .collect()
}

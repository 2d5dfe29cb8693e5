//! Vim syntax file parser — line-by-line keyword extraction.
//!
//! Only `syn keyword vim{Command,Option,AutoEvent} contained ...` lines are
//! read; everything else in `syntax/vim.vim` is ignored.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^syn keyword vim(Command|Option|AutoEvent) contained\s+(.*)").unwrap()
});

// `d[elete]` → ("d", "elete"); `delete` → ("delete", None)
static RE_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+)(?:\[(\w+)\])?").unwrap());

/// Mappings the syntax file does not list as options but the consumer expects.
const SYNTHETIC_OPTIONS: &[&str] = &["nnoremap", "inoremap", "vnoremap"];

// -- Public API ---------------------------------------------------------------

/// Parse a Vim syntax file into sorted keyword buckets.
pub fn parse(input: &str) -> Keywords {
    let mut keywords = Keywords::default();

    for line in input.lines() {
        if let Some((category, entries)) = parse_line(line) {
            keywords.bucket_mut(category).extend(entries);
        }
    }

    for name in SYNTHETIC_OPTIONS {
        keywords.option.push(Entry::new(*name, *name));
    }

    keywords.sort();
    keywords
}

/// Classify a single line and extract its keywords, in line order.
pub fn parse_line(line: &str) -> Option<(Category, Vec<Entry>)> {
    let caps = RE_LINE.captures(line)?;
    let category = Category::from_tag(&caps[1])?;
    let entries = RE_ITEM
        .captures_iter(&caps[2])
        .map(|item| Entry::from_parts(&item[1], item.get(2).map(|m| m.as_str())))
        .collect();
    Some((category, entries))
}

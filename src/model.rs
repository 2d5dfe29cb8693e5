//! Data model for extracted keywords — format-agnostic.

/// Keyword category, decided by the marker phrase of a syntax line.
///
/// Declaration order is the output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Command,
    Option,
    AutoEvent,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Command, Category::Option, Category::AutoEvent];

    /// Match the tag following `vim` in `syn keyword vim<Tag> contained`.
    pub fn from_tag(tag: &str) -> Option<Category> {
        match tag {
            "Command" => Some(Category::Command),
            "Option" => Some(Category::Option),
            "AutoEvent" => Some(Category::AutoEvent),
            _ => None,
        }
    }

    /// Bucket name used in rendered output.
    pub fn name(self) -> &'static str {
        match self {
            Category::Command => "command",
            Category::Option => "option",
            Category::AutoEvent => "auto",
        }
    }
}

/// A keyword with its minimal abbreviation.
///
/// Ordering compares `short` first, then `full`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Entry {
    /// Minimal prefix the user has to type, e.g. `d`
    pub short: String,
    /// Complete spelling, e.g. `delete`
    pub full: String,
}

impl Entry {
    pub fn new(short: impl Into<String>, full: impl Into<String>) -> Self {
        Entry {
            short: short.into(),
            full: full.into(),
        }
    }

    /// Build from a `short[suffix]` token split into its parts.
    pub fn from_parts(short: &str, suffix: Option<&str>) -> Self {
        let mut full = short.to_string();
        if let Some(suffix) = suffix {
            full.push_str(suffix);
        }
        Entry::new(short, full)
    }

    /// True when the full form extends the short form.
    pub fn is_consistent(&self) -> bool {
        self.full.starts_with(&self.short)
    }
}

/// Complete extraction result: one bucket per category.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Keywords {
    pub command: Vec<Entry>,
    pub option: Vec<Entry>,
    pub auto: Vec<Entry>,
}

impl Keywords {
    pub fn bucket(&self, category: Category) -> &[Entry] {
        match category {
            Category::Command => &self.command,
            Category::Option => &self.option,
            Category::AutoEvent => &self.auto,
        }
    }

    pub fn bucket_mut(&mut self, category: Category) -> &mut Vec<Entry> {
        match category {
            Category::Command => &mut self.command,
            Category::Option => &mut self.option,
            Category::AutoEvent => &mut self.auto,
        }
    }

    /// Buckets in output order, paired with their category.
    pub fn buckets(&self) -> impl Iterator<Item = (Category, &[Entry])> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.bucket(c)))
    }

    /// Sort every bucket by `(short, full)`. Duplicates are kept.
    pub fn sort(&mut self) {
        for category in Category::ALL {
            self.bucket_mut(category).sort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_is_exact() {
        assert_eq!(Category::from_tag("Command"), Some(Category::Command));
        assert_eq!(Category::from_tag("AutoEvent"), Some(Category::AutoEvent));
        assert_eq!(Category::from_tag("Option"), Some(Category::Option));
        assert_eq!(Category::from_tag("CommandName"), None);
        assert_eq!(Category::from_tag("autoevent"), None);
    }

    #[test]
    fn entry_from_parts() {
        assert_eq!(Entry::from_parts("d", Some("elete")), Entry::new("d", "delete"));
        assert_eq!(Entry::from_parts("delete", None), Entry::new("delete", "delete"));
    }

    #[test]
    fn entry_orders_by_short_then_full() {
        let mut entries = vec![
            Entry::new("s", "substitute"),
            Entry::new("a", "append"),
            Entry::new("s", "set"),
        ];
        entries.sort();
        assert_eq!(
            entries,
            vec![
                Entry::new("a", "append"),
                Entry::new("s", "set"),
                Entry::new("s", "substitute"),
            ]
        );
    }

    #[test]
    fn consistency_check() {
        assert!(Entry::new("d", "delete").is_consistent());
        assert!(!Entry::new("x", "delete").is_consistent());
    }

    #[test]
    fn buckets_in_declaration_order() {
        let kw = Keywords::default();
        let names: Vec<_> = kw.buckets().map(|(c, _)| c.name()).collect();
        assert_eq!(names, ["command", "option", "auto"]);
    }
}

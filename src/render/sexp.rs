//! Lisp assoc-list renderer — the format editor plugins read.
//!
//! Layout is fixed: no indentation, one entry per line, both halves of each
//! pair double-quoted.

use crate::model::Keywords;
use crate::render::Renderer;

pub struct SexpRenderer;

impl Renderer for SexpRenderer {
    fn render(&self, keywords: &Keywords) -> String {
        let mut out = String::new();
        out.push_str("(\n");
        for (category, entries) in keywords.buckets() {
            out.push_str(&format!("( {}\n", category.name()));
            for entry in entries {
                out.push_str(&format!("(\"{}\" \"{}\")\n", entry.short, entry.full));
            }
            out.push_str(")\n");
        }
        out.push_str(")\n");
        out
    }
}

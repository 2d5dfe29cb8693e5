//! JSON renderer — the same buckets as arrays of `[short, full]` pairs.

use crate::model::*;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, keywords: &Keywords) -> String {
        let mut out = String::new();
        out.push_str("{\n");

        let last = Category::ALL.len() - 1;
        for (i, (category, entries)) in keywords.buckets().enumerate() {
            write_bucket(&mut out, category.name(), entries);
            out.push_str(if i < last { ",\n" } else { "\n" });
        }

        out.push_str("}\n");
        out
    }
}

fn write_bucket(out: &mut String, name: &str, entries: &[Entry]) {
    out.push_str(&format!("  \"{}\": [", name));
    if entries.is_empty() {
        out.push(']');
        return;
    }
    out.push('\n');
    for (i, entry) in entries.iter().enumerate() {
        let comma = if i < entries.len() - 1 { "," } else { "" };
        out.push_str(&format!(
            "    [\"{}\", \"{}\"]{}",
            json_escape(&entry.short),
            json_escape(&entry.full),
            comma
        ));
        out.push('\n');
    }
    out.push_str("  ]");
}

fn json_escape(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pairs() {
        let keywords = Keywords {
            command: vec![Entry::new("d", "delete"), Entry::new("delete", "delete")],
            option: vec![],
            auto: vec![Entry::new("BufAdd", "BufAdd")],
        };
        let expected = r#"{
  "command": [
    ["d", "delete"],
    ["delete", "delete"]
  ],
  "option": [],
  "auto": [
    ["BufAdd", "BufAdd"]
  ]
}
"#;
        assert_eq!(JsonRenderer.render(&keywords), expected);
    }

    #[test]
    fn escapes_strings() {
        assert_eq!(json_escape("a\"b\\c"), "a\\\"b\\\\c");
    }
}

//! Front-matter parsing
//!
//! Only a restricted dialect is understood: one `key: value` pair per line,
//! optionally quoted scalars, and inline `[a, b, c]` lists.

use indexmap::IndexMap;

/// Marker line opening and closing a front-matter block
const MARKER: &str = "---";

/// A front-matter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontValue {
    Scalar(String),
    List(Vec<String>),
}

impl FrontValue {
    /// Read the value as a single string, `None` when it is empty
    ///
    /// Lists are joined with `", "`.
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            FrontValue::Scalar(s) => s.clone(),
            FrontValue::List(items) => items.join(", "),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Read the value as a list of non-empty strings
    pub fn to_list(&self) -> Vec<String> {
        match self {
            FrontValue::Scalar(s) if s.is_empty() => Vec::new(),
            FrontValue::Scalar(s) => vec![s.clone()],
            FrontValue::List(items) => items.iter().filter(|s| !s.is_empty()).cloned().collect(),
        }
    }
}

/// Front-matter data from a post, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    fields: IndexMap<String, FrontValue>,
}

impl FrontMatter {
    /// Split `content` into front-matter and body
    ///
    /// Content without a complete block yields an empty map and the whole
    /// input as body.
    pub fn parse(content: &str) -> (Self, &str) {
        match split_block(content) {
            Some((block, body)) => (Self::parse_block(block), body),
            None => (FrontMatter::default(), content),
        }
    }

    fn parse_block(block: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in block.lines() {
            let Some(colon_pos) = line.find(':') else {
                continue;
            };
            if colon_pos == 0 {
                continue;
            }
            let key = line[..colon_pos].trim();
            if key.is_empty() {
                continue;
            }
            let value = parse_value(line[colon_pos + 1..].trim());
            fields.insert(key.to_string(), value);
        }

        Self { fields }
    }

    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&FrontValue> {
        self.fields.get(key)
    }

    /// Look up a field as text, skipping empty values
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(FrontValue::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Locate the block between the opening and closing marker lines.
/// Returns `(block, body)` where `body` is the rest of the input after the
/// closing marker line.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let (first, mut rest) = next_line(content)?;
    if !is_marker(first) {
        return None;
    }

    let block_start = content.len() - rest.len();
    loop {
        let line_start = content.len() - rest.len();
        let (line, remaining) = next_line(rest)?;
        if is_marker(line) {
            // Block text excludes the newline before the closing marker
            let block_end = line_start.saturating_sub(1).max(block_start);
            return Some((&content[block_start..block_end], remaining));
        }
        rest = remaining;
    }
}

/// Split off the first line (without its `\n`). `None` once input is exhausted.
fn next_line(s: &str) -> Option<(&str, &str)> {
    if s.is_empty() {
        return None;
    }
    match s.find('\n') {
        Some(pos) => Some((&s[..pos], &s[pos + 1..])),
        None => Some((s, "")),
    }
}

fn is_marker(line: &str) -> bool {
    line.strip_prefix(MARKER)
        .map(|tail| tail.trim().is_empty())
        .unwrap_or(false)
}

fn parse_value(raw: &str) -> FrontValue {
    let value = unquote(raw);

    if value.len() >= 2 && value.starts_with('[') && value.ends_with(']') {
        let inner = &value[1..value.len() - 1];
        if inner.trim().is_empty() {
            return FrontValue::List(Vec::new());
        }
        let items = inner
            .split(',')
            .map(|item| item.trim().replace(['"', '\''], ""))
            .collect();
        return FrontValue::List(items);
    }

    FrontValue::Scalar(value.to_string())
}

/// Strip one layer of matching single or double quotes
fn unquote(value: &str) -> &str {
    if value.len() >= 2 {
        for quote in ['"', '\''] {
            if value.starts_with(quote) && value.ends_with(quote) {
                return &value[1..value.len() - 1];
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> FrontValue {
        FrontValue::Scalar(s.to_string())
    }

    fn list(items: &[&str]) -> FrontValue {
        FrontValue::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_parse_frontmatter() {
        let content = "---\ntitle: Hello World\ndate: 2024-01-15\ntags: [rust, blog]\n---\n# Heading\n\nBody text.\n";

        let (fm, body) = FrontMatter::parse(content);
        assert_eq!(fm.get("title"), Some(&scalar("Hello World")));
        assert_eq!(fm.get("date"), Some(&scalar("2024-01-15")));
        assert_eq!(fm.get("tags"), Some(&list(&["rust", "blog"])));
        assert_eq!(body, "# Heading\n\nBody text.\n");
    }

    #[test]
    fn test_body_is_exact_remainder() {
        let block = "---\ntitle: x\nauthor: y\n---\n";
        let rest = "\n  indented\r\nline two\n\n";
        let content = format!("{}{}", block, rest);

        let (_, body) = FrontMatter::parse(&content);
        assert_eq!(body, rest);
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Just a post\n\ntitle: not metadata\n";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_leading_whitespace_is_not_frontmatter() {
        let content = "\n---\ntitle: x\n---\nbody\n";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_unclosed_block() {
        let content = "---\ntitle: x\nbody without closing marker\n";
        let (fm, body) = FrontMatter::parse(content);
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_block() {
        let (fm, body) = FrontMatter::parse("---\n---\nbody");
        assert!(fm.is_empty());
        assert_eq!(body, "body");
    }

    #[test]
    fn test_closing_marker_at_end_of_file() {
        let (fm, body) = FrontMatter::parse("---\ntitle: x\n---");
        assert_eq!(fm.text("title"), Some("x".to_string()));
        assert_eq!(body, "");
    }

    #[test]
    fn test_crlf_markers() {
        let (fm, body) = FrontMatter::parse("---\r\ntitle: Windows\r\n---\r\nbody\r\n");
        assert_eq!(fm.text("title"), Some("Windows".to_string()));
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn test_quoted_scalars() {
        let content = "---\ntitle: \"hello\"\nsubtitle: 'single'\nnested: \"'kept'\"\nlone: \"\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.get("title"), Some(&scalar("hello")));
        assert_eq!(fm.get("subtitle"), Some(&scalar("single")));
        assert_eq!(fm.get("nested"), Some(&scalar("'kept'")));
        assert_eq!(fm.get("lone"), Some(&scalar("\"")));
    }

    #[test]
    fn test_list_values() {
        let content = "---\ntags: [a, b, c]\nquoted: [\"x\", 'y']\nempty: []\nblank: [ ]\nwrapped: \"[p, q]\"\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.get("tags"), Some(&list(&["a", "b", "c"])));
        assert_eq!(fm.get("quoted"), Some(&list(&["x", "y"])));
        assert_eq!(fm.get("empty"), Some(&list(&[])));
        assert_eq!(fm.get("blank"), Some(&list(&[])));
        assert_eq!(fm.get("wrapped"), Some(&list(&["p", "q"])));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let (fm, _) = FrontMatter::parse("---\nlink: https://example.com/a:b\n---\n");
        assert_eq!(fm.get("link"), Some(&scalar("https://example.com/a:b")));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let content = "---\nno colon here\n: leading colon\n   : blank key\ntitle: kept\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        assert_eq!(fm.len(), 1);
        assert_eq!(fm.text("title"), Some("kept".to_string()));
    }

    #[test]
    fn test_unknown_keys_preserved_in_order() {
        let content = "---\nlayout: post\ntitle: x\ncomments: true\n---\n";
        let (fm, _) = FrontMatter::parse(content);
        let keys: Vec<_> = fm.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["layout", "title", "comments"]);
    }

    #[test]
    fn test_value_helpers() {
        assert_eq!(scalar("").as_text(), None);
        assert_eq!(list(&["a", "b"]).as_text(), Some("a, b".to_string()));
        assert_eq!(list(&[]).as_text(), None);

        assert_eq!(scalar("rust").to_list(), vec!["rust"]);
        assert!(scalar("").to_list().is_empty());
        assert_eq!(list(&["a", "", "b"]).to_list(), vec!["a", "b"]);
    }
}

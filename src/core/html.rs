// src/core/html.rs
// Low-level HTML string scanning. Deliberately naive: no DOM, no entity-aware
// attribute parsing. Tag and attribute names match case-insensitively,
// attribute values match exactly.

use super::sanitize::{normalize_entities, normalize_ws};

/// One element located in a document. Offsets are byte offsets into the
/// scanned string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    pub start: usize,
    pub end: usize,
    /// Opening tag including `<` and `>`.
    pub open: &'a str,
    /// Everything between the opening and closing tag.
    pub inner: &'a str,
}

impl Element<'_> {
    pub fn name(&self) -> String { to_lower(tag_name(self.open)) }
    pub fn attr(&self, name: &str) -> Option<&str> { attr_value(self.open, name) }

    /// Inner text with whitespace collapsed (headings, labels, cells).
    pub fn text(&self) -> String { strip_tags(self.inner) }

    /// Inner text with line structure kept (`<pre>` exports).
    pub fn raw_text(&self) -> String { normalize_entities(&strip_tags_keep_lines(self.inner)) }
}

const VOID_TAGS: &[&str] = &["area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "wbr"];

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Drop every `<...>`, decode entities, collapse whitespace.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    normalize_ws(&normalize_entities(&strip_tags_keep_lines(s.as_ref())))
}

/// Drop every `<...>` and nothing else.
pub fn strip_tags_keep_lines(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Remove comment markers but keep what they wrap. FBref ships most
/// secondary tables commented out and uncomments them client-side.
pub fn uncomment(s: &str) -> String {
    s.replace("<!--", "").replace("-->", "")
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Tag name of an opening (or closing) tag string, as written.
pub fn tag_name(open: &str) -> &str {
    let body = open.trim_start_matches('<').trim_start_matches('/');
    let len = body.bytes().take_while(|&b| is_name_byte(b)).count();
    &body[..len]
}

/// Find `pat` (already lowercase, e.g. `<th`) in `lc` at or after `from`,
/// requiring the tag name to end right after the match (`<th` never matches `<thead`).
fn find_tag_start(lc: &str, pat: &str, from: usize) -> Option<usize> {
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(pat)? + pos;
        let after = at + pat.len();
        match lc.as_bytes().get(after) {
            Some(&b) if is_name_byte(b) => pos = after,
            _ => return Some(at),
        }
    }
}

/// Next `<` that opens a tag (`<` followed by a letter) at or after `from`.
pub fn next_open_tag(s: &str, from: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = from;
    loop {
        let at = s.get(pos..)?.find('<')? + pos;
        match bytes.get(at + 1) {
            Some(b) if b.is_ascii_alphabetic() => return Some(at),
            Some(_) => pos = at + 1,
            None => return None,
        }
    }
}

/// Element whose opening tag starts at `start`. Nested elements of the same
/// name are balanced; an unclosed element runs to the end of `s`.
pub fn element_at(s: &str, start: usize) -> Option<Element<'_>> {
    let open_end = s.get(start..)?.find('>')? + start + 1;
    let open = &s[start..open_end];
    let name = to_lower(tag_name(open));
    if name.is_empty() {
        return None;
    }
    if open.ends_with("/>") || VOID_TAGS.contains(&name.as_str()) {
        return Some(Element { start, end: open_end, open, inner: "" });
    }

    let lc = to_lower(&s[open_end..]);
    let open_pat = join!("<", &name);
    let close_pat = join!("</", &name);
    let mut depth = 1usize;
    let mut pos = 0usize;

    while let Some(close) = find_tag_start(&lc, &close_pat, pos) {
        match find_tag_start(&lc, &open_pat, pos) {
            Some(nested) if nested < close => {
                depth += 1;
                pos = nested + open_pat.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    let close_end = lc[close..].find('>').map(|i| close + i + 1).unwrap_or(lc.len());
                    return Some(Element {
                        start,
                        end: open_end + close_end,
                        open,
                        inner: &s[open_end..open_end + close],
                    });
                }
                pos = close + close_pat.len();
            }
        }
    }

    Some(Element { start, end: s.len(), open, inner: &s[open_end..] })
}

/// Value of attribute `name` in an opening tag. Quoted (either style) or bare.
pub fn attr_value<'a>(open: &'a str, name: &str) -> Option<&'a str> {
    let lc = to_lower(open);
    let name = to_lower(name);
    let bytes = open.as_bytes();
    let mut pos = 0usize;

    while let Some(rel) = lc[pos..].find(&name) {
        let at = pos + rel;
        pos = at + name.len();

        let boundary_before = at > 0 && bytes[at - 1].is_ascii_whitespace();
        if !boundary_before {
            continue;
        }
        let rest = open[pos..].trim_start();
        let Some(value) = rest.strip_prefix('=') else { continue };
        let value = value.trim_start();

        return match value.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &value[1..];
                body.find(q).map(|end| &body[..end])
            }
            Some(_) => {
                let end = value
                    .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                    .unwrap_or(value.len());
                Some(&value[..end])
            }
            None => None,
        };
    }
    None
}

pub fn has_class(open: &str, class: &str) -> bool {
    attr_value(open, "class")
        .map(|v| v.split_whitespace().any(|c| c == class))
        .unwrap_or(false)
}

/// First element at or after `from` whose opening tag satisfies `pred`.
pub fn find_tag<'a>(s: &'a str, from: usize, pred: impl Fn(&str) -> bool) -> Option<Element<'a>> {
    let mut pos = from;
    while let Some(at) = next_open_tag(s, pos) {
        let open_end = s[at..].find('>')? + at + 1;
        if pred(&s[at..open_end]) {
            return element_at(s, at);
        }
        pos = at + 1;
    }
    None
}

/// Element carrying `id="<id>"` (exact, case-sensitive value).
pub fn find_by_id<'a>(s: &'a str, id: &str) -> Option<Element<'a>> {
    find_tag(s, 0, |open| attr_value(open, "id") == Some(id))
}

/// Every element whose id starts with `prefix`, in document order.
pub fn find_all_by_id_prefix<'a>(s: &'a str, prefix: &str) -> Vec<Element<'a>> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(el) = find_tag(s, pos, |open| {
        attr_value(open, "id").is_some_and(|v| v.starts_with(prefix))
    }) {
        pos = el.start + 1;
        out.push(el);
    }
    out
}

/// Direct and nested children named `name` inside `inner`, skipping over
/// each match so nested blocks are not visited twice.
pub fn children_named<'a>(inner: &'a str, names: &[&str]) -> Vec<Element<'a>> {
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(el) = find_tag(inner, pos, |open| {
        let n = to_lower(tag_name(open));
        names.contains(&n.as_str())
    }) {
        pos = el.end.max(el.start + 1);
        out.push(el);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names_do_not_prefix_match() {
        let doc = "<thead><tr><th>A</th></tr></thead>";
        let el = find_tag(doc, 0, |open| tag_name(open).eq_ignore_ascii_case("th")).unwrap();
        assert_eq!(el.inner, "A");
        assert_eq!(el.name(), "th");
    }

    #[test]
    fn element_at_balances_nested_divs() {
        let doc = r#"<div id="outer"><div>in</div><p>x</p></div><div>after</div>"#;
        let el = element_at(doc, 0).unwrap();
        assert_eq!(el.inner, "<div>in</div><p>x</p>");
        assert_eq!(&doc[el.end..], "<div>after</div>");
    }

    #[test]
    fn element_at_unclosed_runs_to_end() {
        let doc = "<p>dangling <b>text</b>";
        let el = element_at(doc, 0).unwrap();
        assert_eq!(el.inner, "dangling <b>text</b>");
    }

    #[test]
    fn attr_value_styles() {
        assert_eq!(attr_value(r#"<a class="sr_preset" href=x>"#, "class"), Some("sr_preset"));
        assert_eq!(attr_value("<div id='all_scout'>", "id"), Some("all_scout"));
        assert_eq!(attr_value("<div id=all_scout class=x>", "id"), Some("all_scout"));
        assert_eq!(attr_value(r#"<div data-id="nope">"#, "id"), None);
    }

    #[test]
    fn class_tokens_match_exactly() {
        assert!(has_class(r#"<div class="filter current">"#, "current"));
        assert!(!has_class(r#"<div class="currently">"#, "current"));
    }

    #[test]
    fn find_by_id_is_exact() {
        let doc = r#"<pre id="csv_scout_summary_FW">fw</pre><pre id="csv_scout_summary_">any</pre>"#;
        assert_eq!(find_by_id(doc, "csv_scout_summary_").unwrap().inner, "any");
        assert_eq!(find_by_id(doc, "csv_scout_summary_FW").unwrap().inner, "fw");
        assert!(find_by_id(doc, "csv_scout_summary_MF").is_none());
    }

    #[test]
    fn raw_text_keeps_lines() {
        let doc = "<pre id=\"x\">a,1,2\n<span>b</span>,3,4\r\n</pre>";
        let el = find_by_id(doc, "x").unwrap();
        assert_eq!(el.raw_text(), "a,1,2\nb,3,4\r\n");
    }

    #[test]
    fn children_skip_nested_matches() {
        let inner = "<tr><th>A</th><td>1</td><td><span>2</span></td></tr>";
        let row = element_at(inner, 0).unwrap();
        let cells: Vec<String> = children_named(row.inner, &["th", "td"]).iter().map(|c| c.text()).collect();
        assert_eq!(cells, vec!["A", "1", "2"]);
    }
}

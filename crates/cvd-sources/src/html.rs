//! Naive HTML table scanning.
//!
//! Just enough to walk the `<table>` / `<tr>` / `<td>` blocks of a server
//! rendered page. Tag and attribute names match ASCII case-insensitively and
//! same-name blocks are assumed not to nest. Nothing here builds a DOM.

/// Inner HTML of the element whose opening tag contains `open_pat`
/// (e.g. `id="main_table_countries_today"`), up to the first `close_pat`.
pub fn slice_between_ci<'a>(s: &'a str, open_pat: &str, close_pat: &str) -> Option<&'a str> {
    // ASCII lowercasing keeps byte offsets, so indices into `lc` are valid in `s`.
    let lc = s.to_ascii_lowercase();
    let open_idx = lc.find(&open_pat.to_ascii_lowercase())?;
    let after_open = lc[open_idx..].find('>')? + open_idx + 1;
    let close_rel = lc[after_open..].find(&close_pat.to_ascii_lowercase())?;
    Some(&s[after_open..after_open + close_rel])
}

/// One `<tag ...>inner</tag>` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagBlock<'a> {
    /// The opening tag including `<` and `>`.
    pub open_tag: &'a str,
    pub inner: &'a str,
}

impl<'a> TagBlock<'a> {
    /// Attribute value from the opening tag; quoted or bare.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        let tag = self.open_tag;
        let lc = tag.to_ascii_lowercase();
        let needle = format!("{}=", name.to_ascii_lowercase());

        let mut from = 0;
        while let Some(rel) = lc[from..].find(&needle) {
            let at = from + rel;
            from = at + needle.len();
            // Must start a new attribute, not end another one (`data-class=`).
            if !lc[..at].ends_with(|c: char| c.is_ascii_whitespace()) {
                continue;
            }
            let rest = &tag[from..];
            return match rest.chars().next() {
                Some(q @ ('"' | '\'')) => rest[1..].find(q).map(|end| &rest[1..1 + end]),
                Some(_) => {
                    let end = rest
                        .find(|c: char| c.is_ascii_whitespace() || c == '>')
                        .unwrap_or(rest.len());
                    Some(&rest[..end])
                }
                None => None,
            };
        }
        None
    }

    /// True when the `class` attribute lists `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c.eq_ignore_ascii_case(class)))
    }
}

/// Every `<tag ...>...</tag>` block of `s`, in document order.
pub fn tag_blocks_ci<'a>(s: &'a str, tag: &str) -> Vec<TagBlock<'a>> {
    let lc = s.to_ascii_lowercase();
    let open = format!("<{}", tag.to_ascii_lowercase());
    let close = format!("</{}", tag.to_ascii_lowercase());

    let mut out = Vec::new();
    let mut from = 0;
    while let Some(rel) = lc[from..].find(&open) {
        let start = from + rel;
        let after_name = start + open.len();
        // `<td` must not match `<tdx`.
        let boundary = lc[after_name..].starts_with(|c: char| c == '>' || c == '/' || c.is_ascii_whitespace());
        if !boundary {
            from = after_name;
            continue;
        }
        let Some(open_end) = lc[after_name..].find('>').map(|i| after_name + i + 1) else {
            break;
        };
        let Some(close_start) = lc[open_end..].find(&close).map(|i| open_end + i) else {
            break;
        };
        out.push(TagBlock {
            open_tag: &s[start..open_end],
            inner: &s[open_end..close_start],
        });
        from = lc[close_start..]
            .find('>')
            .map_or(lc.len(), |i| close_start + i + 1);
    }
    out
}

/// Visible text of an HTML fragment: tags removed, common entities decoded,
/// whitespace collapsed.
pub fn text(fragment: &str) -> String {
    let mut stripped = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for ch in fragment.chars() {
        match ch {
            '<' => in_tag = true,
            // A tag boundary separates words (`<br>`, adjacent cells).
            '>' => {
                in_tag = false;
                stripped.push(' ');
            }
            _ if !in_tag => stripped.push(ch),
            _ => {}
        }
    }

    let decoded = stripped
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

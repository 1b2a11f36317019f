//! Markup and file-name helpers shared by the index and definition pages.

pub const CLOSE_DOCUMENT: &str = "</body></html>\n";

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `<html>`, the head with `title`, and the opening `<body>` tag.
pub fn open_document(title: &str) -> String {
    format!(
        "<html>\n<head><title>{}</title></head>\n<body>\n",
        escape_html(title)
    )
}

fn unsafe_in_file_name(ch: char) -> bool {
    ch.is_control() || matches!(ch, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '%')
}

fn push_percent_encoded(out: &mut String, bytes: &[u8]) {
    for b in bytes {
        out.push_str(&format!("%{b:02X}"));
    }
}

/// File name of the page for `term`: the term itself plus `.html`, with
/// characters that are unsafe in paths written as `%XX` UTF-8 bytes.
pub fn page_file_name(term: &str) -> String {
    let mut name = String::with_capacity(term.len() + 5);
    for ch in term.chars() {
        if unsafe_in_file_name(ch) {
            let mut buf = [0u8; 4];
            push_percent_encoded(&mut name, ch.encode_utf8(&mut buf).as_bytes());
        } else {
            name.push(ch);
        }
    }
    name.push_str(".html");
    name
}

/// Relative URL of the page for `term`. Percent-decodes back to
/// [`page_file_name`].
pub fn page_href(term: &str) -> String {
    let name = page_file_name(term);
    let mut href = String::with_capacity(name.len());
    for b in name.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~') {
            href.push(char::from(b));
        } else {
            push_percent_encoded(&mut href, &[b]);
        }
    }
    href
}

/// `<a href="...">term</a>` pointing at the term's page.
pub fn term_link(term: &str) -> String {
    format!("<a href=\"{}\">{}</a>", page_href(term), escape_html(term))
}

use crate::services::html::{escape_html, open_document, term_link, CLOSE_DOCUMENT};

/// Renders the index page: title, rule, `Index` heading and one list item
/// per term in the order given.
pub fn render_index(title: &str, sorted_terms: &[&str]) -> String {
    let mut html = open_document(title);
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));
    html.push_str("<hr/>\n");
    html.push_str("<h2>Index</h2>\n");
    html.push_str("<ul>\n");
    for term in sorted_terms {
        html.push_str(&format!("<li>{}</li>\n", term_link(term)));
    }
    html.push_str("</ul>\n");
    html.push_str(CLOSE_DOCUMENT);
    html
}

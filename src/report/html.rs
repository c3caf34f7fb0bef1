//! HTML matrix rendering.

use super::PairMatrix;

const STYLE: &str = "body,table,th,td{font-family:sans-serif;}\
table,th,td{border:1px solid #ccc;border-collapse:collapse;}\
th,td{padding:8px;}td{text-align:center;}";

/// Renders the matrix as a standalone HTML page.
pub fn render(matrix: &PairMatrix<'_>, title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    html.push_str(&format!("<title>{}</title>", escape(title)));
    html.push_str(&format!("<style>{STYLE}</style></head><body>\n"));
    html.push_str(&format!("<h1>{}</h1>\n<table>\n", escape(title)));

    html.push_str("<tr><th></th>");
    for dev in matrix.developers() {
        html.push_str(&format!("<th>{}</th>", escape(dev)));
    }
    html.push_str("</tr>\n");

    for row in matrix.developers() {
        html.push_str(&format!("<tr><th>{}</th>", escape(row)));
        for col in matrix.developers() {
            match matrix.cell(row, col) {
                Some(days) => html.push_str(&format!("<td>{days}</td>")),
                None => html.push_str("<td>-</td>"),
            }
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n</body></html>\n");
    html
}

/// Escapes text for use in element content and attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

use crate::results::Link;
use scraper::{ElementRef, Html, Selector};

/// Extracts every anchor element as a `Link`, in document order
pub fn extract_links(html: &str) -> Vec<Link> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a").unwrap();
    let links = doc
        .select(&link_selector)
        .map(|e| {
            let href = e.value().attr("href").map(str::to_string);
            Link::new(stripped_text(e), href)
        })
        .collect::<Vec<Link>>();

    ::log::debug!("HTML parser found {} anchors", links.len());
    if !links.is_empty() {
        ::log::trace!(
            "First few anchors: {:?}",
            links.iter().take(5).collect::<Vec<_>>()
        );
    }

    links
}

/// Returns the trimmed text of the first `<title>` element, if the page has one
pub fn extract_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);

    let title_selector = Selector::parse("title").unwrap();
    doc.select(&title_selector)
        .next()
        .map(|n| n.text().collect::<String>().trim().to_string())
}

/// Joins the element's text nodes, each trimmed, dropping the empty ones.
///
/// Nested markup collapses without a separator: `<a> Hello <b>World</b></a>`
/// gives `HelloWorld`.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

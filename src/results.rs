/// An anchor element found in a bookmark export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Visible text of the anchor (empty if the anchor has none)
    pub text: String,

    /// Value of the `href` attribute, if present
    pub href: Option<String>,
}

impl Link {
    /// Create a new link
    pub fn new(text: impl Into<String>, href: Option<String>) -> Self {
        Self {
            text: text.into(),
            href,
        }
    }

    /// Whether this link's title has to be fetched from the live page
    pub fn needs_resolution(&self) -> bool {
        needs_resolution(&self.text, self.href.as_deref())
    }
}

/// A bookmark whose text is its URL carries no human-assigned title.
///
/// Anchors without an `href` are never resolved. An empty text with an empty
/// `href` still counts as a match.
pub fn needs_resolution(text: &str, href: Option<&str>) -> bool {
    href == Some(text)
}

/// One output row of the CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRow {
    /// Title column
    pub title: String,

    /// URL column (rendered empty when the anchor had no href)
    pub url: Option<String>,
}

impl ResolvedRow {
    /// Create a new row
    pub fn new(title: String, url: Option<String>) -> Self {
        Self { title, url }
    }

    /// Fields in column order
    pub fn fields(&self) -> [&str; 2] {
        [self.title.as_str(), self.url.as_deref().unwrap_or("")]
    }
}

/// Counters reported at the end of a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Data rows written (one per anchor)
    pub rows: usize,

    /// Rows whose page was fetched successfully (titled or not)
    pub resolved: usize,

    /// Rows where a failed fetch fell back to the URL
    pub fallbacks: usize,
}

// Re-export modules
pub mod config;
pub mod error;
pub mod parsers;
pub mod resolver;
pub mod results;
pub mod writer;

// Re-export commonly used types for convenience
pub use config::{ConverterConfig, FetchErrorPolicy};
pub use error::ConvertError;
pub use resolver::{FetchError, HttpFetcher, PageFetcher, TitleResolver};
pub use results::{ConversionSummary, Link, ResolvedRow, needs_resolution};

use std::path::{Path, PathBuf};

/// Turns links into output rows, fetching titles for links whose text is their URL.
///
/// Rows come back in the same order and number as `links`. Under
/// `FetchErrorPolicy::Abort` the first network failure stops the whole batch.
pub async fn resolve_rows<F: PageFetcher>(
    links: &[Link],
    resolver: &mut TitleResolver<F>,
) -> Result<Vec<ResolvedRow>, ConvertError> {
    let mut rows = Vec::with_capacity(links.len());

    for link in links {
        let title = match link.href.as_deref() {
            Some(href) if link.needs_resolution() => resolver.resolve(href).await?,
            _ => link.text.clone(),
        };
        rows.push(ResolvedRow::new(title, link.href.clone()));
    }

    Ok(rows)
}

/// Converts an HTML document held in memory into CSV bytes
pub async fn convert_html<F: PageFetcher>(
    html: &str,
    resolver: &mut TitleResolver<F>,
) -> Result<Vec<u8>, ConvertError> {
    let links = parsers::html::extract_links(html);
    let rows = resolve_rows(&links, resolver).await?;

    let mut out = Vec::new();
    writer::write_rows(&mut out, &rows).map_err(|source| ConvertError::OutputWrite {
        path: PathBuf::from("<memory>"),
        source,
    })?;
    Ok(out)
}

/// Reads `input`, resolves titles and writes the CSV to `output`.
///
/// Every row is resolved before `output` is created, so an input or network
/// failure leaves no output file behind.
pub async fn convert<F: PageFetcher>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    resolver: &mut TitleResolver<F>,
) -> Result<ConversionSummary, ConvertError> {
    let links = parsers::read_links(input)?;
    let fetches_before = resolver.fetches();
    let fallbacks_before = resolver.fallbacks();

    let rows = resolve_rows(&links, resolver).await?;
    writer::write_csv(output, &rows)?;

    let fallbacks = resolver.fallbacks() - fallbacks_before;
    Ok(ConversionSummary {
        rows: rows.len(),
        resolved: resolver.fetches() - fetches_before - fallbacks,
        fallbacks,
    })
}

/// Main builder for a bookmark conversion run
pub struct Converter {
    input: PathBuf,
    output: PathBuf,
    config: ConverterConfig,
}

impl Converter {
    /// Create a new Converter reading `input` and writing `output`
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            config: ConverterConfig::default(),
        }
    }

    /// Set what happens when a title fetch fails
    pub fn with_fetch_error_policy(mut self, policy: FetchErrorPolicy) -> Self {
        self.config.on_fetch_error = policy;
        self
    }

    /// Set a per-request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = Some(timeout_secs);
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ConverterConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ConvertError> {
        let config = ConverterConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Current configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Run the conversion over HTTP
    pub async fn run(self) -> Result<ConversionSummary, ConvertError> {
        let fetcher = HttpFetcher::new(self.config.timeout())
            .map_err(|e| ConvertError::Config(format!("cannot build HTTP client: {}", e)))?;
        self.run_with(fetcher).await
    }

    /// Run the conversion with a custom page fetcher
    pub async fn run_with<F: PageFetcher>(
        self,
        fetcher: F,
    ) -> Result<ConversionSummary, ConvertError> {
        ::log::info!(
            "Converting {} -> {} (on fetch error: {:?})",
            self.input.display(),
            self.output.display(),
            self.config.on_fetch_error
        );

        let mut resolver = TitleResolver::with_policy(fetcher, self.config.on_fetch_error);
        convert(&self.input, &self.output, &mut resolver).await
    }
}

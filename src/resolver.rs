use crate::config::FetchErrorPolicy;
use crate::error::ConvertError;
use crate::parsers::html;
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors raised while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

/// Source of page bodies for title resolution
pub trait PageFetcher {
    /// Performs a single GET and returns the response body as text.
    ///
    /// A non-success status is not an error; its body is returned like any other.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// `PageFetcher` backed by a plain `reqwest` client: no custom headers, no
/// retries, and no timeout unless one is configured
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher, optionally bounding each request by `timeout`
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self.client.get(parsed).send().await?;
        ::log::debug!("GET {} -> {}", url, response.status());

        Ok(response.text().await?)
    }
}

/// Looks up page titles for bookmarks that only carry their URL
pub struct TitleResolver<F> {
    fetcher: F,
    policy: FetchErrorPolicy,
    fetches: usize,
    fallbacks: usize,
}

impl<F: PageFetcher> TitleResolver<F> {
    /// Create a resolver that aborts on network errors
    pub fn new(fetcher: F) -> Self {
        Self::with_policy(fetcher, FetchErrorPolicy::default())
    }

    /// Create a resolver with an explicit network error policy
    pub fn with_policy(fetcher: F, policy: FetchErrorPolicy) -> Self {
        Self {
            fetcher,
            policy,
            fetches: 0,
            fallbacks: 0,
        }
    }

    /// Fetches `url` and returns its `<title>`, or `url` itself when the page
    /// has no title element.
    ///
    /// Every call fetches again; nothing is cached.
    pub async fn resolve(&mut self, url: &str) -> Result<String, ConvertError> {
        self.fetches += 1;
        ::log::debug!("Resolving title for {}", url);

        let body = match self.fetcher.fetch(url).await {
            Ok(body) => body,
            Err(source) => match self.policy {
                FetchErrorPolicy::Abort => {
                    return Err(ConvertError::Network {
                        url: url.to_string(),
                        source,
                    });
                }
                FetchErrorPolicy::UseUrl => {
                    ::log::warn!("Could not fetch {}, keeping URL as title: {}", url, source);
                    self.fallbacks += 1;
                    return Ok(url.to_string());
                }
            },
        };

        match html::extract_title(&body) {
            Some(title) => {
                ::log::debug!("Resolved {} to {:?}", url, title);
                Ok(title)
            }
            None => {
                ::log::debug!("No <title> in {}, keeping URL", url);
                Ok(url.to_string())
            }
        }
    }

    /// Number of fetches attempted so far
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    /// Number of failed fetches that fell back to the URL
    pub fn fallbacks(&self) -> usize {
        self.fallbacks
    }

    /// The underlying fetcher
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

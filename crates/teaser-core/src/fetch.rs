//! Article fetching.
//!
//! [`ArticleFetcher`] is the seam between the summarizer and whatever turns
//! a URL into a title and cleaned body text. With the `fetch` feature the
//! crate provides [`HttpFetcher`], a blocking HTTP client that extracts the
//! article with [`extract_article`].

use serde::{Deserialize, Serialize};

use crate::error::FetchResult;

/// Title and cleaned body text of a web article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article headline.
    pub title: String,
    /// Plain-text body, paragraphs separated by blank lines.
    pub body: String,
}

/// Retrieves an article for a URL.
pub trait ArticleFetcher {
    /// Fetch and extract the article at `url`.
    fn fetch(&self, url: &str) -> FetchResult<Article>;
}

#[cfg(feature = "fetch")]
pub use http::{HttpFetcher, extract_article};

#[cfg(feature = "fetch")]
mod http {
    use std::sync::LazyLock;
    use std::time::Duration;

    use regex::Regex;
    use scraper::{ElementRef, Html, Selector};

    use super::{Article, ArticleFetcher};
    use crate::error::{FetchError, FetchResult};

    const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    static WHITESPACE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

    static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| {
        Selector::parse(r#"meta[property="og:title"]"#).expect("valid selector")
    });
    static TITLE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("title").expect("valid selector"));
    static HEADING: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("h1").expect("valid selector"));
    static ARTICLE_PARAGRAPHS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("article p").expect("valid selector"));
    static PARAGRAPHS: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse("p").expect("valid selector"));

    /// Blocking HTTP fetcher. One request per call, no retries.
    #[derive(Debug, Clone)]
    pub struct HttpFetcher {
        client: reqwest::blocking::Client,
    }

    impl HttpFetcher {
        /// Create a fetcher with the client's default timeout.
        pub fn new() -> FetchResult<Self> {
            Self::build(None)
        }

        /// Create a fetcher whose requests give up after `timeout`.
        pub fn with_timeout(timeout: Duration) -> FetchResult<Self> {
            Self::build(Some(timeout))
        }

        fn build(timeout: Option<Duration>) -> FetchResult<Self> {
            let mut builder = reqwest::blocking::Client::builder().user_agent(USER_AGENT);
            if let Some(timeout) = timeout {
                builder = builder.timeout(timeout);
            }
            Ok(Self {
                client: builder.build()?,
            })
        }
    }

    impl ArticleFetcher for HttpFetcher {
        #[tracing::instrument(skip(self))]
        fn fetch(&self, url: &str) -> FetchResult<Article> {
            let response = self.client.get(url).send()?;
            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            let html = response.text()?;
            tracing::debug!(bytes = html.len(), "page downloaded");
            extract_article(&html)
        }
    }

    /// Extract the title and paragraph text of an HTML page.
    ///
    /// The title comes from `og:title`, then `<title>`, then the first `<h1>`.
    /// The body is the paragraphs inside `<article>`, or every `<p>` when the
    /// page has no article paragraphs.
    pub fn extract_article(html: &str) -> FetchResult<Article> {
        let document = Html::parse_document(html);

        let title = document
            .select(&OG_TITLE)
            .filter_map(|el| el.value().attr("content"))
            .map(normalize_whitespace)
            .find(|t| !t.is_empty())
            .or_else(|| first_text(&document, &TITLE))
            .or_else(|| first_text(&document, &HEADING))
            .ok_or(FetchError::MissingTitle)?;

        let mut paragraphs = paragraph_texts(&document, &ARTICLE_PARAGRAPHS);
        if paragraphs.is_empty() {
            paragraphs = paragraph_texts(&document, &PARAGRAPHS);
        }
        if paragraphs.is_empty() {
            return Err(FetchError::MissingBody);
        }

        Ok(Article {
            title,
            body: paragraphs.join("\n\n"),
        })
    }

    fn first_text(document: &Html, selector: &Selector) -> Option<String> {
        document
            .select(selector)
            .map(element_text)
            .find(|t| !t.is_empty())
    }

    fn paragraph_texts(document: &Html, selector: &Selector) -> Vec<String> {
        document
            .select(selector)
            .map(element_text)
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn element_text(el: ElementRef<'_>) -> String {
        normalize_whitespace(&el.text().collect::<String>())
    }

    fn normalize_whitespace(text: &str) -> String {
        WHITESPACE.replace_all(text.trim(), " ").into_owned()
    }

}

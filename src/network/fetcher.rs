//! HTTP 抓取
//!
//! 每次调用只发一个 GET 请求，不做跨调用缓存。所有传输层失败都转换为
//! [`FetchError`] 返回给调用方，不会 panic，也不会终止进程。

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use tracing::{debug, info, warn};
use url::Url;

use crate::core::{is_text_media_type, parse_content_type, AnalysisOptions, Document};
use crate::error::FetchError;
use crate::parsers::html::{read_document, Extractor};

pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; ",
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// 校验并解析 URL，只接受带主机名的 http/https 地址
pub fn validate_url(target: &str) -> Result<Url, FetchError> {
    let target = target.trim();
    let url = Url::parse(target).map_err(|e| FetchError::InvalidUrl {
        url: target.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(FetchError::UnsupportedScheme(other.to_string())),
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl {
            url: target.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(url)
}

/// Raw response of a successful GET
#[derive(Debug)]
pub struct RetrievedResource {
    pub data: Vec<u8>,
    pub final_url: Url,
    pub media_type: String,
    pub charset: String,
}

/// Retrieves web documents and turns them into [`Document`]s
pub struct Fetcher {
    client: Client,
    timeout: u64,
    extractor: Extractor,
}

impl Fetcher {
    pub fn new(options: &AnalysisOptions) -> Result<Self, FetchError> {
        let user_agent = options.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT);

        let mut header_map = HeaderMap::new();
        header_map.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| {
                FetchError::Transport(format!("invalid user agent \"{user_agent}\": {e}"))
            })?,
        );

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout))
            .default_headers(header_map)
            .build()
            .map_err(|e| FetchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout: options.timeout,
            extractor: Extractor::default(),
        })
    }

    /// Replaces the ordered list of extraction strategies
    pub fn with_extractor(mut self, extractor: Extractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// GET `url` and read title + main text
    pub fn fetch(&self, url: &str) -> Result<Document, FetchError> {
        let url = validate_url(url)?;
        let resource = self.retrieve(&url)?;

        if !is_text_media_type(&resource.media_type) {
            warn!(
                url = %resource.final_url,
                media_type = %resource.media_type,
                "response is not declared as HTML or text, reading it anyway"
            );
        }

        let charset = Some(resource.charset.as_str()).filter(|c| !c.is_empty());
        let document = read_document(
            resource.final_url.as_str(),
            &resource.data,
            charset,
            &self.extractor,
        );
        info!(url = %document.url, title = %document.title, "document fetched");

        Ok(document)
    }

    /// Issues the GET request and collects the body
    pub fn retrieve(&self, url: &Url) -> Result<RetrievedResource, FetchError> {
        debug!(%url, timeout = self.timeout, "sending request");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "request failed");
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.url().clone();
        if final_url != *url {
            debug!(from = %url, to = %final_url, "followed redirect");
        }

        let (media_type, charset) = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(parse_content_type)
            .unwrap_or_default();

        let data = response.bytes().map_err(|e| self.classify(e))?.to_vec();
        debug!(%final_url, bytes = data.len(), %media_type, %charset, "response received");

        Ok(RetrievedResource {
            data,
            final_url,
            media_type,
            charset,
        })
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

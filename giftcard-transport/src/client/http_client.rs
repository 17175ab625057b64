use std::{collections::HashMap, str::FromStr, time::Duration};

use crate::{errors::TransportError, request_builder::ReqBuilder};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        headers_opt: Option<HashMap<String, String>>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        headers.append(header::ACCEPT, "application/json".parse().unwrap());

        if let Some(opt) = headers_opt {
            for (key, value) in opt {
                let name = HeaderName::from_str(&key).map_err(|_| {
                    TransportError::Utils(giftcard_utils::HttpError::InvalidHeader.into())
                })?;
                let value = HeaderValue::from_str(&value).map_err(|_| {
                    TransportError::Utils(giftcard_utils::HttpError::InvalidHeader.into())
                })?;
                headers.append(name, value);
            }
        };

        let mut builder = reqwest::ClientBuilder::new().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::Utils(giftcard_utils::Error::Http(e.into())))?;

        Ok(Self {
            base_url: base_url.to_owned(),
            client,
        })
    }

    pub fn replace_base_url(&mut self, base_url: &str) {
        self.base_url = base_url.to_owned();
    }

    pub fn post(&self, endpoint: &str) -> ReqBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::info!("request url = {}", url);
        let build = self.client.post(url);
        ReqBuilder(build)
    }

    pub fn get(&self, endpoint: &str) -> ReqBuilder {
        let url = format!("{}/{}", self.base_url, endpoint);
        tracing::info!("request url = {}", url);
        let build = self.client.get(url);
        ReqBuilder(build)
    }
}

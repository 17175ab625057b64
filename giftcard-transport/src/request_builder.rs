use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

pub struct ReqBuilder(pub RequestBuilder);

impl ReqBuilder {
    pub fn form(mut self, v: impl Serialize + Debug) -> Self {
        tracing::info!("request params: {:?}", serde_json::to_string(&v).unwrap());
        self.0 = self.0.form(&v);
        self
    }

    pub fn query(mut self, v: impl Serialize + Debug) -> Self {
        tracing::debug!("request params: {:?}", v);
        self.0 = self.0.query(&v);
        self
    }

    pub async fn send<T: DeserializeOwned>(self) -> Result<T, crate::TransportError> {
        let res = self
            .0
            .send()
            .await
            .map_err(|e| crate::TransportError::Utils(giftcard_utils::Error::Http(e.into())))?;

        if !res.status().is_success() {
            return Err(crate::TransportError::Utils(giftcard_utils::Error::Http(
                giftcard_utils::HttpError::NonSuccessStatus(res.status()),
            )));
        }

        let response = res
            .text()
            .await
            .map_err(|e| crate::TransportError::Utils(giftcard_utils::Error::Http(e.into())))?;
        tracing::info!("response = {}", response);

        Ok(giftcard_utils::serde_func::serde_from_str(&response)?)
    }
}

use std::collections::{BTreeMap, HashMap};

use crate::{config::BackendConfig, response::BackendResponse, signer};

pub mod country;

/// Field name the backend expects the digest under.
const SIGN_FIELD: &str = "md5sign";

#[derive(Debug, Clone)]
pub struct BackendApi {
    pub config: BackendConfig,
    pub client: giftcard_transport::client::HttpClient,
}

impl BackendApi {
    pub fn new(
        config: Option<BackendConfig>,
        headers_opt: Option<HashMap<String, String>>,
    ) -> Result<Self, crate::Error> {
        let config = config.unwrap_or_default();

        let timeout = Some(std::time::Duration::from_secs(15));
        let client =
            giftcard_transport::client::HttpClient::new(&config.base_url, headers_opt, timeout)?;

        Ok(Self { config, client })
    }

    pub fn replace_base_url(&mut self, base_url: &str) {
        self.config.base_url = base_url.to_string();
        self.client.replace_base_url(base_url);
    }

    // appid 合并进参数集, 签名后追加 md5sign
    fn signed_params(&self, mut params: BTreeMap<String, String>) -> BTreeMap<String, String> {
        params.insert("appid".to_string(), self.config.app_id.clone());
        let sign = signer::md5_sign(&params, &self.config.app_key);
        params.insert(SIGN_FIELD.to_string(), sign);
        params
    }

    async fn signed_send(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        params: BTreeMap<String, String>,
    ) -> Result<BackendResponse, crate::Error> {
        let params = self.signed_params(params);

        let res = if method == reqwest::Method::GET {
            self.client
                .get(endpoint)
                .query(&params)
                .send::<BackendResponse>()
                .await?
        } else {
            self.client
                .post(endpoint)
                .form(&params)
                .send::<BackendResponse>()
                .await?
        };

        Ok(res)
    }

    pub async fn signed_request<R>(
        &self,
        method: &str,
        endpoint: &str,
        params: BTreeMap<String, String>,
    ) -> Result<R, crate::Error>
    where
        R: serde::de::DeserializeOwned + serde::Serialize + std::fmt::Debug,
    {
        let method = giftcard_utils::parse_func::method_from_str(method)?;
        let res = self.signed_send(method, endpoint, params).await?;
        res.process()
    }
}

use super::BackendApi;
use crate::response_vo::country::Country;

impl BackendApi {
    /// Country / currency list. The caller parameter set is empty: only
    /// `appid` and the digest are transmitted.
    pub async fn country_list(&self) -> Result<Vec<Country>, crate::Error> {
        let res = self
            .signed_send(
                reqwest::Method::POST,
                crate::consts::endpoint::COUNTRY_LIST,
                Default::default(),
            )
            .await?;
        res.process_list()
    }
}

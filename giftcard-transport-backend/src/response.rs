use std::fmt::Debug;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct BackendResponse {
    pub success: bool,
    pub code: Option<String>,
    pub msg: Option<String>,
    pub data: Option<serde_json::Value>,
}

impl BackendResponse {
    pub fn process<T: for<'de> serde::Deserialize<'de> + serde::Serialize + Debug>(
        self,
    ) -> Result<T, crate::Error> {
        if self.success {
            let res = match self.data {
                Some(v) => v,
                None => giftcard_utils::serde_func::serde_to_value(None::<T>)?,
            };
            tracing::debug!("backend response: {:?}", res);
            Ok(giftcard_utils::serde_func::serde_from_value(res)?)
        } else {
            tracing::error!("backend response: {:?}", self.msg);
            Err(crate::Error::Backend {
                code: self.code,
                msg: self.msg,
            })
        }
    }

    /// List endpoints degrade gracefully: a successful envelope whose payload
    /// is not a list yields an empty list, not an error. Transport, decode
    /// and backend failures still propagate.
    pub fn process_list<T: for<'de> serde::Deserialize<'de>>(
        self,
    ) -> Result<Vec<T>, crate::Error> {
        if !self.success {
            tracing::error!("backend response: {:?}", self.msg);
            return Err(crate::Error::Backend {
                code: self.code,
                msg: self.msg,
            });
        }

        match self.data {
            Some(data @ serde_json::Value::Array(_)) => {
                Ok(giftcard_utils::serde_func::serde_from_value(data)?)
            }
            other => {
                tracing::warn!("expected list payload, got: {:?}", other);
                Ok(Vec::new())
            }
        }
    }
}

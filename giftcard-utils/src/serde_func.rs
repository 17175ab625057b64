pub fn serde_from_str<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, crate::Error> {
    serde_json::from_str::<T>(value).map_err(|e| {
        crate::Error::Serde(crate::error::serde::SerdeError::Deserialize(format!(
            "error = {} value = {}",
            e, value
        )))
    })
}

pub fn serde_from_value<T: serde::de::DeserializeOwned>(
    value: serde_json::Value,
) -> Result<T, crate::Error> {
    serde_json::from_value(value).map_err(|e| crate::Error::Serde(e.into()))
}

pub fn serde_to_value<T: serde::Serialize>(value: T) -> Result<serde_json::Value, crate::Error> {
    serde_json::to_value(value).map_err(|e| crate::Error::Serde(e.into()))
}

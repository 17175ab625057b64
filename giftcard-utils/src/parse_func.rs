use std::str::FromStr as _;

pub fn method_from_str(method: &str) -> Result<reqwest::Method, crate::Error> {
    reqwest::Method::from_str(method).map_err(|e| crate::Error::Parse(e.into()))
}

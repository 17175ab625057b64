use std::collections::BTreeMap;

/// Canonical signing input: `k1=v1&k2=v2...` in key order with the shared
/// key appended directly after the last value.
///
/// Values are concatenated as-is. The backend signs the raw parameter
/// values, percent-encoding only happens when the pairs are placed into the
/// transmitted query string or body.
pub fn canonical_string(params: &BTreeMap<String, String>, app_key: &str) -> String {
    let mut joined = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");
    joined.push_str(app_key);
    joined
}

/// Lowercase hex MD5 digest over the canonical string. Pure function of the
/// parameter set and the key; the digest field itself is never part of the
/// input.
pub fn md5_sign(params: &BTreeMap<String, String>, app_key: &str) -> String {
    giftcard_utils::md5(&canonical_string(params, app_key))
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `GET /v1/verify`. Only `result` is required; unknown fields are ignored
/// and malformed flags read as `false`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct VerifyPayload {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub disposable: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub role: bool,
    #[serde(default)]
    pub error: Option<Value>,
}

/// Account usage as reported by `GET /v1/stats`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStats {
    #[serde(default, deserialize_with = "lenient_count")]
    pub used: u64,
    #[serde(default, deserialize_with = "lenient_opt_count")]
    pub remaining: Option<u64>,
    #[serde(default, deserialize_with = "lenient_opt_string")]
    pub plan: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct StatsPayload {
    #[serde(flatten)]
    pub stats: AccountStats,
    #[serde(default)]
    pub error: Option<Value>,
}

/// `true`, `"true"` ou un nombre non nul; tout le reste vaut `false`.
fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => flag,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    })
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(lenient_opt_count(deserializer)?.unwrap_or(0))
}

fn lenient_opt_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_opt_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// Message carried by an `error` field, whatever its JSON type. `null`/`false` mean no error.
pub(crate) fn error_message(error: Option<Value>) -> Option<String> {
    match error? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

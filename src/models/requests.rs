use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of `POST /api/generate`
///
/// Clients send the brief either flat or under `brief`, and the spot length
/// under any of several names. Fields of the wrong JSON type read as missing
/// instead of failing the whole request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateRequest {
    #[serde(deserialize_with = "lenient_string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient_string")]
    pub offer: String,
    #[serde(deserialize_with = "lenient_string")]
    pub audience: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cta: String,
    #[serde(rename = "mustSay", alias = "must_say", deserialize_with = "lenient_string")]
    pub must_say: String,
    #[serde(deserialize_with = "lenient_string")]
    pub details: String,

    // Free-form copy, used as details when nothing better was given
    #[serde(deserialize_with = "lenient_string")]
    pub text: String,
    #[serde(deserialize_with = "lenient_string")]
    pub input: String,
    #[serde(deserialize_with = "lenient_string")]
    pub prompt: String,

    #[serde(deserialize_with = "lenient_brief")]
    pub brief: BriefFields,

    // Spot length selectors, checked in this order
    pub duration: Option<Value>,
    pub seconds: Option<Value>,
    pub time: Option<Value>,
    pub mode: Option<Value>,
    pub len: Option<Value>,
}

impl GenerateRequest {
    /// Spot length selectors in priority order
    pub fn duration_candidates(&self) -> [Option<&Value>; 5] {
        [
            self.duration.as_ref(),
            self.seconds.as_ref(),
            self.time.as_ref(),
            self.mode.as_ref(),
            self.len.as_ref(),
        ]
    }
}

/// Nested `brief` object of a generate request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BriefFields {
    #[serde(deserialize_with = "lenient_string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient_string")]
    pub offer: String,
    #[serde(deserialize_with = "lenient_string")]
    pub audience: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cta: String,
    #[serde(rename = "mustSay", alias = "must_say", deserialize_with = "lenient_string")]
    pub must_say: String,
    #[serde(deserialize_with = "lenient_string")]
    pub details: String,
}

/// Body of `POST /api/normalize`
#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub text: String,
}

/// Accept any JSON value, keeping it only when it is a string
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.trim().to_string(),
        _ => String::new(),
    })
}

/// Accept any JSON value, keeping it only when it is an object
fn lenient_brief<'de, D>(deserializer: D) -> Result<BriefFields, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_object() {
        Ok(serde_json::from_value(value).unwrap_or_default())
    } else {
        Ok(BriefFields::default())
    }
}

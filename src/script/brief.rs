use crate::config::constants::DEFAULT_TONE;
use crate::models::GenerateRequest;

/// Creative brief for a single spot
///
/// Every field is trimmed; an empty string means the client left it out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Brief {
    pub brand: String,
    pub offer: String,
    pub audience: String,
    pub tone: String,
    pub cta: String,
    pub must_say: String,
    pub details: String,
}

impl Brief {
    /// Collect the brief from a generate request
    ///
    /// Top-level fields win over the nested `brief` object. Tone falls back
    /// to the house tone, and details fall back to `text`, `input`, then
    /// `prompt` so a bare "write me something" request still has material.
    pub fn from_request(req: &GenerateRequest) -> Self {
        let nested = &req.brief;

        Self {
            brand: first_filled(&[req.brand.as_str(), nested.brand.as_str()]),
            offer: first_filled(&[req.offer.as_str(), nested.offer.as_str()]),
            audience: first_filled(&[req.audience.as_str(), nested.audience.as_str()]),
            tone: first_filled(&[req.tone.as_str(), nested.tone.as_str(), DEFAULT_TONE]),
            cta: first_filled(&[req.cta.as_str(), nested.cta.as_str()]),
            must_say: first_filled(&[req.must_say.as_str(), nested.must_say.as_str()]),
            details: first_filled(&[
                req.details.as_str(),
                nested.details.as_str(),
                req.text.as_str(),
                req.input.as_str(),
                req.prompt.as_str(),
            ]),
        }
    }
}

fn first_filled(candidates: &[&str]) -> String {
    candidates
        .iter()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
        .unwrap_or_default()
        .to_string()
}

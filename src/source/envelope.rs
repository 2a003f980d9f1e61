use crate::error::ParseError;
use crate::model::Reading;
use serde_derive::Deserialize;

/// Upstream payload shape: `{ "data": [ ...readings ] }`.
#[derive(Deserialize, Debug)]
struct Envelope {
    data: Option<Vec<Reading>>,
}

/// Decodes the readings carried in an upstream JSON body.
pub fn parse_readings(body: &str) -> Result<Vec<Reading>, ParseError> {
    let envelope: Envelope = serde_json::from_str(body)?;
    envelope.data.ok_or(ParseError::MissingData)
}

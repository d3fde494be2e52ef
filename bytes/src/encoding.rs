//! Encoding and decoding of byte array payloads

use std::convert::Infallible;
use std::string::FromUtf8Error;

use crate::Body;

/// Required to be implemented by encode error types.
pub trait EncodeError: std::error::Error + 'static {}

impl EncodeError for Infallible {}

impl EncodeError for serde_json::Error {}

/// A payload which can be converted to a body of bytes
pub trait Encode {
    /// The error type returned when encoding fails.
    type Error: EncodeError;
    /// Convert the payload to a body of bytes
    fn try_serialize(self) -> Result<Body, Self::Error>;
}

impl Encode for Vec<u8> {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        Ok(self.into())
    }
}
impl Encode for &[u8] {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        Ok(self.into())
    }
}
impl Encode for String {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        Ok(self.into())
    }
}
impl Encode for &str {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        Ok(self.into())
    }
}
impl Encode for Option<Vec<u8>> {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        Ok(self.unwrap_or_default().into())
    }
}
impl Encode for () {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        Ok(Body::default())
    }
}
impl Encode for Body {
    type Error = Infallible;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        Ok(self)
    }
}
impl Encode for serde_json::Value {
    type Error = serde_json::Error;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        serde_json::to_vec(&self).map(Into::into)
    }
}

/// Required to be implemented by extract error types.
pub trait ExtractError: std::error::Error + 'static {}

impl ExtractError for Infallible {}

impl ExtractError for serde_json::Error {}

impl ExtractError for FromUtf8Error {}

/// Payload extractor for encodings
pub trait Extract: Sized {
    /// The error type returned when extraction fails.
    type Error: ExtractError;
    /// Convert from a payload to a value
    fn extract(payload: Body) -> Result<Self, Self::Error>;
}

impl Extract for Vec<u8> {
    type Error = Infallible;
    fn extract(payload: Body) -> Result<Self, Self::Error> {
        Ok(payload.into_bytes())
    }
}

impl Extract for Body {
    type Error = Infallible;

    fn extract(payload: Body) -> Result<Self, Self::Error> {
        Ok(payload)
    }
}

impl Extract for String {
    type Error = FromUtf8Error;
    fn extract(payload: Body) -> Result<Self, Self::Error> {
        String::from_utf8(payload.into_bytes())
    }
}

/// JSON encoding and decoding
pub struct Json<T>(pub T);
impl<T: serde::de::DeserializeOwned> Extract for Json<T> {
    type Error = serde_json::Error;
    fn extract(payload: Body) -> Result<Self, Self::Error> {
        Ok(Json(serde_json::from_slice(payload.as_slice())?))
    }
}

impl<T: serde::Serialize> Encode for Json<T> {
    type Error = serde_json::Error;
    fn try_serialize(self) -> Result<Body, Self::Error> {
        serde_json::to_vec(&self.0).map(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize)]
    struct Payload {
        name: String,
    }

    #[test]
    fn encode_str_is_utf8_bytes() {
        let body = "hello world".try_serialize().expect("infallible");
        assert_eq!(body.as_slice(), b"hello world");
    }

    #[test]
    fn encode_none_is_empty() {
        let body: Body = None::<Vec<u8>>.try_serialize().expect("infallible");
        assert!(body.is_empty());
    }

    #[test]
    fn extract_string_rejects_invalid_utf8() {
        let result = String::extract(Body::from(vec![0xff, 0xfe]));
        assert!(result.is_err());
    }

    #[test]
    fn json_extract_and_encode() {
        let Json(payload): Json<Payload> =
            Json::extract(Body::from(r#"{"name":"kiln"}"#)).expect("valid json");
        assert_eq!(payload.name, "kiln");

        let body = Json(Payload {
            name: "kiln".to_string(),
        })
        .try_serialize()
        .expect("serializable");
        assert_eq!(body.as_slice(), br#"{"name":"kiln"}"#);
    }

    #[test]
    fn json_extract_rejects_malformed_payloads() {
        let result: Result<Json<Payload>, _> = Json::extract(Body::from("not json"));
        assert!(result.is_err());
    }
}

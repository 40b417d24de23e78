use serde::{Deserialize, Serialize};

use crate::error::ProxyError;

/// A note and the instruction to apply to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingRequest {
    pub content: String,
    pub prompt: String,
}

//Wire shape. Fields are optional here so that a missing field and a
//malformed body are reported differently.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct RawProcessingRequest {
    content: Option<String>,
    prompt: Option<String>,
}

impl ProcessingRequest {
    /// Decodes and validates an inbound body. An empty body counts as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, ProxyError> {
        let raw: RawProcessingRequest = if body.iter().all(u8::is_ascii_whitespace) {
            RawProcessingRequest::default()
        } else {
            serde_json::from_slice(body).map_err(|_| ProxyError::InvalidFormat)?
        };

        match (raw.content, raw.prompt) {
            (Some(content), Some(prompt)) if !content.is_empty() && !prompt.is_empty() => {
                Ok(ProcessingRequest { content, prompt })
            }
            _ => Err(ProxyError::MissingFields),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedBody {
    pub processed_content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_body() {
        let req = ProcessingRequest::from_body(br#"{"content":"note","prompt":"fix typos"}"#)
            .unwrap();
        assert_eq!(req.content, "note");
        assert_eq!(req.prompt, "fix typos");
    }

    #[test]
    fn test_missing_or_empty_fields() {
        for body in [
            &b""[..],
            b"{}",
            br#"{"content":"note"}"#,
            br#"{"prompt":"p"}"#,
            br#"{"content":"","prompt":"p"}"#,
            br#"{"content":"note","prompt":null}"#,
        ] {
            assert_eq!(
                ProcessingRequest::from_body(body),
                Err(ProxyError::MissingFields),
                "body {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_malformed_bodies() {
        for body in [
            &b"not-json"[..],
            b"[1,2]",
            br#"{"content":42,"prompt":"p"}"#,
            br#"{"content":"note","prompt":"p","temperature":2}"#,
        ] {
            assert_eq!(
                ProcessingRequest::from_body(body),
                Err(ProxyError::InvalidFormat),
                "body {:?}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn test_processed_body_is_camel_case() {
        let body = ProcessedBody {
            processed_content: "x".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"processedContent":"x"}"#
        );
    }
}

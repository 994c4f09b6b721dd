//! Lambda@Edge event envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RouterError, RouterResult};
use crate::event::request::RequestDescriptor;

/// Top-level event passed to a CloudFront trigger.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CloudFrontEvent {
    #[serde(rename = "Records")]
    pub records: Vec<CloudFrontRecord>,
}

/// One entry of `Records`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CloudFrontRecord {
    pub cf: CloudFrontPayload,
}

/// The `cf` object: distribution metadata plus the request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CloudFrontPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,

    pub request: RequestDescriptor,
}

impl CloudFrontEvent {
    /// Decode a raw Lambda payload.
    pub fn from_value(value: Value) -> RouterResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Distribution id from `cf.config`, when present. Used for log context.
    pub fn distribution_id(&self) -> Option<&str> {
        self.records
            .first()?
            .cf
            .config
            .as_ref()?
            .get("distributionId")?
            .as_str()
    }

    /// Take `Records[0].cf.request`, rejecting an empty `Records` array.
    pub fn into_request(self) -> RouterResult<RequestDescriptor> {
        self.records
            .into_iter()
            .next()
            .map(|record| record.cf.request)
            .ok_or(RouterError::MissingRecord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(uri: Value) -> Value {
        json!({
            "Records": [{
                "cf": {
                    "config": { "distributionId": "EDFDVBD6EXAMPLE", "eventType": "origin-request" },
                    "request": { "method": "GET", "uri": uri, "headers": {} }
                }
            }]
        })
    }

    #[test]
    fn test_decode_and_take_request() {
        let event = CloudFrontEvent::from_value(event(json!("/songs"))).unwrap();
        assert_eq!(event.distribution_id(), Some("EDFDVBD6EXAMPLE"));
        let request = event.into_request().unwrap();
        assert_eq!(request.uri, "/songs");
    }

    #[test]
    fn test_missing_config_is_allowed() {
        let raw = json!({ "Records": [{ "cf": { "request": { "uri": "/" } } }] });
        let event = CloudFrontEvent::from_value(raw).unwrap();
        assert_eq!(event.distribution_id(), None);
        assert_eq!(event.into_request().unwrap().uri, "/");
    }

    #[test]
    fn test_empty_records() {
        let event = CloudFrontEvent::from_value(json!({ "Records": [] })).unwrap();
        assert!(matches!(event.into_request(), Err(RouterError::MissingRecord)));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        for raw in [
            json!({}),
            json!({ "Records": {} }),
            json!({ "Records": [{ "cf": {} }] }),
            event(json!(7)),
        ] {
            assert!(matches!(
                CloudFrontEvent::from_value(raw),
                Err(RouterError::MalformedEvent(_))
            ));
        }
    }
}

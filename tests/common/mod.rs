//! Shared fixtures for integration tests.

use serde_json::{json, Value};

/// A full origin-request event as delivered by CloudFront.
pub fn origin_request_event(uri: &str) -> Value {
    json!({
        "Records": [{
            "cf": {
                "config": {
                    "distributionDomainName": "d111111abcdef8.cloudfront.net",
                    "distributionId": "EDFDVBD6EXAMPLE",
                    "eventType": "origin-request",
                    "requestId": "4TyzHTaYWb1GX1qTfsHhEqV6HUDd_BzoBZnwfnvQc_1oF26ClkoUSEQ=="
                },
                "request": {
                    "clientIp": "203.0.113.178",
                    "headers": {
                        "host": [{ "key": "Host", "value": "music.example.org" }],
                        "user-agent": [{ "key": "User-Agent", "value": "Amazon CloudFront" }]
                    },
                    "method": "GET",
                    "origin": {
                        "s3": {
                            "authMethod": "origin-access-identity",
                            "customHeaders": {},
                            "domainName": "music-site.s3.amazonaws.com",
                            "path": "",
                            "region": "us-east-1"
                        }
                    },
                    "querystring": "",
                    "uri": uri
                }
            }
        }]
    })
}

/// The request object inside an event built by [`origin_request_event`].
#[allow(dead_code)]
pub fn request_of(event: &Value) -> &Value {
    &event["Records"][0]["cf"]["request"]
}

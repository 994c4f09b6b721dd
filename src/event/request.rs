//! The request record handed to origin-request triggers.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{RouterError, RouterResult};

/// `Records[0].cf.request`.
///
/// `uri` is the only field the router reads or writes. Everything else
/// (`method`, `querystring`, `headers`, `origin`, ...) is kept in `other`
/// and serialized back exactly as received.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RequestDescriptor {
    pub uri: String,

    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl RequestDescriptor {
    /// Descriptor with only a uri, mostly useful for tests and the CLI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            other: Map::new(),
        }
    }

    /// Reject uris that are not absolute paths.
    pub fn validate(&self) -> RouterResult<()> {
        if self.uri.starts_with('/') {
            Ok(())
        } else {
            Err(RouterError::InvalidUri(self.uri.clone()))
        }
    }
}

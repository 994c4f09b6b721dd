//! CloudFront event decoding.
//!
//! # Data Flow
//! ```text
//! Lambda payload (serde_json::Value)
//!     → cloudfront.rs (typed Records[0].cf.request)
//!     → request.rs (RequestDescriptor, uri validated)
//!     → handler rewrites uri
//!     → RequestDescriptor serialized back to the host
//! ```
//!
//! # Design Decisions
//! - Typed structures instead of dynamic traversal
//! - Construction fails fast if the shape does not match
//! - Only `uri` is interpreted; all other request fields round-trip untouched

pub mod cloudfront;
pub mod request;

pub use cloudfront::CloudFrontEvent;
pub use request::RequestDescriptor;

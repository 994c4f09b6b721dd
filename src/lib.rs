//! Frontend version router for CloudFront Lambda@Edge.

pub mod config;
pub mod error;
pub mod event;
pub mod handler;
pub mod observability;
pub mod routing;
pub mod runtime;
pub mod selection;

pub use config::schema::RouterConfig;
pub use error::RouterError;
pub use handler::EdgeHandler;
pub use routing::VersionRouter;

//! Lambda runtime glue.

use std::path::PathBuf;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

use crate::config::loader::{load_or_default, ConfigError};
use crate::config::RouterConfig;
use crate::event::RequestDescriptor;
use crate::handler::EdgeHandler;
use crate::observability::emf::EmfRecorder;

/// Configuration file looked up next to the deployed binary.
pub const CONFIG_FILE_NAME: &str = "router.toml";

/// Path of the packaged configuration file.
///
/// Lambda sets `LAMBDA_TASK_ROOT` to the unpacked function directory; outside
/// Lambda the current directory is used.
pub fn config_path() -> PathBuf {
    std::env::var_os("LAMBDA_TASK_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

/// Load the packaged configuration, or the compiled-in defaults.
pub fn deployed_config() -> Result<RouterConfig, ConfigError> {
    load_or_default(&config_path())
}

/// Per-invocation entry point. The Lambda context is not used.
pub async fn function_handler(
    handler: &EdgeHandler,
    event: LambdaEvent<Value>,
) -> Result<RequestDescriptor, Error> {
    Ok(handler.handle(event.payload)?)
}

/// Serve invocations until the runtime shuts the process down.
///
/// With a recorder, the counters touched by each invocation are flushed as
/// EMF lines before the response is returned, whether it succeeded or not.
pub async fn run(handler: EdgeHandler, recorder: Option<EmfRecorder>) -> Result<(), Error> {
    let handler = &handler;
    let recorder = recorder.as_ref();
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        let result = function_handler(handler, event).await;
        if let Some(recorder) = recorder {
            recorder.flush();
        }
        result
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    #[tokio::test]
    async fn test_function_handler_rewrites() {
        let handler = EdgeHandler::new(&RouterConfig::default()).unwrap();
        let payload = json!({ "Records": [{ "cf": { "request": { "uri": "/" } } }] });

        let request = function_handler(&handler, LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap();

        assert!(request.uri.ends_with('/'));
        assert!(handler.router().versions().contains(&request.uri[..request.uri.len() - 1]));
    }

    #[tokio::test]
    async fn test_function_handler_propagates_errors() {
        let handler = EdgeHandler::new(&RouterConfig::default()).unwrap();
        let payload = json!({ "Records": [] });

        let err = function_handler(&handler, LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no records"));
    }

    #[test]
    fn test_config_path_file_name() {
        assert!(config_path().ends_with(CONFIG_FILE_NAME));
    }
}

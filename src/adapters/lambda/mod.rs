//! Lambda Adapter
//!
//! Glue between the Lambda runtime and [`CountWordsHandler`]: parses the raw
//! payload, runs the handler inside a per-request span, and shapes the
//! response and error diagnostics the runtime reports back to the platform.

use lambda_runtime::{Diagnostic, LambdaEvent};
use serde::Serialize;
use tracing::Instrument;

use crate::application::{CountWordsHandler, CountWordsResult};
use crate::domain::{HandlerError, StorageEvent};

/// Success response returned to the invoker.
///
/// `body` carries the confirmation string JSON-encoded, so consumers that
/// treat it like an API Gateway proxy body can decode it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl InvocationResponse {
    pub fn success(result: &CountWordsResult) -> Self {
        Self {
            status_code: 200,
            body: serde_json::Value::from(result.confirmation.as_str()).to_string(),
        }
    }
}

impl From<HandlerError> for Diagnostic {
    fn from(err: HandlerError) -> Self {
        Diagnostic {
            error_type: err.code().to_string(),
            error_message: err.to_string(),
        }
    }
}

/// Handles one Lambda invocation.
pub async fn handle_invocation(
    handler: &CountWordsHandler,
    event: LambdaEvent<serde_json::Value>,
) -> Result<InvocationResponse, HandlerError> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("invocation", request_id = %context.request_id);

    async move {
        let event = match StorageEvent::from_value(payload) {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(code = %e.code(), error = %e, "Error processing file");
                return Err(e);
            }
        };
        let result = handler.handle(event).await?;
        Ok(InvocationResponse::success(&result))
    }
    .instrument(span)
    .await
}

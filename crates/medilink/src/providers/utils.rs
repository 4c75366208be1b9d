use serde_json::{json, Value};

use super::base::{CompletionRequest, Usage};
use crate::errors::{GatewayError, GatewayResult};

/// Convert a completion request into the chat-completions payload.
pub fn request_to_payload(request: &CompletionRequest) -> Value {
    let messages: Vec<Value> = request
        .messages
        .iter()
        .map(|message| {
            json!({
                "role": message.role,
                "content": message.content,
            })
        })
        .collect();

    json!({
        "model": request.model_id,
        "messages": messages,
        "stream": false,
        "customer_identifier": request.customer_identifier,
        "thread_identifier": request.thread_identifier,
        "prompt_name": request.prompt_name,
        "metadata": request.metadata,
    })
}

/// Pull `choices[0].message.content` out of the response envelope
pub fn response_to_reply_text(response: &Value) -> GatewayResult<String> {
    let content = response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"));

    match content {
        Some(Value::String(text)) if !text.is_empty() => Ok(text.clone()),
        Some(Value::String(_)) => Err(GatewayError::MalformedResponse(
            "reply content is empty".to_string(),
        )),
        Some(other) => Err(GatewayError::MalformedResponse(format!(
            "reply content is not text: {}",
            other
        ))),
        None => Err(GatewayError::MalformedResponse(
            "no choices[0].message.content in response".to_string(),
        )),
    }
}

/// Usage is informational; a missing block yields empty counts rather than an error.
pub fn get_usage(data: &Value) -> Usage {
    let Some(usage) = data.get("usage") else {
        return Usage::default();
    };

    let input_tokens = usage
        .get("prompt_tokens")
        .and_then(|v| v.as_i64())
        .and_then(|v| i32::try_from(v).ok());

    let output_tokens = usage
        .get("completion_tokens")
        .and_then(|v| v.as_i64())
        .and_then(|v| i32::try_from(v).ok());

    let total_tokens = usage
        .get("total_tokens")
        .and_then(|v| v.as_i64())
        .and_then(|v| i32::try_from(v).ok())
        .or_else(|| match (input_tokens, output_tokens) {
            (Some(input), Some(output)) => input.checked_add(output),
            _ => None,
        });

    Usage::new(input_tokens, output_tokens, total_tokens)
}

/// A provider may answer 2xx and still report an error in the body
pub fn check_error_body(response: &Value) -> GatewayResult<()> {
    match response.get("error") {
        Some(error) if !error.is_null() => Err(GatewayError::unavailable(
            None,
            format!("provider returned an error: {}", error),
        )),
        _ => Ok(()),
    }
}

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use crate::error::RelayError;
use crate::models::PromptRequest;
use crate::state::AppState;
use crate::upstream::forward_prompt;
use std::sync::Arc;

// POST /send
//
// Any failure returns before the next step, so a request gets exactly one response.
pub async fn send_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, RelayError> {
    // decode regardless of Content-Type, the body shape is all that matters
    let payload: PromptRequest =
        serde_json::from_slice(&body).map_err(RelayError::InvalidBody)?;

    let data = forward_prompt(&state.client, &state.upstream, &payload.prompt).await?;

    let encoded = serde_json::to_vec(&data).map_err(RelayError::Encode)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], encoded).into_response())
}

use crate::config::UpstreamSettings;
use crate::error::RelayError;
use crate::models::{PromptRequest, TextResponse};

// Single upstream attempt: no retries, no explicit timeout (reqwest defaults)
pub async fn forward_prompt(
    client: &reqwest::Client,
    upstream: &UpstreamSettings,
    prompt: &str,
) -> Result<TextResponse, RelayError> {
    let proxy_request = PromptRequest {
        prompt: prompt.to_string(),
    };

    // .json() also sets Content-Type: application/json
    let res = client
        .post(&upstream.url)
        .header(upstream.api_key_header.clone(), upstream.api_key())
        .json(&proxy_request)
        .send()
        .await
        .map_err(RelayError::UpstreamUnreachable)?;

    // A non-2xx status is a failure even if the body would still decode as
    // `{"text": ...}`; an error page is never relayed as generated text.
    let status = res.status();
    if !status.is_success() {
        return Err(RelayError::UpstreamStatus(status));
    }

    let body = res
        .json::<TextResponse>()
        .await
        .map_err(RelayError::UpstreamMalformed)?;

    tracing::info!(text = %body.text, "Received upstream response");
    Ok(body)
}

//! Retrying request dispatch

use crate::error::{ControllerError, ControllerResult};
use crate::retry::RetryPolicy;
use url::Url;

/// Join path segments onto the base URL, percent-encoding each segment.
pub(crate) fn endpoint(
    base: &Url,
    segments: &[&str],
    trailing_slash: bool,
) -> ControllerResult<Url> {
    let mut url = base.clone();
    {
        let mut parts = url
            .path_segments_mut()
            .map_err(|_| ControllerError::Url(format!("cannot-be-a-base URL: {base}")))?;
        parts.pop_if_empty();
        for segment in segments {
            parts.push(segment);
        }
        if trailing_slash {
            parts.push("");
        }
    }
    Ok(url)
}

/// Send a request, retrying on connect/timeout errors and on statuses in
/// the transport retry set, with exponential backoff between attempts.
///
/// The final response is returned whatever its status; callers interpret
/// business codes. Requests whose body cannot be cloned get one attempt.
pub(crate) async fn send_with_retry(
    request: reqwest::RequestBuilder,
    retry: &RetryPolicy,
) -> ControllerResult<reqwest::Response> {
    let mut attempt: u32 = 1;
    loop {
        let Some(builder) = request.try_clone() else {
            return Ok(request.send().await?);
        };

        match builder.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                if attempt < retry.attempts && retry.retryable_status(status) {
                    tracing::warn!(status, attempt, "retryable status from controller");
                } else {
                    return Ok(response);
                }
            }
            Err(err) if attempt < retry.attempts && (err.is_connect() || err.is_timeout()) => {
                tracing::warn!(error = %err, attempt, "transport error, retrying");
            }
            Err(err) => return Err(err.into()),
        }

        tokio::time::sleep(retry.delay(attempt)).await;
        attempt += 1;
    }
}

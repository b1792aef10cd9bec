//! OAuth client-credentials exchange

use crate::error::{ControllerError, ControllerResult};
use crate::retry::RetryPolicy;
use crate::transport::send_with_retry;
use argus_types::Credentials;
use serde::Deserialize;
use url::Url;

/// Authenticated controller session: the bearer token issued at startup.
///
/// Created once per run; there is no refresh logic. A long-running caller
/// re-authenticates by building a new client.
#[derive(Clone)]
pub struct Session {
    pub(crate) access_token: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("access_token", &"<redacted>").finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Exchange client credentials for an access token.
///
/// `POST api/oauth/access_token`, form-encoded, with the client id
/// qualified by the account name. Any failure here is fatal for the run.
pub(crate) async fn authenticate(
    http: &reqwest::Client,
    base_url: &Url,
    credentials: &Credentials,
    retry: &RetryPolicy,
) -> ControllerResult<Session> {
    let url = crate::transport::endpoint(base_url, &["api", "oauth", "access_token"], false)?;
    let request = http.post(url).form(&[
        ("grant_type", "client_credentials"),
        ("client_id", &credentials.qualified_client_id()),
        ("client_secret", &credentials.client_secret),
    ]);

    let response = send_with_retry(request, retry)
        .await
        .map_err(|err| ControllerError::Auth(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ControllerError::Auth(format!(
            "token endpoint returned {status}"
        )));
    }

    let body: TokenResponse = response
        .json()
        .await
        .map_err(|err| ControllerError::Auth(format!("malformed token response: {err}")))?;

    tracing::debug!(
        account = %credentials.account,
        environment = %credentials.environment,
        "controller session established",
    );
    Ok(Session {
        access_token: body.access_token,
    })
}

//! Authenticated HTTP client for the controller REST API

use crate::api::{ApiResponse, ControllerApi};
use crate::auth::{authenticate, Session};
use crate::error::{ControllerError, ControllerResult};
use crate::retry::RetryPolicy;
use crate::transport::{endpoint, send_with_retry};
use argus_types::{Credentials, HealthRuleDocument, ResourceKind, ResourceSummary};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

/// Default SaaS base URL for a controller account.
pub fn saas_base_url(account: &str) -> String {
    format!("https://{account}.saas.appdynamics.com/controller/")
}

/// Authenticated client for one controller account.
///
/// Authenticates once on construction; the session is read-only afterwards
/// and shared by every call in the run.
pub struct ControllerClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
    retry: RetryPolicy,
}

impl std::fmt::Debug for ControllerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControllerClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .field("retry", &self.retry)
            .finish()
    }
}

/// Element of the tier list endpoint; only the runtime type matters here.
#[derive(Deserialize)]
struct TierInfo {
    #[serde(rename = "type")]
    tier_type: String,
}

impl ControllerClient {
    /// Build a client and perform the token exchange.
    ///
    /// `base_url` overrides the SaaS default derived from the account name
    /// (tests point this at a local mock).
    pub async fn connect(
        credentials: &Credentials,
        base_url: Option<Url>,
    ) -> ControllerResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        let base_url = match base_url {
            Some(url) => url,
            None => Url::parse(&saas_base_url(&credentials.account))
                .map_err(|err| ControllerError::Url(err.to_string()))?,
        };

        let retry = RetryPolicy::default();
        let session = authenticate(&http, &base_url, credentials, &retry).await?;

        Ok(Self {
            http,
            base_url,
            session,
            retry,
        })
    }

    /// Override the transport retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn alerting_url(&self, app_id: u64, tail: &[&str]) -> ControllerResult<Url> {
        let app = app_id.to_string();
        let mut segments = vec!["alerting", "rest", "v1", "applications", app.as_str()];
        segments.extend_from_slice(tail);
        endpoint(&self.base_url, &segments, false)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ControllerResult<T> {
        let request = self
            .http
            .get(url)
            .bearer_auth(&self.session.access_token)
            .header(ACCEPT, "application/json")
            .query(&[("output", "json")]);

        let response = send_with_retry(request, &self.retry).await?;
        let response = read_response(response).await?;
        if !response.is_success() {
            return Err(ControllerError::Api {
                status: response.status,
                message: response.message(),
            });
        }
        Ok(serde_json::from_str(&response.text)?)
    }
}

/// Drain a response into an [`ApiResponse`], parsing the body as JSON when
/// possible.
async fn read_response(response: reqwest::Response) -> ControllerResult<ApiResponse> {
    let status = response.status().as_u16();
    let text = response.text().await?;
    let body = serde_json::from_str(&text).ok();
    Ok(ApiResponse { status, body, text })
}

#[async_trait]
impl ControllerApi for ControllerClient {
    async fn application_id(&self, name: &str) -> ControllerResult<u64> {
        let url = endpoint(&self.base_url, &["rest", "applications", name], false)?;
        let applications: Vec<ResourceSummary> = self.get_json(url).await?;
        applications
            .first()
            .map(|application| application.id)
            .ok_or_else(|| ControllerError::NotFound(format!("application '{name}'")))
    }

    async fn tier_type(&self, app_id: u64, tier_name: &str) -> ControllerResult<String> {
        let app = app_id.to_string();
        let url = endpoint(
            &self.base_url,
            &["rest", "applications", &app, "tiers", tier_name],
            true,
        )?;
        let tiers: Vec<TierInfo> = self.get_json(url).await?;
        tiers
            .into_iter()
            .next()
            .map(|tier| tier.tier_type)
            .ok_or_else(|| {
                ControllerError::NotFound(format!("tier '{tier_name}' in application {app_id}"))
            })
    }

    async fn list_resources(
        &self,
        app_id: u64,
        kind: ResourceKind,
    ) -> ControllerResult<Vec<ResourceSummary>> {
        let url = self.alerting_url(app_id, &[kind.path_segment()])?;
        self.get_json(url).await
    }

    async fn health_rule(
        &self,
        app_id: u64,
        rule_id: u64,
    ) -> ControllerResult<HealthRuleDocument> {
        let rule = rule_id.to_string();
        let url = self.alerting_url(
            app_id,
            &[ResourceKind::HealthRules.path_segment(), rule.as_str()],
        )?;
        self.get_json(url).await
    }

    async fn create_resource(
        &self,
        app_id: u64,
        kind: ResourceKind,
        payload: &Value,
    ) -> ControllerResult<ApiResponse> {
        let url = self.alerting_url(app_id, &[kind.path_segment()])?;
        let request = self
            .http
            .post(url)
            .bearer_auth(&self.session.access_token)
            .header(ACCEPT, "application/json")
            .json(payload);

        let response = send_with_retry(request, &self.retry).await?;
        read_response(response).await
    }

    async fn replace_health_rule(
        &self,
        app_id: u64,
        rule_id: u64,
        document: &HealthRuleDocument,
    ) -> ControllerResult<()> {
        let rule = rule_id.to_string();
        let url = self.alerting_url(
            app_id,
            &[ResourceKind::HealthRules.path_segment(), rule.as_str()],
        )?;
        let request = self
            .http
            .put(url)
            .bearer_auth(&self.session.access_token)
            .header(ACCEPT, "application/json")
            .json(document);

        let response = send_with_retry(request, &self.retry).await?;
        let response = read_response(response).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ControllerError::Api {
                status: response.status,
                message: response.message(),
            })
        }
    }

    async fn delete_resource(
        &self,
        app_id: u64,
        kind: ResourceKind,
        resource_id: u64,
    ) -> ControllerResult<()> {
        let id = resource_id.to_string();
        let url = self.alerting_url(app_id, &[kind.path_segment(), id.as_str()])?;

        // DELETE is outside the transport retry policy.
        let response = self
            .http
            .delete(url)
            .bearer_auth(&self.session.access_token)
            .send()
            .await?;

        let response = read_response(response).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(ControllerError::Api {
                status: response.status,
                message: response.message(),
            })
        }
    }
}

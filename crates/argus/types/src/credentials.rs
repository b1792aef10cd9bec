//! Controller credentials

use std::fmt;

/// OAuth client credentials for one controller account.
///
/// Constructed once at startup by the secrets loader and owned by the
/// controller client for the lifetime of the run. The secret is redacted
/// from `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    /// OAuth client id (without the account suffix)
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Controller account name
    pub account: String,
    /// Deployment environment label (e.g. "prod")
    pub environment: String,
}

impl Credentials {
    /// The `client_id@account` form the token endpoint expects.
    pub fn qualified_client_id(&self) -> String {
        format!("{}@{}", self.client_id, self.account)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("account", &self.account)
            .field("environment", &self.environment)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Credentials {
        Credentials {
            client_id: "onboarder".into(),
            client_secret: "s3cret".into(),
            account: "acme-prod".into(),
            environment: "prod".into(),
        }
    }

    #[test]
    fn qualified_client_id_appends_account() {
        assert_eq!(sample().qualified_client_id(), "onboarder@acme-prod");
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", sample());
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("s3cret"));
    }
}

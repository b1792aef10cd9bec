//! Secrets file loading
//!
//! The secrets file is a flat JSON object keyed per account:
//! `{ACCOUNT}_CLIENT_ID` and `{ACCOUNT}_SECRET`, with the account name
//! uppercased and dashes mapped to underscores.

use crate::error::{CliError, CliResult};
use argus_types::Credentials;
use serde_json::Value;
use std::path::Path;

fn account_key(account: &str) -> String {
    account.to_uppercase().replace('-', "_")
}

/// Load credentials for `account` from the secrets file.
///
/// Missing file or missing keys are fatal; nothing useful can happen
/// without credentials.
pub fn load_credentials(
    path: &Path,
    account: &str,
    environment: &str,
) -> CliResult<Credentials> {
    let contents = std::fs::read_to_string(path).map_err(|err| {
        CliError::Secrets(format!("cannot read secrets {}: {err}", path.display()))
    })?;
    let secrets: Value = serde_json::from_str(&contents)
        .map_err(|err| CliError::Secrets(format!("malformed secrets file: {err}")))?;

    let key = account_key(account);
    let fetch = |suffix: &str| -> CliResult<String> {
        secrets
            .get(format!("{key}_{suffix}"))
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| CliError::Secrets(format!("missing {key}_{suffix}")))
    };

    Ok(Credentials {
        client_id: fetch("CLIENT_ID")?,
        client_secret: fetch("SECRET")?,
        account: account.to_owned(),
        environment: environment.to_owned(),
    })
}

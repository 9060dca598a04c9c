pub mod auth;
pub mod pets;

use crate::client::ApiClient;
use crate::config::Config;
use crate::models::AuthKey;
use crate::output::print_response;
use anyhow::{Result, bail};

/// Request a key with the configured credentials.
///
/// Commands operating on pets need one; a rejected login is reported and
/// aborts the command.
pub async fn acquire_key(client: &ApiClient, config: &Config, verbose: bool) -> Result<AuthKey> {
    let creds = config.credentials()?;
    if verbose {
        eprintln!("[verbose] Requesting auth key for {}", creds.email);
    }

    let response = client.get_api_key(&creds.email, &creds.password).await?;
    if !response.is_success() {
        print_response(&response)?;
        bail!("Login rejected with status {}", response.status);
    }

    Ok(response.auth_key()?)
}

use crate::cli::KeyArgs;
use crate::client::ApiClient;
use crate::config::Config;
use crate::error::PetError;
use crate::output::print_response;
use anyhow::Result;

/// Request an auth key. Flags take precedence over configured credentials.
pub async fn key(client: &ApiClient, config: &Config, args: KeyArgs, verbose: bool) -> Result<u16> {
    let email = args.email.or_else(|| config.email.clone());
    let password = args.password.or_else(|| config.password.clone());

    let (Some(email), Some(password)) = (email, password) else {
        return Err(PetError::MissingCredentials.into());
    };

    if verbose {
        eprintln!("[verbose] Requesting auth key from {}", client.base_url());
    }

    let response = client.get_api_key(&email, &password).await?;
    print_response(&response)?;

    Ok(response.status)
}

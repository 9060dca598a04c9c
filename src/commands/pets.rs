//! Pet commands: list, add, add-simple, set-photo, update, delete.
//!
//! Each command obtains a fresh key, issues exactly one pet request and
//! returns its status.

use crate::cli::{OutputFormat, PetFieldArgs};
use crate::client::ApiClient;
use crate::config::Config;
use crate::models::PetFilter;
use crate::output::{print_pets, print_response};
use anyhow::Result;
use std::path::Path;

use super::acquire_key;

pub async fn list(
    client: &ApiClient,
    config: &Config,
    format: OutputFormat,
    mine: bool,
    verbose: bool,
) -> Result<u16> {
    let auth_key = acquire_key(client, config, verbose).await?;
    let filter = if mine {
        PetFilter::MyPets
    } else {
        PetFilter::All
    };

    if verbose {
        eprintln!("[verbose] Listing pets (filter={:?})", filter.as_str());
    }

    let response = client.get_list_of_pets(&auth_key, filter).await?;
    print_pets(format, &response)?;

    Ok(response.status)
}

pub async fn add(
    client: &ApiClient,
    config: &Config,
    fields: &PetFieldArgs,
    photo: &Path,
    verbose: bool,
) -> Result<u16> {
    let auth_key = acquire_key(client, config, verbose).await?;

    if verbose {
        eprintln!("[verbose] Adding pet with photo {}", photo.display());
    }

    let response = client
        .add_new_pet(
            &auth_key,
            &fields.name,
            &fields.animal_type,
            &fields.age,
            photo,
        )
        .await?;
    print_response(&response)?;

    Ok(response.status)
}

pub async fn add_simple(
    client: &ApiClient,
    config: &Config,
    fields: &PetFieldArgs,
    verbose: bool,
) -> Result<u16> {
    let auth_key = acquire_key(client, config, verbose).await?;

    let response = client
        .add_new_pet_simple(&auth_key, &fields.name, &fields.animal_type, &fields.age)
        .await?;
    print_response(&response)?;

    Ok(response.status)
}

pub async fn set_photo(
    client: &ApiClient,
    config: &Config,
    pet_id: &str,
    photo: &Path,
    verbose: bool,
) -> Result<u16> {
    let auth_key = acquire_key(client, config, verbose).await?;

    let response = client.add_photo_of_pet(&auth_key, pet_id, photo).await?;
    print_response(&response)?;

    Ok(response.status)
}

pub async fn update(
    client: &ApiClient,
    config: &Config,
    pet_id: &str,
    fields: &PetFieldArgs,
    verbose: bool,
) -> Result<u16> {
    let auth_key = acquire_key(client, config, verbose).await?;

    if verbose {
        eprintln!("[verbose] Updating pet {}", pet_id);
    }

    let response = client
        .update_pet_info(
            &auth_key,
            pet_id,
            &fields.name,
            &fields.animal_type,
            &fields.age,
        )
        .await?;
    print_response(&response)?;

    Ok(response.status)
}

pub async fn delete(client: &ApiClient, config: &Config, pet_id: &str, verbose: bool) -> Result<u16> {
    let auth_key = acquire_key(client, config, verbose).await?;

    if verbose {
        eprintln!("[verbose] Deleting pet {}", pet_id);
    }

    let response = client.delete_pet(&auth_key, pet_id).await?;
    print_response(&response)?;

    Ok(response.status)
}

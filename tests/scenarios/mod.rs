//! Black-box scenarios against a PetFriends service.
//!
//! Each scenario is a linear "call endpoint, check status" sequence. They are
//! run against the emulated service in `pet_friends.rs` and against the real
//! one in `live_pet_friends.rs`.
#![allow(dead_code)]

use crate::common::Suite;
use petfriends::models::{AuthKey, PetFilter};

pub const CORRUPTED_KEY: &str = "123";

fn corrupt(auth_key: &AuthKey) -> AuthKey {
    let mut corrupted = auth_key.clone();
    corrupted.set_key(CORRUPTED_KEY);
    corrupted
}

// ============== Key issuance ==============

pub async fn get_api_key_for_valid_user(suite: &Suite) {
    let response = suite
        .client
        .get_api_key(&suite.creds.email, &suite.creds.password)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.contains("key"));
    assert!(!response.auth_key().unwrap().key().is_empty());
}

pub async fn get_api_key_for_empty_password(suite: &Suite) {
    let response = suite
        .client
        .get_api_key(&suite.creds.email, "")
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(!response.body.contains("key"));
}

pub async fn get_api_key_for_empty_email(suite: &Suite) {
    let response = suite
        .client
        .get_api_key("", &suite.creds.password)
        .await
        .unwrap();

    assert_eq!(response.status, 403);
    assert!(!response.body.contains("key"));
}

// ============== Listing ==============

pub async fn get_all_pets_with_valid_key(suite: &Suite) {
    let auth_key = suite.valid_key().await;

    let response = suite
        .client
        .get_list_of_pets(&auth_key, PetFilter::All)
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert!(!response.pets().unwrap().is_empty());
}

pub async fn get_all_pets_with_invalid_key(suite: &Suite) {
    let auth_key = corrupt(&suite.valid_key().await);

    let response = suite
        .client
        .get_list_of_pets(&auth_key, PetFilter::All)
        .await
        .unwrap();

    assert_eq!(response.status, 403);
}

// ============== Creation ==============

pub async fn add_new_pet_with_valid_data(suite: &Suite) {
    let auth_key = suite.valid_key().await;

    let response = suite
        .client
        .add_new_pet(&auth_key, "Барбоскин", "двортерьер", "4", suite.photo("cat1.jpg"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let pet = response.json::<petfriends::models::Pet>().unwrap();
    assert_eq!(pet.name, "Барбоскин");
}

pub async fn add_new_pet_with_invalid_key(suite: &Suite) {
    let auth_key = corrupt(&suite.valid_key().await);

    let response = suite
        .client
        .add_new_pet(&auth_key, "Барбоскин", "двортерьер", "4", suite.photo("cat1.jpg"))
        .await
        .unwrap();

    assert_eq!(response.status, 403);
}

/// The service accepts a pet with every field blank.
pub async fn add_new_pet_with_empty_data(suite: &Suite) {
    let auth_key = suite.valid_key().await;

    let response = suite
        .client
        .add_new_pet(&auth_key, "", "", "", suite.photo("emptyFile.jpg"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
}

pub async fn add_new_pet_with_negative_age(suite: &Suite) {
    let auth_key = suite.valid_key().await;

    let response = suite
        .client
        .add_new_pet(&auth_key, "Барбоскин", "двортерьер", "-4", suite.photo("emptyFile.jpg"))
        .await
        .unwrap();

    assert_ne!(response.status, 200);
}

pub async fn add_new_pet_simple_with_valid_data(suite: &Suite) {
    let auth_key = suite.valid_key().await;

    let response = suite
        .client
        .add_new_pet_simple(&auth_key, "Пушок", "кролик", "1")
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.json::<petfriends::models::Pet>().unwrap().name, "Пушок");
}

pub async fn add_photo_of_own_pet(suite: &Suite) {
    let auth_key = suite.valid_key().await;
    let pet = suite.ensure_my_pet(&auth_key).await;

    let response = suite
        .client
        .add_photo_of_pet(&auth_key, &pet.id, suite.photo("cat1.jpg"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    let updated = response.json::<petfriends::models::Pet>().unwrap();
    assert!(!updated.pet_photo.is_empty());
}

// ============== Deletion ==============

pub async fn delete_pet_with_invalid_id(suite: &Suite) {
    let auth_key = suite.valid_key().await;
    suite.ensure_my_pet(&auth_key).await;

    let response = suite
        .client
        .delete_pet(&auth_key, "incorrect number")
        .await
        .unwrap();

    assert_ne!(response.status, 200);
}

pub async fn delete_pet_with_invalid_key(suite: &Suite) {
    let auth_key = suite.valid_key().await;
    let pet = suite.ensure_my_pet(&auth_key).await;

    let response = suite
        .client
        .delete_pet(&corrupt(&auth_key), &pet.id)
        .await
        .unwrap();

    assert_eq!(response.status, 403);
}

// ============== Update ==============

/// Skipped when the account owns no pets.
pub async fn update_pet_with_empty_info(suite: &Suite) {
    let auth_key = suite.valid_key().await;
    let pets = suite.my_pets(&auth_key).await;

    if let Some(pet) = pets.first() {
        let response = suite
            .client
            .update_pet_info(&auth_key, &pet.id, "", "", "0")
            .await
            .unwrap();

        assert_ne!(response.status, 200);
    }
}

/// Skipped when the account owns no pets.
pub async fn update_pet_with_negative_age(suite: &Suite) {
    let auth_key = suite.valid_key().await;
    let pets = suite.my_pets(&auth_key).await;

    if let Some(pet) = pets.first() {
        let response = suite
            .client
            .update_pet_info(&auth_key, &pet.id, "Филя", "пёса", "-251")
            .await
            .unwrap();

        assert_ne!(response.status, 200);
    }
}

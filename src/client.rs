use crate::config::Config;
use crate::error::PetError;
use crate::models::{ApiResponse, AuthKey, PetFields, PetFilter, ResponseBody};
use crate::ua::user_agent;
use anyhow::Result;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use std::path::Path;
use std::time::Duration;

const TIMEOUT_SECS: u64 = 30;

/// Header carrying the key issued by `/api/key`.
pub const AUTH_HEADER: &str = "auth_key";

/// Stateless wrapper around the PetFriends REST API.
///
/// Every method performs exactly one request and hands back the raw
/// [`ApiResponse`]. Non-2xx statuses are not errors; only transport
/// failures and unreadable photo files are.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config.base_url.clone())
    }

    /// Create a client with an explicit base URL (for testing)
    pub fn with_base_url(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/key` with the credentials passed as headers.
    pub async fn get_api_key(&self, email: &str, password: &str) -> Result<ApiResponse> {
        let request = self
            .client
            .get(self.url("/api/key"))
            .header("email", email)
            .header("password", password);

        self.send("GET", "/api/key", request).await
    }

    /// `GET /api/pets?filter=...`
    pub async fn get_list_of_pets(
        &self,
        auth_key: &AuthKey,
        filter: PetFilter,
    ) -> Result<ApiResponse> {
        let request = self
            .client
            .get(self.url("/api/pets"))
            .header(AUTH_HEADER, auth_key.key())
            .query(&[("filter", filter.as_str())]);

        self.send("GET", "/api/pets", request).await
    }

    /// `POST /api/pets` as multipart, with the photo read from `photo_path`.
    ///
    /// Field contents are passed through untouched; the service decides
    /// what is acceptable.
    ///
    /// # Errors
    ///
    /// Returns [`PetError::ReadPhoto`] without sending anything if the
    /// photo cannot be read.
    pub async fn add_new_pet(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: impl AsRef<Path>,
    ) -> Result<ApiResponse> {
        let photo = photo_part(photo_path.as_ref()).await?;
        let form = Form::new()
            .text("name", name.to_string())
            .text("animal_type", animal_type.to_string())
            .text("age", age.to_string())
            .part("pet_photo", photo);

        let request = self
            .client
            .post(self.url("/api/pets"))
            .header(AUTH_HEADER, auth_key.key())
            .multipart(form);

        self.send("POST", "/api/pets", request).await
    }

    /// `POST /api/create_pet_simple`, form-encoded, no photo.
    pub async fn add_new_pet_simple(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse> {
        let fields = PetFields {
            name,
            animal_type,
            age,
        };
        let request = self
            .client
            .post(self.url("/api/create_pet_simple"))
            .header(AUTH_HEADER, auth_key.key())
            .form(&fields);

        self.send("POST", "/api/create_pet_simple", request).await
    }

    /// `POST /api/pets/set_photo/{pet_id}` with a single `pet_photo` part.
    pub async fn add_photo_of_pet(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: impl AsRef<Path>,
    ) -> Result<ApiResponse> {
        let photo = photo_part(photo_path.as_ref()).await?;
        let form = Form::new().part("pet_photo", photo);
        let path = format!("/api/pets/set_photo/{}", urlencoding::encode(pet_id));

        let request = self
            .client
            .post(self.url(&path))
            .header(AUTH_HEADER, auth_key.key())
            .multipart(form);

        self.send("POST", &path, request).await
    }

    /// `PUT /api/pets/{pet_id}`, form-encoded.
    pub async fn update_pet_info(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse> {
        let fields = PetFields {
            name,
            animal_type,
            age,
        };
        let path = pet_path(pet_id);

        let request = self
            .client
            .put(self.url(&path))
            .header(AUTH_HEADER, auth_key.key())
            .form(&fields);

        self.send("PUT", &path, request).await
    }

    /// `DELETE /api/pets/{pet_id}`
    pub async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> Result<ApiResponse> {
        let path = pet_path(pet_id);

        let request = self
            .client
            .delete(self.url(&path))
            .header(AUTH_HEADER, auth_key.key());

        self.send("DELETE", &path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, method: &str, path: &str, request: RequestBuilder) -> Result<ApiResponse> {
        tracing::debug!(method, path, "sending request");

        let response = request.send().await.map_err(PetError::Network)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(PetError::Network)?;

        tracing::debug!(method, path, status, bytes = text.len(), "received response");

        Ok(ApiResponse {
            status,
            body: ResponseBody::parse(text),
        })
    }
}

/// Ids are user input and may contain spaces or slashes.
fn pet_path(pet_id: &str) -> String {
    format!("/api/pets/{}", urlencoding::encode(pet_id))
}

async fn photo_part(path: &Path) -> Result<Part, PetError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "cannot read pet photo");
        PetError::ReadPhoto {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("photo")
        .to_string();

    Ok(Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(photo_mime(path))?)
}

fn photo_mime(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

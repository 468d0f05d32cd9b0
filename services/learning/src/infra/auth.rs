use anyhow::Context as _;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::domain::repository::AuthProviderPort;
use crate::error::LearningServiceError;

/// Client for the external identity provider. The provider owns credentials;
/// this service only mirrors the identity id it hands back.
#[derive(Clone)]
pub struct HttpAuthProvider {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

#[derive(Deserialize)]
struct IdentityCreated {
    id: Uuid,
}

impl AuthProviderPort for HttpAuthProvider {
    async fn create_identity(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Uuid, LearningServiceError> {
        let response = self
            .client
            .post(format!("{}/identities", self.base_url))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .context("auth provider: create identity")?;
        match response.status() {
            StatusCode::CONFLICT => Err(LearningServiceError::EmailTaken),
            status if status.is_success() => {
                let body: IdentityCreated = response
                    .json()
                    .await
                    .context("auth provider: decode identity")?;
                Ok(body.id)
            }
            status => Err(anyhow::anyhow!("auth provider returned {status} on create").into()),
        }
    }

    async fn update_password(
        &self,
        user_id: Uuid,
        new_password: &str,
    ) -> Result<(), LearningServiceError> {
        let response = self
            .client
            .patch(format!("{}/identities/{user_id}/password", self.base_url))
            .json(&json!({ "password": new_password }))
            .send()
            .await
            .context("auth provider: update password")?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(LearningServiceError::UserNotFound),
            status if status.is_success() => Ok(()),
            status => {
                Err(anyhow::anyhow!("auth provider returned {status} on password update").into())
            }
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::entities::auth::user::UserRole;

use super::{ApiClient, Envelope};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub clinic_id: String,
}

impl ApiClient {
    /// `POST /auth/login`. On success the session picks up the returned
    /// token and clinic scope; subsequent calls carry both.
    pub async fn login(&self, request: &LoginRequest) -> Envelope<LoginResponse> {
        let envelope: Envelope<LoginResponse> = self.post("/auth/login", request).await;
        if let Some(data) = &envelope.data {
            self.session()
                .sign_in(data.token.as_str(), data.user.clinic_id.as_str());
        }
        envelope
    }

    /// `POST /auth/logout`. Clears the session either way.
    pub async fn logout(&self) -> Envelope<()> {
        let envelope = self.post_empty("/auth/logout").await;
        self.session().clear();
        envelope
    }

    /// `GET /auth/me`
    pub async fn current_user(&self) -> Envelope<UserProfile> {
        self.get("/auth/me").await
    }
}

//! Login and logout

use shared::ValidationError;
use shared::client::{LoginRequest, LoginResponse};
use tokio::task::JoinHandle;

use super::CatalogApi;
use crate::http::HttpClient;
use crate::session::UserSession;
use crate::{ClientResult, presence};

/// Result of a successful login
#[derive(Debug)]
pub struct LoginOutcome {
    pub session: UserSession,
    /// Background `user_online` emit; `None` when the user has no id
    pub presence: Option<JoinHandle<()>>,
}

pub const LOGIN_PATH: &str = "/api/users/auth/login";

impl<H: HttpClient> CatalogApi<H> {
    /// Log in, persist the session and announce presence.
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginOutcome> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email").into());
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField("password").into());
        }

        let req = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp: LoginResponse = self.http.post(LOGIN_PATH, &req).await?;

        let session = self.session.save(&resp.token, &resp.user)?.clone();
        self.http.set_token(Some(resp.token));
        tracing::info!(email = %session.user.email, "Logged in");

        let presence = (!session.user.id.is_empty()).then(|| {
            presence::announce(self.config.base_url.clone(), session.user.id.clone())
        });

        Ok(LoginOutcome { session, presence })
    }

    /// Drop the local session. The backend keeps no logout state.
    pub fn logout(&mut self) -> ClientResult<()> {
        self.http.set_token(None);
        self.session.clear()?;
        tracing::info!("Logged out");
        Ok(())
    }
}

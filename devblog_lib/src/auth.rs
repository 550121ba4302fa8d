//! Session state, role checks, and the account flows the auth pages drive.
//!
//! Session issuance, password hashing, and token validation all live in the
//! external auth provider; this module only shapes its responses and runs
//! the client-side halves of the flows.

use devblog_api::types::{
    ForgetPasswordRequest, LoginRequest, ResetPasswordRequest, Role, SignupRequest, User,
};
use devblog_api::Client;

use crate::error::BlogError;
use crate::validation;

/// Path the emailed reset link redirects to.
pub const RESET_REDIRECT_PATH: &str = "/reset-password";

const MISSING_RESET_TOKEN: &str = "Reset token is missing. Please check your email link.";
const MISSING_VERIFY_TOKEN: &str = "Verification token is missing. Please check your email link.";

/// Resolved session state, as the pages consume it.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub pending: bool,
    pub session_error: Option<String>,
}

impl AuthState {
    /// State while the session lookup is still in flight.
    pub fn loading() -> Self {
        Self {
            pending: true,
            ..Self::default()
        }
    }

    /// State for a visitor with no session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// State for a signed-in user.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            ..Self::default()
        }
    }

    /// State when the session lookup itself failed.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            session_error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.pending
    }

    pub fn has_session_error(&self) -> bool {
        self.session_error.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    /// True when the user's role matches. A user without a role matches
    /// nothing.
    pub fn has_role(&self, role: Role) -> bool {
        self.role() == Some(role)
    }

    /// True when the user's role is any of `roles`.
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.role().is_some_and(|r| roles.contains(&r))
    }

    pub fn is_reader(&self) -> bool {
        self.has_role(Role::Reader)
    }

    /// Admins hold every author capability, so they count as authors here.
    pub fn is_author(&self) -> bool {
        matches!(self.role(), Some(Role::Author | Role::Admin))
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}

/// Resolves the current session from the backend.
pub async fn current_session(client: &Client) -> AuthState {
    match client.me().await {
        Ok(session) => match session.user {
            Some(user) => AuthState::authenticated(user),
            None => AuthState::anonymous(),
        },
        Err(err) => {
            tracing::warn!("session lookup failed: {}", err);
            AuthState::failed(err.message)
        }
    }
}

/// Signs in with email and password, returning the session user.
pub async fn login(client: &Client, email: &str, password: &str) -> Result<User, BlogError> {
    let email = validation::validate_login(email, password)?;
    let resp = client
        .login(&LoginRequest {
            email,
            password: password.to_string(),
        })
        .await?;
    Ok(resp.user)
}

/// Registers a new account, returning the session user.
pub async fn signup(
    client: &Client,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, BlogError> {
    let (name, email) = validation::validate_signup(name, email, password)?;
    let resp = client
        .signup(&SignupRequest {
            name,
            email,
            password: password.to_string(),
        })
        .await?;
    Ok(resp.user)
}

/// Asks the auth provider to email a reset link.
///
/// API failures are not surfaced: the response must not reveal whether the
/// address has an account, so every submitted address gets the same
/// "check your email" outcome. Only invalid input is rejected up front.
pub async fn request_password_reset(client: &Client, email: &str) -> Result<(), BlogError> {
    let email = validation::validate_email(email)?;
    if let Err(err) = client
        .forget_password(&ForgetPasswordRequest {
            email,
            redirect_to: RESET_REDIRECT_PATH.to_string(),
        })
        .await
    {
        tracing::debug!("password reset request suppressed an API error: {}", err);
    }
    Ok(())
}

/// Redeems a reset token for a new password.
pub async fn reset_password(
    client: &Client,
    token: Option<&str>,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), BlogError> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| BlogError::InvalidInput(MISSING_RESET_TOKEN.to_string()))?;
    validation::validate_new_password(new_password, confirm_password)?;
    client
        .reset_password(&ResetPasswordRequest {
            new_password: new_password.to_string(),
            token: token.to_string(),
        })
        .await?;
    Ok(())
}

/// Outcome of redeeming an email-verification token. The page renders all
/// of these, so none of them is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmailVerification {
    Verified,
    Failed { message: String },
}

/// Redeems an email-verification token.
pub async fn verify_email(client: &Client, token: Option<&str>) -> EmailVerification {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return EmailVerification::Failed {
            message: MISSING_VERIFY_TOKEN.to_string(),
        };
    };
    match client.verify_email(token).await {
        Ok(_) => EmailVerification::Verified,
        Err(err) => {
            tracing::warn!("email verification failed: {}", err);
            EmailVerification::Failed {
                message: err.message,
            }
        }
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Sign-in state machine for the messaging client.
//!
//! The flow owns its stage and the pending password. The messaging SDK sits behind
//! [`AuthBackend`]; its authorization updates are fed in through [`AuthFlow::on_update`].

use std::error::Error;
use std::fmt;
use std::future::Future;

/// Where the sign-in currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStage {
    /// Not started, or logged out.
    #[default]
    None,
    WaitPhone,
    WaitCode,
    WaitPassword,
    Ready,
}

impl fmt::Display for AuthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AuthStage::None => "none",
            AuthStage::WaitPhone => "waiting for phone number",
            AuthStage::WaitCode => "waiting for code",
            AuthStage::WaitPassword => "waiting for password",
            AuthStage::Ready => "ready",
        };
        f.write_str(s)
    }
}

/// Authorization state reported by the messaging backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteAuthState {
    WaitPhoneNumber,
    WaitCode,
    WaitPassword,
    Ready,
    LoggingOut,
    Closing,
    Closed,
}

/// Requests the flow sends to the messaging backend.
pub trait AuthBackend: Send {
    /// Error returned by the backend.
    type Error: Error + Send + Sync + 'static;

    fn send_phone(&mut self, phone: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    fn send_code(&mut self, code: &str) -> impl Future<Output = Result<(), Self::Error>> + Send;

    fn send_password(
        &mut self,
        password: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    fn log_out(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Errors raised by [`AuthFlow`].
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Empty or whitespace-only input.
    #[error("The {0} must not be blank")]
    Blank(&'static str),

    /// Input submitted while the flow waits for something else.
    #[error("Cannot accept the {input} while {stage}")]
    UnexpectedStage {
        /// What was submitted
        input: &'static str,
        /// The stage at that moment
        stage: AuthStage,
    },

    /// The backend rejected or failed to deliver a request.
    #[error("Messaging backend error: {0}")]
    Backend(#[source] Box<dyn Error + Send + Sync>),
}

/// Drives the sign-in of one messaging client.
#[derive(Debug)]
pub struct AuthFlow<B> {
    backend: B,
    stage: AuthStage,
    pending_password: Option<String>,
}

impl<B: AuthBackend> AuthFlow<B> {
    pub fn new(backend: B) -> Self {
        AuthFlow {
            backend,
            stage: AuthStage::None,
            pending_password: None,
        }
    }

    pub fn stage(&self) -> AuthStage {
        self.stage
    }

    pub fn is_authorized(&self) -> bool {
        self.stage == AuthStage::Ready
    }

    pub fn has_pending_password(&self) -> bool {
        self.pending_password.is_some()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Applies an authorization update from the backend, returns the new stage.
    ///
    /// Reaching [`RemoteAuthState::WaitPassword`] sends the pending password, if any. It stays
    /// pending when the backend fails to take it.
    pub async fn on_update(&mut self, state: RemoteAuthState) -> Result<AuthStage, AuthError> {
        tracing::debug!(?state, from = %self.stage, "authorization update");
        match state {
            RemoteAuthState::WaitPhoneNumber => self.stage = AuthStage::WaitPhone,
            RemoteAuthState::WaitCode => self.stage = AuthStage::WaitCode,
            RemoteAuthState::WaitPassword => {
                self.stage = AuthStage::WaitPassword;
                if let Some(password) = &self.pending_password {
                    tracing::debug!("sending pending password");
                    self.backend
                        .send_password(password)
                        .await
                        .map_err(backend_error)?;
                    self.pending_password = None;
                }
            }
            RemoteAuthState::Ready => {
                self.stage = AuthStage::Ready;
                self.pending_password = None;
            }
            RemoteAuthState::LoggingOut | RemoteAuthState::Closing => {
                self.stage = AuthStage::None;
            }
            RemoteAuthState::Closed => {
                self.stage = AuthStage::None;
                self.pending_password = None;
            }
        }
        Ok(self.stage)
    }

    /// Sends the phone number. A password given here is kept and sent once the backend asks
    /// for it.
    pub async fn submit_phone(
        &mut self,
        phone: &str,
        password: Option<&str>,
    ) -> Result<(), AuthError> {
        let phone = non_blank(phone, "phone number")?;
        self.expect_stage(AuthStage::WaitPhone, "phone number")?;

        self.pending_password = password
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_owned);
        self.backend.send_phone(phone).await.map_err(backend_error)
    }

    pub async fn submit_code(&mut self, code: &str) -> Result<(), AuthError> {
        let code = non_blank(code, "code")?;
        self.expect_stage(AuthStage::WaitCode, "code")?;
        self.backend.send_code(code).await.map_err(backend_error)
    }

    /// Sends the password while the backend waits for it, keeps it as pending while the phone
    /// number or code is still outstanding.
    pub async fn submit_password(&mut self, password: &str) -> Result<(), AuthError> {
        let password = non_blank(password, "password")?;
        match self.stage {
            AuthStage::WaitPassword => self
                .backend
                .send_password(password)
                .await
                .map_err(backend_error),
            AuthStage::WaitPhone | AuthStage::WaitCode => {
                self.pending_password = Some(password.to_owned());
                Ok(())
            }
            stage => Err(AuthError::UnexpectedStage {
                input: "password",
                stage,
            }),
        }
    }

    /// Asks the backend to log out. The stage changes once the backend reports it.
    pub async fn log_out(&mut self) -> Result<(), AuthError> {
        if self.stage == AuthStage::None {
            return Err(AuthError::UnexpectedStage {
                input: "log out",
                stage: self.stage,
            });
        }
        self.backend.log_out().await.map_err(backend_error)
    }

    fn expect_stage(&self, expected: AuthStage, input: &'static str) -> Result<(), AuthError> {
        if self.stage != expected {
            return Err(AuthError::UnexpectedStage {
                input,
                stage: self.stage,
            });
        }
        Ok(())
    }
}

fn non_blank<'a>(value: &'a str, what: &'static str) -> Result<&'a str, AuthError> {
    match value.trim() {
        "" => Err(AuthError::Blank(what)),
        trimmed => Ok(trimmed),
    }
}

fn backend_error<E: Error + Send + Sync + 'static>(err: E) -> AuthError {
    tracing::warn!(%err, "messaging backend request failed");
    AuthError::Backend(Box::new(err))
}

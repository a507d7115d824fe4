use tracing::{debug, info, warn};

use crate::models::user::UserAccount;
use crate::workflow::Workflow;

pub(crate) const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Session gate: `Unknown → Checking → {Authenticated, Anonymous}`, and
/// `Authenticated → Anonymous` on logout. No other stage is reachable until
/// this reaches `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Unknown,
    Checking,
    Authenticated(Session),
    Anonymous,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserAccount,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserAccount> {
        match self {
            AuthState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }
}

impl Workflow {
    /// Startup session probe. A transport failure here is logged and lands
    /// in `Anonymous`; it is not a user-facing error.
    pub async fn check_session(&mut self) {
        self.state.auth = AuthState::Checking;
        match self.api.check_auth().await {
            Ok(probe) if probe.authenticated => match probe.user {
                Some(user) => {
                    info!(email = %user.email, "session restored");
                    self.state.auth = AuthState::Authenticated(Session { user });
                }
                None => {
                    warn!("authenticated probe carried no user payload");
                    self.state.auth = AuthState::Anonymous;
                }
            },
            Ok(_) => {
                debug!("no active session");
                self.state.auth = AuthState::Anonymous;
            }
            Err(e) => {
                warn!("session check failed: {e}");
                self.state.auth = AuthState::Anonymous;
            }
        }
    }

    /// Credential login. Failures all collapse into one generic notice so
    /// the response never reveals whether the account exists.
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        match self.api.login(email, password).await {
            Ok(user) => {
                info!(email = %user.email, "logged in");
                self.state.epoch += 1;
                self.state.notice.clear();
                self.state.auth = AuthState::Authenticated(Session { user });
                true
            }
            Err(e) => {
                debug!("login rejected: {e}");
                self.state.notice.report(MSG_INVALID_CREDENTIALS);
                false
            }
        }
    }

    /// Hand-off target for the redirect-based provider flow. No local state
    /// changes until the startup probe runs again after the browser returns.
    pub fn provider_login_url(&self) -> String {
        self.api.provider_login_url()
    }

    /// Fail-open logout: the local session is torn down whether or not the
    /// server call succeeds, so the user can never be stuck signed in.
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            warn!("server-side logout failed: {e}");
        }
        self.reset_session();
        info!("logged out");
    }
}

pub mod token_slot;

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::TasklyError;
use crate::models::User;

pub use token_slot::TokenSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Identity not yet resolved; consumers should wait, not redirect.
    Unresolved,
    Anonymous,
    Authenticated,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unresolved => "unresolved",
            Self::Anonymous => "anonymous",
            Self::Authenticated => "authenticated",
        }
    }
}

/// Snapshot of the current session for consumers.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: Option<User>,
    pub status: SessionStatus,
}

/// Single source of truth for "who is logged in".
///
/// Owns the persisted token slot and the in-memory identity; all mutation
/// goes through `resolve_identity`, `login`, `signup`, and `logout`.
/// Invariant: `user` is present iff `status == Authenticated`, and a token is
/// always present whenever a user is.
pub struct SessionStore {
    slot: TokenSlot,
    token: Option<String>,
    user: Option<User>,
    status: SessionStatus,
}

impl SessionStore {
    /// Load the persisted token (if any). Identity stays unresolved until
    /// `resolve_identity` or a credential operation runs.
    pub fn open(config: &Config) -> Result<Self, TasklyError> {
        let slot = TokenSlot::new(config);
        let token = slot.read()?;
        Ok(Self {
            slot,
            token,
            user: None,
            status: SessionStatus::Unresolved,
        })
    }

    /// The persisted credential, for constructing an [`ApiClient`] that stays
    /// consistent with this store.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn current(&self) -> Session {
        Session {
            user: self.user.clone(),
            status: self.status,
        }
    }

    /// Validate the persisted token against the service.
    ///
    /// No token: anonymous immediately, no network call. Token present: look
    /// up the identity; on any failure (network, rejection, malformed body)
    /// the token is discarded and the session becomes anonymous. Fail-closed,
    /// and resolution failures are never surfaced — an expired token is
    /// normal, not an error.
    pub fn resolve_identity(&mut self, api: &ApiClient) -> Result<(), TasklyError> {
        if self.token.is_none() {
            self.status = SessionStatus::Anonymous;
            return Ok(());
        }
        match api.me() {
            Ok(user) => {
                self.user = Some(user);
                self.status = SessionStatus::Authenticated;
            }
            Err(_) => {
                self.slot.clear()?;
                self.token = None;
                self.user = None;
                self.status = SessionStatus::Anonymous;
            }
        }
        Ok(())
    }

    /// On failure the session is left untouched and the error carries the
    /// server's message.
    pub fn login(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
    ) -> Result<User, TasklyError> {
        let resp = api.sign_in(email, password)?;
        self.establish(resp.token, resp.user.clone())?;
        Ok(resp.user)
    }

    /// Same contract as [`login`](Self::login), against the registration
    /// endpoint.
    pub fn signup(
        &mut self,
        api: &ApiClient,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<User, TasklyError> {
        let resp = api.sign_up(email, password, name)?;
        self.establish(resp.token, resp.user.clone())?;
        Ok(resp.user)
    }

    /// Clear the slot and the in-memory identity. Purely local, always
    /// lands on anonymous.
    pub fn logout(&mut self) -> Result<(), TasklyError> {
        self.slot.clear()?;
        self.token = None;
        self.user = None;
        self.status = SessionStatus::Anonymous;
        Ok(())
    }

    fn establish(&mut self, token: String, user: User) -> Result<(), TasklyError> {
        self.slot.write(&token)?;
        self.token = Some(token);
        self.user = Some(user);
        self.status = SessionStatus::Authenticated;
        Ok(())
    }
}

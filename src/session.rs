use std::sync::Arc;

/// Read-only bearer credential handed to the API clients.
///
/// Cloning shares the token. A session without a token is valid; requests
/// then go out unauthenticated and the server answers 401.
#[derive(Clone, Default)]
pub struct Session {
    token: Option<Arc<str>>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        if token.trim().is_empty() {
            return Self::anonymous();
        }
        Self {
            token: Some(Arc::from(token)),
        }
    }

    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn from_token(token: Option<String>) -> Self {
        token.map(Self::new).unwrap_or_default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

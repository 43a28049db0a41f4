use axum::http::{header, HeaderMap};
use core_types::UserProfile;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "skyra_session";

/// What the renderer sees: either an anonymous visitor or a signed-in user.
/// Resolved exactly once per request, then passed around explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Anonymous,
    Authenticated(UserProfile),
}

impl ViewState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, ViewState::Authenticated(_))
    }
}

/// An in-memory token -> profile map.
///
/// This is the demo-grade stand-in for the product's real authentication
/// backend; the web layer only ever talks to it through this interface.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, UserProfile>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new session and returns its token.
    pub fn create(&self, profile: UserProfile) -> Uuid {
        let token = Uuid::new_v4();
        self.inner
            .write()
            .expect("session store lock poisoned")
            .insert(token, profile);
        token
    }

    pub fn get(&self, token: &Uuid) -> Option<UserProfile> {
        self.inner
            .read()
            .expect("session store lock poisoned")
            .get(token)
            .cloned()
    }

    /// Removes a session. Returns whether the token was known.
    pub fn remove(&self, token: &Uuid) -> bool {
        self.inner
            .write()
            .expect("session store lock poisoned")
            .remove(token)
            .is_some()
    }

    /// Resolves the view state for a request.
    ///
    /// A missing, malformed, or unknown session cookie is an anonymous
    /// visitor, never an error.
    pub fn resolve(&self, headers: &HeaderMap) -> ViewState {
        match session_token(headers).and_then(|token| self.get(&token)) {
            Some(profile) => ViewState::Authenticated(profile),
            None => ViewState::Anonymous,
        }
    }
}

/// Extracts the session token from the request's `Cookie` headers, if any.
pub fn session_token(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, token)| Uuid::parse_str(token).ok())
}

/// The built-in profile the demo sign-in endpoint issues sessions for.
pub fn demo_profile() -> UserProfile {
    UserProfile {
        id: Uuid::new_v4(),
        full_name: "Maya Chen".to_string(),
        email: "maya.chen@example.com".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn create_then_get_roundtrips() {
        let store = SessionStore::new();
        let token = store.create(demo_profile());
        assert_eq!(store.get(&token).unwrap().full_name, "Maya Chen");
    }

    #[test]
    fn remove_forgets_the_token() {
        let store = SessionStore::new();
        let token = store.create(demo_profile());
        assert!(store.remove(&token));
        assert!(!store.remove(&token));
        assert!(store.get(&token).is_none());
    }

    #[test]
    fn known_cookie_resolves_authenticated() {
        let store = SessionStore::new();
        let token = store.create(demo_profile());
        let headers = headers_with_cookie(&format!("theme=light; {SESSION_COOKIE}={token}"));
        assert!(store.resolve(&headers).is_authenticated());
    }

    #[test]
    fn unknown_or_garbled_cookie_resolves_anonymous() {
        let store = SessionStore::new();
        let stranger = headers_with_cookie(&format!("{SESSION_COOKIE}={}", Uuid::new_v4()));
        assert_eq!(store.resolve(&stranger), ViewState::Anonymous);

        let garbled = headers_with_cookie(&format!("{SESSION_COOKIE}=not-a-token"));
        assert_eq!(store.resolve(&garbled), ViewState::Anonymous);

        assert_eq!(store.resolve(&HeaderMap::new()), ViewState::Anonymous);
    }
}

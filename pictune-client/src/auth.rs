//! Shared bearer token handle
//!
//! The store writes the token on sign-in and clears it on sign-out; the HTTP
//! client reads it per request. Credentials stay out of the store's state
//! machine entirely.

use std::sync::{Arc, Mutex};

/// Cloneable handle to the current session token.
#[derive(Debug, Clone, Default)]
pub struct AuthToken {
    inner: Arc<Mutex<Option<String>>>,
}

impl AuthToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, token: String) {
        *self.inner.lock().expect("token lock poisoned") = Some(token);
    }

    pub fn clear(&self) {
        *self.inner.lock().expect("token lock poisoned") = None;
    }

    pub fn get(&self) -> Option<String> {
        self.inner.lock().expect("token lock poisoned").clone()
    }

    pub fn is_set(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let token = AuthToken::new();
        assert!(!token.is_set());

        token.set("abc123".to_string());
        assert_eq!(token.get().as_deref(), Some("abc123"));

        // Clones share the same slot
        let clone = token.clone();
        clone.clear();
        assert!(!token.is_set());
    }
}

//! Session persistence in browser storage. The token written here gates the
//! dashboard and is attached to every authenticated request.

use shared::{Session, User};
use web_sys::Storage;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

fn storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist a fresh session after login.
pub fn save(token: &str, user: &User) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }
}

/// The stored bearer token, if any. An empty string reads as signed out.
pub fn token() -> Option<String> {
    let token = storage()?.get_item(TOKEN_KEY).ok()??;
    if token.is_empty() {
        None
    } else {
        Some(token)
    }
}

/// The stored user profile, if any.
pub fn user() -> Option<User> {
    let raw = storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Token plus profile, when both are present.
pub fn load() -> Option<Session> {
    Some(Session {
        token: token()?,
        user: user()?,
    })
}

/// Drop the session. The next dashboard mount redirects to login.
pub fn clear() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn save_load_clear_round_trip() {
        clear();
        assert!(load().is_none());

        let user = User {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        save("token-123", &user);

        let session = load().expect("session should be stored");
        assert_eq!(session.token, "token-123");
        assert_eq!(session.user.name, "Ada");

        // Logging out clears everything, so the next mount redirects to
        // login.
        clear();
        assert!(token().is_none());
        assert!(load().is_none());
    }

    #[wasm_bindgen_test]
    fn empty_token_reads_as_signed_out() {
        clear();
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, "");
        }
        assert!(token().is_none());
    }
}

//! Auth feature reducer: login submission, result handling, logout.

use crossterm::event::{KeyCode, KeyEvent};
use folio_core::api::types::Identity;

use crate::effects::UiEffect;
use crate::features::auth::state::{AuthState, LoginFormState};

/// Handles a key on the login page. Returns effects to execute.
pub fn handle_key(auth: &mut AuthState, form: &mut LoginFormState, key: KeyEvent) -> Vec<UiEffect> {
    // While a login is in flight the form is read-only.
    if matches!(auth, AuthState::Authenticating) {
        return vec![];
    }
    match key.code {
        KeyCode::Enter => submit(auth, form).into_iter().collect(),
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
            form.toggle_focus();
            vec![]
        }
        _ => {
            form.focused_field().handle_key(key);
            vec![]
        }
    }
}

/// Validates the form and starts a login. Empty fields are rejected inline
/// before any network call.
pub fn submit(auth: &mut AuthState, form: &LoginFormState) -> Option<UiEffect> {
    if form.email.is_empty() || form.password.is_empty() {
        *auth = AuthState::Error("Email and password are required".to_string());
        return None;
    }
    *auth = AuthState::Authenticating;
    Some(UiEffect::Login {
        email: form.email.value().trim().to_string(),
        password: form.password.value().to_string(),
    })
}

/// Applies a login result. On failure the password field is cleared and the
/// message lands in the session state for the page to render.
pub fn handle_login_result(
    auth: &mut AuthState,
    form: &mut LoginFormState,
    result: Result<Identity, String>,
) {
    match result {
        Ok(identity) => {
            *auth = AuthState::Authenticated(identity);
            form.email.clear();
            form.password.clear();
        }
        Err(message) => {
            *auth = AuthState::Error(message);
            form.password.clear();
        }
    }
}

/// Logs out locally and notifies the backend best-effort. The local
/// transition does not wait for the backend acknowledgment.
pub fn logout(auth: &mut AuthState) -> Vec<UiEffect> {
    *auth = AuthState::Anonymous;
    vec![UiEffect::NotifyLogout]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;

    fn type_into(form: &mut LoginFormState, text: &str) {
        for ch in text.chars() {
            form.focused_field()
                .handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
    }

    fn filled_form() -> LoginFormState {
        let mut form = LoginFormState::new();
        type_into(&mut form, "a@b.com");
        form.toggle_focus();
        type_into(&mut form, "hunter2");
        form
    }

    #[test]
    fn submit_requires_both_fields() {
        let mut auth = AuthState::Anonymous;
        let mut form = LoginFormState::new();
        type_into(&mut form, "a@b.com");

        assert!(submit(&mut auth, &form).is_none());
        assert_eq!(
            auth.error(),
            Some("Email and password are required"),
            "validation failures surface inline"
        );
    }

    #[test]
    fn submit_transitions_to_authenticating() {
        let mut auth = AuthState::Anonymous;
        let form = filled_form();

        let effect = submit(&mut auth, &form).unwrap();
        assert_eq!(auth, AuthState::Authenticating);
        assert!(matches!(
            effect,
            UiEffect::Login { email, .. } if email == "a@b.com"
        ));
    }

    #[test]
    fn failed_login_reverts_and_clears_password() {
        let mut auth = AuthState::Authenticating;
        let mut form = filled_form();

        handle_login_result(
            &mut auth,
            &mut form,
            Err("Invalid email or password".to_string()),
        );

        assert!(!auth.is_authenticated());
        assert_eq!(auth.error(), Some("Invalid email or password"));
        assert!(form.password.is_empty());
        // The email field survives so the user can retry the password alone.
        assert_eq!(form.email.value(), "a@b.com");
    }

    #[test]
    fn successful_login_holds_the_identity() {
        let mut auth = AuthState::Authenticating;
        let mut form = filled_form();
        let identity = Identity {
            id: 7,
            email: "a@b.com".to_string(),
        };

        handle_login_result(&mut auth, &mut form, Ok(identity.clone()));

        assert_eq!(auth.identity(), Some(&identity));
        assert!(form.password.is_empty());
    }

    #[test]
    fn logout_is_local_first() {
        let mut auth = AuthState::Authenticated(Identity {
            id: 7,
            email: "a@b.com".to_string(),
        });
        let effects = logout(&mut auth);
        assert_eq!(auth, AuthState::Anonymous);
        assert!(matches!(effects.as_slice(), [UiEffect::NotifyLogout]));
    }

    #[test]
    fn keys_are_ignored_while_authenticating() {
        let mut auth = AuthState::Authenticating;
        let mut form = filled_form();
        let effects = handle_key(
            &mut auth,
            &mut form,
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
        );
        assert!(effects.is_empty());
        assert_eq!(form.email.value(), "a@b.com");
    }
}

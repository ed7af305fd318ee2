//! Auth session state.

use folio_core::api::types::Identity;

use crate::common::TextField;

/// The session state machine.
///
/// `Error` is anonymous-with-a-message: gating treats it exactly like
/// `Anonymous`, and the login page renders the message inline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticating,
    Authenticated(Identity),
    Error(String),
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Which login field owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// The login form. Owned by the page, not by the session machine.
#[derive(Debug, Clone, Default)]
pub struct LoginFormState {
    pub email: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: TextField::new(),
            password: TextField::masked(),
            focus: LoginField::Email,
        }
    }

    pub fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        };
    }
}

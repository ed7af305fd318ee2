//! Theme feature reducer: palette activation and persistence effects.

use folio_core::session::theme as theme_session;
use folio_core::theme::ThemeColors;

use crate::effects::UiEffect;
use crate::features::auth::AuthState;
use crate::features::theme::state::ThemeState;

/// Activates a predefined palette by id.
///
/// Unknown ids are a no-op: nothing changes, nothing is persisted. A known
/// id is applied, written to local prefs immediately, and pushed to the
/// backend best-effort when a session exists.
pub fn choose_palette(theme: &mut ThemeState, auth: &AuthState, id: &str) -> Vec<UiEffect> {
    let Some(selection) = theme_session::select(id) else {
        return vec![];
    };
    theme.apply(selection);
    let mut effects = vec![UiEffect::PersistTheme { id: id.to_string() }];
    if auth.is_authenticated() {
        effects.push(UiEffect::SyncThemePreference);
    }
    effects
}

/// Activates an ad-hoc palette from user-supplied colors.
pub fn choose_custom(theme: &mut ThemeState, auth: &AuthState, colors: ThemeColors) -> Vec<UiEffect> {
    theme.apply(theme_session::select_custom(colors.clone()));
    let mut effects = vec![UiEffect::PersistCustomTheme { colors }];
    if auth.is_authenticated() {
        effects.push(UiEffect::SyncThemePreference);
    }
    effects
}

#[cfg(test)]
mod tests {
    use folio_core::api::types::Identity;
    use folio_core::session::theme::Provenance;
    use folio_core::theme::CUSTOM_PALETTE_ID;

    use super::*;

    fn authenticated() -> AuthState {
        AuthState::Authenticated(Identity {
            id: 7,
            email: "laura@example.com".to_string(),
        })
    }

    #[test]
    fn known_id_applies_and_persists() {
        let mut theme = ThemeState::new();
        let effects = choose_palette(&mut theme, &AuthState::Anonymous, "ocean");

        assert_eq!(theme.selection.palette.id, "ocean");
        assert_eq!(
            effects,
            vec![UiEffect::PersistTheme {
                id: "ocean".to_string()
            }]
        );
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut theme = ThemeState::new();
        let before = theme.selection.clone();

        let effects = choose_palette(&mut theme, &AuthState::Anonymous, "neon");

        assert!(effects.is_empty());
        assert_eq!(theme.selection, before);
    }

    #[test]
    fn authenticated_selection_also_syncs_backend() {
        let mut theme = ThemeState::new();
        let effects = choose_palette(&mut theme, &authenticated(), "forest");

        assert_eq!(
            effects,
            vec![
                UiEffect::PersistTheme {
                    id: "forest".to_string()
                },
                UiEffect::SyncThemePreference,
            ]
        );
    }

    #[test]
    fn custom_colors_use_the_reserved_id() {
        let mut theme = ThemeState::new();
        let colors = ThemeColors {
            accent_color: "#123456".to_string(),
            background_color: "#ffffff".to_string(),
            dark_text_color: "#000000".to_string(),
            light_text_color: "#ffffff".to_string(),
        };

        let effects = choose_custom(&mut theme, &authenticated(), colors.clone());

        assert_eq!(theme.selection.palette.id, CUSTOM_PALETTE_ID);
        assert_eq!(theme.selection.provenance, Provenance::Custom);
        assert_eq!(
            effects,
            vec![
                UiEffect::PersistCustomTheme { colors },
                UiEffect::SyncThemePreference,
            ]
        );
    }
}

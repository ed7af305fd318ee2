//! Theme selection: startup resolution, activation, and backend sync.

use crate::api::types::{Identity, ThemePreference};
use crate::api::ApiClient;
use crate::prefs::PrefsStore;
use crate::theme::{self, Palette, ThemeColors, CUSTOM_PALETTE_ID};

/// Where the active palette came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Default,
    LocalPreference,
    BackendPreference,
    Custom,
}

/// The active palette plus its provenance. Lives for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSelection {
    pub palette: Palette,
    pub provenance: Provenance,
}

impl ThemeSelection {
    pub fn default_selection() -> Self {
        Self {
            palette: theme::default_palette().clone(),
            provenance: Provenance::Default,
        }
    }
}

/// Resolves the palette to activate at session start.
///
/// Resolution order: a locally persisted palette id wins; otherwise, with an
/// identity present, the server-stored preference is fetched (and, when it
/// names a known palette, written back to local prefs); otherwise the default
/// palette. Never fails outward — every miss degrades to the next step.
pub async fn resolve_initial(
    api: &ApiClient,
    prefs: &PrefsStore,
    identity: Option<&Identity>,
) -> ThemeSelection {
    if let Some(id) = prefs.preferred_theme_id() {
        if let Some(palette) = theme::find_palette(&id) {
            return ThemeSelection {
                palette: palette.clone(),
                provenance: Provenance::LocalPreference,
            };
        }
        tracing::debug!(theme_id = %id, "ignoring unknown locally persisted palette id");
    }

    if let Some(identity) = identity {
        match api.theme_preference(identity.id).await {
            Ok(Some(pref)) => {
                if let Some(palette) = theme::find_palette(&pref.theme_id) {
                    if let Err(err) = prefs.save_theme_id(&pref.theme_id) {
                        tracing::warn!("failed to persist backend theme preference: {err:#}");
                    }
                    return ThemeSelection {
                        palette: palette.clone(),
                        provenance: Provenance::BackendPreference,
                    };
                }
                if pref.theme_id == CUSTOM_PALETTE_ID {
                    if let Some(colors) = pref.custom_colors {
                        return ThemeSelection {
                            palette: Palette::custom(colors),
                            provenance: Provenance::BackendPreference,
                        };
                    }
                }
                tracing::debug!(
                    theme_id = %pref.theme_id,
                    "backend theme preference names an unknown palette"
                );
            }
            // An absent preference and a failed fetch both degrade to the
            // default palette; they are logged apart so the distinction stays
            // observable.
            Ok(None) => tracing::debug!("no backend theme preference stored"),
            Err(err) => tracing::debug!("theme preference fetch failed: {err:#}"),
        }
    }

    ThemeSelection::default_selection()
}

/// Validates and activates a predefined palette by id.
///
/// Unknown or malformed ids resolve to `None`; callers treat that as a no-op.
pub fn select(id: &str) -> Option<ThemeSelection> {
    theme::find_palette(id).map(|palette| ThemeSelection {
        palette: palette.clone(),
        provenance: Provenance::LocalPreference,
    })
}

/// Activates an ad-hoc palette built from user-supplied colors.
pub fn select_custom(colors: ThemeColors) -> ThemeSelection {
    ThemeSelection {
        palette: Palette::custom(colors),
        provenance: Provenance::Custom,
    }
}

/// Pushes the active selection to the backend, best-effort.
///
/// Failure is logged and swallowed; the local selection stands regardless.
pub async fn push_preference(api: &ApiClient, identity: &Identity, selection: &ThemeSelection) {
    let custom_colors = (selection.palette.id == CUSTOM_PALETTE_ID)
        .then(|| selection.palette.colors.clone());
    let preference = ThemePreference {
        theme_id: selection.palette.id.clone(),
        custom_colors,
    };
    if let Err(err) = api.save_theme_preference(identity.id, &preference).await {
        tracing::warn!("failed to save theme preference: {err:#}");
    }
}

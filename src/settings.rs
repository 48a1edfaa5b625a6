//! Game settings and preferences
//!
//! Display options only; match state is never persisted.

use serde::{Deserialize, Serialize};

/// Colors used by the canvas renderer, as CSS color strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub net: String,
    pub ball: String,
    pub player: String,
    pub computer: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#222".into(),
            net: "#fff".into(),
            ball: "#fff".into(),
            player: "#4CAF50".into(),
            computer: "#F44336".into(),
        }
    }
}

impl Theme {
    /// High-contrast variant: white court elements on pure black
    pub fn high_contrast() -> Self {
        Self {
            background: "#000".into(),
            net: "#fff".into(),
            ball: "#fff".into(),
            player: "#fff".into(),
            computer: "#fff".into(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Show the FPS counter in the HUD
    pub show_fps: bool,
    /// High contrast mode (overrides the theme colors)
    pub high_contrast: bool,
    /// Court colors
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: false,
            high_contrast: false,
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Colors to actually draw with
    pub fn effective_theme(&self) -> Theme {
        if self.high_contrast {
            Theme::high_contrast()
        } else {
            self.theme.clone()
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "net_pong_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

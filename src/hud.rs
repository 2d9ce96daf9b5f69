//! Heads-up display: score, lives, cargo, and delivery progress
//!
//! The HUD lives outside the canvas (DOM elements in the browser), so the
//! session pushes a [`HudSnapshot`] to a [`DisplaySink`] whenever gameplay
//! changes something it shows.

use crate::sim::GameState;

/// Text for every HUD field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: String,
    pub lives: String,
    pub cargo: &'static str,
    /// "current / target"
    pub deliveries: String,
}

impl HudSnapshot {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score.to_string(),
            lives: state.lives.to_string(),
            cargo: if state.has_cargo { "Package" } else { "None" },
            deliveries: format!("{} / {}", state.deliveries, state.tuning.delivery_target),
        }
    }
}

/// Where HUD text ends up
pub trait DisplaySink {
    fn show_hud(&mut self, hud: &HudSnapshot);
    fn show_mute_label(&mut self, label: &str);
}

/// Writes HUD changes to the log (headless runs)
#[derive(Debug, Default)]
pub struct LogDisplay {
    last: Option<HudSnapshot>,
}

impl LogDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn last(&self) -> Option<&HudSnapshot> {
        self.last.as_ref()
    }
}

impl DisplaySink for LogDisplay {
    fn show_hud(&mut self, hud: &HudSnapshot) {
        if self.last.as_ref() == Some(hud) {
            return;
        }
        log::info!(
            "HUD score={} lives={} cargo={} deliveries={}",
            hud.score,
            hud.lives,
            hud.cargo,
            hud.deliveries
        );
        self.last = Some(hud.clone());
    }

    fn show_mute_label(&mut self, label: &str) {
        log::info!("{}", label);
    }
}

/// DOM-backed HUD (`#score`, `#lives`, `#cargo`, `#deliveries`, `#muteBtn`)
#[cfg(target_arch = "wasm32")]
pub struct DomDisplay {
    document: web_sys::Document,
}

#[cfg(target_arch = "wasm32")]
impl DomDisplay {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl DisplaySink for DomDisplay {
    fn show_hud(&mut self, hud: &HudSnapshot) {
        self.set_text("score", &hud.score);
        self.set_text("lives", &hud.lives);
        self.set_text("cargo", hud.cargo);
        self.set_text("deliveries", &hud.deliveries);
    }

    fn show_mute_label(&mut self, label: &str) {
        self.set_text("muteBtn", label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_snapshot_fresh_run() {
        let state = GameState::new(1, Tuning::default(), 0.0);
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.score, "0");
        assert_eq!(hud.lives, "3");
        assert_eq!(hud.cargo, "None");
        assert_eq!(hud.deliveries, "0 / 5");
    }

    #[test]
    fn test_snapshot_mid_run() {
        let mut state = GameState::new(1, Tuning::default(), 0.0);
        state.score = 545;
        state.lives = 1;
        state.has_cargo = true;
        state.deliveries = 2;
        let hud = HudSnapshot::from_state(&state);
        assert_eq!(hud.score, "545");
        assert_eq!(hud.lives, "1");
        assert_eq!(hud.cargo, "Package");
        assert_eq!(hud.deliveries, "2 / 5");
    }

    #[test]
    fn test_log_display_tracks_last() {
        let state = GameState::new(1, Tuning::default(), 0.0);
        let mut display = LogDisplay::new();
        assert!(display.last().is_none());
        display.show_hud(&HudSnapshot::from_state(&state));
        assert_eq!(display.last().map(|h| h.lives.as_str()), Some("3"));
    }
}

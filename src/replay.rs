//! Headless-Replay aufgezeichneter Intents.
//!
//! Ein Skript beschreibt eine Sitzung: Element der ersten Element-Simulation
//! und die Intents in Eingabereihenfolge.

use crate::app::{AppController, AppIntent, AppState};
use crate::shared::{CurveScene, EditorOptions};
use potku_recoil_engine::Element;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Aufgezeichnete Sitzung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Element der Start-Simulation
    #[serde(default = "default_element")]
    pub element: Element,
    /// Intents in Eingabereihenfolge
    #[serde(default)]
    pub intents: Vec<AppIntent>,
}

fn default_element() -> Element {
    Element::new("H", Some(1))
}

impl ReplayScript {
    /// Parst ein Skript aus JSON.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Lädt ein Skript aus einer JSON-Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Spielt das Skript in einer neuen Sitzung ab.
    pub fn run(&self, options: EditorOptions) -> anyhow::Result<AppState> {
        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();
        controller.handle_intent(
            &mut state,
            AppIntent::ElementSimulationAddRequested {
                element: self.element.clone(),
            },
        )?;
        for intent in &self.intents {
            controller.handle_intent(&mut state, intent.clone())?;
        }
        log::info!(
            "Replay beendet: {} Intents, {} Commands",
            self.intents.len(),
            state.command_log.len()
        );
        Ok(state)
    }

    /// Spielt das Skript ab und liefert die resultierende Szene.
    pub fn run_to_scene(&self, options: EditorOptions) -> anyhow::Result<CurveScene> {
        let state = self.run(options)?;
        Ok(AppController::new().build_curve_scene(&state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_defaults_to_hydrogen() {
        let script = ReplayScript::from_json(r#"{"intents": []}"#).expect("gültiges Skript");
        assert_eq!(script.element, Element::new("H", Some(1)));
    }

    #[test]
    fn replay_adds_point_on_default_line() {
        let script = ReplayScript::from_json(
            r#"{
                "element": {"symbol": "He", "isotope": 4},
                "intents": [
                    {"type": "PointAddRequested", "position": [10.0, 1.0]},
                    {"type": "PointerReleased"}
                ]
            }"#,
        )
        .expect("gültiges Skript");

        let scene = script
            .run_to_scene(EditorOptions::default())
            .expect("Replay ok");

        assert!(scene.xs.contains(&10.0));
        assert_eq!(scene.selected_xs, vec![10.0]);
        assert!(!scene.dragging);
    }

    #[test]
    fn malformed_script_is_an_error() {
        assert!(ReplayScript::from_json("{\"intents\": 5}").is_err());
    }
}

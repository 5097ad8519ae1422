//! Handler für Element-Simulationen, Rückstoß-Elemente und Probenaufbau.

use super::report;
use crate::app::use_cases;
use crate::app::AppState;
use potku_recoil_engine::{Element, RecoilInfo, RecoilKey, Target};

/// Legt eine Element-Simulation an.
pub fn add_element_simulation(state: &mut AppState, element: Element) {
    use_cases::elements::add_element_simulation(state, element);
}

/// Entfernt eine Element-Simulation.
pub fn remove_element_simulation(state: &mut AppState, simulation_id: u64) {
    let result = use_cases::elements::remove_element_simulation(state, simulation_id);
    report(state, "Element-Simulation entfernen", result);
}

/// Legt ein weiteres Rückstoß-Element an.
pub fn add_recoil_element(state: &mut AppState, simulation_id: u64) {
    let result = use_cases::elements::add_recoil_element(state, simulation_id);
    report(state, "Rückstoß-Element anlegen", result);
}

/// Entfernt ein weiteres Rückstoß-Element.
pub fn remove_recoil_element(state: &mut AppState, key: RecoilKey) {
    let result = use_cases::elements::remove_recoil_element(state, key);
    report(state, "Rückstoß-Element entfernen", result);
}

/// Wechselt das aktive Rückstoß-Element.
pub fn choose_recoil(state: &mut AppState, key: RecoilKey) {
    let result = use_cases::elements::choose_recoil(state, key);
    report(state, "Rückstoß-Element wählen", result);
}

/// Setzt oder löst die Bearbeitungssperre.
pub fn set_edit_lock(state: &mut AppState, locked: bool) {
    let result = use_cases::elements::set_edit_lock(state, locked);
    report(state, "Bearbeitungssperre", result);
}

/// Übernimmt die Info-Felder.
pub fn update_recoil_info(state: &mut AppState, info: RecoilInfo) {
    let result = use_cases::elements::update_recoil_info(state, info);
    report(state, "Info aktualisieren", result);
}

/// Setzt den Probenaufbau.
pub fn set_target(state: &mut AppState, target: Target) {
    use_cases::elements::set_target(state, target);
}

/// Übernimmt fehlende Elemente aus dem Probenaufbau.
pub fn export_target_elements(state: &mut AppState) {
    use_cases::elements::export_target_elements(state);
}

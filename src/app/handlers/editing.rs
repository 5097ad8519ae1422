//! Handler für Punkt-Bearbeitung.

use super::report;
use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;
use potku_recoil_engine::Axis;

/// Fügt einen Punkt auf der Linie ein.
pub fn add_point(state: &mut AppState, position: DVec2) {
    let result = use_cases::editing::add_point_on_line(state, position);
    report(state, "Punkt einfügen", result);
}

/// Entfernt die selektierten Punkte.
pub fn remove_selected(state: &mut AppState) {
    let result = use_cases::editing::remove_selected_points(state);
    report(state, "Punkte entfernen", result);
}

/// Übernimmt eine numerische Koordinaten-Eingabe.
pub fn set_coordinate(state: &mut AppState, axis: Axis, value: f64) {
    let result = use_cases::editing::set_coordinate(state, axis, value);
    report(state, "Koordinaten-Eingabe", result);
}

/// Merkt sich den gemeldeten Zwischenablage-Text.
pub fn set_clipboard_text(state: &mut AppState, text: String) {
    state.ui.clipboard_text = Some(text);
}

/// Multipliziert eine Koordinate mit dem Zwischenablage-Wert.
pub fn multiply(state: &mut AppState, axis: Axis) {
    let result = use_cases::editing::multiply_coordinate(state, axis);
    report(state, "Multiplikation", result);
}

/// Nimmt die letzte Multiplikation zurück.
pub fn undo_coordinate(state: &mut AppState, axis: Axis) {
    let result = use_cases::editing::undo_coordinate(state, axis);
    report(state, "Multiplikations-Undo", result);
}

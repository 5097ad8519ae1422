//! Handler für Selektions-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::{AppState, SelectionState};

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, old_selection: SelectionState) {
    if old_selection.selected_point_ids != state.selection.selected_point_ids {
        let snap = Snapshot {
            simulation: state.simulation.clone(),
            active_recoil: state.active_recoil,
            selection: old_selection,
        };
        state.history.record_snapshot(snap);
    }
}

/// Ersetzt die Selektion durch alle Punkte im x-Bereich.
pub fn select_in_span(state: &mut AppState, xmin: f64, xmax: f64) {
    let old = state.selection.clone();
    use_cases::selection::select_points_in_span(state, xmin, xmax);
    record_if_selection_changed(state, old);
}

/// Wählt einen angeklickten Punkt an (Teil der Klick-Drag-Geste, ohne eigenen Snapshot).
pub fn select_point(state: &mut AppState, point_id: u64) {
    use_cases::selection::select_point(state, point_id);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::clear_selection(state);
    record_if_selection_changed(state, old);
}

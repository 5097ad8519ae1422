//! Handler für den Drag-Lifecycle.

use crate::app::use_cases;
use crate::app::AppState;
use glam::DVec2;

/// Startet den Drag der Selektion (nimmt Undo-Snapshot auf).
pub fn begin(state: &mut AppState, pointer: DVec2) {
    use_cases::drag::begin_drag(state, pointer);
}

/// Aktualisiert die laufende Drag-Sitzung.
pub fn update(state: &mut AppState, pointer: DVec2) {
    use_cases::drag::update_drag(state, pointer);
}

/// Beendet die laufende Drag-Sitzung.
pub fn end(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}

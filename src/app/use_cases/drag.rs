//! Use-Case: Drag-Lifecycle der selektierten Punkte.
//!
//! Start beim Klick, Updates bei Zeigerbewegung, Ende beim Loslassen.
//! Der Undo-Snapshot entsteht beim Start, landet aber erst mit der ersten
//! Bewegung in der History. Ein Klick ohne Bewegung erzeugt keinen Undo-Schritt.

use crate::app::history::Snapshot;
use crate::app::AppState;
use glam::DVec2;
use potku_recoil_engine::DragSession;

/// Startet eine Drag-Sitzung für die aktuelle Selektion.
///
/// Gibt `true` zurück, wenn eine Sitzung läuft.
pub fn begin_drag(state: &mut AppState, pointer: DVec2) -> bool {
    let ids = state.selected_in_curve_order();
    if ids.is_empty() {
        log::debug!("Drag-Start ohne Selektion ignoriert");
        return false;
    }
    let limits = state.limits();
    let edit_lock = state.edit_lock();
    let Some(curve) = state.active_curve() else {
        return false;
    };
    let Some(session) = DragSession::begin(curve, &ids, pointer, &limits, edit_lock) else {
        return false;
    };

    state.drag_undo = Some(Snapshot::from_state(state));
    state.drag = Some(session);
    log::debug!("Drag gestartet für {} Punkte", ids.len());
    true
}

/// Wendet eine neue Zeigerposition auf die laufende Sitzung an.
pub fn update_drag(state: &mut AppState, pointer: DVec2) {
    let Some(session) = state.drag.take() else {
        return;
    };
    if pointer != session.pointer_origin() {
        if let Some(snap) = state.drag_undo.take() {
            state.history.record_snapshot(snap);
        }
    }
    let limits = state.limits();
    if let Some(recoil) = state.active_recoil_mut() {
        session.update(&mut recoil.curve, pointer, &limits);
    }
    state.drag = Some(session);
}

/// Beendet die laufende Sitzung.
pub fn end_drag(state: &mut AppState) {
    state.drag_undo = None;
    if state.drag.take().is_some() {
        log::debug!("Drag beendet");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use potku_recoil_engine::{Element, RecoilCurve};
    use std::sync::Arc;

    fn state_with(coords: &[[f64; 2]]) -> AppState {
        let mut state = AppState::new();
        let curve = RecoilCurve::from_coordinates(coords).expect("gültige Kurve");
        let key = Arc::make_mut(&mut state.simulation)
            .add_element_simulation_with_curve(Element::new("H", None), curve);
        state.active_recoil = Some(key);
        state
    }

    fn point_id(state: &AppState, index: usize) -> u64 {
        state
            .active_curve()
            .and_then(|c| c.point_at(index))
            .expect("Punkt vorhanden")
            .id
    }

    #[test]
    fn drag_without_selection_does_not_start() {
        let mut state = state_with(&[[0.0, 1.0], [35.0, 1.0]]);
        assert!(!begin_drag(&mut state, DVec2::ZERO));
        assert!(state.drag.is_none());
        assert!(!state.can_undo());
    }

    #[test]
    fn drag_moves_group_and_records_single_snapshot() {
        let mut state = state_with(&[[0.0, 1.0], [10.0, 0.5], [20.0, 0.5], [35.0, 1.0]]);
        state.selection.replace([point_id(&state, 1), point_id(&state, 2)]);

        assert!(begin_drag(&mut state, DVec2::new(10.0, 0.5)));
        update_drag(&mut state, DVec2::new(12.0, 0.6));
        update_drag(&mut state, DVec2::new(30.0, 0.6));
        end_drag(&mut state);

        let xs = state.active_curve().expect("Kurve").xs();
        assert_relative_eq!(xs[2], 34.99, epsilon = 1e-9);
        assert_relative_eq!(xs[1], 24.99, epsilon = 1e-9);
        assert!(state.drag.is_none());
        assert!(state.can_undo());

        state.history.pop_undo_with_current(Snapshot::from_state(&state));
        assert!(!state.can_undo());
    }

    #[test]
    fn click_without_movement_leaves_no_undo_step() {
        let mut state = state_with(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]]);
        state.selection.replace([point_id(&state, 1)]);

        assert!(begin_drag(&mut state, DVec2::new(10.0, 0.5)));
        update_drag(&mut state, DVec2::new(10.0, 0.5));
        end_drag(&mut state);

        assert!(!state.can_undo());
        assert!(state.drag_undo.is_none());
    }
}

//! Builder für Kurven-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{CurveScene, RecoilEntry};
use potku_recoil_engine::{Axis, CurvePoint, RecoilKey};

/// Baut eine CurveScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> CurveScene {
    let mut scene = CurveScene {
        active_recoil: state.active_recoil,
        edit_lock: state.edit_lock(),
        dragging: state.drag.is_some(),
        can_undo: state.can_undo(),
        can_redo: state.can_redo(),
        can_remove_element_simulation: state
            .active_recoil
            .is_some_and(|key| state.simulation.is_main_recoil(key)),
        recoils: recoil_entries(state),
        last_error: state.ui.last_error.clone(),
        ..CurveScene::default()
    };

    let Some(recoil) = state.active_recoil() else {
        return scene;
    };
    let curve = &recoil.curve;
    scene.recoil_name = Some(recoil.name.clone());
    scene.recoil_info = Some(recoil.info());
    scene.xs = curve.xs();
    scene.ys = curve.ys();

    let selected: Vec<&CurvePoint> = state
        .selected_in_curve_order()
        .into_iter()
        .filter_map(|id| curve.point(id))
        .collect();
    scene.selected_point_ids = selected.iter().map(|p| p.id).collect();
    scene.selected_xs = selected.iter().map(|p| p.x()).collect();
    scene.selected_ys = selected.iter().map(|p| p.y()).collect();

    // Eingabefelder zeigen den linkesten selektierten Punkt
    if let Some(leftmost) = selected.first() {
        let x_locked = recoil.edit_lock && curve.is_last(leftmost.id);
        scene.x_entry = Some(leftmost.x());
        scene.y_entry = Some(leftmost.y());
        scene.x_entry_enabled = !x_locked;
        scene.can_undo_x = !x_locked && leftmost.can_undo(Axis::X);
        scene.can_undo_y = leftmost.can_undo(Axis::Y);
    }
    scene
}

fn recoil_entries(state: &AppState) -> Vec<RecoilEntry> {
    state
        .simulation
        .element_simulations()
        .flat_map(|sim| {
            sim.recoil_elements().iter().map(move |recoil| RecoilEntry {
                key: RecoilKey {
                    simulation_id: sim.id,
                    recoil_id: recoil.id,
                },
                label: format!("{} {}", recoil.element, recoil.name),
                is_main: sim.is_main_recoil(recoil.id),
            })
        })
        .collect()
}

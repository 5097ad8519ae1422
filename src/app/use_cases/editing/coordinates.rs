//! Use-Case: Numerische Eingabe für den linkesten selektierten Punkt.

use super::mutate_active_curve;
use crate::app::AppState;
use potku_recoil_engine::scaling::set_coordinate_entry;
use potku_recoil_engine::{Axis, EditResult};

/// Gibt `true` zurück, wenn x des Punktes durch die Bearbeitungssperre fixiert ist.
pub(super) fn x_frozen(state: &AppState, point_id: u64, axis: Axis) -> bool {
    axis == Axis::X
        && state.edit_lock()
        && state.active_curve().is_some_and(|c| c.is_last(point_id))
}

/// Setzt eine Koordinate des linkesten selektierten Punktes.
///
/// Ohne Selektion oder bei fixiertem x passiert nichts.
pub fn set_coordinate(state: &mut AppState, axis: Axis, value: f64) -> EditResult<()> {
    let Some(point_id) = state.leftmost_selected() else {
        log::debug!("Koordinaten-Eingabe ohne Selektion ignoriert");
        return Ok(());
    };
    if x_frozen(state, point_id, axis) {
        log::debug!("x des letzten Punktes ist gesperrt");
        return Ok(());
    }
    let applied = mutate_active_curve(state, |curve, limits, edit_lock| {
        set_coordinate_entry(curve, point_id, axis, value, limits, edit_lock)
    })?;
    log::info!("Punkt {} {:?} = {}", point_id, axis, applied);
    Ok(())
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

    #[test]
    fn x_entry_is_clamped_between_neighbors() {
        let mut state = state_with(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]]);
        let middle = state.active_curve().and_then(|c| c.point_at(1)).expect("Mitte").id;
        state.selection.replace([middle]);

        set_coordinate(&mut state, Axis::X, 40.0).expect("erlaubt");

        let x = state.active_curve().and_then(|c| c.point(middle)).expect("Punkt").x();
        assert_relative_eq!(x, 34.99, epsilon = 1e-12);
    }

    #[test]
    fn entry_targets_leftmost_selected_point() {
        let mut state = state_with(&[[0.0, 1.0], [10.0, 0.5], [20.0, 0.5], [35.0, 1.0]]);
        let curve = state.active_curve().expect("Kurve");
        let (second, third) = (
            curve.point_at(1).expect("Punkt").id,
            curve.point_at(2).expect("Punkt").id,
        );
        state.selection.replace([third, second]);

        set_coordinate(&mut state, Axis::Y, 0.25).expect("erlaubt");

        let curve = state.active_curve().expect("Kurve");
        assert_eq!(curve.point(second).expect("Punkt").y(), 0.25);
        assert_eq!(curve.point(third).expect("Punkt").y(), 0.5);
    }

    #[test]
    fn locked_last_x_entry_is_ignored() {
        let mut state = state_with(&[[0.0, 1.0], [35.0, 1.0]]);
        if let Some(recoil) = state.active_recoil_mut() {
            recoil.edit_lock = true;
        }
        let last = state.active_curve().and_then(|c| c.last()).expect("Punkt").id;
        state.selection.replace([last]);

        set_coordinate(&mut state, Axis::X, 20.0).expect("ignoriert");

        assert_eq!(state.active_curve().and_then(|c| c.last()).expect("Punkt").x(), 35.0);
        assert!(!state.can_undo());
    }
}

//! Use-Case: Koordinate mit dem Zwischenablage-Wert multiplizieren.

use super::coordinates::x_frozen;
use super::mutate_active_curve;
use crate::app::AppState;
use potku_recoil_engine::{scaling, Axis, EditError, EditResult};

/// Multipliziert eine Koordinate des linkesten selektierten Punktes.
///
/// Der Multiplikator kommt aus dem zuletzt gemeldeten Zwischenablage-Text.
/// Nicht-numerischer Text wird mit `InvalidMultiplier` abgelehnt.
pub fn multiply_coordinate(state: &mut AppState, axis: Axis) -> EditResult<()> {
    let Some(point_id) = state.leftmost_selected() else {
        log::debug!("Multiplikation ohne Selektion ignoriert");
        return Ok(());
    };
    let text = state.ui.clipboard_text.clone().unwrap_or_default();
    let ratio = scaling::parse_multiplier(&text)?;
    if x_frozen(state, point_id, axis) {
        log::debug!("x des letzten Punktes ist gesperrt");
        return Ok(());
    }
    let value = mutate_active_curve(state, |curve, limits, edit_lock| {
        scaling::multiply_coordinate(curve, point_id, axis, ratio, limits, edit_lock)
    })?;
    log::info!("Punkt {} {:?} mit {} multipliziert: {}", point_id, axis, ratio, value);
    Ok(())
}

/// Nimmt die letzte Multiplikation einer Koordinate zurück.
///
/// Leerer Undo-Stack des Punktes: keine Änderung, kein History-Eintrag.
pub fn undo_coordinate(state: &mut AppState, axis: Axis) -> EditResult<()> {
    let Some(point_id) = state.leftmost_selected() else {
        return Ok(());
    };
    if x_frozen(state, point_id, axis) {
        log::debug!("x des letzten Punktes ist gesperrt, Undo-Stack bleibt erhalten");
        return Ok(());
    }
    let can_undo = state
        .active_curve()
        .and_then(|c| c.point(point_id))
        .ok_or(EditError::UnknownPoint(point_id))?
        .can_undo(axis);
    if !can_undo {
        log::debug!("Kein Multiplikations-Undo für Punkt {}", point_id);
        return Ok(());
    }
    let restored = mutate_active_curve(state, |curve, limits, edit_lock| {
        scaling::undo_coordinate(curve, point_id, axis, limits, edit_lock)
    })?;
    if let Some(value) = restored {
        log::info!("Punkt {} {:?} zurückgesetzt auf {}", point_id, axis, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use potku_recoil_engine::{Element, RecoilCurve};
    use std::sync::Arc;

    fn state_with_middle_selected() -> (AppState, u64) {
        let mut state = AppState::new();
        let curve = RecoilCurve::from_coordinates(&[[0.0, 1.0], [10.0, 0.5], [35.0, 1.0]])
            .expect("gültige Kurve");
        let key = Arc::make_mut(&mut state.simulation)
            .add_element_simulation_with_curve(Element::new("H", None), curve);
        state.active_recoil = Some(key);
        let middle = state.active_curve().and_then(|c| c.point_at(1)).expect("Mitte").id;
        state.selection.replace([middle]);
        (state, middle)
    }

    fn x_of(state: &AppState, id: u64) -> f64 {
        state.active_curve().and_then(|c| c.point(id)).expect("Punkt").x()
    }

    #[test]
    fn multiply_and_undo_x() {
        let (mut state, middle) = state_with_middle_selected();
        state.ui.clipboard_text = Some("2".to_string());

        multiply_coordinate(&mut state, Axis::X).expect("erlaubt");
        assert_eq!(x_of(&state, middle), 20.0);

        undo_coordinate(&mut state, Axis::X).expect("erlaubt");
        assert_eq!(x_of(&state, middle), 10.0);

        let can_undo = state
            .active_curve()
            .and_then(|c| c.point(middle))
            .expect("Punkt")
            .can_undo(Axis::X);
        assert!(!can_undo);
    }

    #[test]
    fn invalid_clipboard_text_is_rejected() {
        let (mut state, middle) = state_with_middle_selected();
        state.ui.clipboard_text = Some("zwei".to_string());

        let result = multiply_coordinate(&mut state, Axis::X);

        assert_eq!(result, Err(EditError::InvalidMultiplier("zwei".to_string())));
        assert_eq!(x_of(&state, middle), 10.0);
        assert!(!state.can_undo());
    }

    #[test]
    fn undo_on_empty_stack_is_noop() {
        let (mut state, middle) = state_with_middle_selected();

        undo_coordinate(&mut state, Axis::Y).expect("kein Fehler");

        assert_eq!(x_of(&state, middle), 10.0);
        assert!(!state.can_undo());
    }

    #[test]
    fn undo_of_locked_last_x_waits_for_unlock() {
        let (mut state, _) = state_with_middle_selected();
        let last = state.active_curve().and_then(|c| c.last()).expect("letzter").id;
        state.selection.replace([last]);
        state.ui.clipboard_text = Some("0.5".to_string());
        multiply_coordinate(&mut state, Axis::X).expect("erlaubt");
        assert_eq!(x_of(&state, last), 17.5);

        let key = state.active_recoil.expect("aktiv");
        Arc::make_mut(&mut state.simulation)
            .set_edit_lock(key, true)
            .expect("vorhanden");

        undo_coordinate(&mut state, Axis::X).expect("kein Fehler");

        assert_eq!(x_of(&state, last), 17.5);
        let can_undo = state
            .active_curve()
            .and_then(|c| c.point(last))
            .expect("Punkt")
            .can_undo(Axis::X);
        assert!(can_undo, "Undo-Stack muss erhalten bleiben");

        Arc::make_mut(&mut state.simulation)
            .set_edit_lock(key, false)
            .expect("vorhanden");
        undo_coordinate(&mut state, Axis::X).expect("erlaubt");
        assert_eq!(x_of(&state, last), 35.0);
    }
}

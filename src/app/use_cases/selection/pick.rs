//! Use-Case: Punkt-Selektion per Klick.

use crate::app::AppState;
use glam::DVec2;

/// Sucht den nächsten Punkt der aktiven Kurve innerhalb der Pick-Toleranz.
///
/// Der Abstand wird pro Achse auf die Toleranz normiert, da Tiefe und
/// Konzentration in verschiedenen Größenordnungen liegen.
pub fn nearest_point(state: &AppState, position: DVec2) -> Option<u64> {
    let curve = state.active_curve()?;
    curve
        .points()
        .iter()
        .map(|p| (state.options.pick_distance(p.position, position), p.id))
        .filter(|(distance, _)| *distance <= 1.0)
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, id)| id)
}

/// Wählt einen angeklickten Punkt an.
///
/// Ist der Punkt bereits selektiert, bleibt die Selektion unverändert (die
/// ganze Gruppe wird gezogen). Sonst ersetzt er die Selektion.
pub fn select_point(state: &mut AppState, point_id: u64) {
    let Some(curve) = state.active_curve() else {
        log::debug!("Punkt-Pick ohne aktive Kurve ignoriert");
        return;
    };
    if curve.point(point_id).is_none() {
        log::debug!("Punkt {} nicht in der aktiven Kurve", point_id);
        return;
    }
    if state.selection.contains(point_id) {
        return;
    }
    state.selection.replace([point_id]);
}

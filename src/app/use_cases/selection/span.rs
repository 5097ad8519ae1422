//! Use-Case: Selektion über einen x-Bereich (Span-Selektor).

use crate::app::AppState;

/// Ersetzt die Selektion durch alle Punkte mit `xmin <= x <= xmax`.
pub fn select_points_in_span(state: &mut AppState, xmin: f64, xmax: f64) {
    let Some(curve) = state.active_curve() else {
        log::debug!("Span-Selektion ohne aktive Kurve ignoriert");
        return;
    };
    let ids = curve.points_in_span(xmin, xmax);
    log::info!(
        "{} Punkte im Bereich {:.3}..{:.3} selektiert",
        ids.len(),
        xmin,
        xmax
    );
    state.selection.replace(ids);
}

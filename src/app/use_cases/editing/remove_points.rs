//! Use-Case: Selektierte Punkte entfernen.

use super::mutate_active_curve;
use crate::app::AppState;
use potku_recoil_engine::EditResult;

/// Entfernt alle selektierten Punkte und hebt die Selektion auf.
///
/// Abgelehnt, wenn weniger als zwei Punkte übrig blieben; Kurve und
/// Selektion bleiben dann unverändert.
pub fn remove_selected_points(state: &mut AppState) -> EditResult<()> {
    if state.selection.is_empty() {
        log::debug!("Nichts zum Entfernen selektiert");
        return Ok(());
    }
    let ids = state.selection.ids();
    let removed = mutate_active_curve(state, |curve, _, _| curve.remove_points(&ids))?;
    state.selection.clear();
    log::info!("{} Punkte entfernt", removed);
    Ok(())
}

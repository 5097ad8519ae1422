//! Use-Cases für Punkt-Bearbeitung auf der aktiven Kurve.

mod add_point;
mod coordinates;
mod multiply;
mod remove_points;

pub use add_point::{add_point_on_line, line_y_at};
pub use coordinates::set_coordinate;
pub use multiply::{multiply_coordinate, undo_coordinate};
pub use remove_points::remove_selected_points;

use crate::app::history::Snapshot;
use crate::app::AppState;
use potku_recoil_engine::{EditError, EditLimits, EditResult, RecoilCurve};

/// Führt eine Mutation auf der aktiven Kurve aus.
///
/// Der Undo-Snapshot wird vor der Mutation gebaut und nur bei Erfolg
/// aufgenommen; abgelehnte Operationen hinterlassen keinen History-Eintrag.
fn mutate_active_curve<T>(
    state: &mut AppState,
    mutation: impl FnOnce(&mut RecoilCurve, &EditLimits, bool) -> EditResult<T>,
) -> EditResult<T> {
    let limits = state.limits();
    let edit_lock = state.edit_lock();
    let snap = Snapshot::from_state(state);
    let recoil = state.active_recoil_mut().ok_or(EditError::NoActiveRecoil)?;
    let result = mutation(&mut recoil.curve, &limits, edit_lock)?;
    state.history.record_snapshot(snap);
    Ok(result)
}

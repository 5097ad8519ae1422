//! Use-Cases für Punkt-Selektion.

mod pick;
mod span;

pub use pick::{nearest_point, select_point};
pub use span::select_points_in_span;

use crate::app::AppState;

/// Hebt die aktuelle Selektion auf.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

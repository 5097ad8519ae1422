//! Application State: zentrale Datenhaltung einer Editor-Sitzung.
//!
//! Ersetzt geteilten Klassenzustand: jede Sitzung besitzt genau einen
//! `AppState`, den der Controller explizit an Handler und Use-Cases reicht.

mod app_state;
mod selection;
mod ui;

pub use app_state::AppState;
pub use selection::SelectionState;
pub use ui::UiState;

//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion. Ablehnungen
//! der Use-Cases landen als Nutzermeldung im UI-State.

pub mod drag;
pub mod editing;
pub mod elements;
pub mod history;
pub mod options;
pub mod selection;

use crate::app::AppState;
use potku_recoil_engine::EditResult;

/// Meldet eine Ablehnung an den Nutzer und liefert den Erfolgswert.
fn report<T>(state: &mut AppState, context: &str, result: EditResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(error) => {
            state.reject(context, error);
            None
        }
    }
}

//! Handler für Laufzeit-Optionen.

use crate::app::history::EditHistory;
use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen und persistiert sie, falls ein Pfad gesetzt ist.
///
/// Grenzwerte, die eine bestehende Kurve verletzen würden, werden abgelehnt;
/// die bisherigen Optionen bleiben dann aktiv.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    if let Err(error) = state.simulation.check_limits(&options.edit_limits()) {
        state.reject("Optionen übernehmen", error);
        return Ok(());
    }
    if options.undo_depth != state.options.undo_depth {
        state.history = EditHistory::new_with_capacity(options.undo_depth);
        log::info!("Undo-Tiefe geändert, History geleert");
    }
    state.options = options;
    persist(state)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, EditorOptions::default())
}

fn persist(state: &AppState) -> anyhow::Result<()> {
    match state.options_path.as_deref() {
        Some(path) => state.options.save_to_file(path),
        None => {
            log::debug!("Kein Optionen-Pfad gesetzt, Optionen nur für diese Sitzung");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases;
    use glam::DVec2;
    use potku_recoil_engine::Element;

    fn state_with_added_point() -> AppState {
        let mut state = AppState::new();
        use_cases::elements::add_element_simulation(&mut state, Element::new("H", Some(1)));
        use_cases::editing::add_point_on_line(&mut state, DVec2::new(1.0, 1.0))
            .expect("Platz vorhanden");
        state
    }

    #[test]
    fn coarser_resolution_than_existing_spacing_is_rejected() {
        let mut state = state_with_added_point();
        let options = EditorOptions {
            x_res: 5.0,
            ..EditorOptions::default()
        };

        apply_options(&mut state, options).expect("kein I/O-Fehler");

        assert_eq!(state.options, EditorOptions::default());
        assert!(state.ui.last_error.is_some());
        assert_eq!(
            state.active_curve().expect("Kurve").xs(),
            vec![0.0, 1.0, 35.0]
        );
    }

    #[test]
    fn raised_y_minimum_above_existing_points_is_rejected() {
        let mut state = state_with_added_point();
        let options = EditorOptions {
            y_min: 2.0,
            ..EditorOptions::default()
        };

        apply_options(&mut state, options).expect("kein I/O-Fehler");

        assert_eq!(state.options.y_min, EditorOptions::default().y_min);
        assert!(state.ui.last_error.is_some());
    }

    #[test]
    fn compatible_resolution_is_applied() {
        let mut state = state_with_added_point();
        let options = EditorOptions {
            x_res: 0.5,
            ..EditorOptions::default()
        };

        apply_options(&mut state, options.clone()).expect("kein I/O-Fehler");

        assert_eq!(state.options, options);
        assert!(state.ui.last_error.is_none());
    }
}

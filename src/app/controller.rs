//! Application Controller für zentrale Event-Verarbeitung.

use super::curve_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::CurveScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Die Meldung der vorherigen Ablehnung wird dabei verworfen.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        state.ui.last_error = None;
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::SelectPointsInSpan { xmin, xmax } => {
                handlers::selection::select_in_span(state, xmin, xmax)
            }
            AppCommand::SelectPoint { point_id } => {
                handlers::selection::select_point(state, point_id)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Drag ===
            AppCommand::BeginDrag { pointer } => handlers::drag::begin(state, pointer),
            AppCommand::UpdateDrag { pointer } => handlers::drag::update(state, pointer),
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Editing ===
            AppCommand::AddPointOnLine { position } => {
                handlers::editing::add_point(state, position)
            }
            AppCommand::RemoveSelectedPoints => handlers::editing::remove_selected(state),
            AppCommand::SetCoordinate { axis, value } => {
                handlers::editing::set_coordinate(state, axis, value)
            }
            AppCommand::SetClipboardText { text } => {
                handlers::editing::set_clipboard_text(state, text)
            }
            AppCommand::MultiplyCoordinate { axis } => handlers::editing::multiply(state, axis),
            AppCommand::UndoCoordinate { axis } => {
                handlers::editing::undo_coordinate(state, axis)
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Element-Simulationen ===
            AppCommand::AddElementSimulation { element } => {
                handlers::elements::add_element_simulation(state, element)
            }
            AppCommand::RemoveElementSimulation { simulation_id } => {
                handlers::elements::remove_element_simulation(state, simulation_id)
            }
            AppCommand::AddRecoilElement { simulation_id } => {
                handlers::elements::add_recoil_element(state, simulation_id)
            }
            AppCommand::RemoveRecoilElement { key } => {
                handlers::elements::remove_recoil_element(state, key)
            }
            AppCommand::ChooseRecoil { key } => handlers::elements::choose_recoil(state, key),
            AppCommand::SetEditLock { locked } => {
                handlers::elements::set_edit_lock(state, locked)
            }
            AppCommand::UpdateRecoilInfo { info } => {
                handlers::elements::update_recoil_info(state, info)
            }
            AppCommand::SetTarget { target } => handlers::elements::set_target(state, target),
            AppCommand::ExportTargetElements => handlers::elements::export_target_elements(state),

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Kurven-Szene für die Darstellung.
    pub fn build_curve_scene(&self, state: &AppState) -> CurveScene {
        curve_scene::build(state)
    }
}

//! Mapping von UI-Intents auf mutierende App-Commands.

use super::use_cases;
use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SpanSelectRequested { xmin, xmax } => {
            vec![AppCommand::SelectPointsInSpan { xmin, xmax }]
        }
        AppIntent::PointPickRequested { position } => {
            match use_cases::selection::nearest_point(state, position) {
                Some(point_id) => vec![
                    AppCommand::SelectPoint { point_id },
                    AppCommand::BeginDrag { pointer: position },
                ],
                None => Vec::new(),
            }
        }
        AppIntent::PointAddRequested { position } => vec![
            AppCommand::AddPointOnLine { position },
            AppCommand::BeginDrag { pointer: position },
        ],
        AppIntent::PointerMoved { position } => {
            if state.drag.is_some() {
                vec![AppCommand::UpdateDrag { pointer: position }]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::EndDrag],
        AppIntent::RemoveSelectedPointsRequested => vec![AppCommand::RemoveSelectedPoints],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],

        AppIntent::CoordinateEntered { axis, value } => {
            vec![AppCommand::SetCoordinate { axis, value }]
        }
        AppIntent::ClipboardChanged { text } => vec![AppCommand::SetClipboardText { text }],
        AppIntent::MultiplyCoordinateRequested { axis } => {
            vec![AppCommand::MultiplyCoordinate { axis }]
        }
        AppIntent::UndoCoordinateRequested { axis } => vec![AppCommand::UndoCoordinate { axis }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::ElementSimulationAddRequested { element } => {
            vec![AppCommand::AddElementSimulation { element }]
        }
        AppIntent::ElementSimulationRemoveRequested => match state.active_recoil {
            Some(key) if state.simulation.is_main_recoil(key) => {
                vec![AppCommand::RemoveElementSimulation {
                    simulation_id: key.simulation_id,
                }]
            }
            _ => {
                log::debug!("Entfernen der Element-Simulation nur bei aktivem Haupt-Element");
                Vec::new()
            }
        },
        AppIntent::RecoilElementAddRequested { simulation_id } => {
            vec![AppCommand::AddRecoilElement { simulation_id }]
        }
        AppIntent::RecoilElementRemoveRequested { key } => {
            vec![AppCommand::RemoveRecoilElement { key }]
        }
        AppIntent::RecoilChosen { key } => vec![AppCommand::ChooseRecoil { key }],
        AppIntent::FullEditUnlockRequested => vec![AppCommand::SetEditLock { locked: false }],
        AppIntent::EditLockRequested => vec![AppCommand::SetEditLock { locked: true }],
        AppIntent::RecoilInfoChanged { info } => vec![AppCommand::UpdateRecoilInfo { info }],

        AppIntent::TargetChanged { target } => vec![AppCommand::SetTarget { target }],
        AppIntent::TargetElementsExportRequested => vec![AppCommand::ExportTargetElements],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

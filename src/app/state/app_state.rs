use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::shared::EditorOptions;
use potku_recoil_engine::{
    DragSession, EditError, EditLimits, RecoilCurve, RecoilElement, RecoilKey, Simulation,
};
use std::path::PathBuf;
use std::sync::Arc;

use super::{SelectionState, UiState};

/// Hauptzustand einer Editor-Sitzung
pub struct AppState {
    /// Simulation mit allen Element-Simulationen (Arc für O(1)-Snapshots)
    pub simulation: Arc<Simulation>,
    /// Aktuell bearbeitetes Rückstoß-Element (None = keine Kurve aktiv)
    pub active_recoil: Option<RecoilKey>,
    /// Selection-State
    pub selection: SelectionState,
    /// Laufende Drag-Sitzung (zwischen Klick und Loslassen)
    pub drag: Option<DragSession>,
    /// Zustand vor dem Drag, wird bei der ersten Bewegung in die History übernommen
    pub drag_undo: Option<Snapshot>,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Grenzwerte, Startkurve, Pick-Toleranz)
    pub options: EditorOptions,
    /// Ziel für persistierte Optionen (None = nicht speichern)
    pub options_path: Option<PathBuf>,
}

impl AppState {
    /// Erstellt eine neue, leere Sitzung
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt eine leere Sitzung mit den gegebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            simulation: Arc::new(Simulation::new()),
            active_recoil: None,
            selection: SelectionState::new(),
            drag: None,
            drag_undo: None,
            ui: UiState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.undo_depth),
            options,
            options_path: None,
        }
    }

    /// Grenzwerte der Kurven-Operationen aus den Optionen
    pub fn limits(&self) -> EditLimits {
        self.options.edit_limits()
    }

    /// Aktives Rückstoß-Element
    pub fn active_recoil(&self) -> Option<&RecoilElement> {
        self.simulation.recoil(self.active_recoil?)
    }

    /// Mutable Zugriff auf das aktive Rückstoß-Element (CoW auf der Simulation)
    pub fn active_recoil_mut(&mut self) -> Option<&mut RecoilElement> {
        let key = self.active_recoil?;
        Arc::make_mut(&mut self.simulation).recoil_mut(key)
    }

    /// Kurve des aktiven Rückstoß-Elements
    pub fn active_curve(&self) -> Option<&RecoilCurve> {
        self.active_recoil().map(|recoil| &recoil.curve)
    }

    /// Bearbeitungssperre des aktiven Rückstoß-Elements
    pub fn edit_lock(&self) -> bool {
        self.active_recoil().is_some_and(|recoil| recoil.edit_lock)
    }

    /// Selektierter Punkt mit kleinstem x (Ziel der Koordinaten-Eingabe)
    pub fn leftmost_selected(&self) -> Option<u64> {
        let curve = self.active_curve()?;
        curve.leftmost_of(self.selection.selected_point_ids.iter())
    }

    /// Selektierte Punkt-IDs in x-Reihenfolge
    pub fn selected_in_curve_order(&self) -> Vec<u64> {
        let Some(curve) = self.active_curve() else {
            return Vec::new();
        };
        curve
            .points()
            .iter()
            .filter(|p| self.selection.contains(p.id))
            .map(|p| p.id)
            .collect()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Meldet eine Ablehnung an den Nutzer. Der Zustand bleibt unverändert.
    pub fn reject(&mut self, context: &str, error: EditError) {
        log::warn!("{} abgelehnt: {}", context, error);
        self.ui.last_error = Some(error.to_string());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

use super::SelectionState;
use potku_recoil_engine::{RecoilKey, Simulation};
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Klon der Simulation findet erst beim nächsten `Arc::make_mut()` in
/// einem Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Simulation (Arc-Klon für O(1)-Snapshot)
    pub simulation: Arc<Simulation>,
    /// Aktives Rückstoß-Element zum Zeitpunkt des Snapshots
    pub active_recoil: Option<RecoilKey>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            simulation: Arc::clone(&state.simulation),
            active_recoil: state.active_recoil,
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    ///
    /// Eine laufende Drag-Sitzung verweist auf den alten Stand und wird verworfen.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.simulation = self.simulation;
        state.active_recoil = self.active_recoil;
        state.selection = self.selection;
        state.drag = None;
        state.drag_undo = None;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen vorab gebauten Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}

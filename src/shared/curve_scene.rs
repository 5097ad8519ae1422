//! Kurven-Szene als expliziter Übergabevertrag zwischen App und Darstellung.
//!
//! Lebt im shared-Modul, da `app` sie baut und die Darstellungsschicht sie
//! konsumiert. Reine Daten, keine Widget-Typen.

use potku_recoil_engine::{RecoilInfo, RecoilKey};
use serde::Serialize;

/// Eintrag der Rückstoß-Auswahlliste.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoilEntry {
    /// Stabiler Schlüssel
    pub key: RecoilKey,
    /// Anzeigetext, z.B. `4He Default-1`
    pub label: String,
    /// Haupt-Rückstoß-Element seiner Element-Simulation
    pub is_main: bool,
}

/// Read-only Daten für einen Redraw des Verteilungs-Editors.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CurveScene {
    /// Aktives Rückstoß-Element
    pub active_recoil: Option<RecoilKey>,
    /// Name des aktiven Rückstoß-Elements
    pub recoil_name: Option<String>,
    /// Vorbelegung des Info-Dialogs für das aktive Rückstoß-Element
    pub recoil_info: Option<RecoilInfo>,
    /// x-Koordinaten aller Punkte der aktiven Kurve
    pub xs: Vec<f64>,
    /// y-Koordinaten aller Punkte der aktiven Kurve
    pub ys: Vec<f64>,
    /// IDs der selektierten Punkte in x-Reihenfolge
    pub selected_point_ids: Vec<u64>,
    /// x-Koordinaten der selektierten Punkte
    pub selected_xs: Vec<f64>,
    /// y-Koordinaten der selektierten Punkte
    pub selected_ys: Vec<f64>,
    /// Wert für die x-Eingabe (linkester selektierter Punkt)
    pub x_entry: Option<f64>,
    /// Wert für die y-Eingabe (linkester selektierter Punkt)
    pub y_entry: Option<f64>,
    /// x-Eingabe aktiv (nicht beim gesperrten letzten Punkt)
    pub x_entry_enabled: bool,
    /// Multiplikations-Undo für x verfügbar
    pub can_undo_x: bool,
    /// Multiplikations-Undo für y verfügbar
    pub can_undo_y: bool,
    /// Bearbeitungssperre des aktiven Rückstoß-Elements
    pub edit_lock: bool,
    /// Drag-Sitzung aktiv
    pub dragging: bool,
    /// Snapshot-Undo verfügbar
    pub can_undo: bool,
    /// Snapshot-Redo verfügbar
    pub can_redo: bool,
    /// Element-Simulation darf entfernt werden (Haupt-Element aktiv)
    pub can_remove_element_simulation: bool,
    /// Alle Rückstoß-Elemente in Anzeigereihenfolge
    pub recoils: Vec<RecoilEntry>,
    /// Letzte Ablehnung als Meldung für den Nutzer
    pub last_error: Option<String>,
}

impl CurveScene {
    /// Gibt zurück, ob eine Kurve angezeigt werden kann.
    pub fn has_curve(&self) -> bool {
        self.active_recoil.is_some()
    }

    /// Koordinaten der aktiven Kurve als Paare.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| [x, y]).collect()
    }
}

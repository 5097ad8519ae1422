use crate::shared::EditorOptions;
use glam::DVec2;
use potku_recoil_engine::{Axis, Element, RecoilInfo, RecoilKey, Target};
use serde::{Deserialize, Serialize};

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Positionen sind Datenkoordinaten (x = Tiefe, y = relative Konzentration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AppIntent {
    /// Punkte im x-Bereich selektieren (Span-Selektor)
    SpanSelectRequested { xmin: f64, xmax: f64 },
    /// Linksklick: Punkt anwählen und Drag der Selektion starten
    PointPickRequested { position: DVec2 },
    /// Strg+Linksklick auf die Linie: Punkt einfügen und sofort ziehen
    PointAddRequested { position: DVec2 },
    /// Zeiger bewegt (nur während einer Drag-Sitzung wirksam)
    PointerMoved { position: DVec2 },
    /// Linke Maustaste losgelassen
    PointerReleased,
    /// Selektierte Punkte entfernen
    RemoveSelectedPointsRequested,
    /// Selektion aufheben
    ClearSelectionRequested,

    /// Numerische Eingabe für den linkesten selektierten Punkt
    CoordinateEntered { axis: Axis, value: f64 },
    /// Zwischenablage-Inhalt hat sich geändert
    ClipboardChanged { text: String },
    /// Koordinate mit dem Zwischenablage-Wert multiplizieren
    MultiplyCoordinateRequested { axis: Axis },
    /// Letzte Multiplikation einer Koordinate zurücknehmen
    UndoCoordinateRequested { axis: Axis },

    /// Undo-Schritt
    UndoRequested,
    /// Redo-Schritt
    RedoRequested,

    /// Neue Element-Simulation für ein Element anlegen
    ElementSimulationAddRequested { element: Element },
    /// Aktive Element-Simulation entfernen (nur bei aktivem Haupt-Element)
    ElementSimulationRemoveRequested,
    /// Weiteres Rückstoß-Element zu einer Element-Simulation hinzufügen
    RecoilElementAddRequested { simulation_id: u64 },
    /// Weiteres Rückstoß-Element entfernen
    RecoilElementRemoveRequested { key: RecoilKey },
    /// Rückstoß-Element in der Auswahlliste gewählt
    RecoilChosen { key: RecoilKey },
    /// Volle Bearbeitung freischalten (vom Nutzer bestätigt)
    FullEditUnlockRequested,
    /// Bearbeitungssperre setzen (z.B. nach gestarteter Simulation)
    EditLockRequested,
    /// Info-Dialog bestätigt
    RecoilInfoChanged { info: RecoilInfo },

    /// Probenaufbau geändert
    TargetChanged { target: Target },
    /// Elemente aus dem Probenaufbau übernehmen
    TargetElementsExportRequested,

    /// Optionen übernommen
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standard zurücksetzen
    ResetOptionsRequested,
}

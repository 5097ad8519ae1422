use crate::shared::EditorOptions;
use glam::DVec2;
use potku_recoil_engine::{Axis, Element, RecoilInfo, RecoilKey, Target};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // === Selektion ===
    /// Selektion durch alle Punkte im x-Bereich ersetzen
    SelectPointsInSpan { xmin: f64, xmax: f64 },
    /// Angeklickten Punkt anwählen (ersetzt die Selektion, falls nicht selektiert)
    SelectPoint { point_id: u64 },
    /// Selektion aufheben
    ClearSelection,

    // === Drag ===
    /// Drag der aktuellen Selektion ab Zeigerposition starten
    BeginDrag { pointer: DVec2 },
    /// Drag-Sitzung auf neue Zeigerposition anwenden
    UpdateDrag { pointer: DVec2 },
    /// Drag-Sitzung beenden
    EndDrag,

    // === Editing ===
    /// Punkt auf der Linie einfügen und allein selektieren
    AddPointOnLine { position: DVec2 },
    /// Selektierte Punkte entfernen
    RemoveSelectedPoints,
    /// Koordinate des linkesten selektierten Punktes setzen
    SetCoordinate { axis: Axis, value: f64 },
    /// Zwischenablage-Text übernehmen
    SetClipboardText { text: String },
    /// Koordinate mit Zwischenablage-Wert multiplizieren
    MultiplyCoordinate { axis: Axis },
    /// Multiplikation einer Koordinate zurücknehmen
    UndoCoordinate { axis: Axis },

    // === History ===
    /// Snapshot-Undo
    Undo,
    /// Snapshot-Redo
    Redo,

    // === Elemente ===
    /// Element-Simulation anlegen
    AddElementSimulation { element: Element },
    /// Element-Simulation entfernen
    RemoveElementSimulation { simulation_id: u64 },
    /// Weiteres Rückstoß-Element anlegen
    AddRecoilElement { simulation_id: u64 },
    /// Weiteres Rückstoß-Element entfernen
    RemoveRecoilElement { key: RecoilKey },
    /// Aktives Rückstoß-Element wechseln
    ChooseRecoil { key: RecoilKey },
    /// Bearbeitungssperre des aktiven Rückstoß-Elements setzen/lösen
    SetEditLock { locked: bool },
    /// Info-Felder des aktiven Rückstoß-Elements übernehmen
    UpdateRecoilInfo { info: RecoilInfo },
    /// Probenaufbau setzen
    SetTarget { target: Target },
    /// Fehlende Target-Elemente als Element-Simulationen anlegen
    ExportTargetElements,

    // === Optionen ===
    /// Optionen übernehmen und persistieren
    ApplyOptions { options: EditorOptions },
    /// Optionen zurücksetzen und persistieren
    ResetOptions,
}

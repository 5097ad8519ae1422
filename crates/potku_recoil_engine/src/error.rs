//! Nutzerseitige Ablehnungen von Bearbeitungsoperationen.
//!
//! Keine dieser Varianten bricht die Sitzung ab: der Zustand bleibt bei
//! einer Ablehnung unverändert, der Host zeigt die Meldung an.

use crate::simulation::RecoilKey;
use thiserror::Error;

/// Ergebnis-Alias für Bearbeitungsoperationen.
pub type EditResult<T> = Result<T, EditError>;

/// Grund, warum eine Bearbeitung abgelehnt wurde.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Zwischen den Nachbarn ist kein Platz für einen neuen Punkt.
    #[error("Can't add a point at x={x}: there is no space for it (minimum spacing {x_res})")]
    InsufficientSpace { x: f64, x_res: f64 },

    /// Punkt liegt außerhalb des bearbeitbaren Bereichs (x < 0, y < y_min oder nicht endlich).
    #[error("Point ({x}, {y}) lies outside the editable range")]
    InvalidCoordinate { x: f64, y: f64 },

    /// Nach dem Entfernen blieben weniger als zwei Punkte übrig.
    #[error("There must always be at least two points ({remaining} would remain)")]
    MinimumPointCount { remaining: usize },

    /// Zwischenablage-Inhalt ist keine gültige Zahl.
    #[error("Value '{0}' is not suitable for multiplying")]
    InvalidMultiplier(String),

    /// Kein Rückstoß-Element zur Bearbeitung ausgewählt.
    #[error("No recoil element is active")]
    NoActiveRecoil,

    /// Punkt-ID gehört nicht zur Kurve.
    #[error("Point {0} does not exist")]
    UnknownPoint(u64),

    /// Rückstoß-Element existiert nicht (mehr).
    #[error("Recoil element {0} does not exist")]
    UnknownRecoil(RecoilKey),

    /// Element-Simulation existiert nicht (mehr).
    #[error("Element simulation {0} does not exist")]
    UnknownElementSimulation(u64),

    /// Operation ist nur für das Haupt-Rückstoß-Element erlaubt bzw. nicht für es.
    #[error("Operation is not allowed for the main recoil element of simulation {0}")]
    MainRecoilElement(u64),
}

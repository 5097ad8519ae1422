//! Grenzwerte für die Kurvenbearbeitung.

use serde::{Deserialize, Serialize};

/// Minimaler horizontaler Abstand zwischen benachbarten Punkten.
pub const X_RES: f64 = 0.01;
/// Minimaler y-Wert (relative Konzentration) eines Punktes.
pub const Y_MIN: f64 = 0.0001;
/// Maximale Tiefe der Multiplikations-Historie pro Punkt und Achse.
pub const POINT_HISTORY_DEPTH: usize = 50;
/// Nachkommastellen beim Multiplizieren einer Koordinate.
pub const MULTIPLY_DECIMALS: i32 = 3;
/// Standardkurve neuer Rückstoß-Elemente: `(0, 1)` bis `(35, 1)`.
pub const DEFAULT_CURVE_POINTS: [[f64; 2]; 2] = [[0.0, 1.0], [35.0, 1.0]];

/// Aktive Grenzwerte einer Bearbeitungssitzung.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditLimits {
    /// Mindestabstand auf der x-Achse
    pub x_res: f64,
    /// Untergrenze auf der y-Achse
    pub y_min: f64,
    /// Tiefe der Multiplikations-Historie
    pub history_depth: usize,
    /// Rundung beim Multiplizieren (Nachkommastellen)
    pub multiply_decimals: i32,
}

impl Default for EditLimits {
    fn default() -> Self {
        Self {
            x_res: X_RES,
            y_min: Y_MIN,
            history_depth: POINT_HISTORY_DEPTH,
            multiply_decimals: MULTIPLY_DECIMALS,
        }
    }
}

//! Zentrale Konfiguration für den Potku Recoil Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::DVec2;
use potku_recoil_engine::limits::{
    DEFAULT_CURVE_POINTS, MULTIPLY_DECIMALS, POINT_HISTORY_DEPTH, X_RES, Y_MIN,
};
use potku_recoil_engine::{EditLimits, RecoilCurve};
use serde::{Deserialize, Serialize};

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Toleranz in Tiefen-Einheiten (x).
pub const PICK_TOLERANCE_X: f64 = 0.5;
/// Pick-Toleranz in Konzentrations-Einheiten (y).
pub const PICK_TOLERANCE_Y: f64 = 0.02;

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Snapshots.
pub const UNDO_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `potku_recoil_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Minimaler horizontaler Abstand benachbarter Punkte
    pub x_res: f64,
    /// Untergrenze für y (Drag und Eingabe)
    pub y_min: f64,
    /// Startkurve neuer Element-Simulationen
    #[serde(default = "default_curve_points")]
    pub default_curve: Vec<[f64; 2]>,

    // ── Multiplikation ──────────────────────────────────────────
    /// Tiefe des Undo-Stacks pro Punkt und Achse
    pub point_history_depth: usize,
    /// Nachkommastellen beim Multiplizieren
    pub multiply_decimals: i32,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Toleranz in x
    pub pick_tolerance_x: f64,
    /// Pick-Toleranz in y
    pub pick_tolerance_y: f64,

    // ── History ─────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Snapshots
    #[serde(default = "default_undo_depth")]
    pub undo_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            x_res: X_RES,
            y_min: Y_MIN,
            default_curve: default_curve_points(),

            point_history_depth: POINT_HISTORY_DEPTH,
            multiply_decimals: MULTIPLY_DECIMALS,

            pick_tolerance_x: PICK_TOLERANCE_X,
            pick_tolerance_y: PICK_TOLERANCE_Y,

            undo_depth: UNDO_DEPTH,
        }
    }
}

/// Serde-Default für `default_curve` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_curve_points() -> Vec<[f64; 2]> {
    DEFAULT_CURVE_POINTS.to_vec()
}

/// Serde-Default für `undo_depth`.
fn default_undo_depth() -> usize {
    UNDO_DEPTH
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("potku_recoil_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("potku_recoil_editor.toml")
    }

    /// Grenzwerte für die Kurven-Operationen der Engine.
    pub fn edit_limits(&self) -> EditLimits {
        EditLimits {
            x_res: self.x_res,
            y_min: self.y_min,
            history_depth: self.point_history_depth,
            multiply_decimals: self.multiply_decimals,
        }
    }

    /// Startkurve neuer Element-Simulationen.
    ///
    /// Eine Konfiguration, die die Kurven-Invarianten verletzt, fällt auf die
    /// Standardkurve zurück.
    pub fn start_curve(&self) -> RecoilCurve {
        RecoilCurve::from_coordinates_with_limits(&self.default_curve, &self.edit_limits())
            .unwrap_or_else(|e| {
                log::warn!("Startkurve ungültig ({}), verwende Standardkurve", e);
                RecoilCurve::default()
            })
    }

    /// Normierter Pick-Abstand: Werte `<= 1.0` liegen innerhalb der Toleranz.
    pub fn pick_distance(&self, point: DVec2, pointer: DVec2) -> f64 {
        let delta = point - pointer;
        let scaled = DVec2::new(
            delta.x / self.pick_tolerance_x,
            delta.y / self.pick_tolerance_y,
        );
        scaled.length()
    }
}

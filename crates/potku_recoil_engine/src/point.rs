//! Einzelner Kurvenpunkt mit Multiplikations-Historie.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Koordinatenachse eines Punktes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Tiefe
    X,
    /// Relative Konzentration
    Y,
}

/// Punkt einer Rückstoß-Konzentrationskurve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Stabile ID innerhalb der Kurve
    pub id: u64,
    /// Aktuelle Position (x = Tiefe, y = Konzentration)
    pub position: DVec2,
    /// Vorherige x-Werte (für Undo einer Multiplikation)
    #[serde(default)]
    previous_x: Vec<f64>,
    /// Vorherige y-Werte (für Undo einer Multiplikation)
    #[serde(default)]
    previous_y: Vec<f64>,
}

impl CurvePoint {
    /// Erstellt einen Punkt ohne Historie.
    pub fn new(id: u64, position: DVec2) -> Self {
        Self {
            id,
            position,
            previous_x: Vec::new(),
            previous_y: Vec::new(),
        }
    }

    /// x-Koordinate (Tiefe).
    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// y-Koordinate (Konzentration).
    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    /// Koordinate entlang der gegebenen Achse.
    pub fn coordinate(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.position.x,
            Axis::Y => self.position.y,
        }
    }

    /// Legt einen Wert auf den Historien-Stack der Achse.
    /// Bei voller Tiefe wird der älteste Eintrag verworfen.
    pub fn push_history(&mut self, axis: Axis, value: f64, max_depth: usize) {
        let stack = self.history_mut(axis);
        if max_depth == 0 {
            return;
        }
        if stack.len() >= max_depth {
            stack.remove(0);
        }
        stack.push(value);
    }

    /// Holt den zuletzt gespeicherten Wert der Achse.
    pub fn pop_history(&mut self, axis: Axis) -> Option<f64> {
        self.history_mut(axis).pop()
    }

    /// Gibt zurück, ob für die Achse ein Undo möglich ist.
    pub fn can_undo(&self, axis: Axis) -> bool {
        !self.history(axis).is_empty()
    }

    /// Read-only Sicht auf den Historien-Stack einer Achse.
    pub fn history(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.previous_x,
            Axis::Y => &self.previous_y,
        }
    }

    fn history_mut(&mut self, axis: Axis) -> &mut Vec<f64> {
        match axis {
            Axis::X => &mut self.previous_x,
            Axis::Y => &mut self.previous_y,
        }
    }
}

//! Stückweise lineare Rückstoß-Konzentrationskurve.
//!
//! Die Kurve hält ihre Punkte nach x sortiert und erzwingt bei jeder
//! Mutation den Mindestabstand `x_res` sowie die Mindestanzahl von zwei
//! Punkten. Alle Operationen sind reine Datenmutationen ohne Redraw.

use crate::error::{EditError, EditResult};
use crate::limits::{DEFAULT_CURVE_POINTS, EditLimits};
use crate::point::CurvePoint;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Mindestanzahl an Punkten einer Kurve.
pub const MIN_POINT_COUNT: usize = 2;

/// Rundungstoleranz beim Vergleich von Punktabständen.
pub const SPACING_EPSILON: f64 = 1e-9;

/// Geordnete Punktfolge einer Rückstoß-Verteilung.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoilCurve {
    /// Punkte, aufsteigend nach x sortiert
    points: Vec<CurvePoint>,
    /// Nächste freie Punkt-ID
    next_point_id: u64,
}

impl Default for RecoilCurve {
    fn default() -> Self {
        Self::with_default_points()
    }
}

impl RecoilCurve {
    /// Erstellt die Standardkurve `(0, 1)` bis `(35, 1)`.
    pub fn with_default_points() -> Self {
        let mut curve = Self {
            points: Vec::with_capacity(DEFAULT_CURVE_POINTS.len()),
            next_point_id: 1,
        };
        for [x, y] in DEFAULT_CURVE_POINTS {
            curve.push_unchecked(DVec2::new(x, y));
        }
        curve
    }

    /// Erstellt eine Kurve aus Koordinaten mit den Standard-Grenzwerten.
    pub fn from_coordinates(coordinates: &[[f64; 2]]) -> EditResult<Self> {
        Self::from_coordinates_with_limits(coordinates, &EditLimits::default())
    }

    /// Erstellt eine Kurve aus Koordinaten (werden nach x sortiert).
    ///
    /// y unter `y_min` wird auf `y_min` angehoben. Weniger als zwei Punkte,
    /// negative oder nicht endliche Koordinaten und Abstände unter `x_res`
    /// werden abgelehnt.
    pub fn from_coordinates_with_limits(
        coordinates: &[[f64; 2]],
        limits: &EditLimits,
    ) -> EditResult<Self> {
        if coordinates.len() < MIN_POINT_COUNT {
            return Err(EditError::MinimumPointCount {
                remaining: coordinates.len(),
            });
        }
        let mut sorted: Vec<[f64; 2]> = coordinates.to_vec();
        sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));

        let mut curve = Self {
            points: Vec::with_capacity(sorted.len()),
            next_point_id: 1,
        };
        for [x, y] in sorted {
            let y = if y.is_finite() { y.max(limits.y_min) } else { y };
            curve.push_unchecked(DVec2::new(x, y));
        }
        curve.check_limits(limits)?;
        Ok(curve)
    }

    /// Prüft die Kurven-Invarianten gegen die gegebenen Grenzwerte.
    ///
    /// Abstände werden mit einer Toleranz von `SPACING_EPSILON` verglichen,
    /// da geklemmte Werte als `left + x_res` gerechnet werden.
    pub fn check_limits(&self, limits: &EditLimits) -> EditResult<()> {
        for point in &self.points {
            let (x, y) = (point.x(), point.y());
            if !x.is_finite() || !y.is_finite() || x < 0.0 || y < limits.y_min {
                return Err(EditError::InvalidCoordinate { x, y });
            }
        }
        for pair in self.points.windows(2) {
            if pair[1].x() - pair[0].x() < limits.x_res - SPACING_EPSILON {
                return Err(EditError::InsufficientSpace {
                    x: pair[1].x(),
                    x_res: limits.x_res,
                });
            }
        }
        Ok(())
    }

    /// Kopiert die Koordinaten in eine neue Kurve mit frischen IDs und leerer Historie.
    pub fn duplicate(&self) -> Self {
        let mut curve = Self {
            points: Vec::with_capacity(self.points.len()),
            next_point_id: 1,
        };
        for point in &self.points {
            curve.push_unchecked(point.position);
        }
        curve
    }

    fn push_unchecked(&mut self, position: DVec2) -> u64 {
        let id = self.next_point_id;
        self.next_point_id += 1;
        self.points.push(CurvePoint::new(id, position));
        id
    }

    /// Alle Punkte in x-Reihenfolge.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn die Kurve keine Punkte enthält.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Alle x-Werte in Kurvenreihenfolge.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(CurvePoint::x).collect()
    }

    /// Alle y-Werte in Kurvenreihenfolge.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(CurvePoint::y).collect()
    }

    /// Koordinaten als `[x, y]`-Paare.
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x(), p.y()]).collect()
    }

    /// Position eines Punktes in der Kurve.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.points.iter().position(|p| p.id == id)
    }

    /// Punkt per ID.
    pub fn point(&self, id: u64) -> Option<&CurvePoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Mutable Punkt-Referenz per ID.
    pub fn point_mut(&mut self, id: u64) -> Option<&mut CurvePoint> {
        self.points.iter_mut().find(|p| p.id == id)
    }

    /// Punkt per Index (wie in der Darstellung getroffen).
    pub fn point_at(&self, index: usize) -> Option<&CurvePoint> {
        self.points.get(index)
    }

    /// Letzter (rechtester) Punkt.
    pub fn last(&self) -> Option<&CurvePoint> {
        self.points.last()
    }

    /// Prüft, ob der Punkt der rechteste der Kurve ist.
    pub fn is_last(&self, id: u64) -> bool {
        self.points.last().is_some_and(|p| p.id == id)
    }

    /// Linker Nachbar eines Punktes.
    pub fn left_neighbor(&self, id: u64) -> Option<&CurvePoint> {
        let index = self.index_of(id)?;
        index.checked_sub(1).and_then(|i| self.points.get(i))
    }

    /// Rechter Nachbar eines Punktes.
    pub fn right_neighbor(&self, id: u64) -> Option<&CurvePoint> {
        let index = self.index_of(id)?;
        self.points.get(index + 1)
    }

    /// IDs aller Punkte mit `xmin <= x <= xmax`.
    pub fn points_in_span(&self, xmin: f64, xmax: f64) -> Vec<u64> {
        let (lo, hi) = if xmin <= xmax {
            (xmin, xmax)
        } else {
            (xmax, xmin)
        };
        self.points
            .iter()
            .filter(|p| lo <= p.x() && p.x() <= hi)
            .map(|p| p.id)
            .collect()
    }

    /// Linkester Punkt unter den gegebenen IDs.
    pub fn leftmost_of<'a>(&self, ids: impl IntoIterator<Item = &'a u64>) -> Option<u64> {
        let mut leftmost: Option<(usize, u64)> = None;
        for &id in ids {
            if let Some(index) = self.index_of(id) {
                if leftmost.is_none_or(|(best, _)| index < best) {
                    leftmost = Some((index, id));
                }
            }
        }
        leftmost.map(|(_, id)| id)
    }

    /// Fügt einen Punkt zwischen seinen x-Nachbarn ein.
    ///
    /// Liegt der Kandidat näher als `x_res` an einem Nachbarn, wird er auf
    /// genau `x_res` Abstand gerückt, aber nur, wenn zum anderen Nachbarn
    /// mindestens `2 * x_res` Platz bleibt. Sonst wird abgelehnt und die Kurve
    /// bleibt unverändert. Kandidaten außerhalb des x-Bereichs der Kurve
    /// haben keinen Nachbarn auf einer Seite und werden ebenfalls abgelehnt.
    pub fn add_point(&mut self, candidate: DVec2, limits: &EditLimits) -> EditResult<u64> {
        let x_res = limits.x_res;
        let rejected = EditError::InsufficientSpace {
            x: candidate.x,
            x_res,
        };

        if !candidate.x.is_finite() || !candidate.y.is_finite() {
            return Err(rejected);
        }

        // Gleiche x-Werte landen rechts vom bestehenden Punkt
        let insert_at = self.points.partition_point(|p| p.x() <= candidate.x);
        if insert_at == 0 || insert_at == self.points.len() {
            return Err(rejected);
        }
        let left_x = self.points[insert_at - 1].x();
        let right_x = self.points[insert_at].x();

        let mut x = candidate.x;
        if x - left_x < x_res {
            if right_x - x < 2.0 * x_res {
                return Err(rejected);
            }
            x = left_x + x_res;
        } else if right_x - x < x_res {
            if x - left_x < 2.0 * x_res {
                return Err(rejected);
            }
            x = right_x - x_res;
        }

        let y = candidate.y.max(limits.y_min);
        let id = self.next_point_id;
        self.next_point_id += 1;
        self.points
            .insert(insert_at, CurvePoint::new(id, DVec2::new(x, y)));
        Ok(id)
    }

    /// Entfernt alle gegebenen Punkte.
    ///
    /// Abgelehnt, wenn danach weniger als zwei Punkte übrig blieben.
    /// Unbekannte IDs zählen nicht mit.
    pub fn remove_points(&mut self, ids: &[u64]) -> EditResult<usize> {
        let removing = self
            .points
            .iter()
            .filter(|p| ids.contains(&p.id))
            .count();
        let remaining = self.points.len() - removing;
        if remaining < MIN_POINT_COUNT {
            return Err(EditError::MinimumPointCount { remaining });
        }
        self.points.retain(|p| !ids.contains(&p.id));
        Ok(removing)
    }

    /// Setzt die x-Koordinate eines Punktes, ohne Nachbarn zu überschreiten.
    ///
    /// Der angewendete Wert liegt immer im Fenster
    /// `[left.x + x_res, right.x - x_res]` (ohne linken Nachbarn ab 0).
    /// Bei aktiver Bearbeitungssperre bleibt x des letzten Punktes unverändert.
    pub fn set_point_x(
        &mut self,
        id: u64,
        requested_x: f64,
        limits: &EditLimits,
        edit_lock: bool,
    ) -> EditResult<f64> {
        let index = self.index_of(id).ok_or(EditError::UnknownPoint(id))?;
        let current = self.points[index].x();
        if edit_lock && index + 1 == self.points.len() {
            return Ok(current);
        }
        if !requested_x.is_finite() {
            return Ok(current);
        }

        let left = index
            .checked_sub(1)
            .map(|i| self.points[i].x() + limits.x_res);
        let right = self.points.get(index + 1).map(|p| p.x() - limits.x_res);

        let applied = match (left, right) {
            (None, None) => requested_x.max(0.0),
            (None, Some(max)) => requested_x.max(0.0).min(max),
            (Some(min), None) => requested_x.max(min),
            (Some(min), Some(max)) => {
                if requested_x < min {
                    min
                } else if requested_x > max {
                    max
                } else {
                    requested_x
                }
            }
        };

        self.points[index].position.x = applied;
        Ok(applied)
    }

    /// Setzt die y-Koordinate eines Punktes ohne Prüfung.
    pub fn set_point_y(&mut self, id: u64, requested_y: f64) -> EditResult<f64> {
        let point = self.point_mut(id).ok_or(EditError::UnknownPoint(id))?;
        point.position.y = requested_y;
        Ok(requested_y)
    }

    /// Setzt eine Position ohne Prüfung (Drag-Ergebnis ist bereits geprüft).
    pub(crate) fn set_position(&mut self, id: u64, position: DVec2) -> bool {
        match self.point_mut(id) {
            Some(point) => {
                point.position = position;
                true
            }
            None => false,
        }
    }
}

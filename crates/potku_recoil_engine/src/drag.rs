//! Drag-Sitzung: gemeinsames Verschieben einer Punktgruppe.
//!
//! Beim Start werden Ursprungspositionen, Zeiger-Ursprung, Abstände zum
//! linkesten Gruppenmitglied und zum niedrigsten Mitglied sowie die festen
//! Nachbarpositionen erfasst. Jedes Update verschiebt die Gruppe uniform und
//! korrigiert danach in dieser Reihenfolge:
//! 1. Nachbar-Kollision (Mindestabstand `x_res` zu nicht gezogenen Nachbarn)
//! 2. Achsengrenze (x >= 0)
//! 3. y-Untergrenze (niedrigstes Mitglied >= `y_min`)
//!
//! Alle Korrekturen verschieben die ganze Gruppe, relative Abstände bleiben
//! erhalten. Nachbarn gelten für die Dauer der Sitzung als unbeweglich.

use crate::curve::RecoilCurve;
use crate::limits::EditLimits;
use glam::DVec2;

/// Gruppenmitglied mit beim Start erfassten Offsets.
#[derive(Debug, Clone, PartialEq)]
struct DragMember {
    point_id: u64,
    origin: DVec2,
    /// x-Abstand zum linkesten beweglichen Mitglied
    x_from_leftmost: f64,
    /// y-Abstand zum niedrigsten Mitglied
    y_above_lowest: f64,
    /// x bleibt fix (gesperrter letzter Punkt)
    x_locked: bool,
}

/// Transiente Drag-Sitzung (Start → Updates → Ende beim Loslassen).
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    members: Vec<DragMember>,
    pointer_origin: DVec2,
    /// x des linkesten beweglichen Mitglieds beim Start
    leftmost_x: f64,
    /// y des niedrigsten Mitglieds beim Start
    lowest_y: f64,
    /// Zulässiger Bereich für die horizontale Verschiebung
    min_dx: f64,
    max_dx: f64,
}

impl DragSession {
    /// Startet eine Sitzung für die gegebenen Punkte.
    ///
    /// Unbekannte IDs werden ignoriert; ohne bekannte Punkte gibt es keine
    /// Sitzung. Bei aktiver Bearbeitungssperre bewegt sich der letzte Punkt
    /// nur vertikal und begrenzt die anderen Mitglieder wie ein Nachbar.
    pub fn begin(
        curve: &RecoilCurve,
        point_ids: &[u64],
        pointer: DVec2,
        limits: &EditLimits,
        edit_lock: bool,
    ) -> Option<Self> {
        let mut indices: Vec<usize> = point_ids
            .iter()
            .filter_map(|&id| curve.index_of(id))
            .collect();
        indices.sort_unstable();
        indices.dedup();
        if indices.is_empty() {
            return None;
        }

        let points = curve.points();
        let last_index = points.len() - 1;
        let locked_index = edit_lock.then_some(last_index);
        let is_moving_x = |index: usize| indices.contains(&index) && Some(index) != locked_index;

        // Niedrigstes Mitglied per linearem Scan, bei Gleichstand das erste
        let mut lowest = indices[0];
        for &index in &indices[1..] {
            if points[index].y() < points[lowest].y() {
                lowest = index;
            }
        }
        let lowest_y = points[lowest].y();

        let leftmost_x = indices
            .iter()
            .copied()
            .find(|&i| is_moving_x(i))
            .map_or(points[indices[0]].x(), |i| points[i].x());

        // Horizontale Grenzen aus den Nachbarn jedes beweglichen Mitglieds,
        // die selbst nicht horizontal mitbewegt werden.
        let mut min_dx = -leftmost_x;
        let mut max_dx = f64::INFINITY;
        for &index in &indices {
            if !is_moving_x(index) {
                continue;
            }
            let x = points[index].x();
            if index > 0 && !is_moving_x(index - 1) {
                min_dx = min_dx.max(points[index - 1].x() + limits.x_res - x);
            }
            if index < last_index && !is_moving_x(index + 1) {
                max_dx = max_dx.min(points[index + 1].x() - limits.x_res - x);
            }
        }

        let members = indices
            .iter()
            .map(|&index| {
                let point = &points[index];
                DragMember {
                    point_id: point.id,
                    origin: point.position,
                    x_from_leftmost: point.x() - leftmost_x,
                    y_above_lowest: point.y() - lowest_y,
                    x_locked: !is_moving_x(index),
                }
            })
            .collect();

        Some(Self {
            members,
            pointer_origin: pointer,
            leftmost_x,
            lowest_y,
            min_dx,
            max_dx,
        })
    }

    /// Zeiger-Position beim Start.
    pub fn pointer_origin(&self) -> DVec2 {
        self.pointer_origin
    }

    /// Berechnet die geprüften neuen Koordinaten für eine Zeigerposition.
    pub fn resolve(&self, pointer: DVec2, limits: &EditLimits) -> Vec<(u64, DVec2)> {
        let delta = pointer - self.pointer_origin;

        let mut dx = delta.x;
        if dx > self.max_dx {
            dx = self.max_dx;
        }
        if dx < self.min_dx {
            dx = self.min_dx;
        }
        let leftmost_new_x = self.leftmost_x + dx;

        let mut lowest_new_y = self.lowest_y + delta.y;
        if lowest_new_y < limits.y_min {
            lowest_new_y = limits.y_min;
        }

        self.members
            .iter()
            .map(|member| {
                let x = if member.x_locked {
                    member.origin.x
                } else {
                    leftmost_new_x + member.x_from_leftmost
                };
                let y = lowest_new_y + member.y_above_lowest;
                (member.point_id, DVec2::new(x, y))
            })
            .collect()
    }

    /// Wendet eine Zeigerposition auf die Kurve an und liefert die neuen Koordinaten.
    pub fn update(
        &self,
        curve: &mut RecoilCurve,
        pointer: DVec2,
        limits: &EditLimits,
    ) -> Vec<(u64, DVec2)> {
        let resolved = self.resolve(pointer, limits);
        for &(id, position) in &resolved {
            if !curve.set_position(id, position) {
                log::debug!("Drag: Punkt {} nicht mehr in der Kurve", id);
            }
        }
        resolved
    }
}

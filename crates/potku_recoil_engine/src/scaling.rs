//! Koordinaten-Eingabe und Multiplikation mit Undo.
//!
//! Eingaben laufen über denselben Pfad wie die numerische Direkteingabe:
//! x über [`RecoilCurve::set_point_x`], y über [`RecoilCurve::set_point_y`]
//! mit dem Eingabebereich `y >= y_min`.

use crate::curve::RecoilCurve;
use crate::error::{EditError, EditResult};
use crate::limits::EditLimits;
use crate::point::Axis;

/// Parst den Zwischenablage-Text als Multiplikator.
pub fn parse_multiplier(text: &str) -> EditResult<f64> {
    match text.trim().parse::<f64>() {
        Ok(ratio) if ratio.is_finite() => Ok(ratio),
        _ => Err(EditError::InvalidMultiplier(text.to_string())),
    }
}

/// Rundet auf die gegebene Anzahl Nachkommastellen.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Wendet einen Eingabewert auf eine Achse an und liefert den tatsächlich gesetzten Wert.
pub fn set_coordinate_entry(
    curve: &mut RecoilCurve,
    point_id: u64,
    axis: Axis,
    value: f64,
    limits: &EditLimits,
    edit_lock: bool,
) -> EditResult<f64> {
    match axis {
        Axis::X => curve.set_point_x(point_id, value, limits, edit_lock),
        Axis::Y => {
            let value = if value.is_finite() {
                value.max(limits.y_min)
            } else {
                limits.y_min
            };
            curve.set_point_y(point_id, value)
        }
    }
}

/// Multipliziert eine Koordinate und legt den alten Wert auf den Undo-Stack.
///
/// Ein gesperrtes x des letzten Punktes bleibt unverändert und erzeugt
/// keinen Undo-Eintrag.
pub fn multiply_coordinate(
    curve: &mut RecoilCurve,
    point_id: u64,
    axis: Axis,
    ratio: f64,
    limits: &EditLimits,
    edit_lock: bool,
) -> EditResult<f64> {
    let current = curve
        .point(point_id)
        .ok_or(EditError::UnknownPoint(point_id))?
        .coordinate(axis);

    if axis == Axis::X && edit_lock && curve.is_last(point_id) {
        return Ok(current);
    }

    let new_value = round_to_decimals(current * ratio, limits.multiply_decimals);
    if let Some(point) = curve.point_mut(point_id) {
        point.push_history(axis, current, limits.history_depth);
    }
    set_coordinate_entry(curve, point_id, axis, new_value, limits, edit_lock)
}

/// Stellt den letzten Wert vor einer Multiplikation wieder her.
///
/// Leerer Stack oder gesperrtes x des letzten Punktes: `Ok(None)`, Koordinate
/// und Undo-Stack bleiben unverändert.
pub fn undo_coordinate(
    curve: &mut RecoilCurve,
    point_id: u64,
    axis: Axis,
    limits: &EditLimits,
    edit_lock: bool,
) -> EditResult<Option<f64>> {
    if axis == Axis::X && edit_lock && curve.is_last(point_id) {
        return Ok(None);
    }
    let point = curve
        .point_mut(point_id)
        .ok_or(EditError::UnknownPoint(point_id))?;
    let Some(previous) = point.pop_history(axis) else {
        return Ok(None);
    };
    set_coordinate_entry(curve, point_id, axis, previous, limits, edit_lock).map(Some)
}

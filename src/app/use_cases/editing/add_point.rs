//! Use-Case: Punkt per Strg+Klick auf der Linie einfügen.

use super::mutate_active_curve;
use crate::app::AppState;
use glam::DVec2;
use potku_recoil_engine::{EditError, EditResult, RecoilCurve};

/// Lineare Interpolation der Kurve an der Stelle `x`.
///
/// Außerhalb des x-Bereichs der Kurve gibt es keinen Wert.
pub fn line_y_at(curve: &RecoilCurve, x: f64) -> Option<f64> {
    curve.points().windows(2).find_map(|pair| {
        let (a, b) = (pair[0].position, pair[1].position);
        if x < a.x || x > b.x {
            return None;
        }
        let span = b.x - a.x;
        if span <= 0.0 {
            return Some(a.y);
        }
        Some(a.y + (b.y - a.y) * (x - a.x) / span)
    })
}

/// Fügt einen Punkt an der Klickposition ein und selektiert ihn allein.
///
/// Die bisherige Selektion wird in jedem Fall aufgehoben. Der Undo-Schritt
/// des Einfügens enthält sie noch, ein eigener Schritt dafür entsteht nicht.
///
/// Klicks abseits der Linie (außerhalb der Pick-Toleranz) werden ignoriert:
/// `Ok(None)`. Liegt die Position außerhalb des x-Bereichs oder ist kein
/// Platz zwischen den Nachbarn, wird mit `InsufficientSpace` abgelehnt.
pub fn add_point_on_line(state: &mut AppState, position: DVec2) -> EditResult<Option<u64>> {
    let curve = state.active_curve().ok_or(EditError::NoActiveRecoil)?;
    if let Some(line_y) = line_y_at(curve, position.x) {
        let on_line = DVec2::new(position.x, line_y);
        if state.options.pick_distance(on_line, position) > 1.0 {
            log::debug!("Strg+Klick nicht auf der Linie: {:?}", position);
            state.selection.clear();
            return Ok(None);
        }
    }

    let added = mutate_active_curve(state, |curve, limits, _| curve.add_point(position, limits));
    let id = match added {
        Ok(id) => id,
        Err(error) => {
            state.selection.clear();
            return Err(error);
        }
    };
    state.selection.replace([id]);
    log::info!("Punkt {} bei ({:.3}, {:.4}) eingefügt", id, position.x, position.y);
    Ok(Some(id))
}

//! Use-Cases für Element-Simulationen und Rückstoß-Elemente.

use crate::app::history::Snapshot;
use crate::app::AppState;
use potku_recoil_engine::{
    EditError, EditResult, Element, RecoilInfo, RecoilKey, Simulation, Target,
};
use std::sync::Arc;

/// Führt eine Mutation auf der Simulation aus; Undo-Snapshot nur bei Erfolg.
fn mutate_simulation<T>(
    state: &mut AppState,
    mutation: impl FnOnce(&mut Simulation) -> EditResult<T>,
) -> EditResult<T> {
    let snap = Snapshot::from_state(state);
    let result = mutation(Arc::make_mut(&mut state.simulation))?;
    state.history.record_snapshot(snap);
    Ok(result)
}

/// Führt eine Mutation aus, die nicht abgelehnt werden kann.
fn extend_simulation<T>(
    state: &mut AppState,
    mutation: impl FnOnce(&mut Simulation) -> T,
) -> T {
    state.record_undo_snapshot();
    mutation(Arc::make_mut(&mut state.simulation))
}

/// Setzt das aktive Rückstoß-Element und verwirft Selektion und Drag.
fn activate(state: &mut AppState, key: Option<RecoilKey>) {
    state.active_recoil = key;
    state.selection.clear();
    state.drag = None;
    state.drag_undo = None;
}

/// Legt eine Element-Simulation mit der konfigurierten Startkurve an.
///
/// Ist noch kein Rückstoß-Element aktiv, wird das neue Haupt-Element aktiv.
pub fn add_element_simulation(state: &mut AppState, element: Element) -> RecoilKey {
    let curve = state.options.start_curve();
    let label = element.to_string();
    let key = extend_simulation(state, |sim| {
        sim.add_element_simulation_with_curve(element, curve)
    });
    if state.active_recoil.is_none() {
        activate(state, Some(key));
    }
    log::info!("Element-Simulation {} angelegt ({})", key.simulation_id, label);
    key
}

/// Entfernt eine Element-Simulation samt aller Rückstoß-Elemente.
pub fn remove_element_simulation(state: &mut AppState, simulation_id: u64) -> EditResult<()> {
    let removed = mutate_simulation(state, |sim| sim.remove_element_simulation(simulation_id))?;
    if state
        .active_recoil
        .is_some_and(|key| key.simulation_id == simulation_id)
    {
        activate(state, None);
    }
    log::info!(
        "Element-Simulation {} mit {} Rückstoß-Elementen entfernt",
        simulation_id,
        removed.recoil_elements().len()
    );
    Ok(())
}

/// Fügt einer Element-Simulation ein weiteres Rückstoß-Element hinzu.
pub fn add_recoil_element(state: &mut AppState, simulation_id: u64) -> EditResult<RecoilKey> {
    let key = mutate_simulation(state, |sim| sim.add_recoil_element(simulation_id))?;
    log::info!("Rückstoß-Element {} angelegt", key);
    Ok(key)
}

/// Entfernt ein weiteres Rückstoß-Element.
///
/// War es aktiv, wird das Haupt-Element derselben Element-Simulation aktiv.
pub fn remove_recoil_element(state: &mut AppState, key: RecoilKey) -> EditResult<()> {
    let removed = mutate_simulation(state, |sim| sim.remove_recoil_element(key))?;
    if state.active_recoil == Some(key) {
        let main = state
            .simulation
            .element_simulation(key.simulation_id)
            .map(|sim| RecoilKey {
                simulation_id: key.simulation_id,
                recoil_id: sim.main_recoil().id,
            });
        activate(state, main);
    }
    log::info!("Rückstoß-Element {} ({}) entfernt", key, removed.name);
    Ok(())
}

/// Wechselt das aktive Rückstoß-Element.
///
/// Selektion und Drag werden verworfen; die Bearbeitungssperre folgt dem
/// gewählten Element.
pub fn choose_recoil(state: &mut AppState, key: RecoilKey) -> EditResult<()> {
    let recoil = state
        .simulation
        .recoil(key)
        .ok_or(EditError::UnknownRecoil(key))?;
    log::info!(
        "Rückstoß-Element {} gewählt (Sperre: {})",
        recoil.name,
        recoil.edit_lock
    );
    activate(state, Some(key));
    Ok(())
}

/// Setzt oder löst die Bearbeitungssperre des aktiven Rückstoß-Elements.
pub fn set_edit_lock(state: &mut AppState, locked: bool) -> EditResult<()> {
    let key = state.active_recoil.ok_or(EditError::NoActiveRecoil)?;
    if state.edit_lock() == locked {
        log::debug!("Bearbeitungssperre unverändert ({})", locked);
        return Ok(());
    }
    mutate_simulation(state, |sim| sim.set_edit_lock(key, locked))?;
    state.drag = None;
    state.drag_undo = None;
    if locked {
        log::info!("Bearbeitungssperre für {} gesetzt", key);
    } else {
        log::info!("Volle Bearbeitung für {} freigeschaltet", key);
    }
    Ok(())
}

/// Übernimmt Name, Beschreibung und Referenzdichte des aktiven Rückstoß-Elements.
pub fn update_recoil_info(state: &mut AppState, info: RecoilInfo) -> EditResult<()> {
    let key = state.active_recoil.ok_or(EditError::NoActiveRecoil)?;
    mutate_simulation(state, |sim| {
        let recoil = sim.recoil_mut(key).ok_or(EditError::UnknownRecoil(key))?;
        recoil.apply_info(&info);
        Ok(())
    })?;
    log::info!("Info für Rückstoß-Element {} aktualisiert", key);
    Ok(())
}

/// Setzt den Probenaufbau für den Element-Export.
pub fn set_target(state: &mut AppState, target: Target) {
    log::info!("Probenaufbau mit {} Schichten gesetzt", target.layers.len());
    state.ui.target = target;
}

/// Legt für jedes noch nicht vorhandene Target-Element eine Element-Simulation an.
pub fn export_target_elements(state: &mut AppState) -> Vec<RecoilKey> {
    let target = state.ui.target.clone();
    let curve = state.options.start_curve();
    let missing = target
        .unique_elements()
        .into_iter()
        .filter(|e| !state.simulation.contains_element(e))
        .count();
    if missing == 0 {
        log::debug!("Alle Target-Elemente sind bereits vorhanden");
        return Vec::new();
    }

    let added = extend_simulation(state, |sim| sim.export_target_elements(&target, &curve));
    if state.active_recoil.is_none() {
        activate(state, added.first().copied());
    }
    log::info!("{} Elemente aus dem Probenaufbau übernommen", added.len());
    added
}

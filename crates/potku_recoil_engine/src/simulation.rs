//! Simulation: geordnete Sammlung von Element-Simulationen.
//!
//! Die UI adressiert Rückstoß-Elemente ausschließlich über stabile
//! [`RecoilKey`]s statt über Widget-Identitäten.

use crate::curve::RecoilCurve;
use crate::element::{Element, ElementSimulation, RecoilElement};
use crate::error::{EditError, EditResult};
use crate::limits::EditLimits;
use crate::target::Target;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stabiler Schlüssel eines Rückstoß-Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecoilKey {
    /// ID der Element-Simulation
    pub simulation_id: u64,
    /// ID des Rückstoß-Elements innerhalb der Element-Simulation
    pub recoil_id: u64,
}

impl fmt::Display for RecoilKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.simulation_id, self.recoil_id)
    }
}

/// Alle Element-Simulationen einer Simulation, in Einfügereihenfolge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Simulation {
    element_simulations: IndexMap<u64, ElementSimulation>,
    next_simulation_id: u64,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulation {
    /// Erstellt eine leere Simulation.
    pub fn new() -> Self {
        Self {
            element_simulations: IndexMap::new(),
            next_simulation_id: 1,
        }
    }

    /// Anzahl der Element-Simulationen.
    pub fn len(&self) -> usize {
        self.element_simulations.len()
    }

    /// Gibt `true` zurück, wenn keine Element-Simulation vorhanden ist.
    pub fn is_empty(&self) -> bool {
        self.element_simulations.is_empty()
    }

    /// Iteriert in Einfügereihenfolge über alle Element-Simulationen.
    pub fn element_simulations(&self) -> impl Iterator<Item = &ElementSimulation> {
        self.element_simulations.values()
    }

    /// Element-Simulation per ID.
    pub fn element_simulation(&self, id: u64) -> Option<&ElementSimulation> {
        self.element_simulations.get(&id)
    }

    /// Legt eine neue Element-Simulation mit Standardkurve an.
    /// Gibt den Schlüssel des Haupt-Rückstoß-Elements zurück.
    pub fn add_element_simulation(&mut self, element: Element) -> RecoilKey {
        self.add_element_simulation_with_curve(element, RecoilCurve::default())
    }

    /// Legt eine neue Element-Simulation mit vorgegebener Startkurve an.
    pub fn add_element_simulation_with_curve(
        &mut self,
        element: Element,
        curve: RecoilCurve,
    ) -> RecoilKey {
        let id = self.next_simulation_id;
        self.next_simulation_id += 1;
        let sim = ElementSimulation::with_main_curve(id, element, curve);
        let key = RecoilKey {
            simulation_id: id,
            recoil_id: sim.main_recoil().id,
        };
        self.element_simulations.insert(id, sim);
        key
    }

    /// Entfernt eine Element-Simulation samt aller Rückstoß-Elemente.
    pub fn remove_element_simulation(&mut self, id: u64) -> EditResult<ElementSimulation> {
        self.element_simulations
            .shift_remove(&id)
            .ok_or(EditError::UnknownElementSimulation(id))
    }

    /// Fügt einer Element-Simulation ein weiteres Rückstoß-Element hinzu.
    pub fn add_recoil_element(&mut self, simulation_id: u64) -> EditResult<RecoilKey> {
        let sim = self
            .element_simulations
            .get_mut(&simulation_id)
            .ok_or(EditError::UnknownElementSimulation(simulation_id))?;
        let recoil_id = sim.add_recoil_element();
        Ok(RecoilKey {
            simulation_id,
            recoil_id,
        })
    }

    /// Entfernt ein weiteres Rückstoß-Element.
    pub fn remove_recoil_element(&mut self, key: RecoilKey) -> EditResult<RecoilElement> {
        let sim = self
            .element_simulations
            .get_mut(&key.simulation_id)
            .ok_or(EditError::UnknownRecoil(key))?;
        sim.remove_recoil_element(key.recoil_id)
    }

    /// Rückstoß-Element per Schlüssel.
    pub fn recoil(&self, key: RecoilKey) -> Option<&RecoilElement> {
        self.element_simulations
            .get(&key.simulation_id)?
            .recoil(key.recoil_id)
    }

    /// Mutable Rückstoß-Element per Schlüssel.
    pub fn recoil_mut(&mut self, key: RecoilKey) -> Option<&mut RecoilElement> {
        self.element_simulations
            .get_mut(&key.simulation_id)?
            .recoil_mut(key.recoil_id)
    }

    /// Prüft, ob der Schlüssel das Haupt-Rückstoß-Element seiner Element-Simulation ist.
    pub fn is_main_recoil(&self, key: RecoilKey) -> bool {
        self.element_simulations
            .get(&key.simulation_id)
            .is_some_and(|sim| sim.is_main_recoil(key.recoil_id))
    }

    /// Alle Rückstoß-Schlüssel in Anzeigereihenfolge.
    pub fn recoil_keys(&self) -> Vec<RecoilKey> {
        self.element_simulations
            .values()
            .flat_map(|sim| {
                sim.recoil_elements().iter().map(move |r| RecoilKey {
                    simulation_id: sim.id,
                    recoil_id: r.id,
                })
            })
            .collect()
    }

    /// Prüft, ob ein Rückstoß-Element mit gleichem Symbol und Isotop existiert.
    pub fn contains_element(&self, element: &Element) -> bool {
        self.element_simulations
            .values()
            .flat_map(|sim| sim.recoil_elements())
            .any(|r| r.element == *element)
    }

    /// Legt für jedes noch nicht vorhandene Target-Element eine Element-Simulation an.
    pub fn export_target_elements(
        &mut self,
        target: &Target,
        curve: &RecoilCurve,
    ) -> Vec<RecoilKey> {
        let missing: Vec<Element> = target
            .unique_elements()
            .into_iter()
            .filter(|e| !self.contains_element(e))
            .cloned()
            .collect();
        missing
            .into_iter()
            .map(|element| self.add_element_simulation_with_curve(element, curve.duplicate()))
            .collect()
    }

    /// Prüft alle Kurven gegen neue Grenzwerte, bevor diese übernommen werden.
    pub fn check_limits(&self, limits: &EditLimits) -> EditResult<()> {
        self.element_simulations
            .values()
            .flat_map(|sim| sim.recoil_elements())
            .try_for_each(|recoil| recoil.curve.check_limits(limits))
    }

    /// Setzt oder löst die Bearbeitungssperre eines Rückstoß-Elements.
    pub fn set_edit_lock(&mut self, key: RecoilKey, locked: bool) -> EditResult<()> {
        let recoil = self.recoil_mut(key).ok_or(EditError::UnknownRecoil(key))?;
        recoil.edit_lock = locked;
        Ok(())
    }
}

//! Elemente, Rückstoß-Elemente und Element-Simulationen.
//!
//! Eine Element-Simulation besitzt genau ein Haupt-Rückstoß-Element und
//! beliebig viele weitere. Jedes Rückstoß-Element besitzt eine eigene Kurve.

use crate::curve::RecoilCurve;
use crate::error::{EditError, EditResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard-Referenzdichte neuer Rückstoß-Elemente (e22 at/cm²).
pub const DEFAULT_REFERENCE_DENSITY: f64 = 4.98;
/// Name des Haupt-Rückstoß-Elements.
pub const MAIN_RECOIL_NAME: &str = "Default";

/// Chemisches Element mit optionaler Massenzahl.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element {
    /// Elementsymbol, z.B. `He`
    pub symbol: String,
    /// Massenzahl des Isotops (None = Standardisotop, extern aufgelöst)
    #[serde(default)]
    pub isotope: Option<u32>,
}

impl Element {
    /// Erstellt ein Element.
    pub fn new(symbol: impl Into<String>, isotope: Option<u32>) -> Self {
        Self {
            symbol: symbol.into(),
            isotope,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.isotope {
            Some(isotope) => write!(f, "{}{}", isotope, self.symbol),
            None => write!(f, "{}", self.symbol),
        }
    }
}

/// Änderbare Info-Felder eines Rückstoß-Elements (Info-Dialog).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoilInfo {
    /// Anzeigename
    pub name: String,
    /// Freitext-Beschreibung
    pub description: String,
    /// Referenzdichte (e22 at/cm²)
    pub reference_density: f64,
}

/// Rückstoß-Element mit seiner Konzentrationskurve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoilElement {
    /// Stabile ID innerhalb der Element-Simulation
    pub id: u64,
    /// Element
    pub element: Element,
    /// Anzeigename
    pub name: String,
    /// Freitext-Beschreibung
    pub description: String,
    /// Referenzdichte (e22 at/cm²)
    pub reference_density: f64,
    /// Bearbeitungssperre: x des letzten Punktes ist fix
    pub edit_lock: bool,
    /// Konzentrationskurve
    pub curve: RecoilCurve,
}

impl RecoilElement {
    /// Erstellt ein Rückstoß-Element mit der gegebenen Kurve.
    pub fn new(id: u64, element: Element, name: impl Into<String>, curve: RecoilCurve) -> Self {
        Self {
            id,
            element,
            name: name.into(),
            description: String::new(),
            reference_density: DEFAULT_REFERENCE_DENSITY,
            edit_lock: false,
            curve,
        }
    }

    /// Übernimmt die Werte aus dem Info-Dialog.
    pub fn apply_info(&mut self, info: &RecoilInfo) {
        self.name = info.name.clone();
        self.description = info.description.clone();
        self.reference_density = info.reference_density;
    }

    /// Aktuelle Info-Werte.
    pub fn info(&self) -> RecoilInfo {
        RecoilInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            reference_density: self.reference_density,
        }
    }
}

/// Element-Simulation: Haupt-Rückstoß-Element plus weitere Rückstöße.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSimulation {
    /// Stabile ID innerhalb der Simulation
    pub id: u64,
    /// Namenspräfix für zugehörige Dateien (z.B. `4He`)
    pub name_prefix: String,
    /// Rückstoß-Elemente; Index 0 ist das Haupt-Rückstoß-Element
    recoil_elements: Vec<RecoilElement>,
    /// Nächste Nummer für `Default-N`-Namen
    running_recoil_index: u32,
    /// Nächste freie Rückstoß-ID
    next_recoil_id: u64,
}

impl ElementSimulation {
    /// Erstellt eine Element-Simulation mit Standardkurve.
    pub fn new(id: u64, element: Element) -> Self {
        Self::with_main_curve(id, element, RecoilCurve::default())
    }

    /// Erstellt eine Element-Simulation, deren Haupt-Rückstoß-Element die gegebene Kurve besitzt.
    pub fn with_main_curve(id: u64, element: Element, curve: RecoilCurve) -> Self {
        let name_prefix = element.to_string();
        let main = RecoilElement::new(1, element, MAIN_RECOIL_NAME, curve);
        Self {
            id,
            name_prefix,
            recoil_elements: vec![main],
            running_recoil_index: 1,
            next_recoil_id: 2,
        }
    }

    /// Haupt-Rückstoß-Element.
    pub fn main_recoil(&self) -> &RecoilElement {
        &self.recoil_elements[0]
    }

    /// Alle Rückstoß-Elemente (Haupt-Element zuerst).
    pub fn recoil_elements(&self) -> &[RecoilElement] {
        &self.recoil_elements
    }

    /// Rückstoß-Element per ID.
    pub fn recoil(&self, recoil_id: u64) -> Option<&RecoilElement> {
        self.recoil_elements.iter().find(|r| r.id == recoil_id)
    }

    /// Mutable Rückstoß-Element per ID.
    pub fn recoil_mut(&mut self, recoil_id: u64) -> Option<&mut RecoilElement> {
        self.recoil_elements.iter_mut().find(|r| r.id == recoil_id)
    }

    /// Prüft, ob die ID zum Haupt-Rückstoß-Element gehört.
    pub fn is_main_recoil(&self, recoil_id: u64) -> bool {
        self.main_recoil().id == recoil_id
    }

    /// Fügt ein weiteres Rückstoß-Element `Default-N` mit einer Kopie der
    /// Hauptkurve hinzu und gibt dessen ID zurück.
    pub fn add_recoil_element(&mut self) -> u64 {
        let id = self.next_recoil_id;
        self.next_recoil_id += 1;
        let name = format!("Default-{}", self.running_recoil_index);
        self.running_recoil_index += 1;

        let main = self.main_recoil();
        let recoil = RecoilElement::new(id, main.element.clone(), name, main.curve.duplicate());
        self.recoil_elements.push(recoil);
        id
    }

    /// Entfernt ein weiteres Rückstoß-Element (nicht das Haupt-Element).
    pub fn remove_recoil_element(&mut self, recoil_id: u64) -> EditResult<RecoilElement> {
        if self.is_main_recoil(recoil_id) {
            return Err(EditError::MainRecoilElement(self.id));
        }
        let index = self
            .recoil_elements
            .iter()
            .position(|r| r.id == recoil_id)
            .ok_or(EditError::UnknownRecoil(crate::RecoilKey {
                simulation_id: self.id,
                recoil_id,
            }))?;
        Ok(self.recoil_elements.remove(index))
    }
}

//! Probenaufbau (Target) als Quelle für den Element-Export.

use crate::element::Element;
use serde::{Deserialize, Serialize};

/// Einzelne Schicht des Targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetLayer {
    /// Schichtname
    pub name: String,
    /// Dicke in nm
    pub thickness: f64,
    /// Enthaltene Elemente
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Schichtaufbau der Probe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Schichten von der Oberfläche nach innen
    #[serde(default)]
    pub layers: Vec<TargetLayer>,
}

impl Target {
    /// Alle Elemente aller Schichten in Schichtreihenfolge (ohne Duplikate).
    pub fn unique_elements(&self) -> Vec<&Element> {
        let mut unique: Vec<&Element> = Vec::new();
        for element in self.layers.iter().flat_map(|l| l.elements.iter()) {
            if !unique.contains(&element) {
                unique.push(element);
            }
        }
        unique
    }
}

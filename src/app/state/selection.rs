use indexmap::IndexSet;
use std::sync::Arc;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Menge der aktuell selektierten Punkt-IDs der aktiven Kurve
    /// (Arc für O(1)-Clone in Snapshots)
    pub selected_point_ids: Arc<IndexSet<u64>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_point_ids: Arc::new(IndexSet::new()),
        }
    }

    /// Gibt eine mutable Referenz auf das Set zurück (CoW: klont nur wenn nötig).
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<u64> {
        Arc::make_mut(&mut self.selected_point_ids)
    }

    /// Ersetzt die Selektion vollständig.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = u64>) {
        self.selected_point_ids = Arc::new(ids.into_iter().collect());
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        if !self.selected_point_ids.is_empty() {
            self.ids_mut().clear();
        }
    }

    /// Gibt `true` zurück, wenn kein Punkt selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_point_ids.is_empty()
    }

    /// Prüft, ob ein Punkt selektiert ist.
    pub fn contains(&self, id: u64) -> bool {
        self.selected_point_ids.contains(&id)
    }

    /// Selektierte IDs in Selektionsreihenfolge.
    pub fn ids(&self) -> Vec<u64> {
        self.selected_point_ids.iter().copied().collect()
    }
}

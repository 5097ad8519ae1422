use potku_recoil_engine::Target;

/// UI-bezogener Zustand ohne Widget-Typen
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Zuletzt gemeldeter Text der Zwischenablage (Multiplikator)
    pub clipboard_text: Option<String>,
    /// Letzte Ablehnung als Meldung für den Nutzer
    pub last_error: Option<String>,
    /// Probenaufbau für den Element-Export
    pub target: Target,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self::default()
    }
}

//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und der Darstellungsschicht geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

mod curve_scene;
pub mod options;

pub use curve_scene::{CurveScene, RecoilEntry};
pub use options::EditorOptions;

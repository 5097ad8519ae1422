//! Potku Rückstoß-Verteilungs-Editor Library.
//! Editor-Kern als Library exportiert für Tests, Benchmarks und Replay.

pub mod app;
pub mod replay;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, UiState};
pub use potku_recoil_engine::{
    Axis, CurvePoint, EditError, EditLimits, Element, RecoilCurve, RecoilElement, RecoilInfo,
    RecoilKey, Target, TargetLayer,
};
pub use replay::ReplayScript;
pub use shared::{CurveScene, EditorOptions, RecoilEntry};

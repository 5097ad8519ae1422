//! Potku Recoil Engine.
//!
//! Host-neutrales Datenmodell und Constraint-Algorithmen für die
//! Bearbeitung von Rückstoß-Konzentrationskurven (Tiefe auf x,
//! relative Konzentration auf y). Keine I/O, kein Rendering.

pub mod curve;
pub mod drag;
pub mod element;
pub mod error;
pub mod limits;
pub mod point;
pub mod scaling;
pub mod simulation;
pub mod target;

pub use curve::RecoilCurve;
pub use drag::DragSession;
pub use element::{Element, ElementSimulation, RecoilElement, RecoilInfo};
pub use error::{EditError, EditResult};
pub use limits::EditLimits;
pub use point::{Axis, CurvePoint};
pub use scaling::{multiply_coordinate, parse_multiplier, undo_coordinate};
pub use simulation::{RecoilKey, Simulation};
pub use target::{Target, TargetLayer};

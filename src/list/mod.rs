//! List reconciliation: enter/exit tagging for identity-keyed collections,
//! layered on the directional transition.

mod reconcile;

pub use reconcile::{DisplayItem, Keyed, Lifecycle, ListReconciler};

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`upload`, `result`, `notify`, `ui`) so
//! individual components can depend on small focused models. Transitions are
//! plain methods on plain structs and are tested natively; components wrap
//! each struct in an `RwSignal` provided via context.

pub mod notify;
pub mod result;
pub mod ui;
pub mod upload;

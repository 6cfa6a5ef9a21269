//! Collection selection

pub mod coordinator;

pub use coordinator::SelectionCoordinator;

// Connector registry and exports

pub mod pagador;

// Re-export all connectors
pub use pagador::Pagador;

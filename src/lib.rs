// Pagador Connector Library
// Translates the generic payment interface (authorize, capture, purchase,
// void) into the Pagador XML-over-HTTP webservice format.

pub mod connectors;
pub mod errors;
pub mod request;
pub mod transport;
pub mod types;

// Re-export main connector
pub use connectors::pagador::Pagador;

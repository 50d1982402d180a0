//! Repository layer - data access via stored procedures
//!
//! Each repository owns the names of the procedures it invokes. Names
//! and parameter order are part of the database contract and must not
//! change here unilaterally.

mod funcion;
mod reporte;
mod reserva;

pub use funcion::FuncionRepository;
pub use reporte::ReporteRepository;
pub use reserva::ReservaRepository;

/// Fallback status text when a procedure returns no message at all
pub const MENSAJE_ERROR_DESCONOCIDO: &str = "Error desconocido";

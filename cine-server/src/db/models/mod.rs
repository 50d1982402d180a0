//! Data transfer types
//!
//! All entities here are transient projections of procedure result
//! rows or request/response payloads; nothing is persisted by the
//! application itself.

pub mod funcion;
pub mod reporte;
pub mod reserva;

pub use funcion::PrecioResponse;
pub use reporte::ReporteOcupacion;
pub use reserva::{ReservaCreate, ReservaDetalle, ReservaResponse};

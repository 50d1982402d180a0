//! Service layer - business logic
//!
//! Each service composes one repository call with status-message
//! classification and/or pagination. Services hold no state beyond a
//! pool handle and are constructed per request.

pub mod precio;
pub mod reporte;
pub mod reserva;

pub use precio::PrecioService;
pub use reporte::ReporteService;
pub use reserva::ReservaService;

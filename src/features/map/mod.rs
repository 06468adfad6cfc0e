//! Read-only alert map.
//!
//! Alerts (red) and, on request, approved aid requests (green) rendered as
//! circle markers. Both collections are fetched from the backend per request.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/map` | Map center, zoom and markers (`?aid_requests=true` adds aid requests) |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::MapService;

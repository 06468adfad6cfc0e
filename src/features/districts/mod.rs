//! Sri Lankan district / Divisional Secretariat reference data.
//!
//! Feeds the district and division selectors and the GPS auto-fill matcher.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/districts` | List districts with their divisions |
//! | GET | `/api/districts/{district}/divisions` | List divisions of a district |

pub mod data;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::DistrictService;

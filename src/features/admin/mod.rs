//! Admin-only account management.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/admin/municipality-users` | Create a municipality staff account |
//! | GET | `/api/admin/municipality-users` | List municipality staff |
//! | GET | `/api/admin/users` | List commuter and municipality accounts |
//! | PATCH | `/api/admin/users/{id}/status` | Activate or deactivate an account |

pub mod dtos;
pub mod handlers;
pub mod routes;

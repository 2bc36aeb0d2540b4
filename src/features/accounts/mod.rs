//! Account directory.
//!
//! Accounts are keyed by the identity provider's subject. Credentials live with the
//! provider; this feature stores profile data, role and activation state.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/accounts/register` | Create the caller's commuter account |
//! | GET | `/api/accounts/me` | Caller's account |
//!
//! Staff management endpoints live under `features::admin`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgAccountRepository;
pub use services::AccountService;

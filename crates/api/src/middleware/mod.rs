//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated admin from a JWT
//!   Bearer token. This is the entire guard for the `/api/admin` surface:
//!   the portfolio has exactly one account class, so any valid token is an
//!   admin token.

pub mod auth;

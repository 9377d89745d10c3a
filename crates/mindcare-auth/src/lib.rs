//! mindcare-auth
//!
//! Verification of identity-provider JWTs and claims-based authorization.
//! Sign-up, sign-in and session handling stay with the identity provider.

pub mod error;
pub mod jwt;

//! Screens mounted by `App`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client has a single screen: `auth` holds the `AuthPage` signal that
//! switches between sign-up and login, and hands it to the form panels.

pub mod auth;

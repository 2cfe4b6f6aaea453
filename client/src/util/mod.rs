//! Pure helpers for the auth views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Keeps label/attribute decisions and the randomness source out of the view
//! code so they can be tested without a browser.

pub mod form;

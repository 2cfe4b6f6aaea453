//! Form widgets for the auth screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components take the page state signal as a prop, read the active session
//! for rendering, and write user edits straight back into it.

pub mod login_panel;
pub mod password_field;
pub mod signup_panel;
pub mod strength_checklist;
pub mod text_field;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, form submission,
//! navigation) and delegates rendering details to `components`.

pub mod entry;
pub mod entry_edit;
pub mod journals;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;

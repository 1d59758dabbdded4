//! Platform integration seams.
//!
//! Services the dialog calls but does not implement itself. Each seam has
//! a safe no-op default so the library works headlessly.

pub mod sound;

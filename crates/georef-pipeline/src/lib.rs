//! Pipeline-side collaborators for `georef-rs`.
//!
//! These components sit around the solvers in an interactive application:
//! - [`AutosaveScheduler`] drives periodic background saves of a component
//!   implementing the [`Autosave`] capability, with retry on transient
//!   failure;
//! - [`TextLookup`] / [`NullTextLookup`] is an injectable strategy for
//!   development-time text diagnostics that never affects behavior.

/// Background-save capability and tick-driven scheduler.
pub mod autosave;
/// Injectable diagnostic text lookup.
pub mod text_lookup;

pub use autosave::*;
pub use text_lookup::*;

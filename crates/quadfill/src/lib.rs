//! Quadfill - map an artboard's contents onto a quadrilateral mockup shape.
//!
//! Quadfill coordinates perspective mapping in a design canvas: the user
//! draws a four-sided shape, picks a source artboard, and the shape receives
//! a perspective-correct image fill of that artboard's contents.
//!
//! The crate contains no widget code and no perspective math. The host
//! document, the artboard picker, the messaging surface, and the perspective
//! engine are all injected through the capability traits in this crate
//! ([`Document`], [`ArtboardChooser`], [`Messenger`], [`PerspectiveEngine`]),
//! which makes the whole flow runnable against in-memory hosts; see
//! `examples/mirror_mockup.rs` for a complete wiring.
//!
//! A run proceeds through a fixed sequence: check that exactly one shape is
//! selected, build a name-sorted [`ArtboardCatalog`], present the names
//! through the picker, resolve the confirmed index against the same catalog,
//! validate the shape as a quadrilateral target, hand shape and artboard to
//! the engine, and apply the returned [`MappingOutcome`]. The terminal state
//! comes back as a [`RunOutcome`].

pub mod config;

mod catalog;
mod coordinator;
mod host;

pub use quadfill_core::{geometry, path, validate};

pub use catalog::{ArtboardCatalog, CatalogEntry};
pub use coordinator::{MSG_SELECT_ONE, MSG_SUCCESS, RunOutcome, SelectionCoordinator};
pub use host::{
    Artboard, ArtboardChooser, ChooserResponse, Document, HostContext, MappingOutcome,
    MappingRequest, Messenger, PerspectiveEngine, Shape,
};

//! Quadfill Core Types and Definitions
//!
//! This crate provides the foundational types for the Quadfill
//! perspective-mapping pipeline. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Paths**: Typed path commands and diagnostics ([`path`] module)
//! - **Validation**: Quadrilateral target validation ([`validate`] module)

pub mod geometry;
pub mod path;
pub mod validate;

//! Ladderview Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Ladderview
//! parser, reconstruction, layout, and export stages. It includes:
//!
//! - **Semantic model**: Ladder elements, rungs, and branches ([`semantic`] module)
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Positioned layout primitives consumed by renderers ([`draw`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;

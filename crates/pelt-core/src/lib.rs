//! Pelt Core Types and Drawables
//!
//! This crate provides the foundational types for rendering Pelt pipeline
//! diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Style**: Class-name-like style tokens and card styles ([`style`] module)
//! - **Semantic**: The declarative diagram description ([`semantic`] module)
//! - **Draw**: Drawables for cards, markers, connectors and text ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod semantic;
pub mod style;

//! Shapes module - the seven canonical occupancy templates
//!
//! Templates are row-major, row 0 on top; any non-zero entry is an occupied
//! cell. Every template is rectangular with at least one occupied cell, which
//! is what [`Piece::new`](crate::piece::Piece::new) requires.

use crate::types::ShapeKind;

/// A borrowed occupancy template: rows of 0/1 cells.
pub type Template = &'static [&'static [u8]];

/// 1x4 bar
pub const I: Template = &[&[1, 1, 1, 1]];

/// 2x2 square
pub const O: Template = &[&[1, 1], &[1, 1]];

pub const T: Template = &[&[0, 1, 0], &[1, 1, 1]];

pub const L: Template = &[&[1, 0], &[1, 0], &[1, 1]];

pub const J: Template = &[&[0, 1], &[0, 1], &[1, 1]];

pub const S: Template = &[&[0, 1, 1], &[1, 1, 0]];

pub const Z: Template = &[&[1, 1, 0], &[0, 1, 1]];

/// All templates, indexed like [`ShapeKind::ALL`].
pub const TEMPLATES: [Template; 7] = [I, O, T, L, J, S, Z];

/// Get the spawn template for a shape kind
pub fn template(kind: ShapeKind) -> Template {
    TEMPLATES[kind.index()]
}

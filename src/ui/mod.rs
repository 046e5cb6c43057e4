//! Terminal presentation: capability detection, design tokens, views.

pub mod context;
pub mod error;
pub mod json;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;

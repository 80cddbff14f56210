//! Server-rendered design system components.
//!
//! The centerpiece is the resource access table: a table widget that lists
//! the ways a resource can be reached (links, formats, holdings), truncates
//! long listings to a single row, and exposes a one-way reveal control for
//! the rest. Rendering is a pure function of the table data and a
//! [`RowVisibility`] state, so the same markup can be produced on every
//! build without client-side hydration.

pub mod cell;
pub mod escape;
pub mod icons;
pub mod palette;
pub mod table;
pub mod visibility;

pub use cell::{render_cell, Cell, Intent, RenderAnchor};
pub use icons::{BuiltinIcons, IconSource, NoIcons};
pub use palette::Palette;
pub use table::{CaptionLink, Table, TableError, TableRenderer};
pub use visibility::{
    control_slots, visible_row_count, ControlSlots, RowVisibility, COLLAPSE_THRESHOLD,
};

//! Row-visibility policy for truncated tables.
//!
//! A collapsed table shows only its first row, whatever the row count; the
//! threshold decides where the reveal controls are placed, not how many rows
//! are visible. Activating a reveal control expands the table; the
//! transition is one-way for the lifetime of the instance, there is no
//! collapse-back control.

/// Row count above which a collapsed table gets a reveal control directly
/// after its first row.
pub const COLLAPSE_THRESHOLD: usize = 6;

/// Visibility state of a table's rows beyond the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowVisibility {
    #[default]
    Collapsed,
    Expanded,
}

impl RowVisibility {
    /// Transition to `Expanded`. A second activation is a no-op.
    pub fn reveal(&mut self) {
        *self = Self::Expanded;
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// Where reveal controls are placed for a given state and row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSlots {
    /// Control row inserted immediately after the first data row.
    pub after_first: bool,
    /// Control row appended after the remaining rows.
    pub trailing: bool,
}

/// The single render rule for reveal-control placement.
///
/// Tables over the threshold get a control directly after the first row;
/// smaller multi-row tables get theirs after the hidden tail instead. The
/// trailing control also reappears once an over-threshold table is
/// expanded, so the control count goes from one to two; that quirk is
/// intentional and kept.
pub fn control_slots(state: RowVisibility, row_count: usize) -> ControlSlots {
    ControlSlots {
        after_first: row_count > COLLAPSE_THRESHOLD,
        trailing: row_count > 1
            && (state.is_expanded() || row_count <= COLLAPSE_THRESHOLD),
    }
}

/// Number of data rows visible to the user: `min(n, 1)` collapsed, `n`
/// expanded.
///
/// Hidden rows are still present in the markup with the `hidden` attribute
/// so revealing them needs no round trip.
pub fn visible_row_count(state: RowVisibility, row_count: usize) -> usize {
    match state {
        RowVisibility::Expanded => row_count,
        RowVisibility::Collapsed => row_count.min(1),
    }
}

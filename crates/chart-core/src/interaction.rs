// File: crates/chart-core/src/interaction.rs
// Summary: Hover interaction model: which points a pointer position selects for the tooltip.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    /// Every series' value at the label index nearest to the pointer.
    Index,
    /// The single point closest to the pointer.
    Nearest,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interaction {
    pub mode: InteractionMode,
    /// Only select when the pointer is over a drawn point.
    pub intersect: bool,
}

impl Default for Interaction {
    fn default() -> Self {
        Self { mode: InteractionMode::Index, intersect: false }
    }
}

/// One row of a tooltip.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipItem {
    pub index: usize,
    pub label: String,
    pub series: String,
    pub value: f64,
}

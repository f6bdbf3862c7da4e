//! Sorting-progress bar: proportion of items per decided disposition.

use clearout_items::{Disposition, Item};

use crate::filter::disposition_count;

/// One drawn segment of the proportion bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub disposition: Disposition,
    pub fraction: f64,
}

/// Per-disposition fractions over the full item set, in the fixed draw
/// order Keep, Sell, Donate, Dump.
///
/// Each fraction is `count(disposition) / total`, 0 when the set is empty;
/// `To Sort` draws no segment, so the segments sum to at most 1.
pub fn segments(items: &[Item]) -> [Segment; 4] {
    let total = items.len();
    Disposition::DECIDED.map(|disposition| Segment {
        disposition,
        fraction: fraction(disposition, items, total),
    })
}

/// Overall share of items that have been decided.
pub fn decided_fraction(items: &[Item]) -> f64 {
    segments(items).iter().map(|s| s.fraction).sum()
}

fn fraction(disposition: Disposition, items: &[Item], total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    disposition_count(items, disposition) as f64 / total as f64
}

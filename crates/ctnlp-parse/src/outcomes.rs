//! Outcome measure extraction.

use ctnlp_model::Outcomes;

/// A repeated `primary_outcome` / `secondary_outcome` block of a trial document.
pub trait OutcomeBlock {
    /// Text of the block's `measure` child, if it has one.
    fn measure(&self) -> Option<&str>;
}

/// Collects the measure of every outcome block in document order.
///
/// Blocks without a measure are kept as `None` so each list has one entry
/// per block.
pub fn extract_outcomes<'a, B, P, S>(primary: P, secondary: S) -> Outcomes
where
    B: OutcomeBlock + 'a,
    P: IntoIterator<Item = &'a B>,
    S: IntoIterator<Item = &'a B>,
{
    Outcomes {
        primary: collect_measures(primary),
        secondary: collect_measures(secondary),
    }
}

fn collect_measures<'a, B, I>(blocks: I) -> Vec<Option<String>>
where
    B: OutcomeBlock + 'a,
    I: IntoIterator<Item = &'a B>,
{
    blocks
        .into_iter()
        .map(|block| block.measure().map(str::to_string))
        .collect()
}

//! Tunable weights for the move advisor.

/// Hand-tuned scoring weights for the advisor's look-ahead search.
///
/// The defaults bias the search toward keeping the largest tile anchored in
/// the bottom-left corner and the bottom row packed and descending.
pub struct AdvisorConfig {
    /// Below this score the advisor skips search and plays an opening book
    /// of left/down moves.
    pub bootstrap_score: u32,
    /// Bonus for opening a sequence with left while the bottom row is
    /// ordered but has a gap a vertical move could fill badly.
    pub left_consolidation_bonus: i64,
    /// Penalty for opening with down or right under that same condition.
    pub bottom_disruption_penalty: i64,
    /// Small nudge toward right when the bottom row is ordered and stable.
    pub stable_right_bonus: i64,
    /// Bonus for a left step taken while the bottom row is ordered with a
    /// gap, rewarding consolidation before the row is disturbed.
    pub left_keeps_bottom_bonus: i64,
    /// Flat cost charged for every right step in a sequence.
    pub right_move_cost: i64,
    /// Penalty for a right step that would shuffle an ordered but unstable
    /// bottom row.
    pub right_destabilization_penalty: i64,
    /// Bonus when the bottom row ends the sequence ordered.
    pub ordered_bottom_bonus: i64,
    /// Bonus when the largest tile ends the sequence in the bottom-left
    /// corner.
    pub anchored_corner_bonus: i64,
    /// Multiplier on the change in the bottom-row sum across the sequence.
    pub bottom_row_weight: i64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            bootstrap_score: 300,
            left_consolidation_bonus: 1000,
            bottom_disruption_penalty: 200,
            stable_right_bonus: 8,
            left_keeps_bottom_bonus: 100,
            right_move_cost: 4,
            right_destabilization_penalty: 5000,
            ordered_bottom_bonus: 1000,
            anchored_corner_bonus: 10000,
            bottom_row_weight: 4,
        }
    }
}

/// Engine configuration.
///
/// `depth` is the root search depth in plies. During the first
/// `opening_plies` half-moves of a game the engine picks uniformly among the
/// best `opening_candidates` root moves; afterwards it always plays the best.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub depth: u32,
    pub opening_plies: u32,
    pub opening_candidates: usize,
    pub tt_mb: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 3,
            opening_plies: 6,
            opening_candidates: 3,
            tt_mb: super::DEFAULT_TT_MB,
        }
    }
}

impl SearchParams {
    /// Default parameters searching to `depth` plies.
    #[must_use]
    pub fn depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..Default::default()
        }
    }

    /// Disable the randomized opening policy.
    #[must_use]
    pub fn deterministic(mut self) -> Self {
        self.opening_plies = 0;
        self
    }

    #[must_use]
    pub fn with_tt_mb(mut self, tt_mb: usize) -> Self {
        self.tt_mb = tt_mb;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = SearchParams::default();
        assert_eq!(params.depth, 3);
        assert_eq!(params.opening_plies, 6);
        assert_eq!(params.opening_candidates, 3);
        assert_eq!(params.tt_mb, 16);
    }

    #[test]
    fn test_builders() {
        let params = SearchParams::depth(5).deterministic().with_tt_mb(1);
        assert_eq!(params.depth, 5);
        assert_eq!(params.opening_plies, 0);
        assert_eq!(params.tt_mb, 1);
    }
}

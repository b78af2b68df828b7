//! Board-wide search parameters.

/// Default weight of a diagonal step in grid-offset searches (≈ √2).
pub const DEFAULT_DIAGONAL_WEIGHT: f64 = 1.4142;

/// Default cap on expansions per search.
pub const DEFAULT_MAX_SEARCH_STEPS: usize = 100_000;

/// Parameters shared by every query on a board.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// If true, diagonal tiles are adjacent too.
    pub starry: bool,
    /// Cost of a diagonal step in grid-offset searches.
    pub diagonal_weight: f64,
    /// Multiplies every link length in link searches. With 0, every link
    /// costs 1.
    pub link_length_weight: f64,
    /// Upper bound on expansions performed by a single search.
    pub max_search_steps: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            starry: false,
            diagonal_weight: DEFAULT_DIAGONAL_WEIGHT,
            link_length_weight: 1.0,
            max_search_steps: DEFAULT_MAX_SEARCH_STEPS,
        }
    }
}

impl BoardConfig {
    pub fn with_starry(mut self, starry: bool) -> Self {
        self.starry = starry;
        self
    }

    pub fn with_diagonal_weight(mut self, weight: f64) -> Self {
        self.diagonal_weight = weight;
        self
    }

    pub fn with_link_length_weight(mut self, weight: f64) -> Self {
        self.link_length_weight = weight;
        self
    }

    pub fn with_max_search_steps(mut self, steps: usize) -> Self {
        self.max_search_steps = steps;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: BoardConfig = serde_json::from_str(r#"{"starry": true}"#).unwrap();
        assert!(cfg.starry);
        assert_eq!(cfg.diagonal_weight, DEFAULT_DIAGONAL_WEIGHT);
        assert_eq!(cfg.max_search_steps, DEFAULT_MAX_SEARCH_STEPS);
    }
}

//! Discovery configuration.

/// Default maximum number of distinct templates collected per run.
pub const DEFAULT_MAX_TEMPLATES: usize = 20;

/// Default minimum star count for results of the template searches.
pub const DEFAULT_MIN_STARS: u32 = 100;

/// Limits applied while collecting templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveryConfig {
    /// Maximum number of distinct templates to collect.
    max_templates: usize,
    /// Minimum stars a template search result must have.
    min_stars: u32,
}

impl DiscoveryConfig {
    /// Creates a new configuration.
    pub fn new(max_templates: usize, min_stars: u32) -> Self {
        Self {
            max_templates,
            min_stars,
        }
    }

    /// Returns the maximum number of templates to collect.
    pub fn max_templates(&self) -> usize {
        self.max_templates
    }

    /// Returns the minimum star threshold.
    pub fn min_stars(&self) -> u32 {
        self.min_stars
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEMPLATES, DEFAULT_MIN_STARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.max_templates(), 20);
        assert_eq!(config.min_stars(), 100);
    }
}

use crate::error::ConfigError;
use crate::label::RelativeLabel;
use log::warn;
use serde::Deserialize;

pub const DEFAULT_MAX_POOL_SIZE: usize = 5;
/// One slot per relative label.
pub const MAX_POOL_SIZE: usize = RelativeLabel::COUNT;

/// Engine tuning supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Upper bound on live slots. Labelling is symmetric only for odd values
    /// of at least 5.
    pub max_pool_size: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
        }
    }
}

impl CarouselConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.max_pool_size == 0 {
            return Err(ConfigError::EmptyPool);
        }
        if self.max_pool_size > MAX_POOL_SIZE {
            return Err(ConfigError::PoolTooWide {
                max_pool_size: self.max_pool_size,
                limit: MAX_POOL_SIZE,
            });
        }
        if self.max_pool_size < DEFAULT_MAX_POOL_SIZE || self.max_pool_size % 2 == 0 {
            warn!(
                "max_pool_size={} is even or below 5; boundary windows may not relabel",
                self.max_pool_size
            );
        }
        Ok(self)
    }

    /// Number of slots allocated for a sequence of `total_count` items.
    pub fn pool_size(self, total_count: u64) -> usize {
        usize::try_from(total_count)
            .map_or(self.max_pool_size, |total| total.min(self.max_pool_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_object_uses_defaults() -> Result<(), ConfigError> {
        let config = CarouselConfig::from_json("{}")?;
        assert_eq!(config, CarouselConfig::default());
        assert_eq!(config.max_pool_size, 5);
        Ok(())
    }

    #[test]
    fn explicit_pool_size_is_kept() -> Result<(), ConfigError> {
        let config = CarouselConfig::from_json(r#"{"max_pool_size": 7}"#)?;
        assert_eq!(config.max_pool_size, 7);
        Ok(())
    }

    #[test]
    fn zero_pool_is_rejected() {
        let result = CarouselConfig::from_json(r#"{"max_pool_size": 0}"#);
        assert!(matches!(result, Err(ConfigError::EmptyPool)));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = CarouselConfig::from_json(r#"{"pool": 5}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[rstest]
    #[case(10)]
    #[case(usize::MAX)]
    fn pool_wider_than_label_domain_is_rejected(#[case] max_pool_size: usize) {
        let result = CarouselConfig { max_pool_size }.validate();
        assert!(matches!(
            result,
            Err(ConfigError::PoolTooWide { limit: MAX_POOL_SIZE, .. })
        ));
    }

    #[test]
    fn widest_labelled_pool_is_accepted() -> Result<(), ConfigError> {
        let config = CarouselConfig::from_json(r#"{"max_pool_size": 9}"#)?;
        assert_eq!(config.max_pool_size, MAX_POOL_SIZE);
        Ok(())
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 3)]
    #[case(5, 5)]
    #[case(6, 5)]
    #[case(u64::MAX, 5)]
    fn pool_size_is_capped_by_total(#[case] total: u64, #[case] expected: usize) {
        assert_eq!(CarouselConfig::default().pool_size(total), expected);
    }
}

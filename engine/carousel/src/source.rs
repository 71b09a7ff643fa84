use crate::error::BuildError;
use reelrs_support::{Size, ViewportSize};
use serde::Deserialize;

/// Host-side provider of the values an engine needs at construction.
///
/// Each method is called exactly once. Returning `None` fails construction.
pub trait DataSource {
    fn viewport_size(&self) -> Option<Size>;
    fn total_count(&self) -> Option<u64>;
    fn initial_index(&self) -> Option<i64>;
}

/// A data source with values known up front, e.g. loaded from JSON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedSource {
    pub viewport: Size,
    pub total_count: u64,
    #[serde(default)]
    pub initial_index: i64,
}

impl FixedSource {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl DataSource for FixedSource {
    fn viewport_size(&self) -> Option<Size> {
        Some(self.viewport)
    }

    fn total_count(&self) -> Option<u64> {
        Some(self.total_count)
    }

    fn initial_index(&self) -> Option<i64> {
        Some(self.initial_index)
    }
}

/// Validated copy of everything read from a [`DataSource`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceSnapshot {
    viewport: ViewportSize,
    total_count: u64,
    initial_index: i64,
}

impl SourceSnapshot {
    pub fn read<S>(source: &S) -> Result<Self, BuildError>
    where
        S: DataSource + ?Sized,
    {
        let viewport = source.viewport_size().ok_or(BuildError::MissingViewport)?;
        let total_count = source.total_count().ok_or(BuildError::MissingTotalCount)?;
        let initial_index = source
            .initial_index()
            .ok_or(BuildError::MissingInitialIndex)?;
        Self::validate(viewport, total_count, initial_index)
    }

    fn validate(viewport: Size, total_count: u64, initial_index: i64) -> Result<Self, BuildError> {
        let viewport = ViewportSize::try_new(viewport)?;
        let total = i64::try_from(total_count)
            .map_err(|_| BuildError::TotalCountTooLarge { total: total_count })?;
        let in_range = if total == 0 {
            initial_index == 0
        } else {
            (0..total).contains(&initial_index)
        };
        if !in_range {
            return Err(BuildError::InitialIndexOutOfRange {
                index: initial_index,
                total: total_count,
            });
        }
        Ok(Self {
            viewport,
            total_count,
            initial_index,
        })
    }

    pub const fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    pub const fn initial_index(&self) -> i64 {
        self.initial_index
    }
}

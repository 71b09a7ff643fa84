use reelrs_support::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("`max_pool_size` must be at least 1")]
    EmptyPool,
    #[error("`max_pool_size` is {max_pool_size}; at most {limit} slots can be labelled")]
    PoolTooWide { max_pool_size: usize, limit: usize },
    #[error("invalid carousel config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Why an engine could not be constructed from its data source.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("data source did not provide a viewport size")]
    MissingViewport,
    #[error("data source did not provide a total count")]
    MissingTotalCount,
    #[error("data source did not provide an initial index")]
    MissingInitialIndex,
    #[error("invalid viewport: {0}")]
    Viewport(#[from] GeometryError),
    #[error("total count {total} exceeds the addressable range")]
    TotalCountTooLarge { total: u64 },
    #[error("initial index {index} is outside 0..{total}")]
    InitialIndexOutOfRange { index: i64, total: u64 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Why a window-update pass stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RelabelError {
    #[error("index overflow: interior window needs at least 4 slots, pool has {pool_len}")]
    IndexOverflow { pool_len: usize },
    #[error("relative offset {offset} at pool position {position} has no label")]
    LabelOutOfRange { offset: i64, position: usize },
}

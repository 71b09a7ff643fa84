//! Slot-recycling engine for paged horizontal carousels.
//!
//! A carousel over `N` items keeps at most `max_pool_size` live slots. Moving
//! one item forward or backward rotates the pool and relabels each slot with
//! its absolute index, its position relative to the current item, and the
//! frame the host should place it at.

mod config;
mod engine;
mod error;
mod label;
mod observer;
mod slot;
mod source;
pub mod window;

pub use config::{CarouselConfig, DEFAULT_MAX_POOL_SIZE, MAX_POOL_SIZE};
pub use engine::{CarouselEvent, Engine};
pub use error::{BuildError, ConfigError, RelabelError};
pub use label::{Direction, RelativeLabel, Shift, Step};
pub use observer::{CarouselEffect, CarouselObserver, CarouselTransition, WindowUpdate, dispatch};
pub use slot::{Slot, SlotId};
pub use source::{DataSource, FixedSource, SourceSnapshot};

pub use reelrs_machine::{Machine, Transition};
pub use reelrs_support::{Frame, GeometryError, Point, Size, ViewportSize};

use crate::config::CarouselConfig;
use crate::error::{BuildError, RelabelError};
use crate::label::{Direction, RelativeLabel, Step};
use crate::observer::{CarouselEffect, CarouselObserver, CarouselTransition, WindowUpdate, dispatch};
use crate::slot::{Slot, SlotId};
use crate::source::{DataSource, SourceSnapshot};
use crate::window::{WindowTarget, update_window};
use log::{debug, error, trace, warn};
use reelrs_machine::{Machine, Transition};
use reelrs_support::ViewportSize;

/// Input events for the carousel engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    Build,
    Advance,
    Retreat,
}

/// Slot-recycling engine for one carousel session.
///
/// Invariants:
/// - after `build`, `pool.len() == min(total_count, max_pool_size)`.
/// - slots are only rotated and relabelled, never added or dropped.
#[derive(Debug, Clone)]
pub struct Engine {
    config: CarouselConfig,
    viewport: ViewportSize,
    total_count: u64,
    current_index: i64,
    pool: Vec<Slot>,
    built: bool,
}

impl Engine {
    /// Reads the data source once and prepares an unbuilt engine.
    pub fn from_source<S>(source: &S, config: CarouselConfig) -> Result<Self, BuildError>
    where
        S: DataSource + ?Sized,
    {
        let snapshot = SourceSnapshot::read(source)?;
        Self::new(snapshot, config)
    }

    pub fn new(snapshot: SourceSnapshot, config: CarouselConfig) -> Result<Self, BuildError> {
        let config = config.validate()?;
        let total_count = snapshot.total_count();
        Ok(Self {
            config,
            viewport: snapshot.viewport(),
            total_count,
            current_index: snapshot.initial_index(),
            pool: Vec::with_capacity(config.pool_size(total_count)),
            built: false,
        })
    }

    pub const fn current_index(&self) -> i64 {
        self.current_index
    }

    pub const fn total_count(&self) -> u64 {
        self.total_count
    }

    pub const fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub const fn config(&self) -> CarouselConfig {
        self.config
    }

    pub const fn is_built(&self) -> bool {
        self.built
    }

    /// Slots in window order.
    pub fn pool(&self) -> &[Slot] {
        &self.pool
    }

    /// Slot labelled `Current` that also holds the current index.
    ///
    /// A relabel pass that stopped early can leave several slots labelled
    /// `Current`; only the one at `current_index` qualifies.
    pub fn current_slot(&self) -> Option<&Slot> {
        self.pool.iter().find(|slot| {
            slot.label() == RelativeLabel::Current && slot.absolute_index() == self.current_index
        })
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.pool.iter().find(|slot| slot.id() == id)
    }

    fn total_as_index(&self) -> i64 {
        i64::try_from(self.total_count).unwrap_or(i64::MAX)
    }

    fn is_sub_window(&self) -> bool {
        u64::try_from(self.pool.len()).is_ok_and(|len| len < self.total_count)
    }

    fn target(&self, direction: Direction) -> WindowTarget {
        WindowTarget {
            absolute_index: self.current_index,
            total_count: self.total_as_index(),
            max_pool_size: self.config.max_pool_size,
            direction,
            viewport: self.viewport,
        }
    }

    /// Allocates the slot pool and requests content for every slot.
    pub fn build(&mut self) -> CarouselTransition {
        debug!(
            "build total={} index={} viewport={}",
            self.total_count, self.current_index, self.viewport
        );
        if self.built {
            warn!("build ignored: slot pool already allocated");
            return Transition::default();
        }

        let viewport = self.viewport;
        let pool_size = self.config.pool_size(self.total_count);
        self.pool.extend((0..pool_size).map(|position| Slot::allocate(position, viewport)));
        self.built = true;

        let target = self.target(Direction::None);
        if let Err(err) = update_window(&mut self.pool, target) {
            report_relabel_error(err, "build");
        }
        for slot in &mut self.pool {
            slot.mark_for_placement();
        }

        let mut transition = Transition::with_effects(
            self.pool
                .iter()
                .copied()
                .map(CarouselEffect::ContentRequested)
                .collect(),
        );
        if self.pool.is_empty() {
            debug!("build produced an empty pool");
        } else {
            transition.push_effect(CarouselEffect::BuildComplete(self.pool.clone()));
        }
        transition
    }

    /// Moves the window one item toward the end of the sequence.
    pub fn advance(&mut self) -> CarouselTransition {
        debug!("advance from index={}", self.current_index);
        let next = self.current_index.saturating_add(1);
        if !self.built || self.total_count == 0 || next >= self.total_as_index() {
            debug!(
                "advance ignored at boundary index={} total={}",
                self.current_index, self.total_count
            );
            return Transition::default();
        }

        let rotated = self.is_sub_window();
        if rotated {
            self.pool.rotate_left(1);
        }
        self.current_index = next;

        let target = self.target(Step::Forward.into());
        let outcome = update_window(&mut self.pool, target);
        self.settle(Step::Forward, rotated, outcome)
    }

    /// Moves the window one item toward the start of the sequence.
    ///
    /// The stored index is decremented before the boundary check, so each
    /// retreat at or before index 0 is a no-op that still lowers the index.
    /// A later `advance` only steps it back up by one.
    pub fn retreat(&mut self) -> CarouselTransition {
        debug!("retreat from index={}", self.current_index);
        self.current_index = self.current_index.saturating_sub(1);
        let index = self.current_index;
        if !self.built
            || self.total_count == 0
            || index < 0
            || index.saturating_add(1) >= self.total_as_index()
        {
            debug!(
                "retreat ignored at boundary index={index} total={}",
                self.total_count
            );
            return Transition::default();
        }

        let rotated = self.is_sub_window();
        if rotated {
            self.pool.rotate_right(1);
        }

        let target = self.target(Step::Backward.into());
        let outcome = update_window(&mut self.pool, target);
        self.settle(Step::Backward, rotated, outcome)
    }

    /// Reduces `event` and forwards the resulting effects to `observer`.
    pub fn drive<O>(&mut self, event: CarouselEvent, observer: &mut O) -> CarouselTransition
    where
        O: CarouselObserver + ?Sized,
    {
        let transition = self.reduce(event);
        dispatch(observer, &transition);
        transition
    }

    fn settle(
        &mut self,
        step: Step,
        rotated: bool,
        outcome: Result<Option<i64>, RelabelError>,
    ) -> CarouselTransition {
        match outcome {
            Ok(newly_entered) => {
                if let Some(index) = newly_entered {
                    trace!("{step:?} revealed index={index}");
                }
                self.window_updated(step, newly_entered)
            }
            Err(err @ RelabelError::IndexOverflow { .. }) => {
                report_relabel_error(err, "navigation");
                self.undo_step(step, rotated);
                Transition::default()
            }
            Err(err @ RelabelError::LabelOutOfRange { .. }) => {
                report_relabel_error(err, "navigation");
                self.window_updated(step, None)
            }
        }
    }

    fn undo_step(&mut self, step: Step, rotated: bool) {
        match step {
            Step::Forward => {
                if rotated {
                    self.pool.rotate_right(1);
                }
                self.current_index = self.current_index.saturating_sub(1);
            }
            Step::Backward => {
                if rotated {
                    self.pool.rotate_left(1);
                }
                self.current_index = self.current_index.saturating_add(1);
            }
        }
    }

    fn window_updated(&self, step: Step, newly_entered: Option<i64>) -> CarouselTransition {
        Transition::with_effect(CarouselEffect::WindowUpdated(WindowUpdate {
            step,
            pool: self.pool.clone(),
            newly_entered,
        }))
    }
}

fn report_relabel_error(err: RelabelError, during: &str) {
    match err {
        RelabelError::IndexOverflow { .. } => {
            error!("{during}: {err}; window left unchanged");
        }
        RelabelError::LabelOutOfRange { .. } => {
            warn!("{during}: {err}; remaining slots keep stale labels");
        }
    }
}

impl Machine for Engine {
    type Event = CarouselEvent;
    type Effect = CarouselEffect;

    fn reduce(&mut self, event: Self::Event) -> CarouselTransition {
        match event {
            CarouselEvent::Build => self.build(),
            CarouselEvent::Advance => self.advance(),
            CarouselEvent::Retreat => self.retreat(),
        }
    }
}

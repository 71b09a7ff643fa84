use crate::label::Step;
use crate::slot::Slot;
use reelrs_machine::Transition;

/// Pool snapshot after one successful navigation step.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowUpdate {
    pub step: Step,
    pub pool: Vec<Slot>,
    /// Absolute index that just became part of the window, if any.
    pub newly_entered: Option<i64>,
}

/// Side-effects requested by one engine transition.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEffect {
    /// The host should attach rendering content to this slot.
    ContentRequested(Slot),
    BuildComplete(Vec<Slot>),
    WindowUpdated(WindowUpdate),
}

pub type CarouselTransition = Transition<CarouselEffect>;

/// Receiver for engine notifications. Every callback defaults to a no-op.
pub trait CarouselObserver {
    fn on_build_complete(&mut self, _pool: &[Slot]) {}

    fn on_content_requested(&mut self, _slot: &Slot) {}

    fn on_window_updated(&mut self, _update: &WindowUpdate) {}
}

/// Forwards every effect of `transition` to `observer`, in emission order.
pub fn dispatch<O>(observer: &mut O, transition: &CarouselTransition)
where
    O: CarouselObserver + ?Sized,
{
    for effect in transition.iter() {
        match effect {
            CarouselEffect::ContentRequested(slot) => observer.on_content_requested(slot),
            CarouselEffect::BuildComplete(pool) => observer.on_build_complete(pool),
            CarouselEffect::WindowUpdated(update) => observer.on_window_updated(update),
        }
    }
}

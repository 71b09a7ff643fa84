//! Reducer contract shared by the carousel engine and its hosts.

/// Reducer output: the effects a host must apply, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<E> {
    pub effects: Vec<E>,
}

impl<E> Default for Transition<E> {
    fn default() -> Self {
        Self {
            effects: Vec::new(),
        }
    }
}

impl<E> Transition<E> {
    pub fn with_effect(effect: E) -> Self {
        Self {
            effects: vec![effect],
        }
    }

    pub fn with_effects(effects: Vec<E>) -> Self {
        Self { effects }
    }

    pub fn push_effect(&mut self, effect: E) {
        self.effects.push(effect);
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.effects.iter()
    }
}

impl<E> IntoIterator for Transition<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.into_iter()
    }
}

/// Generic reducer contract for state machines that emit effects.
pub trait Machine {
    type Event;
    type Effect;

    fn reduce(&mut self, event: Self::Event) -> Transition<Self::Effect>;
}

/// Apply a sequence of events, concatenating their effects.
pub fn apply_events<M, I>(machine: &mut M, events: I) -> Transition<M::Effect>
where
    M: Machine,
    I: IntoIterator<Item = M::Event>,
{
    let mut combined = Transition::default();
    for event in events {
        combined.effects.extend(machine.reduce(event));
    }
    combined
}

use crate::label::{RelativeLabel, Shift};
use reelrs_support::{Frame, ViewportSize};

/// Stable identity of one pooled slot, fixed at allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct SlotId(usize);

impl SlotId {
    pub const fn raw(self) -> usize {
        self.0
    }
}

/// One live window position.
///
/// Slots are allocated once at build time and then recycled: navigation
/// overwrites the index, label, frame and shift of an existing slot instead
/// of creating a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    id: SlotId,
    absolute_index: i64,
    label: RelativeLabel,
    frame: Frame,
    shift: Shift,
    reposition: bool,
}

impl Slot {
    pub(crate) fn allocate(position: usize, viewport: ViewportSize) -> Self {
        let absolute_index = i64::try_from(position).unwrap_or(i64::MAX);
        Self {
            id: SlotId(position),
            absolute_index,
            label: RelativeLabel::Current,
            frame: Frame::horizontal_page(absolute_index, viewport),
            shift: Shift::None,
            reposition: true,
        }
    }

    pub const fn id(&self) -> SlotId {
        self.id
    }

    pub const fn absolute_index(&self) -> i64 {
        self.absolute_index
    }

    pub const fn label(&self) -> RelativeLabel {
        self.label
    }

    pub const fn frame(&self) -> Frame {
        self.frame
    }

    pub const fn shift(&self) -> Shift {
        self.shift
    }

    /// True when the host must re-apply this slot's frame.
    pub const fn should_reposition(&self) -> bool {
        self.reposition
    }

    pub(crate) fn assign(
        &mut self,
        absolute_index: i64,
        label: RelativeLabel,
        viewport: ViewportSize,
    ) {
        self.reposition = self.absolute_index != absolute_index;
        self.absolute_index = absolute_index;
        self.label = label;
        self.frame = Frame::horizontal_page(absolute_index, viewport);
    }

    pub(crate) fn set_shift(&mut self, shift: Shift) {
        self.shift = shift;
    }

    pub(crate) fn mark_for_placement(&mut self) {
        self.reposition = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelrs_support::{GeometryError, Size};

    fn viewport() -> Result<ViewportSize, GeometryError> {
        ViewportSize::try_new(Size::new(100.0, 50.0))
    }

    #[test]
    fn allocation_places_slot_by_position() -> Result<(), GeometryError> {
        let slot = Slot::allocate(3, viewport()?);
        assert_eq!(slot.id().raw(), 3);
        assert_eq!(slot.absolute_index(), 3);
        assert_eq!(slot.frame().origin.x, 300.0);
        assert_eq!(slot.frame().origin.y, 0.0);
        assert_eq!(slot.frame().size, Size::new(100.0, 50.0));
        assert!(slot.should_reposition());
        Ok(())
    }

    #[test]
    fn assign_to_new_index_requests_reposition() -> Result<(), GeometryError> {
        let viewport = viewport()?;
        let mut slot = Slot::allocate(0, viewport);
        slot.assign(7, RelativeLabel::TwoAfter, viewport);
        assert_eq!(slot.absolute_index(), 7);
        assert_eq!(slot.label(), RelativeLabel::TwoAfter);
        assert_eq!(slot.frame().origin.x, 700.0);
        assert!(slot.should_reposition());
        assert_eq!(slot.id().raw(), 0);
        Ok(())
    }

    #[test]
    fn relabel_in_place_keeps_frame() -> Result<(), GeometryError> {
        let viewport = viewport()?;
        let mut slot = Slot::allocate(2, viewport);
        slot.assign(2, RelativeLabel::Before, viewport);
        assert!(!slot.should_reposition());
        assert_eq!(slot.frame().origin.x, 200.0);

        slot.mark_for_placement();
        assert!(slot.should_reposition());
        Ok(())
    }
}

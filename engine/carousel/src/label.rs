/// Signed position of a slot relative to the current item.
///
/// The steady-state window uses the five core labels (`TwoBefore` through
/// `TwoAfter`). Windows flush against either end of the sequence reach up to
/// four positions away from the current item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum RelativeLabel {
    FourBefore,
    ThreeBefore,
    TwoBefore,
    Before,
    Current,
    After,
    TwoAfter,
    ThreeAfter,
    FourAfter,
}

impl RelativeLabel {
    pub const MIN_OFFSET: i64 = -4;
    pub const MAX_OFFSET: i64 = 4;
    /// Number of distinct labels.
    pub const COUNT: usize = 9;

    /// Resolves a signed offset, or `None` outside `MIN_OFFSET..=MAX_OFFSET`.
    pub const fn from_offset(offset: i64) -> Option<Self> {
        let label = match offset {
            -4 => Self::FourBefore,
            -3 => Self::ThreeBefore,
            -2 => Self::TwoBefore,
            -1 => Self::Before,
            0 => Self::Current,
            1 => Self::After,
            2 => Self::TwoAfter,
            3 => Self::ThreeAfter,
            4 => Self::FourAfter,
            _ => return None,
        };
        Some(label)
    }

    pub const fn offset(self) -> i64 {
        match self {
            Self::FourBefore => -4,
            Self::ThreeBefore => -3,
            Self::TwoBefore => -2,
            Self::Before => -1,
            Self::Current => 0,
            Self::After => 1,
            Self::TwoAfter => 2,
            Self::ThreeAfter => 3,
            Self::FourAfter => 4,
        }
    }

    pub const fn is_current(self) -> bool {
        matches!(self, Self::Current)
    }
}

/// Entry animation hint for a slot that was just repurposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Shift {
    #[default]
    None,
    EnteringFromStart,
    EnteringFromEnd,
}

/// Motion passed to the window-update pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

/// One navigation step reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Forward,
    Backward,
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Forward => Self::Forward,
            Step::Backward => Self::Backward,
        }
    }
}

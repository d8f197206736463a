//! Pointer focus over the feature grid.
//!
//! `FeatureHover` stores at most one index, so at most one card can ever be
//! rendered in its active variant. A leave event only clears the slot when it
//! comes from the card currently stored; with well-ordered pointer events
//! that is always the case, and an out-of-order leave from a card the pointer
//! already left cannot wipe out the card it just entered.

/// Index of the feature card under the pointer, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureHover {
    active: Option<usize>,
}

impl FeatureHover {
    pub const fn none() -> Self {
        Self { active: None }
    }

    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Pointer entered card `index`.
    pub fn enter(&mut self, index: usize) {
        self.active = Some(index);
    }

    /// Pointer left card `index`.
    pub fn leave(&mut self, index: usize) {
        if self.active == Some(index) {
            self.active = None;
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn variant(&self, index: usize) -> CardVariant {
        if self.is_active(index) {
            CardVariant::Active
        } else {
            CardVariant::Inactive
        }
    }
}

/// Visual variant of one feature card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVariant {
    Active,
    Inactive,
}

impl CardVariant {
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Modifier class for the card container, e.g. `feature-card--active`.
    pub fn card_class(self) -> &'static str {
        match self {
            Self::Active => "feature-card--active",
            Self::Inactive => "feature-card--idle",
        }
    }

    /// Modifier class for the round icon badge (filled vs. tinted background).
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Active => "feature-card__icon--active",
            Self::Inactive => "feature-card__icon--idle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARDS: usize = 4;

    fn active_count(hover: &FeatureHover) -> usize {
        (0..CARDS).filter(|&i| hover.variant(i).is_active()).count()
    }

    #[test]
    fn starts_with_nothing_active() {
        let hover = FeatureHover::default();
        assert_eq!(hover.active(), None);
        assert_eq!(active_count(&hover), 0);
    }

    #[test]
    fn enter_then_leave_every_index() {
        for i in 0..CARDS {
            let mut hover = FeatureHover::none();
            hover.enter(i);
            assert_eq!(hover.active(), Some(i));
            hover.leave(i);
            assert_eq!(hover.active(), None);
        }
    }

    #[test]
    fn hovering_index_two_highlights_only_that_card() {
        let mut hover = FeatureHover::none();
        hover.enter(2);
        for i in 0..CARDS {
            let expected = if i == 2 {
                CardVariant::Active
            } else {
                CardVariant::Inactive
            };
            assert_eq!(hover.variant(i), expected);
        }
        hover.leave(2);
        assert_eq!(active_count(&hover), 0);
    }

    #[test]
    fn stale_leave_keeps_newer_card() {
        let mut hover = FeatureHover::none();
        hover.enter(0);
        hover.enter(1);
        hover.leave(0);
        assert_eq!(hover.active(), Some(1));
    }

    #[test]
    fn never_more_than_one_active() {
        // Walk a long pseudo-random event sequence and check the invariant after each step.
        let mut hover = FeatureHover::none();
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..500 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let index = (seed as usize) % CARDS;
            if seed & 1 == 0 {
                hover.enter(index);
            } else {
                hover.leave(index);
            }
            assert!(active_count(&hover) <= 1);
        }
    }

    #[test]
    fn variant_classes() {
        assert_eq!(CardVariant::Active.card_class(), "feature-card--active");
        assert_eq!(CardVariant::Inactive.icon_class(), "feature-card__icon--idle");
    }
}

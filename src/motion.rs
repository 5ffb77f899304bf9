//! Entrance animation parameters and the once-only reveal latch.
//!
//! Variants describe a hidden and a visible pose; rendering one produces inline CSS so the
//! browser runs the transition when the section flips to visible.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    EaseOut,
}

impl Ease {
    pub fn css(&self) -> &'static str {
        match self {
            Ease::EaseOut => "ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        translate_y: 0.0,
        scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub hidden: Pose,
    pub visible: Pose,
    pub duration_ms: u32,
    pub ease: Ease,
}

impl Variant {
    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed {
            self.visible
        } else {
            self.hidden
        }
    }

    /// Inline style for this variant; `delay_ms` only applies on the way to visible.
    pub fn style(&self, revealed: bool, delay_ms: u32) -> String {
        let pose = self.pose(revealed);
        let delay = if revealed { delay_ms } else { 0 };
        format!(
            "opacity: {}; transform: translateY({}px) scale({}); \
             transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            pose.opacity,
            pose.translate_y,
            pose.scale,
            d = self.duration_ms,
            e = self.ease.css(),
        )
    }
}

/// Children of a container start one after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_children_ms: u32,
    pub stagger_children_ms: u32,
}

impl Stagger {
    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_children_ms + self.stagger_children_ms * index as u32
    }

    pub fn style(&self, variant: &Variant, revealed: bool, index: usize) -> String {
        variant.style(revealed, self.delay_for(index))
    }
}

pub const FADE: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        ..Pose::REST
    },
    visible: Pose::REST,
    duration_ms: 500,
    ease: Ease::EaseOut,
};

pub const ITEM: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        translate_y: 50.0,
        scale: 1.0,
    },
    visible: Pose::REST,
    duration_ms: 800,
    ease: Ease::EaseOut,
};

pub const HERO_ITEM: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        translate_y: 20.0,
        scale: 1.0,
    },
    ..ITEM
};

pub const SKILL_CHIP: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        translate_y: 0.0,
        scale: 0.0,
    },
    visible: Pose::REST,
    duration_ms: 500,
    ease: Ease::EaseOut,
};

pub const NAV_BAR: Variant = Variant {
    hidden: Pose {
        opacity: 1.0,
        translate_y: -100.0,
        scale: 1.0,
    },
    visible: Pose::REST,
    duration_ms: 500,
    ease: Ease::EaseOut,
};

pub const NAV_ENTRY: Variant = Variant {
    hidden: Pose {
        opacity: 0.0,
        translate_y: -20.0,
        scale: 1.0,
    },
    ..NAV_BAR
};

pub const SECTION_STAGGER: Stagger = Stagger {
    delay_children_ms: 200,
    stagger_children_ms: 100,
};

pub const HERO_STAGGER: Stagger = Stagger {
    delay_children_ms: 300,
    stagger_children_ms: 200,
};

pub const NAV_STAGGER: Stagger = Stagger {
    delay_children_ms: 0,
    stagger_children_ms: 100,
};

/// Hero's scroll hint fades in after the rest of the hero.
pub const SCROLL_HINT_DELAY_MS: u32 = 1500;

/// Fraction of a section that must be on screen before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum RevealState {
    #[default]
    Hidden,
    Visible,
}

/// Hidden until the first viewport intersection, visible for good after that.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    /// Feed one intersection observation. Returns true only on the call that reveals.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting && self.state == RevealState::Hidden {
            self.state = RevealState::Visible;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delays() {
        assert_eq!(SECTION_STAGGER.delay_for(0), 200);
        assert_eq!(SECTION_STAGGER.delay_for(1), 300);
        assert_eq!(SECTION_STAGGER.delay_for(5), 700);
        assert_eq!(HERO_STAGGER.delay_for(0), 300);
        assert_eq!(HERO_STAGGER.delay_for(4), 1100);
        assert_eq!(NAV_STAGGER.delay_for(3), 300);
    }

    #[test]
    fn test_item_style() {
        assert_eq!(
            ITEM.style(false, 300),
            "opacity: 0; transform: translateY(50px) scale(1); \
             transition: opacity 800ms ease-out 0ms, transform 800ms ease-out 0ms;"
        );
        assert_eq!(
            ITEM.style(true, 300),
            "opacity: 1; transform: translateY(0px) scale(1); \
             transition: opacity 800ms ease-out 300ms, transform 800ms ease-out 300ms;"
        );
    }

    #[test]
    fn test_variant_tables() {
        assert_eq!(HERO_ITEM.hidden.translate_y, 20.0);
        assert_eq!(HERO_ITEM.duration_ms, ITEM.duration_ms);
        assert_eq!(SKILL_CHIP.pose(false).scale, 0.0);
        assert_eq!(SKILL_CHIP.pose(true), Pose::REST);
        assert_eq!(NAV_BAR.pose(false).translate_y, -100.0);
        assert_eq!(NAV_ENTRY.pose(false).opacity, 0.0);
        assert_eq!(FADE.pose(false).translate_y, 0.0);
        assert!(SECTION_STAGGER
            .style(&SKILL_CHIP, true, 2)
            .contains("ease-out 400ms"));
    }

    #[test]
    fn test_hidden_pose_has_no_delay() {
        assert_eq!(
            SKILL_CHIP.style(false, 700),
            "opacity: 0; transform: translateY(0px) scale(0); \
             transition: opacity 500ms ease-out 0ms, transform 500ms ease-out 0ms;"
        );
        assert_eq!(
            NAV_BAR.style(true, 0),
            "opacity: 1; transform: translateY(0px) scale(1); \
             transition: opacity 500ms ease-out 0ms, transform 500ms ease-out 0ms;"
        );
    }

    #[test]
    fn test_reveal_latch_once() {
        let mut latch = RevealLatch::default();

        // leaving the viewport before ever entering it does nothing
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));

        assert!(latch.observe(true));

        // scrolling away and back never re-triggers, so the observer is stopped exactly once
        let reveals = [false, true, false, false, true]
            .into_iter()
            .filter(|intersecting| latch.observe(*intersecting))
            .count();
        assert_eq!(reveals, 0);
    }
}

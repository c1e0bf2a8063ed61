//! Scroll-position triggers and reveal timelines for the page copy.

use crate::timeline::{power2_out, power4_out, Stagger};

/// Rows and quotes reveal once their top passes this fraction of the viewport.
pub const CONTENT_REVEAL_START: f32 = 0.75;
/// Finale images reveal a little earlier.
pub const FINALE_REVEAL_START: f32 = 0.85;
/// Maximum parallax shift of a finale image, percent of its height.
pub const FINALE_PARALLAX_PERCENT: f32 = 20.0;

/// Revealed while the element's top sits above `start_fraction` of the
/// viewport; scrolling back above the trigger hides it again.
#[inline]
pub fn is_revealed(element_top_px: f32, viewport_height_px: f32, start_fraction: f32) -> bool {
    element_top_px <= viewport_height_px * start_fraction
}

/// 0 when the element's top touches the viewport bottom, 1 when its bottom
/// leaves the viewport top.
#[inline]
pub fn crossing_progress(element_top_px: f32, element_height_px: f32, viewport_height_px: f32) -> f32 {
    let travel = viewport_height_px + element_height_px;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height_px - element_top_px) / travel).clamp(0.0, 1.0)
}

#[inline]
pub fn parallax_shift_percent(crossing: f32) -> f32 {
    crossing.clamp(0.0, 1.0) * FINALE_PARALLAX_PERCENT
}

/// Hero headline: each word's span slides up out of its clipped line.
pub const HEADLINE_STAGGER: Stagger = Stagger {
    delay_sec: 0.1,
    duration_sec: 1.8,
    stagger_sec: 0.1,
};
/// Headline spans start below their line, percent of their own height.
pub const HEADLINE_START_PERCENT: f32 = 110.0;

/// Per-character heading reveal inside a content row.
pub const ROW_CHAR_STAGGER: Stagger = Stagger {
    delay_sec: 0.0,
    duration_sec: 1.2,
    stagger_sec: 0.03,
};
/// The paragraph starts this long before the last character lands.
pub const ROW_PARAGRAPH_OVERLAP_SEC: f32 = 0.8;
pub const ROW_PARAGRAPH_DURATION_SEC: f32 = 1.5;
pub const QUOTE_DURATION_SEC: f32 = 2.0;

const CHAR_FROM_OFFSET_PX: f32 = 100.0;
const CHAR_FROM_ROTATE_X_DEG: f32 = -90.0;
const PARAGRAPH_FROM_OFFSET_PX: f32 = 30.0;
const FROM_BLUR_PX: f32 = 10.0;
const QUOTE_FROM_OFFSET_PX: f32 = 50.0;
const QUOTE_FROM_SCALE: f32 = 0.9;

/// Vertical offset of headline span `index`, percent, `elapsed_sec` after
/// the intro started.
#[inline]
pub fn headline_offset_percent(index: usize, elapsed_sec: f32) -> f32 {
    let p = power4_out(HEADLINE_STAGGER.local_progress(index, elapsed_sec));
    HEADLINE_START_PERCENT * (1.0 - p)
}

/// Inline style state of one revealed element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealPose {
    pub offset_px: f32,
    pub rotate_x_deg: f32,
    pub scale: f32,
    pub opacity: f32,
    pub blur_px: f32,
}

impl RevealPose {
    fn char_at(eased: f32) -> Self {
        let rest = 1.0 - eased;
        Self {
            offset_px: CHAR_FROM_OFFSET_PX * rest,
            rotate_x_deg: CHAR_FROM_ROTATE_X_DEG * rest,
            scale: 1.0,
            opacity: eased,
            blur_px: FROM_BLUR_PX * rest,
        }
    }

    fn paragraph_at(eased: f32) -> Self {
        let rest = 1.0 - eased;
        Self {
            offset_px: PARAGRAPH_FROM_OFFSET_PX * rest,
            rotate_x_deg: 0.0,
            scale: 1.0,
            opacity: eased,
            blur_px: FROM_BLUR_PX * rest,
        }
    }

    /// Quote container `position_sec` into its reveal.
    pub fn quote(position_sec: f32) -> Self {
        let eased = power2_out(position_sec / QUOTE_DURATION_SEC);
        Self {
            offset_px: QUOTE_FROM_OFFSET_PX * (1.0 - eased),
            rotate_x_deg: 0.0,
            scale: QUOTE_FROM_SCALE + (1.0 - QUOTE_FROM_SCALE) * eased,
            opacity: eased,
            blur_px: 0.0,
        }
    }
}

/// Heading characters one after another, then the paragraph overlapping the
/// tail of the characters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowTimeline {
    pub chars: usize,
}

impl RowTimeline {
    #[inline]
    pub fn chars_end_sec(&self) -> f32 {
        ROW_CHAR_STAGGER.end_sec(self.chars)
    }

    #[inline]
    pub fn paragraph_start_sec(&self) -> f32 {
        (self.chars_end_sec() - ROW_PARAGRAPH_OVERLAP_SEC).max(0.0)
    }

    pub fn total_sec(&self) -> f32 {
        self.chars_end_sec()
            .max(self.paragraph_start_sec() + ROW_PARAGRAPH_DURATION_SEC)
    }

    pub fn char_pose(&self, index: usize, position_sec: f32) -> RevealPose {
        RevealPose::char_at(power4_out(ROW_CHAR_STAGGER.local_progress(index, position_sec)))
    }

    pub fn paragraph_pose(&self, position_sec: f32) -> RevealPose {
        let p = (position_sec - self.paragraph_start_sec()) / ROW_PARAGRAPH_DURATION_SEC;
        RevealPose::paragraph_at(power2_out(p))
    }
}

/// Timeline position that plays forward while revealed and runs back toward
/// the start once the trigger is crossed upward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RevealPlayhead {
    position_sec: f32,
    forward: bool,
}

impl RevealPlayhead {
    #[inline]
    pub fn set_forward(&mut self, forward: bool) {
        self.forward = forward;
    }

    #[inline]
    pub fn position_sec(&self) -> f32 {
        self.position_sec
    }

    pub fn advance(&mut self, dt_sec: f32, total_sec: f32) -> f32 {
        let dt = dt_sec.max(0.0);
        self.position_sec = if self.forward {
            (self.position_sec + dt).min(total_sec)
        } else {
            (self.position_sec - dt).max(0.0)
        };
        self.position_sec
    }
}

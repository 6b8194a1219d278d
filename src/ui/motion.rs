//! Entrance animations with exponential ease-out.
//!
//! Each animated element starts displaced by a few rows and decays toward
//! zero every tick, so it slides into place with visible deceleration.
//! While more than half the initial displacement remains the element is
//! considered faded and is drawn dimmed (terminals have no opacity).

/// Rows the hero rises through on entry.
pub const HERO_RISE: i16 = 4;
/// Rows the about section rises through when revealed.
pub const ABOUT_RISE: i16 = 3;
/// Rows the navigation bar drops through on entry.
pub const NAV_DROP: i16 = 3;

/// Row-offset slide animator.
#[derive(Debug, Clone)]
pub struct SlideIn {
    /// Current row displacement.  Negative = above its resting place.
    row_offset: f64,
    /// Displacement at the start, for fade progress.
    initial: f64,
    /// Damping: `offset *= (1 - speed)` each tick.
    speed: f64,
}

impl SlideIn {
    pub fn new(rows: i16, speed: f64) -> Self {
        Self {
            row_offset: f64::from(rows),
            initial: f64::from(rows),
            speed: speed.clamp(0.05, 0.95),
        }
    }

    /// An animator that is already at rest.
    pub fn settled() -> Self {
        Self::new(0, 0.3)
    }

    /// Decay the offset toward zero.  Call once per frame.
    pub fn tick(&mut self) {
        self.row_offset *= 1.0 - self.speed;
        if self.row_offset.abs() < 0.4 {
            self.row_offset = 0.0;
        }
    }

    /// Current row displacement (integer rows).
    pub fn row_offset(&self) -> i16 {
        self.row_offset.round() as i16
    }

    /// True while there is still visible motion.
    pub fn is_animating(&self) -> bool {
        self.row_offset != 0.0
    }

    /// True while less than half of the way in.
    pub fn is_faded(&self) -> bool {
        self.initial != 0.0 && (self.row_offset / self.initial).abs() > 0.5
    }
}

/// A slide that waits until its element first scrolls into view, then plays
/// exactly once.
#[derive(Debug, Clone)]
pub struct Reveal {
    slide: SlideIn,
    triggered: bool,
}

impl Reveal {
    pub fn new(rows: i16, speed: f64) -> Self {
        Self {
            slide: SlideIn::new(rows, speed),
            triggered: false,
        }
    }

    pub fn settled() -> Self {
        Self {
            slide: SlideIn::settled(),
            triggered: true,
        }
    }

    /// Arm the animation.  Later calls are no-ops.
    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn tick(&mut self) {
        if self.triggered {
            self.slide.tick();
        }
    }

    pub fn row_offset(&self) -> i16 {
        self.slide.row_offset()
    }

    pub fn is_animating(&self) -> bool {
        self.triggered && self.slide.is_animating()
    }

    /// Hidden content counts as faded until it has been revealed.
    pub fn is_faded(&self) -> bool {
        self.slide.is_faded()
    }
}

/// All entrance animations on the page.
#[derive(Debug, Clone)]
pub struct Motion {
    /// Navigation bar, dropping in from above.
    pub nav: SlideIn,
    /// Hero section, rising and fading in.
    pub hero: SlideIn,
    /// About section, revealed on first view.
    pub about: Reveal,
}

impl Motion {
    /// Fresh entrance animations, or everything at rest when disabled.
    pub fn new(enabled: bool) -> Self {
        if enabled {
            Self {
                nav: SlideIn::new(-NAV_DROP, 0.3),
                hero: SlideIn::new(HERO_RISE, 0.22),
                about: Reveal::new(ABOUT_RISE, 0.3),
            }
        } else {
            Self::settled()
        }
    }

    pub fn settled() -> Self {
        Self {
            nav: SlideIn::settled(),
            hero: SlideIn::settled(),
            about: Reveal::settled(),
        }
    }

    pub fn tick(&mut self) {
        self.nav.tick();
        self.hero.tick();
        self.about.tick();
    }

    pub fn is_animating(&self) -> bool {
        self.nav.is_animating() || self.hero.is_animating() || self.about.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_settles_to_zero() {
        let mut s = SlideIn::new(4, 0.3);
        assert!(s.is_faded());
        for _ in 0..30 {
            s.tick();
        }
        assert_eq!(s.row_offset(), 0);
        assert!(!s.is_animating());
        assert!(!s.is_faded());
    }

    #[test]
    fn negative_slide_approaches_from_above() {
        let mut s = SlideIn::new(-3, 0.3);
        s.tick();
        assert!(s.row_offset() < 0);
        assert!(s.row_offset() > -3);
    }

    #[test]
    fn reveal_waits_for_trigger_and_plays_once() {
        let mut r = Reveal::new(3, 0.5);
        r.tick();
        assert_eq!(r.row_offset(), 3);
        assert!(r.is_faded());
        assert!(!r.is_animating());

        r.trigger();
        for _ in 0..20 {
            r.tick();
        }
        assert_eq!(r.row_offset(), 0);

        r.trigger();
        assert_eq!(r.row_offset(), 0);
    }

    #[test]
    fn disabled_motion_starts_at_rest() {
        let m = Motion::new(false);
        assert!(!m.is_animating());
        assert!(!m.hero.is_faded());
        assert!(m.about.is_triggered());
    }
}

//! Scroll-progress carousel controller.
//!
//! Turns a normalized vertical scroll progress into the active card index and
//! the horizontal offset of the card track. Nothing in here touches the DOM;
//! the services section feeds it measurements and scroll positions and applies
//! whatever comes back.

/// Window width below which the pinned technique is not used.
pub const MOBILE_BREAKPOINT: f64 = 768.0;
/// Native-scroll card width as a fraction of the window width (85vw).
pub const NATIVE_CARD_WIDTH_RATIO: f64 = 0.85;
/// Gap between cards on the native track.
pub const NATIVE_CARD_GAP: f64 = 20.0;
/// Padding on the pinned track; added so the last card clears the edge.
pub const TRACK_END_PADDING: f64 = 32.0;

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

pub fn clamp_progress(progress: f64) -> f64 {
    finite_or_zero(progress).clamp(0.0, 1.0)
}

/// Thresholds at the two ends of the progress range.
///
/// At or below `start` the first card is forced, at or above `end` the last
/// one. Both absorb float noise and sub-pixel rounding of the scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselTuning {
    pub start: f64,
    pub end: f64,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            start: 0.01,
            end: 0.95,
        }
    }
}

impl CarouselTuning {
    /// Falls back to the defaults unless `0 <= start < end <= 1`.
    pub fn new(start: f64, end: f64) -> Self {
        if start.is_finite() && end.is_finite() && 0.0 <= start && start < end && end <= 1.0 {
            Self { start, end }
        } else {
            Self::default()
        }
    }
}

/// Maps progress to a card index, rounding half up.
pub fn index_for_progress(progress: f64, card_count: usize, tuning: &CarouselTuning) -> usize {
    if card_count <= 1 {
        return 0;
    }
    let last = card_count - 1;
    let p = clamp_progress(progress);
    if p <= tuning.start {
        return 0;
    }
    if p >= tuning.end {
        return last;
    }
    let raw = (p * last as f64 + 0.5).floor();
    (raw.max(0.0) as usize).min(last)
}

/// Track translation for a given progress. Always within `[-scroll_range, 0]`.
pub fn horizontal_offset(progress: f64, scroll_range: f64) -> f64 {
    -clamp_progress(progress) * scroll_range.max(0.0)
}

/// Progress through the pinned section ("start start" to "end end").
///
/// `section_top` is the section's top edge relative to the viewport top.
pub fn progress_from_position(section_top: f64, container_extent: f64, viewport_height: f64) -> f64 {
    let scrollable = finite_or_zero(container_extent) - finite_or_zero(viewport_height);
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp_progress(-finite_or_zero(section_top) / scrollable)
}

/// How the carousel is driven for the lifetime of one mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselMode {
    /// The section is pinned and vertical scroll scrubs the track.
    PinnedScrollScrub,
    /// The track scrolls horizontally on its own, with snap points.
    NativeHorizontalScroll { card_stride: f64 },
}

/// Distance between card origins on the native track (85vw card + gap).
pub fn native_card_stride(window_width: f64) -> f64 {
    finite_or_zero(window_width).max(0.0) * NATIVE_CARD_WIDTH_RATIO + NATIVE_CARD_GAP
}

impl CarouselMode {
    pub fn select(window_width: f64, prefers_reduced_motion: bool) -> Self {
        let window_width = finite_or_zero(window_width);
        if prefers_reduced_motion || window_width < MOBILE_BREAKPOINT {
            CarouselMode::NativeHorizontalScroll {
                card_stride: native_card_stride(window_width),
            }
        } else {
            CarouselMode::PinnedScrollScrub
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, CarouselMode::PinnedScrollScrub)
    }
}

/// Layout extents derived from one measurement pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    pub scroll_range: f64,
    pub container_extent: f64,
    pub viewport_height: f64,
}

impl Measurement {
    /// Computes both extents from raw layout numbers.
    ///
    /// A track that does not overflow its viewport yields a zero range and an
    /// extent of exactly one viewport height, i.e. a static display.
    pub fn from_layout(viewport_width: f64, track_width: f64, viewport_height: f64) -> Self {
        let viewport_width = finite_or_zero(viewport_width).max(0.0);
        let track_width = finite_or_zero(track_width).max(0.0);
        let viewport_height = finite_or_zero(viewport_height).max(0.0);

        let overflow = (track_width - viewport_width).max(0.0);
        if overflow <= 0.0 {
            return Self {
                scroll_range: 0.0,
                container_extent: viewport_height,
                viewport_height,
            };
        }

        let scroll_range = overflow + TRACK_END_PADDING;
        // One extra viewport width of runway keeps the last card in view
        // before the section unpins.
        let container_extent = viewport_height + overflow + viewport_width;
        Self {
            scroll_range,
            container_extent,
            viewport_height,
        }
    }

    pub fn scrollable(&self) -> f64 {
        (self.container_extent - self.viewport_height).max(0.0)
    }
}

/// Where a jump request wants the browser to scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    /// Absolute page offset (`window.scrollTo({ top })`).
    Page { top: f64 },
    /// Horizontal offset of the native track (`track.scrollTo({ left })`).
    Track { left: f64 },
}

/// Owns the active index. The rendering layer only reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselController {
    mode: CarouselMode,
    card_count: usize,
    tuning: CarouselTuning,
    measurement: Measurement,
    active_index: usize,
    progress: f64,
}

impl CarouselController {
    pub fn new(mode: CarouselMode, card_count: usize, tuning: CarouselTuning) -> Self {
        Self {
            mode,
            card_count: card_count.max(1),
            tuning,
            measurement: Measurement::default(),
            active_index: 0,
            progress: 0.0,
        }
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn card_count(&self) -> usize {
        self.card_count
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    fn last_index(&self) -> usize {
        self.card_count - 1
    }

    /// Track offset for the last observed progress. Zero outside pinned mode.
    pub fn horizontal_offset(&self) -> f64 {
        match self.mode {
            CarouselMode::PinnedScrollScrub => {
                horizontal_offset(self.progress, self.measurement.scroll_range)
            }
            CarouselMode::NativeHorizontalScroll { .. } => 0.0,
        }
    }

    /// Pinned mode: derives the index from page scroll progress.
    ///
    /// Returns true when the index changed.
    pub fn on_progress(&mut self, progress: f64) -> bool {
        if !self.mode.is_pinned() {
            return false;
        }
        self.progress = clamp_progress(progress);
        let next = if self.measurement.scroll_range <= 0.0 {
            0
        } else {
            index_for_progress(self.progress, self.card_count, &self.tuning)
        };
        self.set_index(next)
    }

    /// Native mode: derives the index from the track's own scroll offset.
    pub fn on_track_scroll(&mut self, scroll_left: f64) -> bool {
        let CarouselMode::NativeHorizontalScroll { card_stride } = self.mode else {
            return false;
        };
        if card_stride <= 0.0 {
            return self.set_index(0);
        }
        let raw = (finite_or_zero(scroll_left).max(0.0) / card_stride + 0.5).floor();
        let next = (raw as usize).min(self.last_index());
        self.set_index(next)
    }

    /// Resets to the first card when the section re-enters from above.
    ///
    /// `section_top` is relative to the viewport top; within 100px of it and
    /// below 10% progress counts as re-entry.
    pub fn on_section_position(&mut self, section_top: f64, progress: f64) -> bool {
        if !self.mode.is_pinned() {
            return false;
        }
        let near_top = (-100.0..=100.0).contains(&finite_or_zero(section_top));
        if near_top && clamp_progress(progress) < 0.1 {
            self.progress = clamp_progress(progress);
            return self.set_index(0);
        }
        false
    }

    /// Installs a fresh measurement and reconciles the index with `progress`.
    ///
    /// A range change under 10% moves the index at most one step so a resize
    /// mid-scroll never skips cards; larger changes re-derive it.
    pub fn remeasure(&mut self, measurement: Measurement, progress: f64) -> bool {
        let previous = self.measurement.scroll_range;
        // A lone card never translates, however narrow the viewport.
        let measurement = if self.card_count <= 1 {
            Measurement {
                scroll_range: 0.0,
                container_extent: measurement.viewport_height,
                viewport_height: measurement.viewport_height,
            }
        } else {
            measurement
        };
        self.measurement = measurement;
        if !self.mode.is_pinned() {
            return false;
        }

        self.progress = clamp_progress(progress);
        let derived = if measurement.scroll_range <= 0.0 {
            0
        } else {
            index_for_progress(self.progress, self.card_count, &self.tuning)
        };

        let small_change = previous > 0.0
            && ((measurement.scroll_range - previous).abs() / previous) < 0.1;
        let next = if small_change {
            let current = self.active_index;
            if derived > current {
                current + 1
            } else if derived < current {
                current - 1
            } else {
                current
            }
        } else {
            derived
        };
        self.set_index(next)
    }

    /// Native mode: re-derives the card stride after a resize or rotation.
    ///
    /// The mode itself stays fixed for the mount. Returns true when the
    /// stride changed.
    pub fn set_native_stride(&mut self, window_width: f64) -> bool {
        let CarouselMode::NativeHorizontalScroll { card_stride } = &mut self.mode else {
            return false;
        };
        let next = native_card_stride(window_width);
        if *card_stride == next {
            return false;
        }
        *card_stride = next;
        true
    }

    /// Clamps `target` and returns where to scroll, if anywhere.
    ///
    /// `section_top_abs` is the section's absolute page offset; it is only
    /// used in pinned mode. A single-card carousel never scrolls.
    pub fn jump_to_index(&mut self, target: isize, section_top_abs: f64) -> Option<ScrollTarget> {
        if self.card_count <= 1 {
            return None;
        }
        let clamped = target.clamp(0, self.last_index() as isize) as usize;

        match self.mode {
            CarouselMode::NativeHorizontalScroll { card_stride } => {
                self.set_index(clamped);
                Some(ScrollTarget::Track {
                    left: clamped as f64 * card_stride.max(0.0),
                })
            }
            CarouselMode::PinnedScrollScrub => {
                let scrollable = self.measurement.scrollable();
                if scrollable <= 0.0 || self.measurement.scroll_range <= 0.0 {
                    return None;
                }
                self.set_index(clamped);
                let progress = clamped as f64 / self.last_index() as f64;
                Some(ScrollTarget::Page {
                    top: finite_or_zero(section_top_abs) + progress * scrollable,
                })
            }
        }
    }

    /// Target index for a keyboard key, if the key is a navigation key.
    pub fn index_for_key(&self, key: &str) -> Option<isize> {
        let current = self.active_index as isize;
        match key {
            "ArrowRight" => Some(current + 1),
            "ArrowLeft" => Some(current - 1),
            "Home" => Some(0),
            "End" => Some(self.last_index() as isize),
            _ => None,
        }
    }

    fn set_index(&mut self, index: usize) -> bool {
        let index = index.min(self.last_index());
        if index == self.active_index {
            return false;
        }
        self.active_index = index;
        true
    }
}

/// Why measurements were invalidated. Only used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Invalidation {
    Mount,
    Resize,
    OrientationChange,
    FontsReady,
    CardCountChange,
}

/// Coalesces invalidations into at most one recompute per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
    coalesced: u32,
}

impl FrameGate {
    /// Marks measurements stale. True means the caller must request a frame;
    /// false means one is already pending.
    pub fn invalidate(&mut self, reason: Invalidation) -> bool {
        log::debug!("carousel measurements invalidated: {:?}", reason);
        if self.pending {
            self.coalesced += 1;
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the frame callback. True when a recompute should run.
    pub fn begin_frame(&mut self) -> bool {
        let run = self.pending;
        self.pending = false;
        self.coalesced = 0;
        run
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn coalesced(&self) -> u32 {
        self.coalesced
    }
}

/// Zero-padded two digit counter label ("03").
pub fn pad2(n: usize) -> String {
    format!("{:02}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pinned(n: usize) -> CarouselController {
        let mut c = CarouselController::new(CarouselMode::PinnedScrollScrub, n, CarouselTuning::default());
        c.remeasure(Measurement::from_layout(1200.0, 3600.0, 800.0), 0.0);
        c
    }

    #[test]
    fn six_cards_scenario() {
        let t = CarouselTuning::default();
        assert_eq!(index_for_progress(0.0, 6, &t), 0);
        assert_eq!(index_for_progress(0.5, 6, &t), 3);
        assert_eq!(index_for_progress(1.0, 6, &t), 5);
        assert_eq!(index_for_progress(0.97, 6, &t), 5);
        assert_eq!(index_for_progress(0.005, 6, &t), 0);
    }

    #[test]
    fn index_stays_in_range_and_is_monotonic() {
        let t = CarouselTuning::default();
        for n in 1..=12 {
            let mut prev = 0;
            for step in 0..=1000 {
                let p = step as f64 / 1000.0;
                let idx = index_for_progress(p, n, &t);
                assert!(idx < n);
                assert!(idx >= prev, "n={} p={} went {} -> {}", n, p, prev, idx);
                prev = idx;
            }
            assert_eq!(index_for_progress(0.0, n, &t), 0);
            assert_eq!(index_for_progress(1.0, n, &t), n - 1);
        }
    }

    #[test]
    fn out_of_range_progress_is_clamped() {
        let t = CarouselTuning::default();
        assert_eq!(index_for_progress(-3.0, 6, &t), 0);
        assert_eq!(index_for_progress(7.0, 6, &t), 5);
        assert_eq!(index_for_progress(f64::NAN, 6, &t), 0);
        assert_eq!(horizontal_offset(-0.5, 400.0), horizontal_offset(0.0, 400.0));
        assert_eq!(horizontal_offset(1.5, 400.0), horizontal_offset(1.0, 400.0));
    }

    #[test]
    fn offset_is_linear_in_progress() {
        for step in 0..=20 {
            let p = step as f64 / 20.0;
            assert_eq!(horizontal_offset(p, 1234.0), -p * 1234.0);
        }
        assert_eq!(horizontal_offset(1.0, 1234.0), -1234.0);
    }

    #[test]
    fn tuning_rejects_inverted_thresholds() {
        assert_eq!(CarouselTuning::new(0.9, 0.2), CarouselTuning::default());
        assert_eq!(CarouselTuning::new(-0.1, 0.5), CarouselTuning::default());
        let custom = CarouselTuning::new(0.05, 0.9);
        assert_eq!(custom.start, 0.05);
        assert_eq!(index_for_progress(0.04, 6, &custom), 0);
        assert_eq!(index_for_progress(0.91, 6, &custom), 5);
    }

    #[test]
    fn single_card_never_moves() {
        let mut c = CarouselController::new(CarouselMode::PinnedScrollScrub, 1, CarouselTuning::default());
        c.remeasure(Measurement::from_layout(1200.0, 600.0, 800.0), 0.4);
        assert_eq!(c.measurement().scroll_range, 0.0);
        for p in [0.0, 0.3, 0.99, 1.0] {
            c.on_progress(p);
            assert_eq!(c.active_index(), 0);
        }
        assert_eq!(c.jump_to_index(4, 100.0), None);
        assert_eq!(c.jump_to_index(-4, 100.0), None);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn single_overflowing_card_stays_static() {
        // 560px card plus track padding against a 608px viewport
        let mut c = CarouselController::new(CarouselMode::PinnedScrollScrub, 1, CarouselTuning::default());
        c.remeasure(Measurement::from_layout(608.0, 624.0, 800.0), 0.0);
        c.on_progress(1.0);
        assert_eq!(c.measurement().scroll_range, 0.0);
        assert_eq!(c.measurement().container_extent, 800.0);
        assert_eq!(c.horizontal_offset(), 0.0);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn jump_clamps_and_targets_last_card() {
        let mut c = pinned(6);
        let m = c.measurement();
        let target = c.jump_to_index(10, 500.0);
        assert_eq!(c.active_index(), 5);
        assert_eq!(target, Some(ScrollTarget::Page { top: 500.0 + m.scrollable() }));

        let first = c.jump_to_index(-2, 500.0);
        assert_eq!(c.active_index(), 0);
        assert_eq!(first, Some(ScrollTarget::Page { top: 500.0 }));
    }

    #[test]
    fn jump_in_native_mode_scrolls_track() {
        let mode = CarouselMode::select(400.0, false);
        let mut c = CarouselController::new(mode, 6, CarouselTuning::default());
        let stride = 400.0 * NATIVE_CARD_WIDTH_RATIO + NATIVE_CARD_GAP;
        assert_eq!(c.jump_to_index(2, 0.0), Some(ScrollTarget::Track { left: 2.0 * stride }));
        assert_eq!(c.active_index(), 2);
        // page progress is ignored in native mode
        assert!(!c.on_progress(1.0));
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn native_index_follows_track_offset() {
        let mut c = CarouselController::new(
            CarouselMode::NativeHorizontalScroll { card_stride: 100.0 },
            4,
            CarouselTuning::default(),
        );
        c.on_track_scroll(149.0);
        assert_eq!(c.active_index(), 1);
        c.on_track_scroll(150.0);
        assert_eq!(c.active_index(), 2);
        c.on_track_scroll(10_000.0);
        assert_eq!(c.active_index(), 3);
        c.on_track_scroll(-50.0);
        assert_eq!(c.active_index(), 0);
    }

    #[test]
    fn native_stride_follows_rotation() {
        let mut c = CarouselController::new(CarouselMode::select(390.0, false), 6, CarouselTuning::default());
        assert!(c.set_native_stride(844.0));
        assert!(!c.set_native_stride(844.0));
        let landscape = native_card_stride(844.0);
        assert_eq!(c.mode(), CarouselMode::NativeHorizontalScroll { card_stride: landscape });

        c.on_track_scroll(landscape);
        assert_eq!(c.active_index(), 1);
        assert_eq!(c.jump_to_index(1, 0.0), Some(ScrollTarget::Track { left: landscape }));
        assert_eq!(c.jump_to_index(3, 0.0), Some(ScrollTarget::Track { left: 3.0 * landscape }));
    }

    #[test]
    fn pinned_mode_ignores_stride_updates() {
        let mut c = pinned(6);
        assert!(!c.set_native_stride(390.0));
        assert_eq!(c.mode(), CarouselMode::PinnedScrollScrub);
    }

    #[test]
    fn mode_selection() {
        assert_eq!(CarouselMode::select(1440.0, false), CarouselMode::PinnedScrollScrub);
        assert!(!CarouselMode::select(1440.0, true).is_pinned());
        assert!(!CarouselMode::select(767.0, false).is_pinned());
    }

    #[test]
    fn degenerate_layout_is_static() {
        let m = Measurement::from_layout(1600.0, 1200.0, 900.0);
        assert_eq!(m.scroll_range, 0.0);
        assert_eq!(m.container_extent, 900.0);
        let mut c = CarouselController::new(CarouselMode::PinnedScrollScrub, 3, CarouselTuning::default());
        c.remeasure(m, 0.7);
        c.on_progress(1.0);
        assert_eq!(c.active_index(), 0);
        assert_eq!(c.horizontal_offset(), 0.0);
        assert_eq!(c.jump_to_index(2, 0.0), None);
    }

    #[test]
    fn measurement_is_idempotent() {
        let a = Measurement::from_layout(1200.0, 3000.0, 800.0);
        let b = Measurement::from_layout(1200.0, 3000.0, 800.0);
        assert_eq!(a, b);
        assert_eq!(a.scroll_range, 1800.0 + TRACK_END_PADDING);
        assert_eq!(a.container_extent, 800.0 + 1800.0 + 1200.0);

        let mut c = pinned(6);
        c.on_progress(0.5);
        let before = c.clone();
        c.remeasure(c.measurement(), 0.5);
        assert_eq!(c, before);
    }

    #[test]
    fn small_resize_moves_at_most_one_step() {
        let mut c = pinned(6);
        c.on_progress(0.2);
        assert_eq!(c.active_index(), 1);
        let mut m = c.measurement();
        m.scroll_range *= 1.05;
        // a stale progress reading would ask for the last card
        c.remeasure(m, 0.9);
        assert_eq!(c.active_index(), 2);
    }

    #[test]
    fn large_resize_rederives_index() {
        let mut c = pinned(6);
        c.on_progress(0.2);
        c.remeasure(Measurement::from_layout(800.0, 3600.0, 700.0), 0.9);
        assert_eq!(c.active_index(), index_for_progress(0.9, 6, &CarouselTuning::default()));
    }

    #[test]
    fn reentry_from_above_resets() {
        let mut c = pinned(6);
        c.on_progress(1.0);
        assert_eq!(c.active_index(), 5);
        assert!(c.on_section_position(40.0, 0.0));
        assert_eq!(c.active_index(), 0);
        // far from the top nothing happens
        c.on_progress(1.0);
        assert!(!c.on_section_position(-2000.0, 0.05));
        assert_eq!(c.active_index(), 5);
    }

    #[test]
    fn progress_from_section_position() {
        assert_eq!(progress_from_position(0.0, 3000.0, 800.0), 0.0);
        assert_eq!(progress_from_position(-1100.0, 3000.0, 800.0), 0.5);
        assert_eq!(progress_from_position(-5000.0, 3000.0, 800.0), 1.0);
        assert_eq!(progress_from_position(300.0, 3000.0, 800.0), 0.0);
        assert_eq!(progress_from_position(-10.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn keyboard_navigation_targets() {
        let mut c = pinned(4);
        c.on_progress(0.5);
        let idx = c.active_index() as isize;
        assert_eq!(c.index_for_key("ArrowRight"), Some(idx + 1));
        assert_eq!(c.index_for_key("ArrowLeft"), Some(idx - 1));
        assert_eq!(c.index_for_key("Home"), Some(0));
        assert_eq!(c.index_for_key("End"), Some(3));
        assert_eq!(c.index_for_key("Enter"), None);
    }

    #[test]
    fn frame_gate_coalesces() {
        let mut gate = FrameGate::default();
        assert!(gate.invalidate(Invalidation::Mount));
        assert!(!gate.invalidate(Invalidation::Resize));
        assert!(!gate.invalidate(Invalidation::FontsReady));
        assert_eq!(gate.coalesced(), 2);
        assert!(gate.begin_frame());
        assert!(!gate.is_pending());
        assert!(!gate.begin_frame());
        assert!(gate.invalidate(Invalidation::OrientationChange));
    }

    #[test]
    fn pad2_labels() {
        assert_eq!(pad2(3), "03");
        assert_eq!(pad2(12), "12");
    }
}

//! Carousel state machine: active card tracking, autoplay, scroll sync.

use tracing::{debug, trace};

use crate::debounce::Debounce;
use crate::options::CarouselOptions;
use crate::surface::ScrollSurface;
use crate::timer::{TimerHandle, TimerService};

/// Named input events a host forwards to the controller.
///
/// Hosts translate their concrete UI events (DOM listeners, toolkit
/// messages) into these and dispatch through
/// [`CarouselController::handle_event`]; the controller never touches UI
/// elements directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselEvent {
    /// Indicator dot at the given index was pressed
    IndicatorPressed(usize),
    /// The play/pause toggle was pressed
    PlayPausePressed,
    /// Wheel input over the gallery
    Wheel { delta_x: f64, delta_y: f64 },
    /// The gallery's scroll position changed (any cause)
    Scrolled,
    /// Pointer entered the gallery region
    PointerEntered,
    /// Pointer left the gallery region
    PointerLeft,
    /// The autoplay timer fired
    AutoplayTick,
}

/// State machine for a horizontal card carousel.
///
/// The controller owns the active card/indicator pair, the autoplay timer
/// handle, and the scroll-settle debounce. It mutates nothing outside
/// itself: scrolling goes through an injected [`ScrollSurface`], scheduling
/// through an injected [`TimerService`], and the host reads back visual
/// state through queries ([`current_index`](Self::current_index),
/// [`indicator_paused`](Self::indicator_paused),
/// [`progress_epoch`](Self::progress_epoch)).
///
/// The controller holds no clock. Hosts pass a monotonic millisecond
/// timestamp to [`on_scroll`](Self::on_scroll) and call
/// [`poll`](Self::poll) periodically (a frame loop is fine) so the settle
/// debounce can elapse.
///
/// ## Example
///
/// ```rust
/// use carousel_core::{
///     CarouselController, CarouselOptions, GalleryLayout, ManualTimers, VirtualSurface,
/// };
///
/// let layout = GalleryLayout::uniform(600.0, 5, 280.0, 24.0);
/// let mut surface = VirtualSurface::new(layout);
/// let mut timers = ManualTimers::new();
///
/// let mut carousel = CarouselController::new(5, &CarouselOptions::default());
/// carousel.start(&mut timers);
/// assert!(carousel.is_playing());
/// assert_eq!(carousel.current_index(), 0);
///
/// // Route each timer fire back in as an autoplay tick
/// for _ in timers.advance(4000) {
///     carousel.on_autoplay_tick(&mut surface);
/// }
/// assert_eq!(carousel.current_index(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct CarouselController {
    /// Total number of cards, fixed at construction
    card_count: usize,
    /// Index of the active card/indicator pair
    current_index: usize,
    /// Whether autoplay is logically running
    is_playing: bool,
    /// Handle of the live autoplay timer, present iff one is scheduled
    autoplay_handle: Option<TimerHandle>,
    /// Autoplay is held by hover while `is_playing` stays true
    hover_suspended: bool,
    /// Monotone counter signalling indicator fill restarts
    progress_epoch: u64,
    /// Quiet-period tracker for scroll-settle detection
    settle: Debounce,
    /// Autoplay interval in milliseconds
    interval_ms: u64,
    /// Redirect dominant-vertical wheel input to horizontal scroll
    wheel_redirect: bool,
    /// Suspend autoplay while the pointer is over the gallery
    pause_on_hover: bool,
}

impl CarouselController {
    /// Create a controller for a strip of `card_count` cards.
    ///
    /// The card count is fixed for the controller's lifetime; indicator `i`
    /// is paired with card `i`. Nothing is scheduled until
    /// [`start`](Self::start).
    pub fn new(card_count: usize, options: &CarouselOptions) -> Self {
        Self {
            card_count,
            current_index: 0,
            is_playing: options.autoplay(),
            autoplay_handle: None,
            hover_suspended: false,
            progress_epoch: 0,
            settle: Debounce::new(options.settle_quiet_ms()),
            interval_ms: options.interval_ms(),
            wheel_redirect: options.wheel_redirect(),
            pause_on_hover: options.pause_on_hover(),
        }
    }

    /// Activate the first card and, when autoplay is enabled, schedule the
    /// autoplay timer.
    pub fn start(&mut self, timers: &mut impl TimerService) {
        if self.card_count == 0 {
            return;
        }
        self.update_active_states(0);
        if self.is_playing {
            self.start_auto_scroll(timers);
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// Number of cards in the strip.
    #[inline]
    pub fn card_count(&self) -> usize {
        self.card_count
    }

    /// Index of the active card/indicator pair.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether autoplay is logically running (hover suspension does not
    /// change this).
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Whether the card at `index` is the active one.
    #[inline]
    pub fn is_card_active(&self, index: usize) -> bool {
        self.card_count > 0 && index == self.current_index
    }

    /// Whether the indicator at `index` is the active one.
    #[inline]
    pub fn is_indicator_active(&self, index: usize) -> bool {
        self.is_card_active(index)
    }

    /// Whether the active indicator's progress animation should render
    /// frozen (paused, or suspended by hover).
    #[inline]
    pub fn indicator_paused(&self) -> bool {
        !self.is_playing || self.hover_suspended
    }

    /// Monotone counter bumped every time the active pair changes hands.
    ///
    /// Hosts restart the active indicator's progress-fill animation
    /// whenever this changes.
    #[inline]
    pub fn progress_epoch(&self) -> u64 {
        self.progress_epoch
    }

    /// Whether an autoplay timer is currently scheduled.
    #[inline]
    pub fn autoplay_scheduled(&self) -> bool {
        self.autoplay_handle.is_some()
    }

    /// Handle of the live autoplay timer, if any.
    #[inline]
    pub fn autoplay_handle(&self) -> Option<TimerHandle> {
        self.autoplay_handle
    }

    // ── Operations ───────────────────────────────────────────────────

    /// Smoothly scroll so the card at `index` is centered, then activate
    /// it. No-op when no such card exists.
    pub fn scroll_to_card(&mut self, index: usize, surface: &mut impl ScrollSurface) {
        if index >= self.card_count {
            return;
        }
        let layout = surface.layout();
        let Some(target) = layout.centered_offset(index) else {
            return;
        };
        surface.scroll_to(target.clamp(0.0, layout.max_scroll()));
        self.update_active_states(index);
    }

    /// Make `index` the active card/indicator pair.
    ///
    /// Sole state-mutation entry point for the active pair; every other
    /// operation routes through here so card, indicator, and
    /// `current_index` stay consistent. Bumps the progress epoch even when
    /// the index is unchanged, so the indicator's fill restarts from zero.
    pub fn update_active_states(&mut self, index: usize) {
        if index >= self.card_count {
            return;
        }
        self.current_index = index;
        self.progress_epoch += 1;
    }

    /// Advance to the next card, wrapping at the end.
    pub fn next_card(&mut self, surface: &mut impl ScrollSurface) {
        if self.card_count == 0 {
            return;
        }
        let next = (self.current_index + 1) % self.card_count;
        self.scroll_to_card(next, surface);
    }

    /// Schedule the repeating autoplay timer, cancelling any live one
    /// first. At most one timer is ever scheduled.
    pub fn start_auto_scroll(&mut self, timers: &mut impl TimerService) {
        if self.card_count == 0 {
            return;
        }
        if let Some(handle) = self.autoplay_handle.take() {
            timers.cancel(handle);
        }
        let handle = timers.schedule_repeating(self.interval_ms);
        self.autoplay_handle = Some(handle);
        debug!(interval_ms = self.interval_ms, "autoplay scheduled");
    }

    /// Cancel the autoplay timer if one is scheduled.
    pub fn stop_auto_scroll(&mut self, timers: &mut impl TimerService) {
        if let Some(handle) = self.autoplay_handle.take() {
            timers.cancel(handle);
            debug!("autoplay cancelled");
        }
    }

    /// Flip between playing and paused, scheduling or cancelling the
    /// autoplay timer to match.
    pub fn toggle_play_pause(&mut self, timers: &mut impl TimerService) {
        self.is_playing = !self.is_playing;
        // The explicit control takes over the paused visual from hover
        self.hover_suspended = false;
        debug!(playing = self.is_playing, "play/pause toggled");
        if self.is_playing {
            self.start_auto_scroll(timers);
        } else {
            self.stop_auto_scroll(timers);
        }
    }

    /// The autoplay timer fired. Advances only while playing.
    pub fn on_autoplay_tick(&mut self, surface: &mut impl ScrollSurface) {
        if self.is_playing {
            self.next_card(surface);
        }
    }

    /// Indicator dot at `index` was pressed: jump there and, while playing,
    /// restart the timer so manual navigation resets the countdown instead
    /// of stacking with the prior schedule.
    pub fn press_indicator(
        &mut self,
        index: usize,
        surface: &mut impl ScrollSurface,
        timers: &mut impl TimerService,
    ) {
        if index >= self.card_count {
            return;
        }
        self.scroll_to_card(index, surface);
        if self.is_playing {
            self.start_auto_scroll(timers);
        }
    }

    /// Wheel input over the gallery.
    ///
    /// When the vertical delta dominates, the input is redirected to
    /// horizontal scrolling and `true` is returned so the host can suppress
    /// the default vertical scroll. The first redirected event while
    /// playing pauses autoplay; because the toggle is guarded by
    /// `is_playing`, a continuous gesture pauses once and later ticks are
    /// redirect-only until explicitly resumed.
    pub fn wheel(
        &mut self,
        delta_x: f64,
        delta_y: f64,
        surface: &mut impl ScrollSurface,
        timers: &mut impl TimerService,
    ) -> bool {
        if !self.wheel_redirect || delta_y.abs() <= delta_x.abs() {
            return false;
        }
        surface.scroll_by(delta_y);
        if self.is_playing {
            self.toggle_play_pause(timers);
        }
        true
    }

    /// The gallery's scroll position changed; arm the settle debounce.
    pub fn on_scroll(&mut self, now_ms: u64) {
        if self.card_count == 0 {
            return;
        }
        self.settle.poke(now_ms);
    }

    /// Drive time-based work; call periodically from the host loop.
    ///
    /// When a scroll burst has been quiet for the configured period, the
    /// card whose center is nearest the viewport center becomes active, and
    /// the autoplay countdown restarts if playing. Fires at most once per
    /// burst regardless of how many raw scroll events arrived.
    pub fn poll(
        &mut self,
        now_ms: u64,
        surface: &mut impl ScrollSurface,
        timers: &mut impl TimerService,
    ) {
        if !self.settle.fire(now_ms) {
            return;
        }
        let layout = surface.layout();
        let center = layout.visible_center(surface.scroll_position());
        let Some(nearest) = layout.nearest_card(center) else {
            return;
        };
        if nearest != self.current_index {
            trace!(from = self.current_index, to = nearest, "scroll settled");
            self.update_active_states(nearest);
            if self.is_playing {
                self.start_auto_scroll(timers);
            }
        }
    }

    /// Pointer entered the gallery: suspend autoplay while hovering.
    ///
    /// `is_playing` stays true; only the timer and the indicator fill are
    /// held until the pointer leaves.
    pub fn pointer_enter(&mut self, timers: &mut impl TimerService) {
        if self.pause_on_hover && self.is_playing {
            self.stop_auto_scroll(timers);
            self.hover_suspended = true;
        }
    }

    /// Pointer left the gallery: resume the suspended autoplay.
    pub fn pointer_leave(&mut self, timers: &mut impl TimerService) {
        if self.pause_on_hover && self.is_playing {
            self.start_auto_scroll(timers);
            self.hover_suspended = false;
        }
    }

    /// Dispatch a named input event.
    ///
    /// Returns `true` when the event was handled; for [`CarouselEvent::Wheel`]
    /// this means the input was redirected and the host should suppress its
    /// default scroll. `now_ms` is only read for [`CarouselEvent::Scrolled`].
    pub fn handle_event(
        &mut self,
        event: CarouselEvent,
        now_ms: u64,
        surface: &mut impl ScrollSurface,
        timers: &mut impl TimerService,
    ) -> bool {
        match event {
            CarouselEvent::IndicatorPressed(index) => {
                self.press_indicator(index, surface, timers);
                true
            }
            CarouselEvent::PlayPausePressed => {
                self.toggle_play_pause(timers);
                true
            }
            CarouselEvent::Wheel { delta_x, delta_y } => {
                self.wheel(delta_x, delta_y, surface, timers)
            }
            CarouselEvent::Scrolled => {
                self.on_scroll(now_ms);
                true
            }
            CarouselEvent::PointerEntered => {
                self.pointer_enter(timers);
                true
            }
            CarouselEvent::PointerLeft => {
                self.pointer_leave(timers);
                true
            }
            CarouselEvent::AutoplayTick => {
                self.on_autoplay_tick(surface);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GalleryLayout, ManualTimers, VirtualSurface};

    fn setup(cards: usize) -> (CarouselController, VirtualSurface, ManualTimers) {
        let layout = GalleryLayout::uniform(600.0, cards, 280.0, 24.0);
        (
            CarouselController::new(cards, &CarouselOptions::default()),
            VirtualSurface::new(layout),
            ManualTimers::new(),
        )
    }

    fn fire_autoplay(
        carousel: &mut CarouselController,
        surface: &mut VirtualSurface,
        timers: &mut ManualTimers,
        ms: u64,
    ) -> usize {
        let fired = timers.advance(ms);
        let count = fired.len();
        for _ in fired {
            carousel.on_autoplay_tick(surface);
        }
        count
    }

    #[test]
    fn test_exactly_one_active_pair() {
        let (mut carousel, _, _) = setup(5);
        for i in 0..5 {
            carousel.update_active_states(i);
            assert_eq!(carousel.current_index(), i);
            for j in 0..5 {
                assert_eq!(carousel.is_card_active(j), j == i);
                assert_eq!(carousel.is_indicator_active(j), j == i);
            }
        }
    }

    #[test]
    fn test_next_card_wraps() {
        let (mut carousel, mut surface, _) = setup(5);
        carousel.update_active_states(4);
        carousel.next_card(&mut surface);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_advance_sequence() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);

        for expected in [1, 2, 3, 4] {
            carousel.next_card(&mut surface);
            assert_eq!(carousel.current_index(), expected);
        }
        carousel.next_card(&mut surface);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn test_autoplay_advances_on_timer() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);

        assert_eq!(fire_autoplay(&mut carousel, &mut surface, &mut timers, 3999), 0);
        assert_eq!(carousel.current_index(), 0);

        assert_eq!(fire_autoplay(&mut carousel, &mut surface, &mut timers, 1), 1);
        assert_eq!(carousel.current_index(), 1);
        // The scroll request went out to the surface
        assert!(surface.scroll_position() > 0.0);
    }

    #[test]
    fn test_start_auto_scroll_is_idempotent() {
        let (mut carousel, _, mut timers) = setup(5);
        carousel.start_auto_scroll(&mut timers);
        let first = carousel.autoplay_handle();
        carousel.start_auto_scroll(&mut timers);

        // Old timer cancelled before the new one was scheduled
        assert_eq!(timers.active_count(), 1);
        assert_ne!(carousel.autoplay_handle(), first);
    }

    #[test]
    fn test_toggle_play_pause_pairs() {
        let (mut carousel, _, mut timers) = setup(5);
        carousel.start(&mut timers);
        assert!(carousel.is_playing());
        assert_eq!(timers.active_count(), 1);

        carousel.toggle_play_pause(&mut timers);
        assert!(!carousel.is_playing());
        assert!(carousel.indicator_paused());
        assert_eq!(timers.active_count(), 0);
        assert!(!carousel.autoplay_scheduled());

        carousel.toggle_play_pause(&mut timers);
        assert!(carousel.is_playing());
        assert!(!carousel.indicator_paused());
        assert_eq!(timers.active_count(), 1);
    }

    #[test]
    fn test_toggle_pairs_from_stopped() {
        let options = CarouselOptions {
            autoplay: Some(false),
            ..Default::default()
        };
        let mut carousel = CarouselController::new(5, &options);
        let mut timers = ManualTimers::new();
        carousel.start(&mut timers);
        assert!(!carousel.is_playing());
        assert_eq!(timers.active_count(), 0);

        carousel.toggle_play_pause(&mut timers);
        carousel.toggle_play_pause(&mut timers);
        assert!(!carousel.is_playing());
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_indicator_press_resets_countdown() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);

        // Partway through the interval, click a dot
        assert!(timers.advance(3000).is_empty());
        carousel.press_indicator(2, &mut surface, &mut timers);
        assert_eq!(carousel.current_index(), 2);
        assert_eq!(timers.active_count(), 1);

        // Countdown restarted: nothing fires until a full interval later
        assert!(timers.advance(3999).is_empty());
        assert_eq!(timers.advance(1).len(), 1);
    }

    #[test]
    fn test_indicator_press_same_index_restarts_fill() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);
        let epoch = carousel.progress_epoch();

        carousel.press_indicator(0, &mut surface, &mut timers);
        assert_eq!(carousel.current_index(), 0);
        assert!(carousel.progress_epoch() > epoch);
    }

    #[test]
    fn test_scroll_settle_reconciles_once() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);
        carousel.update_active_states(1);
        let epoch = carousel.progress_epoch();

        // User drags the strip so card 3 sits at the viewport center
        surface.scroll_to(752.0);
        carousel.on_scroll(0);
        carousel.on_scroll(30);
        carousel.on_scroll(60);

        // Quiet period measured from the last raw event
        carousel.poll(100, &mut surface, &mut timers);
        assert_eq!(carousel.current_index(), 1);

        carousel.poll(160, &mut surface, &mut timers);
        assert_eq!(carousel.current_index(), 3);
        assert_eq!(carousel.progress_epoch(), epoch + 1);
        assert_eq!(timers.active_count(), 1);

        // Settled burst is consumed; later polls change nothing
        carousel.poll(1000, &mut surface, &mut timers);
        assert_eq!(carousel.progress_epoch(), epoch + 1);
    }

    #[test]
    fn test_scroll_settle_same_card_keeps_state() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);
        carousel.update_active_states(2);
        let epoch = carousel.progress_epoch();

        // Small wiggle around card 2's centered offset (448) still settles
        // nearest to card 2: viewport center 758 vs card center 748
        surface.scroll_to(458.0);
        carousel.on_scroll(0);
        carousel.poll(100, &mut surface, &mut timers);

        assert_eq!(carousel.current_index(), 2);
        assert_eq!(carousel.progress_epoch(), epoch);
    }

    #[test]
    fn test_hover_suspends_and_resumes() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);

        carousel.pointer_enter(&mut timers);
        assert!(carousel.is_playing());
        assert!(!carousel.autoplay_scheduled());
        assert!(carousel.indicator_paused());

        // No ticks while hovered, however long it lasts
        assert_eq!(fire_autoplay(&mut carousel, &mut surface, &mut timers, 20_000), 0);
        assert_eq!(carousel.current_index(), 0);

        carousel.pointer_leave(&mut timers);
        assert!(carousel.autoplay_scheduled());
        assert!(!carousel.indicator_paused());
        assert_eq!(timers.active_count(), 1);
    }

    #[test]
    fn test_hover_ignored_while_paused() {
        let (mut carousel, _, mut timers) = setup(5);
        carousel.start(&mut timers);
        carousel.toggle_play_pause(&mut timers);

        carousel.pointer_enter(&mut timers);
        carousel.pointer_leave(&mut timers);
        assert!(!carousel.is_playing());
        assert!(!carousel.autoplay_scheduled());
    }

    #[test]
    fn test_wheel_redirects_and_pauses_once() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);

        assert!(carousel.wheel(2.0, 40.0, &mut surface, &mut timers));
        assert_eq!(surface.scroll_position(), 40.0);
        assert!(!carousel.is_playing());
        assert_eq!(timers.active_count(), 0);

        // Later ticks of the same gesture keep scrolling without toggling
        assert!(carousel.wheel(0.0, 40.0, &mut surface, &mut timers));
        assert_eq!(surface.scroll_position(), 80.0);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn test_wheel_horizontal_dominant_passes_through() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);

        assert!(!carousel.wheel(40.0, 2.0, &mut surface, &mut timers));
        assert_eq!(surface.scroll_position(), 0.0);
        assert!(carousel.is_playing());
    }

    #[test]
    fn test_wheel_redirect_disabled() {
        let options = CarouselOptions {
            wheel_redirect: Some(false),
            ..Default::default()
        };
        let mut carousel = CarouselController::new(5, &options);
        let mut surface = VirtualSurface::new(GalleryLayout::uniform(600.0, 5, 280.0, 24.0));
        let mut timers = ManualTimers::new();
        carousel.start(&mut timers);

        assert!(!carousel.wheel(2.0, 40.0, &mut surface, &mut timers));
        assert_eq!(surface.scroll_position(), 0.0);
        assert!(carousel.is_playing());
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);
        let epoch = carousel.progress_epoch();

        carousel.scroll_to_card(99, &mut surface);
        carousel.update_active_states(99);
        carousel.press_indicator(99, &mut surface, &mut timers);

        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.progress_epoch(), epoch);
        assert_eq!(surface.scroll_position(), 0.0);
    }

    #[test]
    fn test_zero_cards_never_acts() {
        let (mut carousel, mut surface, mut timers) = setup(0);
        carousel.start(&mut timers);
        carousel.next_card(&mut surface);
        carousel.on_autoplay_tick(&mut surface);
        carousel.start_auto_scroll(&mut timers);
        carousel.on_scroll(0);
        carousel.poll(1000, &mut surface, &mut timers);

        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_card_active(0));
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_scroll_target_clamped_to_range() {
        let (mut carousel, mut surface, _) = setup(5);
        // Centering card 0 would need a negative offset
        carousel.scroll_to_card(0, &mut surface);
        assert_eq!(surface.scroll_position(), 0.0);

        // Centering the last card would overshoot max_scroll
        carousel.scroll_to_card(4, &mut surface);
        assert_eq!(surface.scroll_position(), surface.layout().max_scroll());
    }

    #[test]
    fn test_handle_event_dispatch() {
        let (mut carousel, mut surface, mut timers) = setup(5);
        carousel.start(&mut timers);

        assert!(carousel.handle_event(
            CarouselEvent::IndicatorPressed(3),
            0,
            &mut surface,
            &mut timers,
        ));
        assert_eq!(carousel.current_index(), 3);

        assert!(carousel.handle_event(
            CarouselEvent::PlayPausePressed,
            0,
            &mut surface,
            &mut timers,
        ));
        assert!(!carousel.is_playing());

        // Horizontal-dominant wheel is not consumed
        assert!(!carousel.handle_event(
            CarouselEvent::Wheel {
                delta_x: 10.0,
                delta_y: 1.0
            },
            0,
            &mut surface,
            &mut timers,
        ));

        assert!(carousel.handle_event(CarouselEvent::Scrolled, 50, &mut surface, &mut timers));
        assert!(carousel.handle_event(CarouselEvent::PointerEntered, 0, &mut surface, &mut timers));
        assert!(carousel.handle_event(CarouselEvent::PointerLeft, 0, &mut surface, &mut timers));
        assert!(carousel.handle_event(CarouselEvent::AutoplayTick, 0, &mut surface, &mut timers));
    }
}

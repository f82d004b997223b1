//! Web/WASM bindings: a DOM-backed scroll surface and interval timers.
//!
//! Everything here degrades to a silent no-op when the expected DOM pieces
//! are missing, matching the controller's defensive policy.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::{
    CardMetrics, CarouselController, GalleryLayout, ScrollSurface, TimerHandle, TimerService,
};

/// [`ScrollSurface`] over a scrollable container element and its card
/// elements.
///
/// Geometry is read fresh on every [`layout`](ScrollSurface::layout) call,
/// so host-side reflows (resize, font swap) are picked up without any
/// invalidation protocol.
#[derive(Clone, Debug)]
pub struct DomGallery {
    container: HtmlElement,
    cards: Vec<HtmlElement>,
}

impl DomGallery {
    /// Create a gallery over a container and an ordered card list.
    ///
    /// Card order must match the indicator order; pairing is positional.
    pub fn new(container: HtmlElement, cards: Vec<HtmlElement>) -> Self {
        Self { container, cards }
    }

    /// Create a gallery by collecting the container's descendants with the
    /// given class name, in document order.
    pub fn from_container(container: HtmlElement, card_class: &str) -> Self {
        let collection = container.get_elements_by_class_name(card_class);
        let mut cards = Vec::with_capacity(collection.length() as usize);
        for i in 0..collection.length() {
            if let Some(card) = collection
                .item(i)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                cards.push(card);
            }
        }
        Self { container, cards }
    }

    /// Number of card elements found.
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

impl ScrollSurface for DomGallery {
    fn layout(&self) -> GalleryLayout {
        let cards = self
            .cards
            .iter()
            .map(|card| {
                CardMetrics::new(card.offset_left() as f64, card.offset_width() as f64)
            })
            .collect();
        GalleryLayout::new(self.container.offset_width() as f64, cards)
    }

    fn scroll_position(&self) -> f64 {
        self.container.scroll_left() as f64
    }

    fn scroll_to(&mut self, offset: f64) {
        let options = ScrollToOptions::new();
        options.set_left(offset);
        options.set_behavior(ScrollBehavior::Smooth);
        self.container.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_by(&mut self, delta: f64) {
        self.container
            .set_scroll_left(self.container.scroll_left() + delta as i32);
    }
}

/// Apply the controller's visual state to card and indicator elements.
///
/// Uses the class names the stylesheet keys on: `carousel-active` on the
/// active card, `active` on the active dot, `paused` on the active dot
/// while the progress fill is held. Call after any controller operation
/// that may have changed state.
pub fn apply_active_classes(
    carousel: &CarouselController,
    cards: &[HtmlElement],
    dots: &[HtmlElement],
) {
    for (i, card) in cards.iter().enumerate() {
        let _ = card
            .class_list()
            .toggle_with_force("carousel-active", carousel.is_card_active(i));
    }
    for (i, dot) in dots.iter().enumerate() {
        let active = carousel.is_indicator_active(i);
        let _ = dot.class_list().toggle_with_force("active", active);
        let _ = dot
            .class_list()
            .toggle_with_force("paused", active && carousel.indicator_paused());
    }
}

struct ActiveInterval {
    handle: TimerHandle,
    interval_id: i32,
    // Dropping the closure would invalidate the JS callback
    _closure: Closure<dyn FnMut()>,
}

/// [`TimerService`] over `Window::setInterval`.
///
/// Every scheduled timer invokes the single tick callback registered at
/// construction; hosts route that into
/// [`CarouselController::on_autoplay_tick`]. Scheduling silently yields a
/// dead handle when no `window` exists or `setInterval` fails.
///
/// ## Example
///
/// ```rust,ignore
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use carousel_core::{CarouselController, IntervalTimers};
///
/// let carousel = Rc::new(RefCell::new(controller));
/// let tick_target = Rc::clone(&carousel);
/// let timers = IntervalTimers::new(move || {
///     tick_target.borrow_mut().on_autoplay_tick(&mut surface());
/// });
/// ```
pub struct IntervalTimers {
    tick: Rc<RefCell<Box<dyn FnMut()>>>,
    active: Vec<ActiveInterval>,
    next_id: u64,
}

impl IntervalTimers {
    /// Create a service whose timers all invoke `on_tick`.
    pub fn new(on_tick: impl FnMut() + 'static) -> Self {
        Self {
            tick: Rc::new(RefCell::new(Box::new(on_tick))),
            active: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of live intervals.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl Drop for IntervalTimers {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            for interval in &self.active {
                window.clear_interval_with_handle(interval.interval_id);
            }
        }
    }
}

impl TimerService for IntervalTimers {
    fn schedule_repeating(&mut self, interval_ms: u64) -> TimerHandle {
        let handle = TimerHandle::from_raw(self.next_id);
        self.next_id += 1;

        let tick = Rc::clone(&self.tick);
        let closure = Closure::wrap(Box::new(move || {
            let mut tick = tick.borrow_mut();
            (*tick)();
        }) as Box<dyn FnMut()>);

        if let Some(window) = web_sys::window() {
            let timeout = interval_ms.min(i32::MAX as u64) as i32;
            if let Ok(interval_id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                timeout,
            ) {
                self.active.push(ActiveInterval {
                    handle,
                    interval_id,
                    _closure: closure,
                });
            }
        }
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(pos) = self.active.iter().position(|t| t.handle == handle) {
            let interval = self.active.remove(pos);
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(interval.interval_id);
            }
        }
    }
}

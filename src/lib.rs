//! # carousel-core
//!
//! Headless state and geometry library for horizontal card carousels.
//!
//! This crate provides platform-agnostic logic for:
//! - Tracking the active card/indicator pair of a scrollable card strip
//! - Auto-advancing on a repeating timer with pause/resume and hover hold
//! - Reconciling free-form user scrolling back into the active card
//!   (debounced nearest-center detection)
//! - Centering math and scroll geometry for the strip
//!
//! The controller owns nothing platform-specific: viewports implement
//! [`ScrollSurface`], schedulers implement [`TimerService`], and hosts
//! forward named [`CarouselEvent`]s. [`VirtualSurface`] and [`ManualTimers`]
//! are complete in-memory implementations for host loops and tests.
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for options
//! - `toml` - Parse [`CarouselOptions`] from TOML
//! - `web` - DOM-backed surface and interval timers via web-sys
//!
//! ## Example
//!
//! ```rust
//! use carousel_core::{
//!     CarouselController, CarouselEvent, CarouselOptions, GalleryLayout, ManualTimers,
//!     VirtualSurface,
//! };
//!
//! let layout = GalleryLayout::uniform(600.0, 5, 280.0, 24.0);
//! let mut surface = VirtualSurface::new(layout);
//! let mut timers = ManualTimers::new();
//!
//! let mut carousel = CarouselController::new(5, &CarouselOptions::default());
//! carousel.start(&mut timers);
//!
//! // Clicking the third dot jumps there and restarts the countdown
//! carousel.handle_event(CarouselEvent::IndicatorPressed(2), 0, &mut surface, &mut timers);
//! assert_eq!(carousel.current_index(), 2);
//! ```

mod controller;
mod debounce;
mod layout;
mod options;
mod surface;
mod timer;

#[cfg(feature = "web")]
pub mod dom;

pub use controller::{CarouselController, CarouselEvent};
pub use debounce::Debounce;
pub use layout::{CardMetrics, GalleryLayout};
pub use options::{CarouselOptions, DEFAULT_INTERVAL_MS, DEFAULT_SETTLE_QUIET_MS};
pub use surface::{ScrollSurface, VirtualSurface};
pub use timer::{ManualTimers, TimerHandle, TimerService};

#[cfg(feature = "web")]
pub use dom::{apply_active_classes, DomGallery, IntervalTimers};

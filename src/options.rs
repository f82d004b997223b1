//! Carousel behavior options.

/// Default autoplay interval: 4 seconds per card.
pub const DEFAULT_INTERVAL_MS: u64 = 4000;

/// Default quiet period before a manual scroll counts as settled.
pub const DEFAULT_SETTLE_QUIET_MS: u64 = 100;

/// Tunable carousel behavior, typically loaded from a host config file.
///
/// All fields are optional for forward/backward compatibility; accessors
/// apply the defaults. Out-of-range values are clamped rather than
/// rejected.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselOptions {
    /// Start with autoplay running (default: true)
    pub autoplay: Option<bool>,
    /// Autoplay interval in milliseconds (default: 4000)
    pub interval_ms: Option<u64>,
    /// Scroll-settle quiet period in milliseconds (default: 100)
    pub settle_quiet_ms: Option<u64>,
    /// Redirect dominant-vertical wheel input to horizontal scroll
    /// (default: true)
    pub wheel_redirect: Option<bool>,
    /// Suspend autoplay while the pointer is over the gallery
    /// (default: true)
    pub pause_on_hover: Option<bool>,
}

impl CarouselOptions {
    /// Parse options from a TOML string.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Whether autoplay starts running.
    pub fn autoplay(&self) -> bool {
        self.autoplay.unwrap_or(true)
    }

    /// Autoplay interval in milliseconds, clamped to at least 1 ms.
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms.unwrap_or(DEFAULT_INTERVAL_MS).max(1)
    }

    /// Scroll-settle quiet period in milliseconds, clamped to at least 1 ms.
    pub fn settle_quiet_ms(&self) -> u64 {
        self.settle_quiet_ms
            .unwrap_or(DEFAULT_SETTLE_QUIET_MS)
            .max(1)
    }

    /// Whether vertical wheel input is redirected to horizontal scroll.
    pub fn wheel_redirect(&self) -> bool {
        self.wheel_redirect.unwrap_or(true)
    }

    /// Whether hovering the gallery suspends autoplay.
    pub fn pause_on_hover(&self) -> bool {
        self.pause_on_hover.unwrap_or(true)
    }
}

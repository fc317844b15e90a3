//! Core types for site-chrome.
//!
//! These types define the visual states the page chrome can be in and the
//! selectors/class names that make up the contract with the host document.
//! Everything else in the crate computes or applies one of these values.

// =============================================================================
// Selectors
// =============================================================================

/// Header element, preferred lookup.
pub const HEADER_ID_SELECTOR: &str = "#header";
/// Header element, fallback lookup.
pub const HEADER_CLASS_SELECTOR: &str = ".header";
pub const NAV_TOGGLE_SELECTOR: &str = ".mobile-nav-toggle";
pub const NAV_OVERLAY_SELECTOR: &str = ".mobile-nav-overlay";
pub const NAV_CLOSE_SELECTOR: &str = ".mobile-nav-close";
pub const PRELOADER_SELECTOR: &str = "#preloader";
pub const SCROLL_TOP_SELECTOR: &str = ".scroll-top";
pub const CAROUSEL_SELECTOR: &str = ".carousel";
pub const CAROUSEL_INDICATORS_SELECTOR: &str = ".carousel-indicators";
pub const CAROUSEL_ITEM_SELECTOR: &str = ".carousel-item";
pub const SLIDER_SELECTOR: &str = ".init-swiper";
pub const SLIDER_CONFIG_SELECTOR: &str = ".swiper-config";
pub const LIGHTBOX_SELECTOR: &str = ".glightbox";

// =============================================================================
// Class Names
// =============================================================================

/// Body marker set once the page has scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";
/// Header marker for sticky-top / fixed-top pinning.
pub const STICKY_CLASS: &str = "sticky";
/// Visibility marker shared by the overlay and the scroll-top button.
pub const ACTIVE_CLASS: &str = "active";
/// Body marker that locks page scrolling while the overlay is open.
pub const NO_SCROLL_CLASS: &str = "no-scroll";
/// Slider variant that uses custom (tab) pagination.
pub const SLIDER_TAB_CLASS: &str = "swiper-tab";

pub const SCROLL_UP_STICKY_CLASS: &str = "scroll-up-sticky";
pub const STICKY_TOP_CLASS: &str = "sticky-top";
pub const FIXED_TOP_CLASS: &str = "fixed-top";

// =============================================================================
// Thresholds
// =============================================================================

pub const DEFAULT_SCROLLED_THRESHOLD_PX: u32 = 100;
pub const DEFAULT_STICKY_THRESHOLD_PX: u32 = 50;
pub const DEFAULT_HIDDEN_OFFSET_EXTRA_PX: u32 = 50;
pub const DEFAULT_SCROLL_TOP_THRESHOLD_PX: u32 = 100;

// =============================================================================
// Scroll
// =============================================================================

/// Direction of travel between two consecutive scroll samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollDirection {
    Up,
    Down,
    /// Same offset as the previous sample.
    #[default]
    None,
}

// =============================================================================
// Header
// =============================================================================

/// How the header participates in scrolling.
///
/// Read from the header's classes at bootstrap (see
/// [`HeaderMode::from_classes`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Normal document flow, never pinned or hidden.
    #[default]
    None,
    StickyTop,
    FixedTop,
    /// Hides on downward scroll, reappears pinned on upward scroll.
    ScrollUpSticky,
}

impl HeaderMode {
    /// Detect the mode from a header's class predicate.
    ///
    /// `scroll-up-sticky` wins over the plain sticky variants when a header
    /// carries several of them.
    pub fn from_classes(has_class: impl Fn(&str) -> bool) -> Self {
        if has_class(SCROLL_UP_STICKY_CLASS) {
            Self::ScrollUpSticky
        } else if has_class(STICKY_TOP_CLASS) {
            Self::StickyTop
        } else if has_class(FIXED_TOP_CLASS) {
            Self::FixedTop
        } else {
            Self::None
        }
    }

    /// Whether the mode pins the header once past the sticky threshold.
    pub fn is_sticky(self) -> bool {
        matches!(self, Self::StickyTop | Self::FixedTop)
    }
}

/// Positional state of the header.
///
/// `Pinned` and `Hidden` are mutually exclusive by construction; `Hidden`
/// only ever comes out of [`HeaderMode::ScrollUpSticky`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderState {
    #[default]
    Normal,
    Pinned,
    Hidden,
}

/// Result of one header recompute: the positional state plus the
/// orthogonal "page has scrolled" flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFrame {
    pub state: HeaderState,
    pub scrolled: bool,
}

// =============================================================================
// Navigation Overlay
// =============================================================================

/// Open/closed state of the mobile navigation overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

impl NavState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Glyph shown on the menu-toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Hamburger, shown while the overlay is closed.
    Menu,
    /// Cross, shown while the overlay is open.
    Close,
}

impl ToggleIcon {
    /// Icon-font class carrying the glyph.
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Menu => "bi-list",
            Self::Close => "bi-x",
        }
    }

    /// The class of the other glyph (the one to remove).
    pub const fn opposite_class_name(self) -> &'static str {
        match self {
            Self::Menu => Self::Close.class_name(),
            Self::Close => Self::Menu.class_name(),
        }
    }
}

impl From<NavState> for ToggleIcon {
    fn from(state: NavState) -> Self {
        match state {
            NavState::Closed => Self::Menu,
            NavState::Open => Self::Close,
        }
    }
}

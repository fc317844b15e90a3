//! Collaborators - Third-party page libraries as injected capabilities
//!
//! Sliders, the lightbox and animate-on-scroll are implemented by external
//! libraries. The page chrome only decides *when* and *with what* they are
//! initialized; the host hands in implementations of these traits (or
//! leaves them out when a library is not loaded on the page).
//!
//! Carousel indicators are generated here directly since they are plain
//! markup.

mod carousel;
mod slider;

pub use carousel::generate_indicators;
pub use slider::{init_sliders, parse_slider_config, SliderReport};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dom::NodeId;
use crate::error::Result;

// =============================================================================
// OPTIONS
// =============================================================================

/// Options forwarded to the animate-on-scroll library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimateOptions {
    /// Animation duration in milliseconds.
    pub duration: u32,
    pub easing: String,
    /// Animate only the first time an element scrolls into view.
    pub once: bool,
    /// Animate again when scrolling back past an element.
    pub mirror: bool,
}

impl Default for AnimateOptions {
    fn default() -> Self {
        Self {
            duration: 600,
            easing: "ease-in-out".to_string(),
            once: true,
            mirror: false,
        }
    }
}

// =============================================================================
// TRAITS
// =============================================================================

/// Animate-on-scroll library.
pub trait ScrollAnimator {
    fn init(&mut self, options: &AnimateOptions) -> Result<()>;
}

/// Slider library. The config is forwarded verbatim.
pub trait SliderFactory {
    fn create(&mut self, element: NodeId, config: &Value) -> Result<()>;

    /// Sliders marked `swiper-tab` use tab-style custom pagination.
    fn create_with_custom_pagination(&mut self, element: NodeId, config: &Value) -> Result<()>;
}

/// Lightbox library.
pub trait Lightbox {
    fn init(&mut self, selector: &str) -> Result<()>;
}

/// The set of libraries available on the page.
#[derive(Default)]
pub struct Collaborators {
    pub animator: Option<Box<dyn ScrollAnimator>>,
    pub sliders: Option<Box<dyn SliderFactory>>,
    pub lightbox: Option<Box<dyn Lightbox>>,
}

impl Collaborators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animator(mut self, animator: impl ScrollAnimator + 'static) -> Self {
        self.animator = Some(Box::new(animator));
        self
    }

    pub fn with_sliders(mut self, sliders: impl SliderFactory + 'static) -> Self {
        self.sliders = Some(Box::new(sliders));
        self
    }

    pub fn with_lightbox(mut self, lightbox: impl Lightbox + 'static) -> Self {
        self.lightbox = Some(Box::new(lightbox));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animate_options_defaults() {
        let json = serde_json::to_value(AnimateOptions::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "duration": 600,
                "easing": "ease-in-out",
                "once": true,
                "mirror": false,
            })
        );
    }

    #[test]
    fn test_collaborators_builder() {
        struct NoopLightbox;
        impl Lightbox for NoopLightbox {
            fn init(&mut self, _selector: &str) -> Result<()> {
                Ok(())
            }
        }

        let collaborators = Collaborators::new().with_lightbox(NoopLightbox);
        assert!(collaborators.lightbox.is_some());
        assert!(collaborators.animator.is_none());
        assert!(collaborators.sliders.is_none());
    }
}

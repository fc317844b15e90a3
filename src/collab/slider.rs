//! Slider bootstrapping.
//!
//! Each `.init-swiper` element carries its own JSON config in a
//! `.swiper-config` child. Failures are scoped to the one slider: a missing
//! or malformed config, or a factory error, is logged and the remaining
//! sliders are still created.

use serde_json::Value;
use tracing::{debug, warn};

use super::SliderFactory;
use crate::dom::{Dom, NodeId};
use crate::error::{ChromeError, Result};
use crate::types::{SLIDER_CONFIG_SELECTOR, SLIDER_SELECTOR, SLIDER_TAB_CLASS};

/// Outcome of [`init_sliders`].
#[derive(Debug, Default)]
pub struct SliderReport {
    pub initialized: usize,
    pub failures: Vec<ChromeError>,
}

impl SliderReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Parse a slider config blob. Surrounding whitespace is ignored.
pub fn parse_slider_config(target: &str, text: &str) -> Result<Value> {
    serde_json::from_str(text.trim()).map_err(|source| ChromeError::MalformedConfig {
        target: target.to_string(),
        source,
    })
}

/// Create every slider on the page through `factory`.
pub fn init_sliders<D, F>(dom: &D, factory: &mut F) -> SliderReport
where
    D: Dom + ?Sized,
    F: SliderFactory + ?Sized,
{
    let mut report = SliderReport::default();

    for (index, element) in dom.query_all(SLIDER_SELECTOR).into_iter().enumerate() {
        match init_one(dom, factory, index, element) {
            Ok(()) => report.initialized += 1,
            Err(e) => {
                warn!("Slider {} not initialized: {}", index, e);
                report.failures.push(e);
            }
        }
    }

    debug!(
        initialized = report.initialized,
        failed = report.failed(),
        "sliders bootstrapped"
    );
    report
}

fn init_one<D, F>(dom: &D, factory: &mut F, index: usize, element: NodeId) -> Result<()>
where
    D: Dom + ?Sized,
    F: SliderFactory + ?Sized,
{
    let target = match dom.element_id(element) {
        Some(id) => format!("slider #{}", id),
        None => format!("slider {}", index),
    };

    let config_node = dom
        .query_within(element, SLIDER_CONFIG_SELECTOR)
        .into_iter()
        .next()
        .ok_or_else(|| ChromeError::missing(format!("{} in {}", SLIDER_CONFIG_SELECTOR, target)))?;

    let config = parse_slider_config(&target, &dom.text_content(config_node))?;

    if dom.has_class(element, SLIDER_TAB_CLASS) {
        factory.create_with_custom_pagination(element, &config)
    } else {
        factory.create(element, &config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{ElementSpec, MemoryDocument};

    #[derive(Default)]
    struct RecordingFactory {
        created: Vec<(NodeId, Value)>,
        tabbed: Vec<NodeId>,
        fail_on: Option<NodeId>,
    }

    impl SliderFactory for RecordingFactory {
        fn create(&mut self, element: NodeId, config: &Value) -> Result<()> {
            if self.fail_on == Some(element) {
                return Err(ChromeError::collaborator("slider", "constructor threw"));
            }
            self.created.push((element, config.clone()));
            Ok(())
        }

        fn create_with_custom_pagination(&mut self, element: NodeId, config: &Value) -> Result<()> {
            self.tabbed.push(element);
            self.create(element, config)
        }
    }

    fn slider(doc: &mut MemoryDocument, classes: &[&str], config: Option<&str>) -> NodeId {
        let body = doc.body_node();
        let mut spec = ElementSpec::new("div").class("init-swiper");
        for class in classes {
            spec = spec.class(*class);
        }
        let element = doc.create(body, spec);
        if let Some(config) = config {
            doc.create(
                element,
                ElementSpec::new("script").class("swiper-config").text(config),
            );
        }
        element
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let value = parse_slider_config("slider 0", "\n  {\"loop\": true, \"speed\": 600}\n").unwrap();
        assert_eq!(value["loop"], Value::Bool(true));
        assert_eq!(value["speed"], 600);
    }

    #[test]
    fn test_parse_malformed() {
        let err = parse_slider_config("slider 0", "{ loop: true }").unwrap_err();
        assert!(matches!(err, ChromeError::MalformedConfig { .. }));
    }

    #[test]
    fn test_config_passed_verbatim() {
        let mut doc = MemoryDocument::new();
        let element = slider(
            &mut doc,
            &[],
            Some(r#"{"slidesPerView": "auto", "pagination": {"el": ".swiper-pagination"}}"#),
        );
        let mut factory = RecordingFactory::default();

        let report = init_sliders(&doc, &mut factory);

        assert_eq!(report.initialized, 1);
        assert_eq!(report.failed(), 0);
        assert_eq!(factory.created[0].0, element);
        assert_eq!(factory.created[0].1["pagination"]["el"], ".swiper-pagination");
    }

    #[test]
    fn test_tab_variant_uses_custom_pagination() {
        let mut doc = MemoryDocument::new();
        let plain = slider(&mut doc, &[], Some("{}"));
        let tabbed = slider(&mut doc, &["swiper-tab"], Some("{}"));
        let mut factory = RecordingFactory::default();

        let report = init_sliders(&doc, &mut factory);

        assert_eq!(report.initialized, 2);
        assert_eq!(factory.tabbed, vec![tabbed]);
        assert_eq!(factory.created.len(), 2);
        assert_eq!(factory.created[0].0, plain);
    }

    #[test]
    fn test_failures_are_isolated() {
        let mut doc = MemoryDocument::new();
        slider(&mut doc, &[], Some("{ not json"));
        slider(&mut doc, &[], None);
        let broken = slider(&mut doc, &[], Some("{}"));
        let good = slider(&mut doc, &[], Some(r#"{"loop": true}"#));
        let mut factory = RecordingFactory {
            fail_on: Some(broken),
            ..Default::default()
        };

        let report = init_sliders(&doc, &mut factory);

        assert_eq!(report.initialized, 1);
        assert_eq!(report.failed(), 3);
        assert!(matches!(report.failures[0], ChromeError::MalformedConfig { .. }));
        assert!(matches!(report.failures[1], ChromeError::MissingElement(_)));
        assert!(matches!(report.failures[2], ChromeError::Collaborator { .. }));
        assert_eq!(factory.created.len(), 1);
        assert_eq!(factory.created[0].0, good);
    }
}

//! Carousel indicator generation.
//!
//! For every `.carousel-indicators` list, one `<li>` is appended per
//! `.carousel-item` of the enclosing `.carousel`:
//!
//! ```text
//! <li data-bs-target="#hero" data-bs-slide-to="0" class="active"></li>
//! <li data-bs-target="#hero" data-bs-slide-to="1"></li>
//! ```

use tracing::debug;

use crate::dom::{Dom, ElementSpec};
use crate::types::{ACTIVE_CLASS, CAROUSEL_INDICATORS_SELECTOR, CAROUSEL_ITEM_SELECTOR, CAROUSEL_SELECTOR};

/// Generate indicators for every carousel. Returns the number of
/// indicators created.
pub fn generate_indicators<D: Dom + ?Sized>(dom: &mut D) -> usize {
    let mut created = 0;

    for indicators in dom.query_all(CAROUSEL_INDICATORS_SELECTOR) {
        let Some(carousel) = dom.closest(indicators, CAROUSEL_SELECTOR) else {
            debug!("carousel indicators outside a carousel, skipped");
            continue;
        };

        let target = format!("#{}", dom.element_id(carousel).unwrap_or_default());
        for (index, _item) in dom.query_within(carousel, CAROUSEL_ITEM_SELECTOR).into_iter().enumerate() {
            let mut li = ElementSpec::new("li")
                .attr("data-bs-target", target.as_str())
                .attr("data-bs-slide-to", index.to_string());
            if index == 0 {
                li = li.class(ACTIVE_CLASS);
            }
            dom.append_element(indicators, li);
            created += 1;
        }
    }

    created
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{MemoryDocument, NodeId};

    fn carousel(doc: &mut MemoryDocument, id: &str, items: usize) -> NodeId {
        let body = doc.body_node();
        let carousel = doc.create(body, ElementSpec::new("div").id(id).class("carousel"));
        for _ in 0..items {
            doc.create(carousel, ElementSpec::new("div").class("carousel-item"));
        }
        doc.create(carousel, ElementSpec::new("ol").class("carousel-indicators"))
    }

    #[test]
    fn test_generates_one_indicator_per_item() {
        let mut doc = MemoryDocument::new();
        let indicators = carousel(&mut doc, "hero-carousel", 3);

        assert_eq!(generate_indicators(&mut doc), 3);

        let lis = doc.children(indicators);
        assert_eq!(lis.len(), 3);
        for (index, &li) in lis.iter().enumerate() {
            assert_eq!(doc.tag(li), Some("li"));
            assert_eq!(doc.attribute(li, "data-bs-target"), Some("#hero-carousel"));
            assert_eq!(doc.attribute(li, "data-bs-slide-to"), Some(index.to_string().as_str()));
            assert_eq!(doc.has_class(li, "active"), index == 0);
        }
    }

    #[test]
    fn test_carousels_are_independent() {
        let mut doc = MemoryDocument::new();
        let first = carousel(&mut doc, "a", 2);
        let second = carousel(&mut doc, "b", 1);

        assert_eq!(generate_indicators(&mut doc), 3);
        assert_eq!(doc.children(first).len(), 2);
        assert_eq!(doc.children(second).len(), 1);
        assert_eq!(doc.attribute(doc.children(second)[0], "data-bs-target"), Some("#b"));
    }

    #[test]
    fn test_orphan_indicators_skipped() {
        let mut doc = MemoryDocument::new();
        let body = doc.body_node();
        let orphan = doc.create(body, ElementSpec::new("ol").class("carousel-indicators"));

        assert_eq!(generate_indicators(&mut doc), 0);
        assert!(doc.children(orphan).is_empty());
    }

    #[test]
    fn test_no_carousels() {
        let mut doc = MemoryDocument::new();
        assert_eq!(generate_indicators(&mut doc), 0);
    }
}

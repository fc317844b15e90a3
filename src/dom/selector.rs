//! Simple compound selectors.
//!
//! Supports `tag`, `#id`, `.class` and any concatenation of them
//! (`li.active`, `.init-swiper.swiper-tab`). Combinators are not needed by
//! the page chrome and are not parsed.

/// A parsed compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    /// Parse a compound selector. Empty segments are ignored, so a blank
    /// string yields a selector that matches every element.
    pub fn parse(input: &str) -> Self {
        let mut selector = Self::default();
        let input = input.trim();

        // Split into segments, each starting at a '#' or '.' sigil
        let mut segments: Vec<(Option<char>, String)> = Vec::new();
        let mut current: (Option<char>, String) = (None, String::new());
        for ch in input.chars() {
            if ch == '#' || ch == '.' {
                segments.push(std::mem::replace(&mut current, (Some(ch), String::new())));
            } else {
                current.1.push(ch);
            }
        }
        segments.push(current);

        for (sigil, name) in segments {
            if name.is_empty() {
                continue;
            }
            match sigil {
                None => selector.tag = Some(name.to_ascii_lowercase()),
                Some('#') => selector.id = Some(name),
                Some(_) => selector.classes.push(name),
            }
        }

        selector
    }

    /// Match against an element's tag, id and classes.
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(ref want) = self.tag {
            if !want.eq_ignore_ascii_case(tag) {
                return false;
            }
        }

        if let Some(ref want) = self.id {
            if id != Some(want.as_str()) {
                return false;
            }
        }

        self.classes.iter().all(|want| classes.iter().any(|c| c == want))
    }
}

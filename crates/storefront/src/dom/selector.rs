//! A small CSS selector subset.
//!
//! Supported: type (`button`), class (`.card__title`), id (`#modal-container`),
//! attribute presence/equality (`[name]`, `[name=address]`, `[name="email"]`),
//! compounds of those (`button.button_alt`) and the descendant combinator
//! (`.modal .modal__content`).

use super::DomError;
use super::element::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrTest {
    Present(String),
    Equals(String, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

impl Compound {
    fn parse(source: &str, input: &str) -> Result<Self, DomError> {
        let invalid = || DomError::InvalidSelector(source.to_string());
        let mut compound = Self::default();
        let mut rest = input;

        let tag_len = rest
            .find(|c: char| matches!(c, '.' | '#' | '['))
            .unwrap_or(rest.len());
        if tag_len > 0 {
            let (tag, tail) = rest.split_at(tag_len);
            if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(invalid());
            }
            compound.tag = Some(tag.to_ascii_lowercase());
            rest = tail;
        }

        while let Some(first) = rest.chars().next() {
            match first {
                '.' | '#' => {
                    let body = rest.get(1..).unwrap_or_default();
                    let len = body
                        .find(|c: char| matches!(c, '.' | '#' | '['))
                        .unwrap_or(body.len());
                    if len == 0 {
                        return Err(invalid());
                    }
                    let (name, tail) = body.split_at(len);
                    if first == '.' {
                        compound.classes.push(name.to_string());
                    } else {
                        compound.id = Some(name.to_string());
                    }
                    rest = tail;
                }
                '[' => {
                    let close = rest.find(']').ok_or_else(invalid)?;
                    let inner = rest.get(1..close).unwrap_or_default();
                    let test = match inner.split_once('=') {
                        Some((name, value)) => AttrTest::Equals(
                            name.trim().to_string(),
                            value.trim().trim_matches(|c| c == '"' || c == '\'').to_string(),
                        ),
                        None => AttrTest::Present(inner.trim().to_string()),
                    };
                    compound.attrs.push(test);
                    rest = rest.get(close + 1..).unwrap_or_default();
                }
                _ => return Err(invalid()),
            }
        }

        Ok(compound)
    }

    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag
            && element.tag() != *tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && element.attribute("id").as_deref() != Some(id.as_str())
        {
            return false;
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        self.attrs.iter().all(|test| match test {
            AttrTest::Present(name) => element.attribute(name).is_some(),
            AttrTest::Equals(name, value) => element.attribute(name).as_deref() == Some(value),
        })
    }
}

/// A parsed selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Compounds from outermost ancestor to the subject.
    compounds: Vec<Compound>,
}

impl Selector {
    /// Parse a selector.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::InvalidSelector`] for empty input or syntax outside
    /// the supported subset.
    pub fn parse(input: &str) -> Result<Self, DomError> {
        let compounds = input
            .split_whitespace()
            .map(|part| Compound::parse(input, part))
            .collect::<Result<Vec<_>, _>>()?;

        if compounds.is_empty() {
            return Err(DomError::InvalidSelector(input.to_string()));
        }
        Ok(Self { compounds })
    }

    /// Returns `true` if `element` matches the selector.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        let Some((subject, ancestors)) = self.compounds.split_last() else {
            return false;
        };
        if !subject.matches(element) {
            return false;
        }

        // Match remaining compounds right-to-left against the ancestor chain
        let mut pending = ancestors.iter().rev().peekable();
        let mut current = element.parent();
        while let Some(compound) = pending.peek() {
            let Some(ancestor) = current else {
                return false;
            };
            if compound.matches(&ancestor) {
                pending.next();
            }
            current = ancestor.parent();
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_selector() {
        let button = Element::new("button")
            .with_class("button button_alt")
            .with_attr("name", "card");

        assert!(Selector::parse("button.button_alt").unwrap().matches(&button));
        assert!(Selector::parse(".button.button_alt[name=card]").unwrap().matches(&button));
        assert!(Selector::parse("[name=\"card\"]").unwrap().matches(&button));
        assert!(Selector::parse("[name]").unwrap().matches(&button));
        assert!(!Selector::parse("a.button").unwrap().matches(&button));
        assert!(!Selector::parse("[name=cash]").unwrap().matches(&button));
    }

    #[test]
    fn test_id_selector() {
        let modal = Element::new("div").with_attr("id", "modal-container");
        assert!(Selector::parse("#modal-container").unwrap().matches(&modal));
        assert!(!Selector::parse("#other").unwrap().matches(&modal));
    }

    #[test]
    fn test_descendant_selector() {
        let title = Element::new("h2").with_class("card__title");
        let _card = Element::new("div")
            .with_class("card")
            .with_child(Element::new("div").with_class("card__column").with_child(title.clone()));

        assert!(Selector::parse(".card .card__title").unwrap().matches(&title));
        assert!(Selector::parse(".card .card__column h2").unwrap().matches(&title));
        assert!(!Selector::parse(".basket .card__title").unwrap().matches(&title));
    }

    #[test]
    fn test_invalid_selectors() {
        assert!(Selector::parse("").is_err());
        assert!(Selector::parse("   ").is_err());
        assert!(Selector::parse(".").is_err());
        assert!(Selector::parse("[name=x").is_err());
        assert!(Selector::parse("div > p").is_err());
    }
}

//! Extraction rules
//!
//! A rule pairs a structural marker (a substring tested against an element's
//! `class` attribute) with the record field it resolves and the rule for
//! pulling text out of the matched element.

use scraper::{ElementRef, Node};

use crate::record::Field;

/// A single marker → field → text-rule tuple
#[derive(Debug, Clone, Copy)]
pub struct ExtractionRule {
    /// Substring tested against the element's class attribute
    pub marker: &'static str,

    /// The record field this rule resolves
    pub field: Field,

    /// How to read the field value out of the matched element
    pub text: TextRule,
}

/// How text is extracted from a matched element
#[derive(Debug, Clone, Copy)]
pub enum TextRule {
    /// Text content of the element's first child node
    FirstChild,

    /// Text content of the first child's own first child, for sources that
    /// nest the value one element deeper
    NestedChild,

    /// First-child text, keeping only what follows the literal token
    /// (e.g. "Apply at Acme Corp" with token "at " yields "Acme Corp")
    AfterToken(&'static str),
}

impl TextRule {
    /// Applies the rule to an element, returning the trimmed field value.
    ///
    /// Returns `None` when the expected text-bearing child is absent or the
    /// token never occurs; a failed extraction is "no match", never a fault.
    pub fn apply(&self, element: ElementRef<'_>) -> Option<String> {
        match self {
            TextRule::FirstChild => first_child_text(element),
            TextRule::NestedChild => {
                let child = element.children().next()?;
                let nested = ElementRef::wrap(child)?;
                first_child_text(nested)
            }
            TextRule::AfterToken(token) => {
                let text = first_child_text(element)?;
                let index = text.find(token)?;
                let rest = text[index + token.len()..].trim();
                if rest.is_empty() {
                    None
                } else {
                    Some(rest.to_string())
                }
            }
        }
    }
}

/// Reads the trimmed text of an element's first child node.
///
/// Only a direct text child counts; an element whose first child is another
/// element (or nothing at all) yields `None`.
fn first_child_text(element: ElementRef<'_>) -> Option<String> {
    let child = element.children().next()?;
    match child.value() {
        Node::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first_div(document: &Html) -> ElementRef<'_> {
        let selector = Selector::parse("div").unwrap();
        document.select(&selector).next().unwrap()
    }

    #[test]
    fn test_first_child_text_trims_whitespace() {
        let document = Html::parse_document("<div>  Senior Engineer \n</div>");
        let value = TextRule::FirstChild.apply(first_div(&document));
        assert_eq!(value.as_deref(), Some("Senior Engineer"));
    }

    #[test]
    fn test_first_child_missing_is_no_match() {
        let document = Html::parse_document("<div></div>");
        assert_eq!(TextRule::FirstChild.apply(first_div(&document)), None);
    }

    #[test]
    fn test_first_child_element_is_no_match() {
        let document = Html::parse_document("<div><span>nested</span></div>");
        assert_eq!(TextRule::FirstChild.apply(first_div(&document)), None);
    }

    #[test]
    fn test_nested_child_reads_inner_text() {
        let document = Html::parse_document("<div><h2>Staff Engineer</h2></div>");
        let value = TextRule::NestedChild.apply(first_div(&document));
        assert_eq!(value.as_deref(), Some("Staff Engineer"));
    }

    #[test]
    fn test_nested_child_without_element_is_no_match() {
        let document = Html::parse_document("<div>flat text</div>");
        assert_eq!(TextRule::NestedChild.apply(first_div(&document)), None);
    }

    #[test]
    fn test_after_token_extracts_remainder() {
        let document = Html::parse_document("<div>Apply at Acme Corp</div>");
        let value = TextRule::AfterToken("at ").apply(first_div(&document));
        assert_eq!(value.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_after_token_missing_token_is_no_match() {
        let document = Html::parse_document("<div>Apply now</div>");
        assert_eq!(TextRule::AfterToken("at ").apply(first_div(&document)), None);
    }

    #[test]
    fn test_after_token_with_nothing_after_is_no_match() {
        let document = Html::parse_document("<div>Apply at </div>");
        assert_eq!(TextRule::AfterToken("at ").apply(first_div(&document)), None);
    }
}

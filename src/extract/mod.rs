//! Source-specific extraction strategies
//!
//! Each supported job board gets an ordered rule table mapping structural
//! markers to record fields. A [`Strategy`] drives the tree walker with a
//! visitor that tests every element's class attribute against its table and
//! writes matched values straight into the shared [`JobRecord`].

pub mod rules;
pub mod walker;

pub use rules::{ExtractionRule, TextRule};
pub use walker::{walk, walk_document};

use scraper::Html;

use crate::record::{Field, JobRecord};
use crate::router::Source;

/// Rule table for LinkedIn guest job postings
const LINKEDIN_RULES: &[ExtractionRule] = &[
    ExtractionRule {
        marker: "topcard__org-name-link",
        field: Field::Company,
        text: TextRule::FirstChild,
    },
    ExtractionRule {
        marker: "topcard__title",
        field: Field::Position,
        text: TextRule::FirstChild,
    },
    ExtractionRule {
        marker: "topcard__flavor topcard__flavor--bullet",
        field: Field::Location,
        text: TextRule::FirstChild,
    },
];

/// Rule table for Greenhouse boards.
///
/// The company marker carries the page's "… at {company}" phrasing, so the
/// raw text goes through the after-token transform.
const GREENHOUSE_RULES: &[ExtractionRule] = &[
    ExtractionRule {
        marker: "company-name",
        field: Field::Company,
        text: TextRule::AfterToken("at "),
    },
    ExtractionRule {
        marker: "app-title",
        field: Field::Position,
        text: TextRule::FirstChild,
    },
    ExtractionRule {
        marker: "location",
        field: Field::Location,
        text: TextRule::FirstChild,
    },
];

/// Rule table for Lever postings.
///
/// The headline nests the title one element deeper; the company never
/// appears in the markup and is pre-populated by the router from the URL.
const LEVER_RULES: &[ExtractionRule] = &[
    ExtractionRule {
        marker: "posting-headline",
        field: Field::Position,
        text: TextRule::NestedChild,
    },
    ExtractionRule {
        marker: "location",
        field: Field::Location,
        text: TextRule::FirstChild,
    },
];

const GENERIC_RULES: &[ExtractionRule] = &[];

/// A routed extraction strategy: the source variant, the resource to fetch
/// (when one can be derived from the link), and the source's rule table.
#[derive(Debug, Clone)]
pub struct Strategy {
    source: Source,
    fetch_url: Option<String>,
    rules: &'static [ExtractionRule],
}

impl Strategy {
    /// Creates a strategy for a source with an optional fetch target.
    ///
    /// `None` means the link carries nothing fetchable (generic sources, or
    /// a required capture that failed) and the caller should fall back to
    /// manual collection immediately.
    pub fn new(source: Source, fetch_url: Option<String>) -> Self {
        let rules = match source {
            Source::LinkedIn => LINKEDIN_RULES,
            Source::Greenhouse => GREENHOUSE_RULES,
            Source::Lever => LEVER_RULES,
            Source::Generic => GENERIC_RULES,
        };
        Self {
            source,
            fetch_url,
            rules,
        }
    }

    /// The source this strategy extracts from
    pub fn source(&self) -> Source {
        self.source
    }

    /// The URL to fetch, when one could be derived from the input link
    pub fn fetch_target(&self) -> Option<&str> {
        self.fetch_url.as_deref()
    }

    /// Runs one extraction pass over a parsed document.
    ///
    /// For every element the first rule whose marker occurs in the class
    /// attribute is applied; later rules are not tested for that element.
    /// Matched values overwrite unconditionally, so when a marker matches
    /// several elements the last one in traversal order wins. The record is
    /// exclusively borrowed for the duration of the pass.
    pub fn extract(&self, document: &Html, record: &mut JobRecord) {
        walker::walk_document(document, &mut |element| {
            if let Some(class) = element.value().attr("class") {
                for rule in self.rules {
                    if class.contains(rule.marker) {
                        if let Some(value) = rule.text.apply(element) {
                            record.set(rule.field, value);
                        }
                        break;
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: Source, html: &str) -> JobRecord {
        let mut record = JobRecord::new();
        let document = Html::parse_document(html);
        Strategy::new(source, None).extract(&document, &mut record);
        record
    }

    #[test]
    fn test_linkedin_full_page() {
        let html = r#"<html><body>
            <a class="topcard__org-name-link">Acme Corp</a>
            <h1 class="topcard__title">Senior Engineer</h1>
            <span class="topcard__flavor topcard__flavor--bullet">Berlin, Germany</span>
            </body></html>"#;
        let record = extract(Source::LinkedIn, html);
        assert_eq!(record.company.as_deref(), Some("Acme Corp"));
        assert_eq!(record.position.as_deref(), Some("Senior Engineer"));
        assert_eq!(record.location.as_deref(), Some("Berlin, Germany"));
    }

    #[test]
    fn test_linkedin_title_whitespace_is_trimmed() {
        let html = "<div class=\"topcard__title  \">  Senior Engineer \n</div>";
        let record = extract(Source::LinkedIn, html);
        assert_eq!(record.position.as_deref(), Some("Senior Engineer"));
    }

    #[test]
    fn test_linkedin_plain_flavor_is_not_location() {
        // The location marker requires the bullet modifier
        let html = r#"<span class="topcard__flavor">Acme Corp</span>"#;
        let record = extract(Source::LinkedIn, html);
        assert_eq!(record.location, None);
    }

    #[test]
    fn test_greenhouse_company_after_at() {
        let html = r#"<span class="company-name">Apply at Acme Corp</span>"#;
        let record = extract(Source::Greenhouse, html);
        assert_eq!(record.company.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_greenhouse_company_without_at_stays_unset() {
        let html = r#"<span class="company-name">Acme Corp careers</span>"#;
        let record = extract(Source::Greenhouse, html);
        assert_eq!(record.company, None);
    }

    #[test]
    fn test_greenhouse_position_and_location() {
        let html = r#"<div>
            <h1 class="app-title">Backend Engineer</h1>
            <div class="location">Amsterdam</div>
            </div>"#;
        let record = extract(Source::Greenhouse, html);
        assert_eq!(record.position.as_deref(), Some("Backend Engineer"));
        assert_eq!(record.location.as_deref(), Some("Amsterdam"));
    }

    #[test]
    fn test_lever_nested_headline() {
        let html = r#"<div class="posting-headline"><h2>Staff Engineer</h2></div>"#;
        let record = extract(Source::Lever, html);
        assert_eq!(record.position.as_deref(), Some("Staff Engineer"));
    }

    #[test]
    fn test_lever_location_category() {
        let html = r#"<div class="posting-category medium category-location">Remote - US</div>"#;
        let record = extract(Source::Lever, html);
        assert_eq!(record.location.as_deref(), Some("Remote - US"));
    }

    #[test]
    fn test_last_match_wins() {
        let html = r#"<div>
            <h1 class="topcard__title">First Title</h1>
            <h1 class="topcard__title">Last Title</h1>
            </div>"#;
        let record = extract(Source::LinkedIn, html);
        assert_eq!(record.position.as_deref(), Some("Last Title"));
    }

    #[test]
    fn test_matched_element_without_text_is_skipped() {
        let html = r#"<div class="topcard__title"><span>wrapped</span></div>"#;
        let record = extract(Source::LinkedIn, html);
        assert_eq!(record.position, None);
    }

    #[test]
    fn test_first_matching_marker_per_element_wins() {
        // An element whose class carries several markers only applies the
        // first rule in table order
        let html = r#"<div class="company-name app-title">Work at Acme</div>"#;
        let record = extract(Source::Greenhouse, html);
        assert_eq!(record.company.as_deref(), Some("Acme"));
        assert_eq!(record.position, None);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = r#"<html><body>
            <a class="topcard__org-name-link">Acme Corp</a>
            <h1 class="topcard__title">Senior Engineer</h1>
            <span class="topcard__flavor topcard__flavor--bullet">Berlin</span>
            </body></html>"#;
        let document = Html::parse_document(html);
        let strategy = Strategy::new(Source::LinkedIn, None);

        let mut record = JobRecord::new();
        strategy.extract(&document, &mut record);
        let first_pass = record.clone();
        strategy.extract(&document, &mut record);
        assert_eq!(record, first_pass);
    }

    #[test]
    fn test_generic_extracts_nothing() {
        let html = r#"<h1 class="topcard__title">Senior Engineer</h1>"#;
        let record = extract(Source::Generic, html);
        assert_eq!(record, JobRecord::new());
    }
}

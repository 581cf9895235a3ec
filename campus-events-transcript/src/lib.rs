use std::collections::BTreeSet;

use campus_events_catalog::{Catalog, Event};
use campus_events_config::is_department_prefix;
use itertools::Itertools;
use regex::Regex;
use tracing::debug;

pub const DEFAULT_PREFIXES: [&str; 5] = ["CSC", "BUS", "ENG", "MED", "ART"];

#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("no department prefixes given")]
    NoPrefixes,
    #[error("department prefix {0:?} must be exactly three uppercase letters")]
    InvalidPrefix(String),
    #[error("failed to build course pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Finds course codes like `CSC245` in transcript text.
///
/// A course code is one of the configured department prefixes immediately followed by three
/// digits. Matching is case-sensitive and does not look at word boundaries, so `CSC2456` still
/// contains `CSC245`.
#[derive(Debug, Clone)]
pub struct TranscriptMatcher {
    pattern: Regex,
}

impl TranscriptMatcher {
    pub fn new<I>(prefixes: I) -> Result<Self, TranscriptError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let prefixes: Vec<String> = prefixes
            .into_iter()
            .map(|prefix| prefix.as_ref().to_owned())
            .collect();
        if prefixes.is_empty() {
            return Err(TranscriptError::NoPrefixes);
        }
        if let Some(prefix) = prefixes.iter().find(|prefix| !is_department_prefix(prefix)) {
            return Err(TranscriptError::InvalidPrefix(prefix.clone()));
        }
        let alternatives = prefixes
            .iter()
            .map(|prefix| regex::escape(prefix))
            .join("|");
        let pattern = Regex::new(&format!("(?:{alternatives})[0-9]{{3}}"))?;
        Ok(Self { pattern })
    }

    pub fn with_default_prefixes() -> Result<Self, TranscriptError> {
        Self::new(DEFAULT_PREFIXES)
    }

    /// Distinct course codes in order of first appearance.
    #[must_use]
    pub fn extract_courses<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.pattern
            .find_iter(text)
            .map(|found| found.as_str())
            .unique()
            .collect()
    }

    #[must_use]
    pub fn analyze<'a>(&self, text: &str, catalog: &'a Catalog) -> TranscriptAnalysis<'a> {
        let courses = self.extract_courses(text);
        let events = recommend_events(catalog, &courses);
        debug!(
            courses = courses.len(),
            events = events.len(),
            "analyzed transcript"
        );
        TranscriptAnalysis {
            courses: courses.into_iter().map(ToOwned::to_owned).collect(),
            events,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptAnalysis<'a> {
    pub courses: Vec<String>,
    pub events: Vec<&'a Event>,
}

/// The events recommended for any of the courses, each once and in catalog order. Courses
/// without recommendations are ignored.
#[must_use]
pub fn recommend_events<'a, I>(catalog: &'a Catalog, courses: I) -> Vec<&'a Event>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let recommendations = catalog.recommendations();
    let event_ids: BTreeSet<&str> = courses
        .into_iter()
        .filter_map(|course| recommendations.event_ids(course.as_ref()))
        .flatten()
        .map(|event_id| event_id.as_str())
        .collect();
    catalog.get_events(event_ids)
}

#[cfg(test)]
mod tests {
    use campus_events_catalog::CatalogError;
    use pretty_assertions::assert_eq;

    use super::*;

    const TRANSCRIPT: &str = "
        STUDENT TRANSCRIPT
        Student: John Doe
        ID: 202012345
        Program: Computer Science

        COURSES COMPLETED:
        CSC245 - Algorithms and Data Structures - A
        CSC498 - Machine Learning - A-
        BUS205 - Business Ethics - B+
        ART240 - Introduction to Design - B
        MED201 - Introduction to Medical Sciences - A
    ";

    fn ids<'a>(events: &[&'a Event]) -> Vec<&'a str> {
        events.iter().map(|event| event.id.as_str()).collect()
    }

    #[test]
    fn extracts_courses_in_order() -> Result<(), TranscriptError> {
        let matcher = TranscriptMatcher::with_default_prefixes()?;
        assert_eq!(
            matcher.extract_courses("CSC245 - Algorithms ... BUS205 - Ethics"),
            vec!["CSC245", "BUS205"]
        );
        assert_eq!(
            matcher.extract_courses(TRANSCRIPT),
            vec!["CSC245", "CSC498", "BUS205", "ART240", "MED201"]
        );
        Ok(())
    }

    #[test]
    fn deduplicates_and_is_case_sensitive() -> Result<(), TranscriptError> {
        let matcher = TranscriptMatcher::with_default_prefixes()?;
        assert_eq!(
            matcher.extract_courses("ENG210, eng330, ENG210 again, PHY101, ART24"),
            vec!["ENG210"]
        );
        Ok(())
    }

    #[test]
    fn ignores_word_boundaries() -> Result<(), TranscriptError> {
        let matcher = TranscriptMatcher::with_default_prefixes()?;
        assert_eq!(matcher.extract_courses("xCSC2456"), vec!["CSC245"]);
        assert!(matcher.extract_courses("").is_empty());
        Ok(())
    }

    #[test]
    fn custom_prefixes() -> Result<(), TranscriptError> {
        let matcher = TranscriptMatcher::new(["PHY"])?;
        assert_eq!(matcher.extract_courses("CSC245 PHY101"), vec!["PHY101"]);
        assert!(matches!(
            TranscriptMatcher::new(["PH"]),
            Err(TranscriptError::InvalidPrefix(_))
        ));
        assert!(matches!(
            TranscriptMatcher::new(["C.C"]),
            Err(TranscriptError::InvalidPrefix(_))
        ));
        assert!(matches!(
            TranscriptMatcher::new(Vec::<String>::new()),
            Err(TranscriptError::NoPrefixes)
        ));
        Ok(())
    }

    #[test]
    fn recommends_mapped_events() -> Result<(), CatalogError> {
        let catalog = Catalog::sample()?;
        assert_eq!(ids(&recommend_events(&catalog, ["CSC245"])), vec!["1", "3"]);
        assert_eq!(
            ids(&recommend_events(&catalog, ["CSC245", "CSC498", "ENG210"])),
            vec!["1", "3"]
        );
        assert_eq!(
            ids(&recommend_events(&catalog, ["ENG225", "BUS310"])),
            vec!["2", "6"]
        );
        assert!(recommend_events(&catalog, ["XYZ999", "CSC101"]).is_empty());
        assert!(recommend_events(&catalog, Vec::<&str>::new()).is_empty());
        Ok(())
    }

    #[test]
    fn analyzes_transcript() -> Result<(), Box<dyn std::error::Error>> {
        let catalog = Catalog::sample()?;
        let matcher = TranscriptMatcher::with_default_prefixes()?;
        let analysis = matcher.analyze(TRANSCRIPT, &catalog);
        assert_eq!(analysis.courses.len(), 5);
        assert_eq!(ids(&analysis.events), vec!["1", "2", "3", "4", "5", "6"]);

        let analysis = matcher.analyze("no courses here", &catalog);
        assert!(analysis.courses.is_empty());
        assert!(analysis.events.is_empty());
        Ok(())
    }
}

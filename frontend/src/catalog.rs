//! Static course content shipped with the page.
//!
//! The catalog is kept as JSON next to the crate and compiled in, so the
//! page needs no backend. `level_map` ties a course level code (`L1`..`L4`)
//! to the syllabus level whose topics make up that course's book.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

const CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum TopicLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl TopicLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicLevel::Beginner => "Beginner",
            TopicLevel::Intermediate => "Intermediate",
            TopicLevel::Advanced => "Advanced",
            TopicLevel::Expert => "Expert",
        }
    }
}

impl fmt::Display for TopicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Topic {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub level: TopicLevel,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Course {
    pub id: String,
    pub level: String,
    pub title: String,
    pub price: u32,
    pub description: String,
    pub duration: String,
    pub target_audience: String,
    pub skills: Vec<String>,
    /// Tailwind background class used as the course's theme.
    pub color: String,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("course {course} uses level code {code} which has no syllabus level")]
    UnknownLevelCode { course: String, code: String },
    #[error("level code {0} has no course")]
    MissingCourse(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Catalog {
    pub level_map: BTreeMap<String, TopicLevel>,
    pub courses: Vec<Course>,
    pub topics: Vec<Topic>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<FaqEntry>,
}

impl Catalog {
    /// Decodes the embedded catalog.
    pub fn load() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for course in &self.courses {
            if !self.level_map.contains_key(&course.level) {
                return Err(CatalogError::UnknownLevelCode {
                    course: course.id.clone(),
                    code: course.level.clone(),
                });
            }
        }
        for code in self.level_map.keys() {
            if self.course(code).is_none() {
                return Err(CatalogError::MissingCourse(code.clone()));
            }
        }
        Ok(())
    }

    pub fn has_level(&self, code: &str) -> bool {
        self.level_map.contains_key(code)
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.level == code)
    }

    /// Topics for a course level code in catalog order, or `None` when the
    /// code is not a known level. A known level may still have no topics.
    pub fn topics_for(&self, code: &str) -> Option<Vec<Topic>> {
        let level = self.level_map.get(code)?;
        Some(
            self.topics
                .iter()
                .filter(|topic| topic.level == *level)
                .cloned()
                .collect(),
        )
    }
}

/// Formats a rupee amount with Indian digit grouping, e.g. `1,50,000`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.courses.len(), 4);
        assert_eq!(catalog.topics.len(), 40);
        assert_eq!(catalog.testimonials.len(), 3);
        assert_eq!(catalog.faqs.len(), 4);
    }

    #[test]
    fn every_course_level_has_ten_topics_in_order() {
        let catalog = Catalog::load().unwrap();
        for course in &catalog.courses {
            let topics = catalog.topics_for(&course.level).unwrap();
            assert_eq!(topics.len(), 10, "level {}", course.level);
            assert!(topics.windows(2).all(|pair| pair[0].id < pair[1].id));
        }
    }

    #[test]
    fn level_codes_map_to_syllabus_levels() {
        let catalog = Catalog::load().unwrap();
        let intermediate = catalog.topics_for("L2").unwrap();
        assert!(intermediate.iter().all(|t| t.level == TopicLevel::Intermediate));
        assert_eq!(intermediate[0].title, "Primary & Foreign Keys");
    }

    #[test]
    fn unknown_level_code_has_no_topics() {
        let catalog = Catalog::load().unwrap();
        assert!(catalog.topics_for("L9").is_none());
        assert!(catalog.course("L9").is_none());
        assert!(!catalog.has_level("L9"));
        assert!(catalog.has_level("L3"));
    }

    #[test]
    fn course_with_unmapped_level_is_rejected() {
        let json = r#"{
            "level_map": {},
            "courses": [{
                "id": "x", "level": "L7", "title": "t", "price": 1,
                "description": "d", "duration": "1h", "target_audience": "a",
                "skills": [], "color": "bg-red-500", "features": []
            }],
            "topics": [], "testimonials": [], "faqs": []
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::UnknownLevelCode { .. })
        ));
    }

    #[test]
    fn mapped_level_without_course_is_rejected() {
        let json = r#"{
            "level_map": { "L1": "Beginner" },
            "courses": [], "topics": [], "testimonials": [], "faqs": []
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::MissingCourse(code)) if code == "L1"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn rupees_use_indian_grouping() {
        assert_eq!(format_inr(500), "500");
        assert_eq!(format_inr(1000), "1,000");
        assert_eq!(format_inr(2000), "2,000");
        assert_eq!(format_inr(150000), "1,50,000");
        assert_eq!(format_inr(12345678), "1,23,45,678");
    }
}

use serde::{Deserialize, Serialize};

/// One row of the course list the extraction pass walks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CourseListing {
    pub subject: String,
    pub course_code: String,
    pub link_en: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteTerm {
    pub subject: String,
    pub course_code: String,
    pub is_and: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePrerequisites {
    pub course_subject: String,
    pub course_code: String,
    pub prerequisites: Vec<PrerequisiteTerm>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogCourse {
    pub course_id: u64,
    pub subject: String,
    pub course_code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PrerequisiteRow {
    pub course_id: u64,
    pub prerequisite_course_id: u64,
    pub is_and: bool,
}

#[derive(Debug, Default)]
pub struct LinkReport {
    pub rows: Vec<PrerequisiteRow>,
    pub skipped_courses: usize,
    pub missing_prerequisites: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_listing_ignores_extra_fields() {
        let json = r#"[{
            "subject": "CS",
            "course_code": "201",
            "course_name_en": "Introduction to Computing",
            "su_credit": 3,
            "ects_credit": null,
            "link_en": "https://example.edu/cs201",
            "link_tr": "https://example.edu/tr/cs201"
        }]"#;
        let listings: Vec<CourseListing> = serde_json::from_str(json).unwrap();
        assert_eq!(
            listings,
            vec![CourseListing {
                subject: "CS".into(),
                course_code: "201".into(),
                link_en: "https://example.edu/cs201".into(),
            }]
        );
    }

    #[test]
    fn test_prerequisite_row_field_names() {
        let row = PrerequisiteRow {
            course_id: 3,
            prerequisite_course_id: 1,
            is_and: true,
        };
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"course_id":3,"prerequisite_course_id":1,"is_and":true}"#
        );
    }
}

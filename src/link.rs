use crate::structs::*;

use log::warn;
use std::collections::{HashMap, HashSet};

/// Resolve extracted prerequisites against the course catalog.
///
/// Rows are unique per `(course_id, prerequisite_course_id, is_and)` within a
/// course and keep the order they were extracted in.
pub fn link(entries: &[CoursePrerequisites], catalog: &[CatalogCourse]) -> LinkReport {
    let ids: HashMap<(&str, &str), u64> = catalog
        .iter()
        .map(|c| ((c.subject.as_str(), c.course_code.as_str()), c.course_id))
        .collect();

    let mut report = LinkReport::default();
    for entry in entries {
        let course_id = match ids.get(&(entry.course_subject.as_str(), entry.course_code.as_str())) {
            Some(&id) => id,
            None => {
                warn!(
                    "main course not in catalog: {} {}",
                    entry.course_subject, entry.course_code
                );
                report.skipped_courses += 1;
                continue;
            }
        };

        let mut seen = HashSet::new();
        for term in &entry.prerequisites {
            let Some(&prerequisite_course_id) =
                ids.get(&(term.subject.as_str(), term.course_code.as_str()))
            else {
                warn!(
                    "prerequisite not in catalog: {} {}",
                    term.subject, term.course_code
                );
                report.missing_prerequisites += 1;
                continue;
            };

            let row = PrerequisiteRow {
                course_id,
                prerequisite_course_id,
                is_and: term.is_and,
            };
            if seen.insert(row) {
                report.rows.push(row);
            }
        }
    }

    report
}

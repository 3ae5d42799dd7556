use scraper::Html;

const MARKER: &str = "Prerequisite";
const TERMINATORS: [&str; 3] = ["Corequisite", "ECTS", "General Requirement"];

/// Pull the prerequisite clause out of a course detail page.
pub fn clause_text(doc: &Html) -> String {
    let text = doc.root_element().text().collect::<Vec<_>>().join("\n");
    clause_from_text(&text)
}

/// Scan a page's text line by line, collecting everything from the
/// "Prerequisite" marker up to the first terminating heading.
pub fn clause_from_text(text: &str) -> String {
    let mut lines = Vec::new();
    let mut collecting = false;

    for line in text.lines().map(str::trim) {
        if line.contains(MARKER) {
            collecting = true;
            if let Some((_, rest)) = line.split_once(':') {
                lines.push(rest.trim());
            }
        } else if TERMINATORS.iter().any(|t| line.contains(t)) {
            // also ends the scan before any marker was seen
            break;
        } else if collecting {
            lines.push(line);
        }
    }

    lines
        .into_iter()
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

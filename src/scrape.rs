use crate::clause::clause_text;
use crate::prereq;
use crate::settings::Settings;
use crate::structs::*;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use log::{debug, info, warn};
use reqwest::Client;
use scraper::Html;
use std::error::Error;
use std::num::NonZeroU32;
use std::time::Duration;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Visit every listed course page and collect the prerequisites found there.
///
/// A course whose page cannot be fetched is logged and left out; courses
/// without any recognised prerequisite are left out as well.
pub async fn extract(
    settings: &Settings,
    courses: &[CourseListing],
) -> Result<Vec<CoursePrerequisites>> {
    let client = Client::builder()
        .gzip(true)
        .cookie_store(true)
        .user_agent(&settings.user_agent)
        .timeout(Duration::from_secs(settings.timeout_secs))
        .build()?;
    let rate = NonZeroU32::new(settings.rate_per_second)
        .ok_or("rate_per_second must be at least 1")?;
    let limiter = RateLimiter::direct(Quota::per_second(rate));

    let mut found = Vec::new();
    for (i, course) in courses.iter().enumerate() {
        debug!(
            "[{}/{}] {} {}",
            i + 1,
            courses.len(),
            course.subject,
            course.course_code
        );

        let prerequisites = match fetch_prerequisites(&client, &limiter, &course.link_en).await {
            Ok(prerequisites) => prerequisites,
            Err(e) => {
                warn!("error fetching {}: {}", course.link_en, e);
                continue;
            }
        };

        if prerequisites.is_empty() {
            info!("{} {}: no prerequisite", course.subject, course.course_code);
            continue;
        }

        info!(
            "{} {}: {} prerequisite(s)",
            course.subject,
            course.course_code,
            prerequisites.len()
        );
        found.push(CoursePrerequisites {
            course_subject: course.subject.clone(),
            course_code: course.course_code.clone(),
            prerequisites,
        });
    }

    Ok(found)
}

async fn fetch_prerequisites(
    client: &Client,
    limiter: &DefaultDirectRateLimiter,
    url: &str,
) -> Result<Vec<PrerequisiteTerm>> {
    limiter.until_ready().await;
    let page = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(prerequisites_from_page(&page))
}

pub fn prerequisites_from_page(page: &str) -> Vec<PrerequisiteTerm> {
    let doc = Html::parse_document(page);
    prereq::parse(&clause_text(&doc))
}

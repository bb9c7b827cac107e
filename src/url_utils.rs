//! URL utilities.
//!
//! Articles frequently carry their publication date in the URL path
//! (`/2016/05/27/title` or `/posts/2016-05-27-title`); recovering it
//! gives the document a timestamp without touching the network.

use std::sync::LazyLock;

use chrono::{DateTime, TimeZone, Utc};
use regex::{Captures, Regex};
use url::Url;

/// `/YYYY/MM/` or `/YYYY/MM/DD/` path segments.
#[allow(clippy::expect_used)]
static SLASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|/)(\d{4})/(\d{1,2})(?:/(\d{1,2}))?(?:/|$)").expect("SLASH_DATE regex")
});

/// `YYYY-MM-DD` embedded in a path segment.
#[allow(clippy::expect_used)]
static DASH_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[/-])(\d{4})-(\d{1,2})-(\d{1,2})(?:\D|$)").expect("DASH_DATE regex")
});

/// Try to recover a publication date from a URL path.
///
/// Recognizes `/YYYY/MM/DD/`, `/YYYY/MM/` (first of the month) and
/// `YYYY-MM-DD` shapes; out-of-range components are rejected. The result
/// is midnight UTC.
#[must_use]
pub fn date_from_url(url: &Url) -> Option<DateTime<Utc>> {
    let path = url.path();
    [&SLASH_DATE, &DASH_DATE]
        .iter()
        .find_map(|pattern| pattern.captures(path).and_then(|c| capture_date(&c)))
}

fn capture_date(captures: &Captures<'_>) -> Option<DateTime<Utc>> {
    let year: i32 = captures.get(1)?.as_str().parse().ok()?;
    let month: u32 = captures.get(2)?.as_str().parse().ok()?;
    let day: u32 = match captures.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 1,
    };
    if !(1990..=2100).contains(&year) {
        return None;
    }
    // Invalid month/day combinations come back empty from chrono.
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn date_of(url: &str) -> Option<DateTime<Utc>> {
        date_from_url(&Url::parse(url).unwrap())
    }

    #[test]
    fn full_slash_date_is_recovered() {
        let date = date_of("https://example.com/2016/05/27/some-title").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2016, 5, 27));
    }

    #[test]
    fn year_month_path_defaults_to_first_of_month() {
        let date = date_of("https://example.com/blog/2019/11/").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2019, 11, 1));
    }

    #[test]
    fn dashed_date_in_slug_is_recovered() {
        let date = date_of("https://example.com/posts/2021-03-09-launch").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2021, 3, 9));
    }

    #[test]
    fn out_of_range_components_are_rejected() {
        assert!(date_of("https://example.com/2016/13/01/nope").is_none());
        assert!(date_of("https://example.com/1234/05/06/ancient").is_none());
    }

    #[test]
    fn undated_paths_yield_nothing() {
        assert!(date_of("https://example.com/about/team").is_none());
        assert!(date_of("https://example.com/product/12345").is_none());
    }
}

// src/engine.rs
//! Filtering, ordering and aggregation over a job collection.
//!
//! Everything here is pure: the same input always gives the same output, which
//! lets the store client reuse it verbatim for the offline fallback.

use chrono::{DateTime, Duration, Utc};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::{Aggregate, FilterCriteria, Job, SortOrder, Stats};
use crate::utils::contains_ignore_case;

/// Age limit for the "new" badge on a job card
pub const NEW_BADGE_DAYS: i64 = 3;
/// Window used by the "this week" statistic
pub const WEEKLY_STATS_DAYS: i64 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateField {
    Company,
    Location,
}

impl AggregateField {
    fn value<'a>(&self, job: &'a Job) -> &'a str {
        match self {
            AggregateField::Company => &job.company,
            AggregateField::Location => &job.location,
        }
    }
}

/// Filter then order a copy of `jobs` according to `criteria`.
///
/// Filters are conjunctive: job type (exact), location (case-insensitive
/// substring), keyword (case-insensitive substring of title, company or any
/// tag). Sorting is stable.
pub fn select_and_order(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    let keyword = criteria.keyword.as_deref().map(str::to_lowercase);
    let location = criteria.location.as_deref().map(str::to_lowercase);

    let mut selected: Vec<Job> = jobs
        .iter()
        .filter(|job| criteria.job_type.map_or(true, |t| job.job_type == t))
        .filter(|job| {
            location
                .as_deref()
                .map_or(true, |loc| job.location.to_lowercase().contains(loc))
        })
        .filter(|job| keyword.as_deref().map_or(true, |kw| matches_keyword(job, kw)))
        .cloned()
        .collect();

    sort_jobs(&mut selected, criteria.sort);
    selected
}

fn matches_keyword(job: &Job, keyword: &str) -> bool {
    contains_ignore_case(&job.title, keyword)
        || contains_ignore_case(&job.company, keyword)
        || job.tags.iter().any(|tag| contains_ignore_case(tag, keyword))
}

pub fn sort_jobs(jobs: &mut [Job], order: SortOrder) {
    match order {
        SortOrder::PostingDateDesc => jobs.sort_by(|a, b| b.posting_date.cmp(&a.posting_date)),
        SortOrder::PostingDateAsc => jobs.sort_by(|a, b| a.posting_date.cmp(&b.posting_date)),
        SortOrder::TitleAsc => jobs.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortOrder::TitleDesc => jobs.sort_by(|a, b| locale_compare(&b.title, &a.title)),
    }
}

/// Collation close to a default UI locale. Letters compare case- and
/// accent-insensitively first; on a tie, unaccented sorts before accented and
/// then lowercase before uppercase. Accents are folded for Latin letters only;
/// other scripts compare by code point.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let lower_a: Vec<char> = a.chars().flat_map(char::to_lowercase).collect();
    let lower_b: Vec<char> = b.chars().flat_map(char::to_lowercase).collect();

    let primary = lower_a
        .iter()
        .map(|&c| base_letter(c))
        .cmp(lower_b.iter().map(|&c| base_letter(c)));

    primary
        .then_with(|| lower_a.cmp(&lower_b))
        .then_with(|| {
            a.chars()
                .zip(b.chars())
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| {
                    match (x.is_lowercase(), y.is_lowercase()) {
                        (true, false) => Ordering::Less,
                        (false, true) => Ordering::Greater,
                        _ => x.cmp(&y),
                    }
                })
        })
}

/// Unaccented form of a lowercase Latin letter
fn base_letter(c: char) -> char {
    match c {
        'à'..='å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è'..='ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì'..='ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò'..='ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' => 't',
        'ù'..='ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

/// One entry per distinct value of `field`, in first-seen order
pub fn aggregate_by(jobs: &[Job], field: AggregateField) -> Vec<Aggregate> {
    let mut aggregates: Vec<Aggregate> = Vec::new();
    for job in jobs {
        let name = field.value(job);
        match aggregates.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.job_count += 1,
            None => aggregates.push(Aggregate {
                name: name.to_string(),
                job_count: 1,
            }),
        }
    }
    aggregates
}

/// Posting date is no older than `threshold_days` before `now` (inclusive)
pub fn is_recent_at(job: &Job, threshold_days: i64, now: DateTime<Utc>) -> bool {
    job.posting_date >= now - Duration::days(threshold_days)
}

pub fn is_recent(job: &Job, threshold_days: i64) -> bool {
    is_recent_at(job, threshold_days, Utc::now())
}

pub fn compute_stats_at(jobs: &[Job], now: DateTime<Utc>) -> Stats {
    let companies: HashSet<&str> = jobs.iter().map(|j| j.company.as_str()).collect();
    let locations: HashSet<&str> = jobs.iter().map(|j| j.location.as_str()).collect();

    Stats {
        total_jobs: jobs.len(),
        companies: companies.len(),
        locations: locations.len(),
        recent_jobs: jobs
            .iter()
            .filter(|job| is_recent_at(job, WEEKLY_STATS_DAYS, now))
            .count(),
    }
}

pub fn compute_stats(jobs: &[Job]) -> Stats {
    compute_stats_at(jobs, Utc::now())
}

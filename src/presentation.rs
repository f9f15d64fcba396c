// src/presentation.rs
//! Plain-text rendering and the cosmetic lookup tables behind it

use chrono::{DateTime, Utc};
use std::fmt::Write;

use crate::engine::{is_recent_at, NEW_BADGE_DAYS};
use crate::types::{Aggregate, Job, JobType, Stats};

const PALETTE: [&str; 6] = ["blue", "emerald", "purple", "orange", "cyan", "pink"];

const COMPANY_DESCRIPTIONS: &[(&str, &str)] = &[
    ("MetLife", "Leading life insurance and employee benefits company"),
    ("Prudential", "Global financial services leader"),
    ("Milliman", "Premier actuarial consulting firm"),
    ("Aon", "Global professional services firm"),
    ("Willis Towers Watson", "Leading advisory and solutions company"),
    ("Liberty Mutual", "Diversified global insurer"),
];
const DEFAULT_COMPANY_DESCRIPTION: &str = "Leading insurance and financial services company";

const LOCATION_DESCRIPTIONS: &[(&str, &str)] = &[
    ("New York, NY", "Financial capital with numerous insurance companies"),
    ("Newark, NJ", "Major insurance hub with competitive opportunities"),
    ("Remote", "Work from anywhere with flexible arrangements"),
    ("Chicago, IL", "Midwest financial center with growing actuarial market"),
    ("Boston, MA", "Innovation hub with leading consulting firms"),
    ("Hartford, CT", "Insurance capital of America"),
];
const DEFAULT_LOCATION_DESCRIPTION: &str = "Great location for actuarial professionals";

const COST_OF_LIVING: &[(&str, &str)] = &[
    ("New York, NY", "High"),
    ("Newark, NJ", "Medium-High"),
    ("Remote", "Variable"),
    ("Chicago, IL", "Medium"),
    ("Boston, MA", "High"),
    ("Hartford, CT", "Medium"),
];
const DEFAULT_COST_OF_LIVING: &str = "Medium";

fn lookup(table: &[(&str, &'static str)], key: &str, default: &'static str) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(default, |(_, v)| *v)
}

pub fn company_description(company: &str) -> &'static str {
    lookup(COMPANY_DESCRIPTIONS, company, DEFAULT_COMPANY_DESCRIPTION)
}

pub fn location_description(location: &str) -> &'static str {
    lookup(LOCATION_DESCRIPTIONS, location, DEFAULT_LOCATION_DESCRIPTION)
}

pub fn cost_of_living(location: &str) -> &'static str {
    lookup(COST_OF_LIVING, location, DEFAULT_COST_OF_LIVING)
}

/// Palette entry picked from the name length
pub fn accent_color(name: &str) -> &'static str {
    PALETTE[name.chars().count() % PALETTE.len()]
}

pub fn job_type_color(job_type: JobType) -> &'static str {
    match job_type {
        JobType::FullTime => "emerald",
        JobType::PartTime => "blue",
        JobType::Contract => "purple",
        JobType::Remote => "orange",
    }
}

pub fn is_remote_location(location: &str) -> bool {
    location.to_lowercase().contains("remote")
}

/// `Jan 15, 2024`
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn render_job_card(job: &Job, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let badge = if is_recent_at(job, NEW_BADGE_DAYS, now) {
        " [NEW]"
    } else {
        ""
    };
    let _ = writeln!(out, "#{} {}{}", job.id, job.title, badge);
    let _ = writeln!(
        out,
        "    {} | {} | {} | {}",
        job.company,
        job.location,
        job.job_type,
        format_date(&job.posting_date)
    );
    if let Some(salary) = &job.salary {
        let _ = writeln!(out, "    {}", salary);
    }
    if !job.tags.is_empty() {
        let _ = writeln!(out, "    tags: {}", job.tags.join(", "));
    }
    out
}

pub fn render_job_list(jobs: &[Job], now: DateTime<Utc>) -> String {
    if jobs.is_empty() {
        return "No jobs found. Try adjusting your search criteria.\n".to_string();
    }
    let mut out = format!("{} job(s)\n\n", jobs.len());
    for job in jobs {
        out.push_str(&render_job_card(job, now));
        out.push('\n');
    }
    out
}

pub fn render_job_detail(job: &Job, now: DateTime<Utc>) -> String {
    let mut out = render_job_card(job, now);
    let _ = writeln!(out, "    type colour: {}", job_type_color(job.job_type));
    let _ = writeln!(out, "    {}", company_description(&job.company));
    let _ = writeln!(out);
    let description = job
        .description
        .as_deref()
        .unwrap_or("No description provided.");
    let _ = writeln!(out, "{}", description);
    out
}

pub fn render_companies(companies: &[Aggregate]) -> String {
    if companies.is_empty() {
        return "No companies found. Add some jobs to see companies here.\n".to_string();
    }
    let mut out = String::new();
    for company in companies {
        let _ = writeln!(
            out,
            "{:<24} {:>3} open position(s)  [{}]",
            company.name,
            company.job_count,
            accent_color(&company.name)
        );
        let _ = writeln!(out, "    {}", company_description(&company.name));
    }
    out
}

pub fn render_locations(locations: &[Aggregate]) -> String {
    if locations.is_empty() {
        return "No locations found. Add some jobs to see locations here.\n".to_string();
    }
    let mut out = String::new();
    for location in locations {
        let marker = if is_remote_location(&location.name) {
            "(anywhere)"
        } else {
            "(on site)"
        };
        let _ = writeln!(
            out,
            "{:<16} {:<10} {:>3} job(s)  cost of living: {}",
            location.name,
            marker,
            location.job_count,
            cost_of_living(&location.name)
        );
        let _ = writeln!(out, "    {}", location_description(&location.name));
    }
    out
}

pub fn render_stats(stats: &Stats) -> String {
    format!(
        "Total Jobs: {}  Companies: {}  Locations: {}  This Week: {}\n",
        stats.total_jobs, stats.companies, stats.locations, stats.recent_jobs
    )
}

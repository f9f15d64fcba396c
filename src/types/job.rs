// src/types/job.rs
//! Job posting records as exchanged with the jobs API

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::{non_empty, push_unique_tag};

pub type JobId = u64;

// ===== Job Type =====

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Contract")]
    Contract,
    #[serde(rename = "Remote")]
    Remote,
}

impl JobType {
    pub const ALL: [JobType; 4] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Contract,
        JobType::Remote,
    ];

    /// Wire and display form, e.g. `Full-time`
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Remote => "Remote",
        }
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full-time" | "fulltime" | "full_time" => Ok(JobType::FullTime),
            "part-time" | "parttime" | "part_time" => Ok(JobType::PartTime),
            "contract" => Ok(JobType::Contract),
            "remote" => Ok(JobType::Remote),
            other => Err(format!(
                "Unknown job type: {}. Use Full-time, Part-time, Contract or Remote",
                other
            )),
        }
    }
}

// ===== Job =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(with = "iso_date")]
    pub posting_date: DateTime<Utc>,
    pub job_type: JobType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

// ===== Create body =====

/// A job without its id, as filled in by the add/edit form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(with = "iso_date")]
    pub posting_date: DateTime<Utc>,
    pub job_type: JobType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
}

impl JobDraft {
    /// Build a draft with the required fields; posting date defaults to today.
    pub fn new(title: &str, company: &str, location: &str, job_type: JobType) -> Self {
        Self {
            title: title.trim().to_string(),
            company: company.trim().to_string(),
            location: location.trim().to_string(),
            posting_date: start_of_day(Utc::now().date_naive()),
            job_type,
            tags: Vec::new(),
            description: None,
            salary: None,
        }
    }

    /// Pre-fill a draft from an existing job (edit form)
    pub fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            posting_date: job.posting_date,
            job_type: job.job_type,
            tags: job.tags.clone(),
            description: job.description.clone(),
            salary: job.salary.clone(),
        }
    }

    pub fn with_posting_date(mut self, date: DateTime<Utc>) -> Self {
        self.posting_date = date;
        self
    }

    pub fn with_salary(mut self, salary: Option<&str>) -> Self {
        self.salary = salary.and_then(non_empty);
        self
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.and_then(non_empty);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for tag in tags {
            self.add_tag(tag.as_ref());
        }
        self
    }

    /// Add a tag, returning false when it is blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        push_unique_tag(&mut self.tags, tag)
    }

    /// Check the required fields before anything is sent
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(format!("Field '{}' is required", field));
            }
        }
        Ok(())
    }

    pub fn into_job(self, id: JobId) -> Job {
        Job {
            id,
            title: self.title,
            company: self.company,
            location: self.location,
            posting_date: self.posting_date,
            job_type: self.job_type,
            tags: self.tags,
            description: self.description,
            salary: self.salary,
        }
    }
}

// ===== Update body =====

/// Partial job: absent fields are left untouched by the server.
///
/// `description` and `salary` are tri-state: absent keeps the stored value,
/// `Some(None)` is sent as `null` and clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "iso_date::option"
    )]
    pub posting_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::deserialize"
    )]
    pub description: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable::deserialize"
    )]
    pub salary: Option<Option<String>>,
}

impl JobPatch {
    /// Replace all tags; blank entries are dropped and duplicates suppressed.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique = Vec::new();
        for tag in tags {
            push_unique_tag(&mut unique, tag.as_ref());
        }
        self.tags = Some(unique);
        self
    }

    /// Blank text clears the stored salary
    pub fn with_salary(mut self, salary: &str) -> Self {
        self.salary = Some(non_empty(salary));
        self
    }

    /// Blank text clears the stored description
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(non_empty(description));
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == JobPatch::default()
    }

    /// Non-empty text fields of the patch must stay non-empty once applied
    pub fn validate(&self) -> Result<(), String> {
        let required = [
            ("title", &self.title),
            ("company", &self.company),
            ("location", &self.location),
        ];
        for (field, value) in required {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(format!("Field '{}' cannot be empty", field));
            }
        }
        Ok(())
    }

    /// Merge into an existing job; the id never changes.
    pub fn apply(&self, job: &mut Job) {
        if let Some(title) = &self.title {
            job.title = title.clone();
        }
        if let Some(company) = &self.company {
            job.company = company.clone();
        }
        if let Some(location) = &self.location {
            job.location = location.clone();
        }
        if let Some(date) = self.posting_date {
            job.posting_date = date;
        }
        if let Some(job_type) = self.job_type {
            job.job_type = job_type;
        }
        if let Some(tags) = &self.tags {
            let mut unique = Vec::with_capacity(tags.len());
            for tag in tags {
                push_unique_tag(&mut unique, tag);
            }
            job.tags = unique;
        }
        if let Some(description) = &self.description {
            job.description = description.as_deref().and_then(non_empty);
        }
        if let Some(salary) = &self.salary {
            job.salary = salary.as_deref().and_then(non_empty);
        }
    }
}

impl From<JobDraft> for JobPatch {
    fn from(draft: JobDraft) -> Self {
        // An edit form always carries every field; absent optionals go out as null.
        Self {
            title: Some(draft.title),
            company: Some(draft.company),
            location: Some(draft.location),
            posting_date: Some(draft.posting_date),
            job_type: Some(draft.job_type),
            tags: Some(draft.tags),
            description: Some(draft.description),
            salary: Some(draft.salary),
        }
    }
}

/// Keeps an explicit `null` apart from a missing field
mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Parse either an RFC 3339 timestamp or a bare `YYYY-MM-DD` date
pub fn parse_posting_date(raw: &str) -> Result<DateTime<Utc>, String> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(start_of_day)
        .map_err(|_| format!("Invalid posting date: {}. Use YYYY-MM-DD", raw))
}

/// Serde adapter for posting dates
pub mod iso_date {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_posting_date(&raw).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| super::super::parse_posting_date(&raw))
                .transpose()
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_job() -> Job {
        JobDraft::new("Chief Actuary", "Travelers", "Hartford, CT", JobType::FullTime)
            .with_posting_date(parse_posting_date("2024-01-09").unwrap())
            .with_tags(["Leadership", "FSA"])
            .with_salary(Some("$200,000 - $300,000"))
            .into_job(7)
    }

    #[test]
    fn test_job_type_wire_names() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, "\"Full-time\"");
        let parsed: JobType = serde_json::from_str("\"Part-time\"").unwrap();
        assert_eq!(parsed, JobType::PartTime);
        assert!(serde_json::from_str::<JobType>("\"Internship\"").is_err());
    }

    #[test]
    fn test_job_type_from_str() {
        assert_eq!("full-time".parse::<JobType>(), Ok(JobType::FullTime));
        assert_eq!("Remote".parse::<JobType>(), Ok(JobType::Remote));
        assert!("freelance".parse::<JobType>().is_err());
    }

    #[test]
    fn test_posting_date_accepts_both_shapes() {
        let a = parse_posting_date("2024-01-15T00:00:00Z").unwrap();
        let b = parse_posting_date("2024-01-15").unwrap();
        assert_eq!(a, b);
        assert!(parse_posting_date("15/01/2024").is_err());
    }

    #[test]
    fn test_job_json_shape() {
        let job = sample_job();
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["posting_date"], "2024-01-09T00:00:00Z");
        assert_eq!(value["job_type"], "Full-time");
        assert!(value.get("description").is_none());

        let back: Job = serde_json::from_value(value).unwrap();
        assert_eq!(back, job);
    }

    #[test]
    fn test_job_without_tags_deserializes() {
        let job: Job = serde_json::from_str(
            r#"{"id":3,"title":"T","company":"C","location":"L",
                "posting_date":"2024-01-13","job_type":"Remote"}"#,
        )
        .unwrap();
        assert!(job.tags.is_empty());
        assert_eq!(job.salary, None);
    }

    #[test]
    fn test_draft_suppresses_duplicate_tags() {
        let mut draft = JobDraft::new("A", "B", "C", JobType::Contract);
        assert!(draft.add_tag(" Python "));
        assert!(!draft.add_tag("Python"));
        assert!(draft.add_tag("python"));
        assert!(!draft.add_tag("   "));
        assert_eq!(draft.tags, vec!["Python", "python"]);
    }

    #[test]
    fn test_draft_blank_optionals_are_absent() {
        let draft = JobDraft::new("A", "B", "C", JobType::Contract)
            .with_salary(Some("  "))
            .with_description(Some(""));
        assert_eq!(draft.salary, None);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_draft_validation() {
        assert!(JobDraft::new("A", "B", "C", JobType::Remote).validate().is_ok());
        let err = JobDraft::new("A", " ", "C", JobType::Remote)
            .validate()
            .unwrap_err();
        assert!(err.contains("company"));
    }

    #[test]
    fn test_patch_keeps_unmodified_fields() {
        let mut job = sample_job();
        let patch = JobPatch {
            salary: Some(Some("$250,000".to_string())),
            tags: Some(vec!["FSA".into(), "FSA".into(), "Strategy".into()]),
            ..Default::default()
        };
        patch.apply(&mut job);

        assert_eq!(job.id, 7);
        assert_eq!(job.title, "Chief Actuary");
        assert_eq!(job.salary.as_deref(), Some("$250,000"));
        assert_eq!(job.tags, vec!["FSA", "Strategy"]);
    }

    #[test]
    fn test_patch_from_draft_clears_blank_optionals() {
        let mut job = sample_job();
        let draft = JobDraft::from_job(&job).with_salary(None);
        let patch = JobPatch::from(draft);

        let value = serde_json::to_value(&patch).unwrap();
        assert!(value["salary"].is_null());
        assert!(value["description"].is_null());

        patch.apply(&mut job);
        assert_eq!(job.salary, None);
    }

    #[test]
    fn test_patch_null_clears_and_missing_keeps() {
        let clear: JobPatch = serde_json::from_str(r#"{"salary":null}"#).unwrap();
        assert_eq!(clear.salary, Some(None));
        assert_eq!(clear.description, None);

        let mut job = sample_job();
        clear.apply(&mut job);
        assert_eq!(job.salary, None);

        let keep: JobPatch = serde_json::from_str("{}").unwrap();
        assert!(keep.is_empty());
    }

    #[test]
    fn test_patch_builders_normalize_input() {
        let patch = JobPatch::default()
            .with_tags(["GLM", " GLM ", "", "Python"])
            .with_salary("  ")
            .with_description("Pricing team");
        assert_eq!(patch.tags, Some(vec!["GLM".to_string(), "Python".to_string()]));
        assert_eq!(patch.salary, Some(None));
        assert_eq!(patch.description, Some(Some("Pricing team".to_string())));
        assert_eq!(
            serde_json::to_string(&JobPatch::default().with_tags(["GLM", "GLM"])).unwrap(),
            r#"{"tags":["GLM"]}"#
        );
    }

    #[test]
    fn test_empty_patch_serializes_to_empty_object() {
        let patch = JobPatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }
}

// src/types/criteria.rs
//! Filter and sort parameters for job listings

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::job::JobType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    PostingDateDesc,
    PostingDateAsc,
    TitleAsc,
    TitleDesc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::PostingDateDesc => "posting_date_desc",
            SortOrder::PostingDateAsc => "posting_date_asc",
            SortOrder::TitleAsc => "title_asc",
            SortOrder::TitleDesc => "title_desc",
        }
    }

    /// Label shown in the sort selector
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::PostingDateDesc => "Newest First",
            SortOrder::PostingDateAsc => "Oldest First",
            SortOrder::TitleAsc => "Title A-Z",
            SortOrder::TitleDesc => "Title Z-A",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "posting_date_desc" => Ok(SortOrder::PostingDateDesc),
            "posting_date_asc" => Ok(SortOrder::PostingDateAsc),
            "title_asc" => Ok(SortOrder::TitleAsc),
            "title_desc" => Ok(SortOrder::TitleDesc),
            other => Err(format!(
                "Unknown sort order: {}. Use posting_date_desc, posting_date_asc, title_asc or title_desc",
                other
            )),
        }
    }
}

/// Active filters. An unset field never excludes anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: Option<&str>) -> Self {
        self.keyword = unless_blank(keyword);
        self
    }

    pub fn with_job_type(mut self, job_type: Option<JobType>) -> Self {
        self.job_type = job_type;
        self
    }

    pub fn with_location(mut self, location: Option<&str>) -> Self {
        self.location = unless_blank(location);
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// True when no filter narrows the collection (sort is ignored)
    pub fn is_unfiltered(&self) -> bool {
        self.keyword.is_none() && self.job_type.is_none() && self.location.is_none()
    }

    /// Query parameters for `GET /jobs`; unset filters are omitted entirely.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(keyword) = self.keyword.as_deref().filter(|k| !k.is_empty()) {
            pairs.push(("keyword", keyword.to_string()));
        }
        if let Some(job_type) = self.job_type {
            pairs.push(("job_type", job_type.as_str().to_string()));
        }
        if let Some(location) = self.location.as_deref().filter(|l| !l.is_empty()) {
            pairs.push(("location", location.to_string()));
        }
        pairs.push(("sort", self.sort.as_str().to_string()));
        pairs
    }
}

/// Search text is kept verbatim; only an all-blank value means "no filter".
fn unless_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_criteria() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unfiltered());
        assert_eq!(criteria.sort, SortOrder::PostingDateDesc);
        assert_eq!(
            criteria.query_pairs(),
            vec![("sort", "posting_date_desc".to_string())]
        );
    }

    #[test]
    fn test_query_pairs_only_for_set_filters() {
        let criteria = FilterCriteria::new()
            .with_keyword(Some("pricing"))
            .with_job_type(Some(JobType::Contract))
            .with_location(Some(""))
            .with_sort(SortOrder::TitleAsc);

        assert_eq!(
            criteria.query_pairs(),
            vec![
                ("keyword", "pricing".to_string()),
                ("job_type", "Contract".to_string()),
                ("sort", "title_asc".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_text_is_not_trimmed() {
        let criteria = FilterCriteria::new()
            .with_keyword(Some(" aon"))
            .with_location(Some("   "));

        assert_eq!(criteria.keyword.as_deref(), Some(" aon"));
        assert_eq!(criteria.location, None);
        assert_eq!(criteria.query_pairs()[0], ("keyword", " aon".to_string()));
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!("title_desc".parse::<SortOrder>(), Ok(SortOrder::TitleDesc));
        assert!("newest".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::PostingDateAsc.label(), "Oldest First");
    }
}

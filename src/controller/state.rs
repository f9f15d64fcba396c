// src/controller/state.rs
//! View state and the reducer that drives it.
//!
//! Every transition goes through [`reduce`], so navigation, criteria changes
//! and load results can be checked without any network.

use crate::engine::{aggregate_by, compute_stats, AggregateField};
use crate::types::{Aggregate, FilterCriteria, Job, Stats};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Home,
    Companies,
    Locations,
    JobDetail(Job),
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Companies => "companies",
            View::Locations => "locations",
            View::JobDetail(_) => "job-detail",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Creating,
    Editing(Job),
}

impl FormState {
    pub fn editing_job(&self) -> Option<&Job> {
        match self {
            FormState::Editing(job) => Some(job),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Canonical collection, unfiltered
    pub jobs: Vec<Job>,
    /// Current listing for `criteria`
    pub filtered: Vec<Job>,
    pub criteria: FilterCriteria,
    pub view: View,
    pub form: FormState,
    pub loading: bool,
    /// Last read was served from the built-in postings
    pub degraded: bool,
    pub last_error: Option<String>,
    /// Sequence number of the most recent list request
    pub list_seq: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ShowHome,
    ShowCompanies,
    ShowLocations,
    Back,
    SelectJob(Job),
    SelectCompany(String),
    SelectLocation(String),
    SetCriteria(FilterCriteria),
    ClearCriteria,
    OpenCreateForm,
    OpenEditForm(Job),
    CloseForm,
    LoadStarted,
    JobsLoaded { jobs: Vec<Job>, degraded: bool },
    ListRequested,
    FilteredLoaded { seq: u64, jobs: Vec<Job>, degraded: bool },
    WriteSucceeded,
    WriteFailed(String),
}

/// Apply one action, returning the next state
pub fn reduce(mut state: ViewState, action: Action) -> ViewState {
    match action {
        Action::ShowHome | Action::Back => state.view = View::Home,
        Action::ShowCompanies => state.view = View::Companies,
        Action::ShowLocations => state.view = View::Locations,
        Action::SelectJob(job) => {
            if state.view == View::Home {
                state.view = View::JobDetail(job);
            }
        }
        Action::SelectCompany(company) => {
            state.criteria.keyword = Some(company);
            state.view = View::Home;
        }
        Action::SelectLocation(location) => {
            state.criteria.location = Some(location);
            state.view = View::Home;
        }
        Action::SetCriteria(criteria) => state.criteria = criteria,
        Action::ClearCriteria => state.criteria = FilterCriteria::default(),
        Action::OpenCreateForm => state.form = FormState::Creating,
        Action::OpenEditForm(job) => state.form = FormState::Editing(job),
        Action::CloseForm => state.form = FormState::Closed,
        Action::LoadStarted => state.loading = true,
        Action::JobsLoaded { jobs, degraded } => {
            state.jobs = jobs;
            state.degraded = degraded;
            state.loading = false;
        }
        Action::ListRequested => state.list_seq += 1,
        Action::FilteredLoaded { seq, jobs, degraded } => {
            // A response to an older request must not overwrite a newer one.
            if seq == state.list_seq {
                state.filtered = jobs;
                state.degraded = degraded;
            }
        }
        Action::WriteSucceeded => {
            state.last_error = None;
            state.form = FormState::Closed;
        }
        Action::WriteFailed(message) => state.last_error = Some(message),
    }
    state
}

impl ViewState {
    pub fn companies(&self) -> Vec<Aggregate> {
        aggregate_by(&self.jobs, AggregateField::Company)
    }

    pub fn locations(&self) -> Vec<Aggregate> {
        aggregate_by(&self.jobs, AggregateField::Location)
    }

    pub fn stats(&self) -> Stats {
        compute_stats(&self.jobs)
    }

    pub fn selected_job(&self) -> Option<&Job> {
        match &self.view {
            View::JobDetail(job) => Some(job),
            _ => None,
        }
    }
}

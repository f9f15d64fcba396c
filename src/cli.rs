// src/cli.rs
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{error, info};

use crate::config::ClientConfig;
use crate::controller::{Action, Controller};
use crate::core::{JobClient, JobStore};
use crate::presentation;
use crate::types::job::parse_posting_date;
use crate::types::{FilterCriteria, JobDraft, JobId, JobPatch, JobType, SortOrder};

#[derive(Parser)]
#[command(name = "actuaryhub")]
#[command(about = "Browse and manage actuarial job postings")]
pub struct JobBoardCli {
    #[command(subcommand)]
    pub command: JobCommand,

    /// Jobs API base URL (overrides JOBBOARD_API_URL and config.yaml)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// YAML configuration file with `local` / `production` sections
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// List jobs, optionally filtered and sorted
    List(ListArgs),
    /// Show one job in detail
    Show { id: JobId },
    /// Post a new job
    Add(AddArgs),
    /// Edit an existing job; omitted fields are kept
    Edit {
        id: JobId,
        #[command(flatten)]
        fields: EditArgs,
    },
    /// Delete a job after confirmation
    Delete {
        id: JobId,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Employers with their number of open positions
    Companies {
        /// List the jobs of this company instead
        #[arg(long)]
        select: Option<String>,
    },
    /// Locations with their number of open positions
    Locations {
        /// List the jobs in this location instead
        #[arg(long)]
        select: Option<String>,
    },
    /// Totals across the whole collection
    Stats,
    /// Check whether the jobs API is reachable
    Health,
}

#[derive(Args)]
pub struct ListArgs {
    /// Matches title, company or any tag
    #[arg(long, short)]
    pub keyword: Option<String>,
    #[arg(long)]
    pub job_type: Option<JobType>,
    /// Matches any part of the location
    #[arg(long, short)]
    pub location: Option<String>,
    #[arg(long, default_value_t = SortOrder::PostingDateDesc)]
    pub sort: SortOrder,
}

impl ListArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .with_keyword(self.keyword.as_deref())
            .with_job_type(self.job_type)
            .with_location(self.location.as_deref())
            .with_sort(self.sort)
    }
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub company: String,
    #[arg(long)]
    pub location: String,
    #[arg(long, default_value_t = JobType::FullTime)]
    pub job_type: JobType,
    /// YYYY-MM-DD, defaults to today
    #[arg(long, value_parser = parse_posting_date)]
    pub posting_date: Option<DateTime<Utc>>,
    #[arg(long)]
    pub salary: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Repeat for several tags
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl AddArgs {
    fn into_draft(self) -> JobDraft {
        let mut draft = JobDraft::new(&self.title, &self.company, &self.location, self.job_type)
            .with_salary(self.salary.as_deref())
            .with_description(self.description.as_deref())
            .with_tags(&self.tags);
        if let Some(date) = self.posting_date {
            draft = draft.with_posting_date(date);
        }
        draft
    }
}

#[derive(Args)]
pub struct EditArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub job_type: Option<JobType>,
    #[arg(long, value_parser = parse_posting_date)]
    pub posting_date: Option<DateTime<Utc>>,
    /// Empty string clears the salary
    #[arg(long)]
    pub salary: Option<String>,
    /// Empty string clears the description
    #[arg(long)]
    pub description: Option<String>,
    /// Replaces all tags; repeat for several
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

impl EditArgs {
    fn into_patch(self) -> JobPatch {
        let mut patch = JobPatch {
            title: self.title,
            company: self.company,
            location: self.location,
            posting_date: self.posting_date,
            job_type: self.job_type,
            ..Default::default()
        };
        if !self.tags.is_empty() {
            patch = patch.with_tags(&self.tags);
        }
        if let Some(salary) = self.salary.as_deref() {
            patch = patch.with_salary(salary);
        }
        if let Some(description) = self.description.as_deref() {
            patch = patch.with_description(description);
        }
        patch
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", text);
    Ok(())
}

fn notice_degraded<S: JobStore>(controller: &Controller<S>) {
    if controller.state().degraded {
        eprintln!("⚠️  Jobs API unavailable, showing built-in postings");
    }
}

/// Ask on stdin; anything but y/yes declines
fn confirm_on_stdin(prompt: &str) -> bool {
    print!("{} [y/N] ", prompt);
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match std::io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}

pub async fn handle_command(cli: JobBoardCli) -> Result<()> {
    let config = ClientConfig::load(cli.api_url.as_deref(), cli.config.as_deref())?;
    let client = JobClient::new(&config).context("Failed to create HTTP client")?;
    let mut controller = Controller::new(client);
    let now = Utc::now();
    let json = cli.json;

    match cli.command {
        JobCommand::List(args) => {
            controller.dispatch(Action::ShowHome);
            controller.set_criteria(args.criteria()).await;
            notice_degraded(&controller);
            let state = controller.state();
            if json {
                print_json(&state.filtered)?;
            } else {
                let scope = if state.criteria.is_unfiltered() {
                    "All jobs"
                } else {
                    "Matching jobs"
                };
                println!("{}, {}", scope, state.criteria.sort.label());
                print!("{}", presentation::render_job_list(&state.filtered, now));
            }
        }

        JobCommand::Show { id } => {
            controller.load_all().await;
            let job = match controller.find_job(id).await {
                Ok(Some(job)) => job,
                Ok(None) => anyhow::bail!("Job {} not found", id),
                Err(e) => {
                    // The detail view still works from the loaded collection.
                    error!("Error fetching job {}: {}", id, e);
                    controller
                        .select_job(id)
                        .cloned()
                        .with_context(|| format!("Job {} not found", id))?
                }
            };
            if json {
                print_json(&job)?;
            } else {
                print!("{}", presentation::render_job_detail(&job, now));
            }
        }

        JobCommand::Add(args) => {
            controller.load_all().await;
            controller.dispatch(Action::OpenCreateForm);
            let job = match controller.submit_job(args.into_draft()).await {
                Ok(job) => job,
                Err(e) => {
                    controller.dispatch(Action::CloseForm);
                    return Err(e).context("Failed to create job");
                }
            };
            info!("Created job {}", job.id);
            if json {
                print_json(&job)?;
            } else {
                println!("✅ Created job #{}: {}", job.id, job.title);
            }
        }

        JobCommand::Edit { id, fields } => {
            let patch = fields.into_patch();
            if patch.is_empty() {
                anyhow::bail!("Nothing to update: pass at least one field");
            }
            let job = controller
                .patch_job(id, patch)
                .await
                .with_context(|| format!("Failed to update job {}", id))?;
            if json {
                print_json(&job)?;
            } else {
                println!("✅ Updated job #{}: {}", job.id, job.title);
            }
        }

        JobCommand::Delete { id, yes } => {
            let removed = controller
                .remove_job(id, |prompt| yes || confirm_on_stdin(prompt))
                .await
                .with_context(|| format!("Failed to delete job {}", id))?;
            if removed {
                println!("✅ Deleted job #{}", id);
            } else {
                println!("Deletion cancelled");
            }
        }

        JobCommand::Companies { select } => {
            controller.load_all().await;
            controller.dispatch(Action::ShowCompanies);
            match select {
                Some(company) => {
                    controller.select_company(&company).await;
                    notice_degraded(&controller);
                    let jobs = &controller.state().filtered;
                    if json {
                        print_json(jobs)?;
                    } else {
                        print!("{}", presentation::render_job_list(jobs, now));
                    }
                }
                None => {
                    notice_degraded(&controller);
                    let companies = controller.state().companies();
                    if json {
                        print_json(&companies)?;
                    } else {
                        print!("{}", presentation::render_companies(&companies));
                    }
                }
            }
        }

        JobCommand::Locations { select } => {
            controller.load_all().await;
            controller.dispatch(Action::ShowLocations);
            match select {
                Some(location) => {
                    controller.select_location(&location).await;
                    notice_degraded(&controller);
                    let jobs = &controller.state().filtered;
                    if json {
                        print_json(jobs)?;
                    } else {
                        print!("{}", presentation::render_job_list(jobs, now));
                    }
                }
                None => {
                    notice_degraded(&controller);
                    let locations = controller.state().locations();
                    if json {
                        print_json(&locations)?;
                    } else {
                        print!("{}", presentation::render_locations(&locations));
                    }
                }
            }
        }

        JobCommand::Stats => {
            controller.load_all().await;
            notice_degraded(&controller);
            let stats = controller.state().stats();
            if json {
                print_json(&stats)?;
            } else {
                print!("{}", presentation::render_stats(&stats));
            }
        }

        JobCommand::Health => {
            let health = controller.store().health().await;
            if json {
                print_json(&health)?;
            } else if health.is_healthy() {
                println!("✅ {} ({})", health.status, controller.store().base_url());
            } else {
                println!(
                    "❌ {}: {}",
                    health.status,
                    health.error.as_deref().unwrap_or("no details")
                );
            }
        }
    }

    Ok(())
}

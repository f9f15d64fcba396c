// src/core/seed.rs
//! Built-in postings served when the jobs API cannot be reached

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{Job, JobId, JobType};

struct SeedRow {
    id: JobId,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    day: u32,
    job_type: JobType,
    tags: [&'static str; 5],
    description: &'static str,
    salary: &'static str,
}

const SEED_ROWS: [SeedRow; 8] = [
    SeedRow {
        id: 1,
        title: "Senior Life Insurance Actuary",
        company: "MetLife",
        location: "New York, NY",
        day: 15,
        job_type: JobType::FullTime,
        tags: ["Life Insurance", "Pricing", "Reserving", "Excel", "SQL"],
        description: "Join our dynamic Life Insurance team as a Senior Actuary. Lead pricing initiatives, develop innovative products, and mentor junior staff in a collaborative environment.",
        salary: "$120,000 - $150,000",
    },
    SeedRow {
        id: 2,
        title: "P&C Actuarial Analyst",
        company: "Prudential",
        location: "Newark, NJ",
        day: 14,
        job_type: JobType::FullTime,
        tags: ["Property & Casualty", "Modeling", "R", "Python", "Statistics"],
        description: "Exciting opportunity for an analytical professional to join our Property & Casualty team. Work on cutting-edge modeling projects and risk assessment.",
        salary: "$75,000 - $95,000",
    },
    SeedRow {
        id: 3,
        title: "Healthcare Consulting Actuary",
        company: "Milliman",
        location: "Remote",
        day: 13,
        job_type: JobType::Remote,
        tags: ["Consulting", "Healthcare", "Medicare", "Medicaid", "Valuation"],
        description: "Remote consulting opportunity for experienced healthcare actuary. Work with diverse clients on Medicare, Medicaid, and commercial health insurance projects.",
        salary: "$140,000 - $180,000",
    },
    SeedRow {
        id: 4,
        title: "Entry Level Actuary - Training Program",
        company: "Aon",
        location: "Chicago, IL",
        day: 12,
        job_type: JobType::FullTime,
        tags: ["Entry Level", "Reinsurance", "Excel", "VBA", "Training Program"],
        description: "Comprehensive training program for new graduates. Excellent opportunity to start your actuarial career with industry-leading mentorship and development.",
        salary: "$65,000 - $80,000",
    },
    SeedRow {
        id: 5,
        title: "Part-time Retirement Consultant",
        company: "Willis Towers Watson",
        location: "Boston, MA",
        day: 11,
        job_type: JobType::PartTime,
        tags: ["Consulting", "Retirement", "Pension", "Benefits", "Flexible"],
        description: "Flexible part-time consulting role perfect for experienced professionals seeking work-life balance. Focus on retirement and pension plan consulting.",
        salary: "$80 - $120/hour",
    },
    SeedRow {
        id: 6,
        title: "Contract Pricing Actuary",
        company: "Liberty Mutual",
        location: "Boston, MA",
        day: 10,
        job_type: JobType::Contract,
        tags: ["Pricing", "Auto Insurance", "GLM", "SAS", "Contract"],
        description: "6-month contract opportunity for auto insurance pricing project. Work with advanced statistical models and contribute to rate filing initiatives.",
        salary: "$110,000 - $130,000",
    },
    SeedRow {
        id: 7,
        title: "Chief Actuary",
        company: "Travelers",
        location: "Hartford, CT",
        day: 9,
        job_type: JobType::FullTime,
        tags: ["Leadership", "Strategy", "Risk Management", "Executive", "FSA"],
        description: "Senior executive role leading actuarial function. Drive strategic initiatives, manage regulatory compliance, and lead a team of actuarial professionals.",
        salary: "$200,000 - $300,000",
    },
    SeedRow {
        id: 8,
        title: "Catastrophe Risk Modeler",
        company: "RMS",
        location: "Newark, CA",
        day: 8,
        job_type: JobType::FullTime,
        tags: [
            "Catastrophe Modeling",
            "Risk Assessment",
            "Python",
            "Machine Learning",
            "Climate",
        ],
        description: "Innovative role developing catastrophe risk models. Work on climate change impact assessment and natural disaster risk quantification.",
        salary: "$95,000 - $125,000",
    },
];

fn january_2024(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The fixed fallback collection, newest first
pub fn seed_jobs() -> Vec<Job> {
    SEED_ROWS
        .iter()
        .map(|row| Job {
            id: row.id,
            title: row.title.to_string(),
            company: row.company.to_string(),
            location: row.location.to_string(),
            posting_date: january_2024(row.day),
            job_type: row.job_type,
            tags: row.tags.iter().map(|t| t.to_string()).collect(),
            description: Some(row.description.to_string()),
            salary: Some(row.salary.to_string()),
        })
        .collect()
}

//! Plain text report for resume records.

use std::fmt::Write;

use crate::model::{Field, ResumeRecord, WorkExperienceEntry};

use super::NOT_FOUND;

/// Render a record as a human-readable report.
///
/// One heading per field; list items are prefixed with `- ` and jobs read
/// `title @ company (dates)` followed by indented responsibilities.
pub fn to_text(record: &ResumeRecord) -> String {
    let mut out = String::new();

    for field in Field::ALL {
        let _ = writeln!(out, "{}:", field);
        if !record.is_found(field) {
            let _ = writeln!(out, "  {}", NOT_FOUND);
            continue;
        }

        match field {
            Field::Name => line(&mut out, record.name.as_deref()),
            Field::Summary => line(&mut out, record.summary.as_deref()),
            Field::Accounts => {
                for (key, matches) in record.accounts.iter() {
                    let _ = writeln!(out, "  - {}: {}", key, matches.join(", "));
                }
            }
            Field::Skills => items(&mut out, &record.skills),
            Field::Education => items(&mut out, &record.education),
            Field::Certifications => items(&mut out, &record.certifications),
            Field::Projects => items(&mut out, &record.projects),
            Field::WorkExperience => {
                for job in &record.work_experience {
                    let _ = writeln!(out, "  - {}", headline(job));
                    for duty in &job.responsibilities {
                        let _ = writeln!(out, "      {}", duty);
                    }
                }
            }
        }
    }

    out.trim_end().to_string()
}

fn line(out: &mut String, value: Option<&str>) {
    let _ = writeln!(out, "  {}", value.unwrap_or(NOT_FOUND));
}

fn items(out: &mut String, values: &[String]) {
    for value in values {
        let _ = writeln!(out, "  - {}", value);
    }
}

fn headline(job: &WorkExperienceEntry) -> String {
    let mut s = job.title.clone().unwrap_or_default();
    if let Some(company) = job.company.as_deref() {
        s.push_str(" @ ");
        s.push_str(company);
    }
    if let Some(dates) = job.dates.as_deref() {
        s.push_str(&format!(" ({})", dates));
    }
    s
}

//! Report generation.
//!
//! Consumes the final owner and candidate records after a run and
//! renders the human-readable text report and the CSV contact sheet.
//! Reporting never fails on under-filled meetings: missing seats are
//! padded with the explicit [`EMPTY_CONTACT`] sentinel.

use std::io;

use crate::matching::{derive_status, Status};
use crate::models::{
    format_timeslot, Candidate, MeetingOwner, Placement, Quotas, TimeslotGroups,
};

/// Sentinel written into contact-sheet cells for unfilled seats.
pub const EMPTY_CONTACT: &str = "None";

const SEPARATOR_WIDTH: usize = 80;

/// Renders the full text report.
///
/// Layout: the seed line (for reproducing the run), a per-timeslot
/// section listing each owner's matches, the sentinel "not assigned"
/// section, then a per-candidate commitment listing.
pub fn text_report(
    owners: &[MeetingOwner],
    candidates: &[Candidate],
    groups: &TimeslotGroups,
    seed: u64,
) -> String {
    let mut out = Vec::new();
    out.push(format!("Random seed: {seed}\n"));
    out.push(format!("{}\n", "=".repeat(SEPARATOR_WIDTH)));

    for (&timeslot, group) in &groups.scheduled {
        out.push(format!("{} - ({})", format_timeslot(timeslot), group.len()));
        for &idx in group {
            out.push(owner_section(&owners[idx], candidates));
            out.push(String::new());
        }
    }

    if !groups.unscheduled.is_empty() {
        out.push(format!("Timeslot not assigned - ({})", groups.unscheduled.len()));
        for &idx in &groups.unscheduled {
            out.push(format!("  {}", owners[idx].name));
        }
    }

    out.push(format!("\n{}\n", "=".repeat(SEPARATOR_WIDTH)));

    for candidate in candidates {
        out.push(candidate_section(candidate));
        out.push(String::new());
    }

    out.join("\n")
}

/// One owner's block in the text report.
///
/// The Not-Met gate uses the threshold-1 status: an owner is reported
/// as unmet unless at least one qualifying primary delegate was placed,
/// whether the shortfall is a hard requirement or an empty bucket.
fn owner_section(owner: &MeetingOwner, candidates: &[Candidate]) -> String {
    let mut lines = Vec::new();

    if derive_status(owner, 1) != Status::Satisfied {
        lines.push(format!("{}: Requirements Not Met!", owner.name));
        if let Some(req) = owner.requirement.describe() {
            lines.push(req.to_string());
        }
        return lines.join("\n");
    }

    lines.push(format!("{} - {} matched", owner.name, owner.placement_count()));
    if let Some(req) = owner.requirement.describe() {
        lines.push(req.to_string());
    }
    lines.push("  Delegates:".to_string());
    for p in &owner.primary_delegates {
        lines.push(format!("    {} - ({})", candidates[p.candidate].name, p.tier.label()));
    }
    lines.push("  Backups:".to_string());
    for p in &owner.backup_delegates {
        lines.push(format!("    {} - ({})", candidates[p.candidate].name, p.tier.label()));
    }
    if !owner.primary_staff.is_empty() {
        lines.push("  Staff:".to_string());
        for p in &owner.primary_staff {
            lines.push(format!("    {}", candidates[p.candidate].name));
        }
    }
    if !owner.backup_staff.is_empty() {
        lines.push("  Backup Staff:".to_string());
        for p in &owner.backup_staff {
            lines.push(format!("    {}", candidates[p.candidate].name));
        }
    }
    lines.join("\n")
}

/// One candidate's block in the text report.
fn candidate_section(candidate: &Candidate) -> String {
    let mut lines = vec![candidate.name.clone()];
    let assigned: Vec<&crate::models::Commitment> = candidate
        .commitments
        .iter()
        .filter(|c| !c.role.is_backup())
        .collect();
    let backup: Vec<&crate::models::Commitment> = candidate
        .commitments
        .iter()
        .filter(|c| c.role.is_backup())
        .collect();

    if assigned.is_empty() && backup.is_empty() {
        lines.push("  Not assigned to any parliamentarian".to_string());
    }
    if !assigned.is_empty() {
        lines.push(format!("  Assigned to: ({})", assigned.len()));
        for c in &assigned {
            lines.push(format!("    {} ({})", c.owner, format_timeslot(c.timeslot)));
        }
    }
    if !backup.is_empty() {
        lines.push(format!("  Backup for: ({})", backup.len()));
        for c in &backup {
            lines.push(format!("    {} ({})", c.owner, format_timeslot(c.timeslot)));
        }
    }
    lines.join("\n")
}

/// Builds the contact sheet: a header row plus one row per scheduled
/// owner, in timeslot order. Unscheduled owners are omitted.
pub fn contact_sheet(
    owners: &[MeetingOwner],
    candidates: &[Candidate],
    groups: &TimeslotGroups,
    quotas: &Quotas,
) -> Vec<Vec<String>> {
    let mut rows = vec![contact_header(quotas)];
    for (&timeslot, group) in &groups.scheduled {
        for &idx in group {
            let owner = &owners[idx];
            let mut row = vec![
                format_timeslot(timeslot),
                owner.name.clone(),
                owner.email.clone(),
            ];
            row.extend(contact_cells(
                &owner.primary_delegates,
                quotas.primary_delegates,
                candidates,
            ));
            row.extend(contact_cells(
                &owner.backup_delegates,
                quotas.backup_delegates,
                candidates,
            ));
            row.extend(contact_cells(&owner.primary_staff, quotas.primary_staff, candidates));
            row.extend(contact_cells(&owner.backup_staff, quotas.backup_staff, candidates));
            rows.push(row);
        }
    }
    rows
}

/// Writes contact rows as CSV.
pub fn write_contact_csv<W: io::Write>(writer: W, rows: &[Vec<String>]) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);
    for row in rows {
        csv.write_record(row)?;
    }
    csv.flush()?;
    Ok(())
}

fn contact_header(quotas: &Quotas) -> Vec<String> {
    let mut header = vec![
        "Timeslot".to_string(),
        "MP/Sen Name".to_string(),
        "MP/Sen Email".to_string(),
    ];
    header.extend(bucket_header("Delegate", quotas.primary_delegates));
    header.extend(bucket_header("Backup", quotas.backup_delegates));
    header.extend(bucket_header("Staff", quotas.primary_staff));
    header.extend(bucket_header("Backup Staff", quotas.backup_staff));
    header
}

fn bucket_header(label: &str, quota: usize) -> Vec<String> {
    if quota == 1 {
        return vec![label.to_string(), format!("{label} Email")];
    }
    (1..=quota)
        .flat_map(|i| [format!("{label} {i}"), format!("{label} {i} Email")])
        .collect()
}

/// Name/email cells for one bucket, padded to quota with the sentinel.
fn contact_cells(bucket: &[Placement], quota: usize, candidates: &[Candidate]) -> Vec<String> {
    (0..quota)
        .flat_map(|i| match bucket.get(i) {
            Some(p) => [
                candidates[p.candidate].name.clone(),
                candidates[p.candidate].email.clone(),
            ],
            None => [EMPTY_CONTACT.to_string(), EMPTY_CONTACT.to_string()],
        })
        .collect()
}

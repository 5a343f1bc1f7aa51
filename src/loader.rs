//! CSV loading of the two input tables.
//!
//! Reads the attendee table and the parliamentarian table into domain
//! records. All coercion happens here: rows without a name are dropped,
//! rejected attendees and non-attending parliamentarians are dropped,
//! and the meeting start time is coerced to an optional timestamp
//! (unparseable values become "unscheduled" rather than errors). Data
//! that reaches the matching core is assumed well-formed.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::models::{Candidate, MeetingOwner, RequirementSpec};

/// Format of the `Start Time` column, e.g. `Nov 24, 2025, 14:30`.
pub const TIMESLOT_FORMAT: &str = "%b %d, %Y, %H:%M";

/// Errors raised while loading input tables.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened.
    #[error("failed to open {path}")]
    Io {
        /// Offending path.
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A CSV record could not be read.
    #[error("malformed CSV input")]
    Csv(#[from] csv::Error),
    /// A required column is absent from the header row.
    #[error("missing column `{0}`")]
    MissingColumn(String),
    /// An event day label did not parse against the event year.
    #[error("day label `{label}` does not name a day in {year}")]
    BadDayLabel {
        /// Offending label.
        label: String,
        /// Event year the label was resolved against.
        year: i32,
    },
}

/// The event's calendar days.
///
/// The attendee table carries one boolean availability column per day,
/// headed by a short label like `Nov 24`; the label is resolved to a
/// calendar date against the event year.
#[derive(Debug, Clone)]
pub struct EventDays {
    days: Vec<(String, NaiveDate)>,
}

impl EventDays {
    /// Resolves day labels against the event year.
    pub fn new<S: AsRef<str>>(year: i32, labels: &[S]) -> Result<Self, LoadError> {
        let mut days = Vec::with_capacity(labels.len());
        for label in labels {
            let label = label.as_ref();
            let date = NaiveDate::parse_from_str(&format!("{label}, {year}"), "%b %d, %Y")
                .map_err(|_| LoadError::BadDayLabel {
                    label: label.to_string(),
                    year,
                })?;
            days.push((label.to_string(), date));
        }
        Ok(Self { days })
    }

    /// The resolved calendar dates, in label order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|(_, d)| *d).collect()
    }

    /// Label/date pairs, in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, NaiveDate)> {
        self.days.iter().map(|(l, d)| (l.as_str(), *d))
    }

    /// Number of event days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether no days are configured.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Loads the attendee table from a CSV file.
pub fn load_candidates(path: &Path, days: &EventDays) -> Result<Vec<Candidate>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_candidates(file, days)
}

/// Loads the parliamentarian table from a CSV file.
pub fn load_owners(path: &Path) -> Result<Vec<MeetingOwner>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_owners(file)
}

/// Reads the attendee table from any reader.
///
/// Drops rows without a `Name` and rows with `Reject?` set (duplicates
/// or withdrawn registrations).
pub fn read_candidates<R: io::Read>(
    reader: R,
    days: &EventDays,
) -> Result<Vec<Candidate>, LoadError> {
    let mut csv = csv::Reader::from_reader(reader);
    let headers = csv.headers()?.clone();

    let name = column(&headers, "Name")?;
    let email = column(&headers, "Email")?;
    let staff = column(&headers, "Staff?")?;
    let reject = column(&headers, "Reject?")?;
    let local = column(&headers, "Local #")?;
    let constituency = column(&headers, "Constituency Name")?;
    let province = column(&headers, "Province Name")?;
    let day_columns: Vec<(usize, NaiveDate)> = days
        .iter()
        .map(|(label, date)| column(&headers, label).map(|idx| (idx, date)))
        .collect::<Result<_, _>>()?;

    let mut candidates = Vec::new();
    for record in csv.records() {
        let record = record?;
        let name = field(&record, name);
        if name.is_empty() || parse_flag(field(&record, reject)) {
            continue;
        }

        let mut candidate = Candidate::new(name)
            .with_email(field(&record, email))
            .with_staff(parse_flag(field(&record, staff)))
            .with_province(field(&record, province));
        if let Ok(num) = field(&record, local).parse::<u32>() {
            candidate = candidate.with_local(num);
        }
        if let Some(c) = non_empty(field(&record, constituency)) {
            candidate = candidate.with_constituency(c);
        }
        for &(idx, date) in &day_columns {
            candidate = candidate.with_availability(date, parse_flag(field(&record, idx)));
        }
        candidates.push(candidate);
    }
    Ok(candidates)
}

/// Reads the parliamentarian table from any reader.
///
/// Drops rows without a `Name` and rows not marked `Attending?`. The
/// `Start Time` column is coerced: unparseable values leave the owner
/// unscheduled (sentinel group) instead of failing the load.
pub fn read_owners<R: io::Read>(reader: R) -> Result<Vec<MeetingOwner>, LoadError> {
    let mut csv = csv::Reader::from_reader(reader);
    let headers = csv.headers()?.clone();

    let name = column(&headers, "Name")?;
    let email = column(&headers, "Email")?;
    let chamber = column(&headers, "MP/Sen")?;
    let attending = column(&headers, "Attending?")?;
    let constituency = column(&headers, "Constituency")?;
    let province = column(&headers, "Province / Territory")?;
    let req_local = column(&headers, "Requires Local (#)")?;
    let req_const = column(&headers, "Requires Constituent?")?;
    let req_prov = column(&headers, "Requires province-dweller?")?;
    let start_time = column(&headers, "Start Time")?;

    let mut owners = Vec::new();
    for record in csv.records() {
        let record = record?;
        let name = field(&record, name);
        if name.is_empty() || !parse_flag(field(&record, attending)) {
            continue;
        }

        let mut owner = MeetingOwner::new(name)
            .with_email(field(&record, email))
            .with_chamber(field(&record, chamber))
            .with_province(field(&record, province))
            .with_requirement(RequirementSpec {
                required_locals: parse_locals(field(&record, req_local)),
                requires_constituent: parse_flag(field(&record, req_const)),
                requires_province_dweller: parse_flag(field(&record, req_prov)),
            });
        if let Some(c) = non_empty(field(&record, constituency)) {
            owner = owner.with_constituency(c);
        }
        if let Ok(ts) = NaiveDateTime::parse_from_str(field(&record, start_time), TIMESLOT_FORMAT) {
            owner = owner.with_timeslot(ts);
        }
        owners.push(owner);
    }
    Ok(owners)
}

fn column(headers: &csv::StringRecord, label: &str) -> Result<usize, LoadError> {
    headers
        .iter()
        .position(|h| h.trim() == label)
        .ok_or_else(|| LoadError::MissingColumn(label.to_string()))
}

fn field<'r>(record: &'r csv::StringRecord, idx: usize) -> &'r str {
    record.get(idx).unwrap_or("").trim()
}

/// Truthy spreadsheet cells: `TRUE`, `true`, `Yes`, `1`.
fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes") || value == "1"
}

/// Parses a comma-separated locality list, skipping non-numeric tokens.
fn parse_locals(value: &str) -> Vec<u32> {
    value
        .split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days() -> EventDays {
        EventDays::new(2025, &["Nov 24", "Nov 25"]).unwrap()
    }

    const DELEGATES: &str = "\
Name,Email,Staff?,Reject?,Local #,Constituency Name,Province Name,Nov 24,Nov 25
Ada,ada@x.org,FALSE,FALSE,7,Riverdale,Ontario,TRUE,FALSE
Grace,grace@x.org,TRUE,FALSE,,,Quebec,TRUE,TRUE
Rejected,r@x.org,FALSE,TRUE,,,Ontario,TRUE,TRUE
,anon@x.org,FALSE,FALSE,,,Ontario,TRUE,TRUE
";

    const OWNERS: &str = "\
Name,Email,MP/Sen,Attending?,Constituency,Province / Territory,Requires Local (#),Requires Constituent?,Requires province-dweller?,Start Time
MP Smith,smith@parl.example,MP,TRUE,Riverdale,Ontario,\"7, 12\",FALSE,FALSE,\"Nov 24, 2025, 10:00\"
Sen Grey,grey@parl.example,Sen,TRUE,,Yukon,,TRUE,FALSE,TBD
MP Absent,absent@parl.example,MP,FALSE,,Ontario,,,,\"Nov 24, 2025, 11:00\"
";

    #[test]
    fn test_event_days_resolution() {
        let days = days();
        assert_eq!(days.len(), 2);
        assert_eq!(days.dates()[0], NaiveDate::from_ymd_opt(2025, 11, 24).unwrap());
        assert!(EventDays::new(2025, &["Notamonth 1"]).is_err());
    }

    #[test]
    fn test_read_candidates() {
        let candidates = read_candidates(DELEGATES.as_bytes(), &days()).unwrap();
        // Rejected and nameless rows are dropped.
        assert_eq!(candidates.len(), 2);

        let ada = &candidates[0];
        assert_eq!(ada.name, "Ada");
        assert!(!ada.staff);
        assert_eq!(ada.local, Some(7));
        assert_eq!(ada.constituency.as_deref(), Some("Riverdale"));
        assert!(ada.available_on(NaiveDate::from_ymd_opt(2025, 11, 24).unwrap()));
        assert!(!ada.available_on(NaiveDate::from_ymd_opt(2025, 11, 25).unwrap()));

        let grace = &candidates[1];
        assert!(grace.staff);
        assert_eq!(grace.local, None);
        assert_eq!(grace.constituency, None);
    }

    #[test]
    fn test_read_owners() {
        let owners = read_owners(OWNERS.as_bytes()).unwrap();
        // Non-attending rows are dropped.
        assert_eq!(owners.len(), 2);

        let smith = &owners[0];
        assert_eq!(smith.chamber, "MP");
        assert_eq!(smith.requirement.required_locals, vec![7, 12]);
        let ts = smith.timeslot.unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 11, 24).unwrap());

        // "TBD" start time coerces to unscheduled.
        let grey = &owners[1];
        assert_eq!(grey.timeslot, None);
        assert!(grey.requirement.requires_constituent);
        assert_eq!(grey.constituency, None);
    }

    #[test]
    fn test_missing_column() {
        let err = read_candidates("Name,Email\nAda,a@x.org\n".as_bytes(), &days()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn(_)));
    }

    #[test]
    fn test_locals_parsing_skips_junk() {
        assert_eq!(parse_locals("7, 12, nan, "), vec![7, 12]);
        assert!(parse_locals("").is_empty());
    }
}

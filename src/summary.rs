use crate::data::{AllocationInput, Session, Year};
use serde::Serialize;
use std::fmt;

/// Students of one year across the whole roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearTotal {
    pub year: Year,
    pub groups: usize,
    pub students: u64,
}

/// Lab and student totals shown before an allocation is run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub total_labs: usize,
    pub total_capacity: u64,
    pub total_groups: usize,
    pub total_students: u64,
    pub per_year: Vec<YearTotal>,
}

impl RosterSummary {
    pub fn from_input(input: &AllocationInput) -> Self {
        let per_year = Year::ALL
            .iter()
            .map(|&year| {
                let groups = input.groups.iter().filter(|g| g.year == year);
                YearTotal {
                    year,
                    groups: groups.clone().count(),
                    students: groups.map(|g| g.headcount as u64).sum(),
                }
            })
            .collect();

        Self {
            total_labs: input.rooms.len(),
            total_capacity: input.rooms.iter().map(|r| r.capacity as u64).sum(),
            total_groups: input.groups.len(),
            total_students: input.groups.iter().map(|g| g.headcount as u64).sum(),
            per_year,
        }
    }
}

/// "First", "Second", "Third", then "4th", "5th", ...
pub fn session_label(number: u32) -> String {
    match number {
        1 => "First".to_string(),
        2 => "Second".to_string(),
        3 => "Third".to_string(),
        n => format!("{n}th"),
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Session Allocation", session_label(self.number))?;
        for record in &self.allocations {
            writeln!(f, "  {}", record)?;
        }
        Ok(())
    }
}

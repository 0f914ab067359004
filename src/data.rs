use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// Type aliases for clarity
pub type RoomId = String;
pub type GroupId = String;
pub type SessionNumber = u32;

/// Academic year of a student group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Year {
    #[serde(rename = "1")]
    First,
    #[serde(rename = "2")]
    Second,
    #[serde(rename = "3")]
    Third,
}

impl Year {
    pub const ALL: [Year; 3] = [Year::First, Year::Second, Year::Third];
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Year::First => "1st Year",
            Year::Second => "2nd Year",
            Year::Third => "3rd Year",
        };
        f.write_str(label)
    }
}

/// Represents a physical lab with a fixed number of seats.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
}

/// A section of students that must sit together.
///
/// `departments` is the raw designator as entered, e.g. `"CSE, IT"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub year: Year,
    pub departments: String,
    pub section: String,
    pub headcount: u32,
}

/// A named set of department tokens that should share labs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCluster {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(deserialize_with = "tokens_from_list_or_csv")]
    pub departments: Vec<String>,
}

impl DepartmentCluster {
    pub fn new(name: impl Into<String>, departments: &[&str]) -> Self {
        Self {
            id: None,
            name: name.into(),
            departments: clean_tokens(departments.iter().copied()),
        }
    }

    /// Builds a cluster from comma separated text such as `"CSE, IT, AIDS"`.
    pub fn from_csv(name: impl Into<String>, departments: &str) -> Self {
        Self {
            id: None,
            name: name.into(),
            departments: split_departments(departments),
        }
    }
}

pub(crate) fn split_departments(raw: &str) -> Vec<String> {
    clean_tokens(raw.split(','))
}

/// Trims every token and drops the blank ones; a blank token would match any designator.
fn clean_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    tokens
        .into_iter()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}

fn tokens_from_list_or_csv<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Tokens {
        List(Vec<String>),
        Csv(String),
    }

    Ok(match Tokens::deserialize(deserializer)? {
        Tokens::List(list) => clean_tokens(list.iter().map(String::as_str)),
        Tokens::Csv(raw) => split_departments(&raw),
    })
}

/// The complete input for one allocation run.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationInput {
    pub rooms: Vec<Room>,
    pub groups: Vec<Group>,
    #[serde(default)]
    pub clusters: Vec<DepartmentCluster>,
}

/// A group as it appears inside an allocation record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedGroup {
    pub id: GroupId,
    pub departments: String,
    pub section: String,
    pub headcount: u32,
}

impl From<&Group> for AllocatedGroup {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            departments: group.departments.clone(),
            section: group.section.clone(),
            headcount: group.headcount,
        }
    }
}

/// One room opened for one (year, cluster) bucket in one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRecord {
    pub room_id: RoomId,
    pub room_name: String,
    pub room_capacity: u32,
    pub year: Year,
    pub cluster: String,
    pub groups: Vec<AllocatedGroup>,
}

impl AllocationRecord {
    pub fn total_students(&self) -> u32 {
        self.groups.iter().map(|g| g.headcount).sum()
    }
}

impl fmt::Display for AllocationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = self
            .groups
            .iter()
            .map(|g| format!("{} {}", g.departments, g.section))
            .collect::<Vec<_>>()
            .join("; ");
        write!(
            f,
            "{} | {} - {} | {}/{} students ({})",
            self.room_name,
            self.year,
            self.cluster,
            self.total_students(),
            self.room_capacity,
            sections
        )
    }
}

/// All records produced by one pass of the driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub number: SessionNumber,
    pub allocations: Vec<AllocationRecord>,
}

/// Per-run outcome for a single input group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupAssignment {
    pub group_id: GroupId,
    pub session: Option<SessionNumber>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum AllocationStatus {
    Complete,
    #[serde(rename_all = "camelCase")]
    Partial { unallocated_count: usize },
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationStatus::Complete => write!(f, "All groups have been successfully allocated"),
            AllocationStatus::Partial { unallocated_count } => write!(
                f,
                "Warning: {} groups could not be allocated in any session",
                unallocated_count
            ),
        }
    }
}

/// The final output of the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationOutput {
    pub status: AllocationStatus,
    pub sessions: Vec<Session>,
    pub unallocated: Vec<Group>,
    pub assignments: Vec<GroupAssignment>,
}

//! Roster checks run before the allocator touches any data.
//!
//! All problems are collected so the caller can fix the roster in one go.

use crate::data::AllocationInput;
use crate::error::{AllocationError, AllocationResult};
use std::collections::HashSet;

/// Rejects empty rosters first, then every malformed room, group or cluster.
pub fn validate_input(input: &AllocationInput) -> AllocationResult<()> {
    if input.rooms.is_empty() || input.groups.is_empty() {
        return Err(AllocationError::NothingToAllocate {
            rooms: input.rooms.len(),
            groups: input.groups.len(),
        });
    }

    let mut problems = Vec::new();

    let mut room_ids = HashSet::new();
    for room in &input.rooms {
        if !room_ids.insert(room.id.as_str()) {
            problems.push(format!("Duplicate lab ID: {}", room.id));
        }
        if room.name.trim().is_empty() {
            problems.push(format!("Lab {} has no name", room.id));
        }
        if room.capacity == 0 {
            problems.push(format!("Lab {} must have a positive capacity", room.id));
        }
    }

    let mut group_ids = HashSet::new();
    for group in &input.groups {
        if !group_ids.insert(group.id.as_str()) {
            problems.push(format!("Duplicate student group ID: {}", group.id));
        }
        if group.departments.trim().is_empty() {
            problems.push(format!("Student group {} has no departments", group.id));
        }
        if group.section.trim().is_empty() {
            problems.push(format!("Student group {} has no section", group.id));
        }
        if group.headcount == 0 {
            problems.push(format!(
                "Student group {} must have a positive student count",
                group.id
            ));
        }
    }

    for cluster in &input.clusters {
        if cluster.name.trim().is_empty() {
            problems.push("Department group with an empty name".to_string());
        }
        if cluster.departments.is_empty() {
            problems.push(format!("Department group '{}' lists no departments", cluster.name));
        } else if cluster.departments.iter().any(|d| d.trim().is_empty()) {
            problems.push(format!("Department group '{}' has a blank department", cluster.name));
        }
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(AllocationError::InvalidInput(problems))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DepartmentCluster, Group, Room, Year};

    fn room(id: &str, capacity: u32) -> Room {
        Room {
            id: id.into(),
            name: format!("Lab {id}"),
            capacity,
        }
    }

    fn group(id: &str, headcount: u32) -> Group {
        Group {
            id: id.into(),
            year: Year::First,
            departments: "CSE".into(),
            section: "A".into(),
            headcount,
        }
    }

    #[test]
    fn test_valid_input() {
        let input = AllocationInput {
            rooms: vec![room("r1", 30)],
            groups: vec![group("g1", 20)],
            clusters: vec![DepartmentCluster::new("Eng", &["CSE"])],
        };
        assert!(validate_input(&input).is_ok());
    }

    #[test]
    fn test_empty_rosters() {
        let no_rooms = AllocationInput {
            rooms: vec![],
            groups: vec![group("g1", 20)],
            clusters: vec![],
        };
        assert_eq!(
            validate_input(&no_rooms),
            Err(AllocationError::NothingToAllocate { rooms: 0, groups: 1 })
        );

        let no_groups = AllocationInput {
            rooms: vec![room("r1", 30)],
            groups: vec![],
            clusters: vec![],
        };
        assert_eq!(
            validate_input(&no_groups),
            Err(AllocationError::NothingToAllocate { rooms: 1, groups: 0 })
        );
    }

    #[test]
    fn test_collects_all_problems() {
        let mut blank = group("g2", 0);
        blank.section = " ".into();
        let input = AllocationInput {
            rooms: vec![room("r1", 0), room("r1", 10)],
            groups: vec![group("g1", 5), blank],
            clusters: vec![DepartmentCluster::from_csv("Empty", " , ")],
        };
        let Err(AllocationError::InvalidInput(problems)) = validate_input(&input) else {
            panic!("expected invalid input");
        };
        assert_eq!(problems.len(), 5);
        assert!(problems.contains(&"Duplicate lab ID: r1".to_string()));
        assert!(problems.contains(&"Lab r1 must have a positive capacity".to_string()));
        assert!(problems.contains(&"Student group g2 has no section".to_string()));
        assert!(problems.contains(&"Department group 'Empty' lists no departments".to_string()));
    }

    #[test]
    fn test_blank_cluster_token_rejected() {
        let input = AllocationInput {
            rooms: vec![room("r1", 100)],
            groups: vec![group("g1", 30)],
            clusters: vec![DepartmentCluster {
                id: None,
                name: "Computing".into(),
                departments: vec!["CSE".into(), "".into()],
            }],
        };
        assert_eq!(
            validate_input(&input),
            Err(AllocationError::InvalidInput(vec![
                "Department group 'Computing' has a blank department".to_string()
            ]))
        );
    }
}

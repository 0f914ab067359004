//! Packs one (year, cluster) bucket into labs for a single session.

use crate::data::{AllocatedGroup, AllocationRecord, Group, Room, Year};
use crate::grouping::ClusterBucket;
use log::{debug, trace};
use std::collections::HashSet;

/// Records opened for the bucket and the groups they took.
#[derive(Debug, Default)]
pub struct PackOutcome<'g> {
    pub records: Vec<AllocationRecord>,
    pub placed: Vec<&'g Group>,
}

/// The lab currently being filled for a bucket.
struct OpenRoom {
    record: usize,
    remaining: u32,
}

/// Packs `bucket` into labs not yet opened this session.
///
/// `rooms` must be sorted by descending capacity. Every lab opened here is
/// added to `opened` and will not be offered to another bucket until the
/// next session. Groups that fit nowhere are left out of `placed`.
pub fn pack_bucket<'g, 'r>(
    year: Year,
    bucket: &ClusterBucket<'g>,
    rooms: &[&'r Room],
    opened: &mut HashSet<&'r str>,
) -> PackOutcome<'g> {
    let mut outcome = PackOutcome::default();

    let mut candidates: Vec<&'r Room> = rooms
        .iter()
        .copied()
        .filter(|room| !opened.contains(room.id.as_str()))
        .collect();
    if candidates.is_empty() {
        debug!(
            "No free labs left this session for {} / {}; deferring {} groups",
            year,
            bucket.cluster,
            bucket.groups.len()
        );
        return outcome;
    }

    let mut current: Option<OpenRoom> = None;

    for &group in &bucket.groups {
        let needs_room = current
            .as_ref()
            .is_none_or(|open| open.remaining < group.headcount);

        if needs_room {
            // largest free lab that can seat the whole group
            let Some(pos) = candidates
                .iter()
                .position(|room| room.capacity >= group.headcount)
            else {
                trace!(
                    "Group {} ({} students) fits no free lab this session",
                    group.id, group.headcount
                );
                continue;
            };
            let room = candidates.remove(pos);
            opened.insert(room.id.as_str());
            outcome.records.push(AllocationRecord {
                room_id: room.id.clone(),
                room_name: room.name.clone(),
                room_capacity: room.capacity,
                year,
                cluster: bucket.cluster.to_string(),
                groups: Vec::new(),
            });
            trace!("Opened {} for {} / {}", room.name, year, bucket.cluster);
            current = Some(OpenRoom {
                record: outcome.records.len() - 1,
                remaining: room.capacity,
            });
        }

        if let Some(open) = current.as_mut() {
            if open.remaining >= group.headcount {
                outcome.records[open.record]
                    .groups
                    .push(AllocatedGroup::from(group));
                open.remaining -= group.headcount;
                outcome.placed.push(group);
            }
        }
    }

    outcome
}

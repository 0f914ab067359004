use crate::cluster::ClusterResolver;
use crate::data::{
    AllocationInput, AllocationOutput, AllocationStatus, Group, GroupAssignment, Room,
    Session, SessionNumber,
};
use crate::error::AllocationResult;
use crate::grouping::group_pool;
use crate::packer::pack_bucket;
use crate::validation::validate_input;
use itertools::Itertools;
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Why the session loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    AllPlaced,
    Stalled,
}

/// Allocates every student group to a lab across as many sessions as needed.
///
/// Runs a greedy pass per session: groups are bucketed by year and
/// department cluster, each bucket is packed into the largest free labs,
/// and a lab serves a single bucket per session. The loop ends once every
/// group is placed or a session places nothing. Caller data is never
/// mutated; repeated runs on the same input give identical output.
pub fn allocate(input: &AllocationInput) -> AllocationResult<AllocationOutput> {
    validate_input(input)?;
    let start_time = Instant::now();

    info!(
        "Allocating {} student groups ({} students) to {} labs with {} department groups...",
        input.groups.len(),
        input.groups.iter().map(|g| g.headcount as u64).sum::<u64>(),
        input.rooms.len(),
        input.clusters.len()
    );

    // stable sorts: ties keep roster order
    let rooms: Vec<&Room> = input
        .rooms
        .iter()
        .sorted_by(|a, b| b.capacity.cmp(&a.capacity))
        .collect();
    let mut pool: Vec<&Group> = input
        .groups
        .iter()
        .sorted_by(|a, b| b.headcount.cmp(&a.headcount))
        .collect();

    let resolver = ClusterResolver::new(&input.clusters);
    let mut sessions: Vec<Session> = Vec::new();
    let mut placed_in: HashMap<&str, SessionNumber> = HashMap::new();

    let stop = loop {
        if pool.is_empty() {
            break Stop::AllPlaced;
        }
        let session_number = sessions.len() as SessionNumber + 1;
        let mut allocations = Vec::new();
        let mut opened: HashSet<&str> = HashSet::new();
        let mut placed_now: HashSet<&str> = HashSet::new();

        for year_bucket in group_pool(&pool, &resolver) {
            for bucket in &year_bucket.clusters {
                let outcome = pack_bucket(year_bucket.year, bucket, &rooms, &mut opened);
                debug!(
                    "Session {}: {} / {} placed {} of {} groups in {} labs",
                    session_number,
                    year_bucket.year,
                    bucket.cluster,
                    outcome.placed.len(),
                    bucket.groups.len(),
                    outcome.records.len()
                );
                for group in outcome.placed {
                    placed_now.insert(group.id.as_str());
                    placed_in.insert(group.id.as_str(), session_number);
                }
                allocations.extend(outcome.records);
            }
        }

        if !allocations.is_empty() {
            info!(
                "Session {}: {} groups placed across {} labs",
                session_number,
                placed_now.len(),
                allocations.len()
            );
            sessions.push(Session {
                number: session_number,
                allocations,
            });
        }

        pool.retain(|g| !placed_now.contains(g.id.as_str()));
        if placed_now.is_empty() {
            break Stop::Stalled;
        }
    };

    // report leftovers in roster order
    let unallocated: Vec<Group> = input
        .groups
        .iter()
        .filter(|g| !placed_in.contains_key(g.id.as_str()))
        .cloned()
        .collect();
    let assignments = input
        .groups
        .iter()
        .map(|g| GroupAssignment {
            group_id: g.id.clone(),
            session: placed_in.get(g.id.as_str()).copied(),
        })
        .collect();

    let status = match stop {
        Stop::AllPlaced => AllocationStatus::Complete,
        Stop::Stalled => AllocationStatus::Partial {
            unallocated_count: unallocated.len(),
        },
    };

    let duration = start_time.elapsed();
    match status {
        AllocationStatus::Complete => info!(
            "{} in {} sessions ({:.2?})",
            status,
            sessions.len(),
            duration
        ),
        AllocationStatus::Partial { .. } => warn!(
            "{}: {} ({:.2?})",
            status,
            unallocated.iter().map(|g| g.id.as_str()).join(", "),
            duration
        ),
    }

    Ok(AllocationOutput {
        status,
        sessions,
        unallocated,
        assignments,
    })
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("Nothing to allocate: {rooms} labs and {groups} student groups supplied, need at least one of each")]
    NothingToAllocate { rooms: usize, groups: usize },

    #[error("Invalid input: {}", .0.join("; "))]
    InvalidInput(Vec<String>),
}

pub type AllocationResult<T> = Result<T, AllocationError>;

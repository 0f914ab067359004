pub mod cluster;
pub mod config;
pub mod data;
pub mod error;
pub mod grouping;
pub mod packer;
pub mod server;
pub mod solver;
pub mod summary;
pub mod validation;

pub use data::{
    AllocationInput, AllocationOutput, AllocationRecord, AllocationStatus, DepartmentCluster, Group,
    Room, Session, Year,
};
pub use error::{AllocationError, AllocationResult};
pub use solver::allocate;

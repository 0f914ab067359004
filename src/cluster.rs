//! Maps a group's raw department text onto a configured cluster name.

use crate::data::DepartmentCluster;

/// Resolves department designators against clusters in configured order.
///
/// A cluster matches when any of its tokens occurs as a substring of the
/// designator, so `"CS"` matches `"CSE, IT"`. Unmatched designators form
/// their own cluster keyed by the literal text.
#[derive(Debug, Clone, Copy)]
pub struct ClusterResolver<'c> {
    clusters: &'c [DepartmentCluster],
}

impl<'c> ClusterResolver<'c> {
    pub fn new(clusters: &'c [DepartmentCluster]) -> Self {
        Self { clusters }
    }

    pub fn resolve<'a>(&self, designator: &'a str) -> &'a str
    where
        'c: 'a,
    {
        self.clusters
            .iter()
            .find(|cluster| {
                cluster
                    .departments
                    .iter()
                    .any(|token| designator.contains(token.as_str()))
            })
            .map(|cluster| cluster.name.as_str())
            .unwrap_or(designator)
    }
}

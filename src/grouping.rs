//! Year -> cluster partition of the groups still waiting for a lab.

use crate::cluster::ClusterResolver;
use crate::data::{Group, Year};
use std::collections::HashMap;
use std::hash::Hash;

/// Groups of one year sharing a resolved cluster, in pool order.
#[derive(Debug, Clone)]
pub struct ClusterBucket<'g> {
    pub cluster: &'g str,
    pub groups: Vec<&'g Group>,
}

#[derive(Debug, Clone)]
pub struct YearBucket<'g> {
    pub year: Year,
    pub clusters: Vec<ClusterBucket<'g>>,
}

/// Splits `items` by `key`, keeping keys in first-seen order and items in
/// their original relative order.
pub fn ordered_partition<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut buckets: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(&item);
        match index.get(&k) {
            Some(&i) => buckets[i].1.push(item),
            None => {
                index.insert(k.clone(), buckets.len());
                buckets.push((k, vec![item]));
            }
        }
    }
    buckets
}

/// Partitions the pool first by year, then by resolved cluster.
///
/// The pool is expected to already be in descending headcount order; that
/// order survives into every bucket.
pub fn group_pool<'g>(pool: &[&'g Group], resolver: &ClusterResolver<'g>) -> Vec<YearBucket<'g>> {
    ordered_partition(pool.iter().copied(), |g| g.year)
        .into_iter()
        .map(|(year, groups)| YearBucket {
            year,
            clusters: ordered_partition(groups, |g| {
                let group: &'g Group = *g;
                resolver.resolve(group.departments.as_str())
            })
                .into_iter()
                .map(|(cluster, groups)| ClusterBucket { cluster, groups })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DepartmentCluster;

    fn group(id: &str, year: Year, departments: &str, headcount: u32) -> Group {
        Group {
            id: id.into(),
            year,
            departments: departments.into(),
            section: "A".into(),
            headcount,
        }
    }

    #[test]
    fn test_ordered_partition_keeps_first_seen_order() {
        let parts = ordered_partition(vec![3, 1, 4, 1, 5, 9, 2, 6], |n| n % 3);
        assert_eq!(
            parts,
            vec![(0, vec![3, 9, 6]), (1, vec![1, 4, 1]), (2, vec![5, 2])]
        );
    }

    #[test]
    fn test_year_then_cluster() {
        let clusters = vec![DepartmentCluster::new("Computing", &["CSE", "IT"])];
        let resolver = ClusterResolver::new(&clusters);
        let groups = vec![
            group("a", Year::Second, "CSE", 60),
            group("b", Year::First, "MECH", 55),
            group("c", Year::Second, "ECE", 50),
            group("d", Year::First, "IT", 40),
            group("e", Year::Second, "IT", 30),
        ];
        let pool: Vec<&Group> = groups.iter().collect();

        let buckets = group_pool(&pool, &resolver);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].year, Year::Second);
        assert_eq!(buckets[1].year, Year::First);

        let second: Vec<(&str, Vec<&str>)> = buckets[0]
            .clusters
            .iter()
            .map(|c| (c.cluster, c.groups.iter().map(|g| g.id.as_str()).collect()))
            .collect();
        assert_eq!(second, vec![("Computing", vec!["a", "e"]), ("ECE", vec!["c"])]);

        let first: Vec<&str> = buckets[1].clusters.iter().map(|c| c.cluster).collect();
        assert_eq!(first, vec!["MECH", "Computing"]);
    }
}

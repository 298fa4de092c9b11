use crate::model::{ClusterRecord, ClusterRegion, Location};

const CLUSTER_TYPE: &str = "cluster";

/// Select the clusters of one tumor type, in discovery order, numbering them
/// `cluster_0`, `cluster_1`, ... within that tumor type.
pub fn partition_clusters(all: &[ClusterRecord], tumor_type: &str) -> Vec<ClusterRegion> {
    all.iter()
        .filter(|cluster| cluster.tumor_type == tumor_type)
        .enumerate()
        .map(|(index, cluster)| ClusterRegion {
            name: String::new(),
            kind: CLUSTER_TYPE.to_string(),
            id: format!("cluster_{}", index),
            locations: vec![Location {
                start: cluster.start,
                end: cluster.end,
            }],
            mutation_stats: cluster.mutation_stats.clone(),
            stats: cluster.stats.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_restart_per_tumor_type() {
        let mut hot = ClusterRecord::new("BRCA", 850, 870);
        hot.stats = json!({"p_value": 0.001});
        let clusters = vec![
            ClusterRecord::new("BRCA", 10, 20),
            ClusterRecord::new("BLCA", 30, 40),
            hot,
        ];

        let brca = partition_clusters(&clusters, "BRCA");
        let blca = partition_clusters(&clusters, "BLCA");

        assert_eq!(brca.len(), 2);
        assert_eq!(brca[0].id, "cluster_0");
        assert_eq!(brca[1].id, "cluster_1");
        assert_eq!(brca[1].locations, vec![Location { start: 850, end: 870 }]);
        assert_eq!(brca[1].stats, json!({"p_value": 0.001}));
        assert_eq!(blca[0].id, "cluster_0");
        assert_eq!(blca[0].kind, "cluster");
    }

    #[test]
    fn unknown_tumor_type_has_no_clusters() {
        let clusters = vec![ClusterRecord::new("BRCA", 1, 2)];
        assert!(partition_clusters(&clusters, "LUAD").is_empty());
    }
}

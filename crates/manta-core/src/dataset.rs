use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One CSV row: a position in shape space, a cluster id and the unit whose
/// image marks the point. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
    /// Kept as the raw CSV string; ordering parses it numerically where
    /// possible (see [`cluster_order`]).
    #[serde(rename = "unitCluster")]
    pub cluster: String,
    #[serde(rename = "unitName")]
    pub unit_name: String,
}

/// A loaded dataset, stably sorted ascending by numeric cluster id so that
/// legend-color ordering matches rendering order. Ties keep CSV order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    pub fn from_points(mut points: Vec<DataPoint>) -> Self {
        // `sort_by` is stable: rows within one cluster keep their CSV order.
        points.sort_by(|a, b| cluster_order(&a.cluster, &b.cluster));
        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct cluster ids in ascending numeric order (the points are
    /// already sorted, so first-seen order is ascending).
    pub fn distinct_clusters(&self) -> Vec<String> {
        let mut seen: IndexSet<String> = IndexSet::new();
        for p in &self.points {
            seen.insert(p.cluster.clone());
        }
        seen.into_iter().collect()
    }
}

/// Ascending numeric order for cluster ids; non-numeric ids sort after
/// numeric ones, among themselves by string.
pub fn cluster_order(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

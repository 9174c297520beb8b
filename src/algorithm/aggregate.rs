//! Grouped weighted aggregation
//!
//! Survey records represent unequal numbers of real-world households, so
//! per-group statistics are weighted means: sum of value times weight
//! divided by sum of weight, never renormalized beyond that division.

use std::collections::BTreeMap;

/// Accumulator for one group's weighted mean
#[derive(Debug, Default, Clone, Copy)]
struct WeightedAccum {
    weighted_sum: f64,
    weight_sum: f64,
}

/// Compute per-group weighted means over a record stream
///
/// Records whose value selector returns `None` are excluded before
/// accumulation. Groups whose qualifying records carry no positive weight
/// emit no entry. Keying the accumulators with a `BTreeMap` makes the
/// result independent of input order.
pub fn weighted_mean_by<'a, R, K, I, FK, FV, FW>(
    records: I,
    key_fn: FK,
    value_fn: FV,
    weight_fn: FW,
) -> BTreeMap<K, f64>
where
    R: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a R>,
    FK: Fn(&R) -> K,
    FV: Fn(&R) -> Option<f64>,
    FW: Fn(&R) -> f64,
{
    let mut groups: BTreeMap<K, WeightedAccum> = BTreeMap::new();
    for record in records {
        let Some(value) = value_fn(record) else {
            continue;
        };
        let weight = weight_fn(record);
        let accum = groups.entry(key_fn(record)).or_default();
        accum.weighted_sum += weight * value;
        accum.weight_sum += weight;
    }

    groups
        .into_iter()
        .filter(|(_, accum)| accum.weight_sum > 0.0)
        .map(|(key, accum)| (key, accum.weighted_sum / accum.weight_sum))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Obs {
        group: i32,
        value: Option<f64>,
        weight: f64,
    }

    fn obs(group: i32, value: f64, weight: f64) -> Obs {
        Obs {
            group,
            value: Some(value),
            weight,
        }
    }

    #[test]
    fn test_weighted_mean_basic() {
        // [(value=1, weight=2), (value=0, weight=1)] -> 2/3
        let records = vec![obs(1, 1.0, 2.0), obs(1, 0.0, 1.0)];
        let means = weighted_mean_by(&records, |r| r.group, |r| r.value, |r| r.weight);
        let mean = means[&1];
        assert!((mean - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_result_independent_of_input_order() {
        let forward = vec![obs(1, 1.0, 2.0), obs(1, 0.0, 1.0), obs(2, 5.0, 3.0)];
        let reversed = vec![obs(2, 5.0, 3.0), obs(1, 0.0, 1.0), obs(1, 1.0, 2.0)];

        let a = weighted_mean_by(&forward, |r| r.group, |r| r.value, |r| r.weight);
        let b = weighted_mean_by(&reversed, |r| r.group, |r| r.value, |r| r.weight);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_values_excluded() {
        let records = vec![
            obs(1, 1.0, 2.0),
            Obs {
                group: 1,
                value: None,
                weight: 100.0,
            },
        ];
        let means = weighted_mean_by(&records, |r| r.group, |r| r.value, |r| r.weight);
        assert_eq!(means[&1], 1.0);
    }

    #[test]
    fn test_zero_weight_group_emits_no_entry() {
        let records = vec![obs(1, 1.0, 0.0), obs(2, 4.0, 2.0)];
        let means = weighted_mean_by(&records, |r| r.group, |r| r.value, |r| r.weight);
        assert!(!means.contains_key(&1));
        assert_eq!(means[&2], 4.0);
    }

    #[test]
    fn test_empty_input_emits_no_entries() {
        let records: Vec<Obs> = Vec::new();
        let means = weighted_mean_by(&records, |r| r.group, |r| r.value, |r| r.weight);
        assert!(means.is_empty());
    }
}

use crate::core::{DestinationRecord, RankedResult};

/// Order records by score, highest first, and number them 1..=N.
///
/// The sort is stable: equal scores keep their input order and receive
/// distinct consecutive ranks (sort-then-enumerate, not competition ranking).
pub fn rank(records: &[DestinationRecord], scores: &[f64]) -> Vec<RankedResult> {
    debug_assert_eq!(records.len(), scores.len());

    let mut order: Vec<usize> = (0..records.len().min(scores.len())).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]));

    order
        .into_iter()
        .enumerate()
        .map(|(position, index)| RankedResult {
            rank: position + 1,
            index,
            record: records[index].clone(),
            score: scores[index],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(names: &[&str]) -> Vec<DestinationRecord> {
        names
            .iter()
            .map(|name| DestinationRecord::new(*name, 10.0, 10.0, 3, 3.0).unwrap())
            .collect()
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(&records(&["a", "b", "c"]), &[0.2, 0.9, 0.5]);
        let names: Vec<_> = ranked.iter().map(|r| r.record.name()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
        assert_eq!(
            ranked.iter().map(|r| r.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(
            ranked.iter().map(|r| r.index).collect::<Vec<_>>(),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn test_ties_keep_input_order_with_distinct_ranks() {
        let ranked = rank(&records(&["first", "top", "second"]), &[0.5, 0.8, 0.5]);
        assert_eq!(ranked[1].record.name(), "first");
        assert_eq!(ranked[1].rank, 2);
        assert_eq!(ranked[2].record.name(), "second");
        assert_eq!(ranked[2].rank, 3);
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(&[], &[]).is_empty());
    }
}

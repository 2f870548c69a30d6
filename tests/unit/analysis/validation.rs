//! Tests for partition verification and connectivity checks

#[cfg(test)]
mod tests {
    use ndarray::array;
    use regionfill::RegionError;
    use regionfill::algorithm::partition::{Partition, partition_with_seed};
    use regionfill::analysis::validation::{is_edge_connected, verify_partition};
    use regionfill::spatial::Coordinate;

    fn cells(pairs: &[(usize, usize)]) -> Vec<Coordinate> {
        pairs.iter().copied().map(Coordinate::from).collect()
    }

    fn reason_of(result: regionfill::Result<()>) -> String {
        match result {
            Err(RegionError::InvalidPartition { reason }) => reason,
            other => panic!("expected InvalidPartition, got {other:?}"),
        }
    }

    // Tests generated partitions always verify
    // Verified by dropping the final expansion claim in fill
    #[test]
    fn test_generated_partitions_verify() {
        for seed in 0..25 {
            let partition = partition_with_seed(5, 9, seed).unwrap();
            assert!(verify_partition(&partition).is_ok(), "seed {seed} failed");
        }
    }

    // Tests an L-shape is connected while a diagonal pair is not
    // Verified by counting diagonal steps as neighbours
    #[test]
    fn test_is_edge_connected() {
        assert!(is_edge_connected(&cells(&[(0, 0), (1, 0), (1, 1)]), 3));
        assert!(!is_edge_connected(&cells(&[(0, 0), (1, 1)]), 3));
        assert!(is_edge_connected(&cells(&[(2, 2)]), 3));
        assert!(!is_edge_connected(&[], 3));
        assert!(!is_edge_connected(&cells(&[(0, 0), (0, 3)]), 3));
    }

    // Tests a region split in two is reported
    // Verified by skipping the connectivity check
    #[test]
    fn test_disconnected_region_rejected() {
        let labels = array![[0, 1], [1, 0]];
        let partition = Partition::from_parts_unchecked(
            labels,
            vec![cells(&[(0, 0), (1, 1)]), cells(&[(0, 1), (1, 0)])],
        );

        let reason = reason_of(verify_partition(&partition));
        assert!(reason.contains("not edge-connected"), "{reason}");
    }

    // Tests a cell missing from every region list is reported
    // Verified by skipping the coverage count
    #[test]
    fn test_missing_cell_rejected() {
        let labels = array![[0, 0], [1, 1]];
        let partition = Partition::from_parts_unchecked(
            labels,
            vec![cells(&[(0, 0), (0, 1)]), cells(&[(1, 0)])],
        );

        let reason = reason_of(verify_partition(&partition));
        assert!(reason.contains("not listed"), "{reason}");
    }

    // Tests disagreement between the label grid and region lists is reported
    // Verified by skipping the label lookup per listed cell
    #[test]
    fn test_mismatched_views_rejected() {
        let labels = array![[0, 0], [1, 1]];
        let partition = Partition::from_parts_unchecked(
            labels,
            vec![cells(&[(0, 0), (0, 1), (1, 0)]), cells(&[(1, 1)])],
        );

        let reason = reason_of(verify_partition(&partition));
        assert!(reason.contains("labelled"), "{reason}");
    }

    // Tests labels beyond the region count are reported
    #[test]
    fn test_out_of_range_label_rejected() {
        let labels = array![[0, 2], [0, 0]];
        let partition = Partition::from_parts_unchecked(
            labels,
            vec![cells(&[(0, 0), (1, 0), (1, 1)]), cells(&[(0, 1)])],
        );

        let reason = reason_of(verify_partition(&partition));
        assert!(reason.contains("outside"), "{reason}");
    }

    // Tests empty regions are reported
    #[test]
    fn test_empty_region_rejected() {
        let labels = array![[0, 0], [0, 0]];
        let partition = Partition::from_parts_unchecked(
            labels,
            vec![cells(&[(0, 0), (0, 1), (1, 0), (1, 1)]), Vec::new()],
        );

        let reason = reason_of(verify_partition(&partition));
        assert!(reason.contains("empty"), "{reason}");
    }

    // Tests a cell listed in two regions is reported
    #[test]
    fn test_duplicate_cell_rejected() {
        let labels = array![[0]];
        let partition = Partition::from_parts_unchecked(
            labels,
            vec![cells(&[(0, 0), (0, 0)])],
        );

        let reason = reason_of(verify_partition(&partition));
        assert!(reason.contains("twice"), "{reason}");
    }
}

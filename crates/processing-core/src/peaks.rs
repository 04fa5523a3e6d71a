//! Multi-target peak extraction with non-maximum suppression.
//!
//! Ranks every cell by score and greedily keeps the strongest ones that do
//! not touch an already-kept target.

use serde::{Deserialize, Serialize};
use thermeye_frame_model::{Frame, GridPos, Target, TargetList, DEFAULT_MAX_TARGETS};

/// Configuration for the peak extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakConfig {
    /// Maximum number of targets returned per frame.
    pub max_targets: usize,

    /// Candidates within this Chebyshev distance of an accepted target are
    /// suppressed. 1 rejects all eight neighbours.
    pub exclusion_radius: usize,
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            max_targets: DEFAULT_MAX_TARGETS,
            exclusion_radius: 1,
        }
    }
}

/// A scored cell awaiting suppression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    score: i64,
    position: GridPos,
}

impl Candidate {
    /// Composite ordering key; larger keys rank first.
    fn sort_key(&self) -> (i64, usize, usize) {
        (self.score, self.position.column, self.position.row)
    }
}

/// Non-maximum-suppression target extractor.
#[derive(Debug, Clone, Default)]
pub struct PeakExtractor {
    config: PeakConfig,
}

impl PeakExtractor {
    pub fn new(config: PeakConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(PeakConfig::default())
    }

    pub fn config(&self) -> &PeakConfig {
        &self.config
    }

    /// Extract up to `max_targets` mutually non-adjacent targets, strongest first.
    ///
    /// `previous_targets` is the prior frame's result. It is accepted for
    /// temporal continuity but does not influence selection yet.
    pub fn extract(&self, frame: &Frame, previous_targets: &[Target], debug: bool) -> TargetList {
        let mut candidates: Vec<Candidate> = frame
            .iter_cells()
            .map(|(position, value)| Candidate {
                score: Target::score(value),
                position,
            })
            .collect();
        candidates.sort_unstable_by(|a, b| b.sort_key().cmp(&a.sort_key()));

        if debug {
            tracing::info!(
                target: "thermeye::peaks",
                candidates = candidates.len(),
                previous = previous_targets.len(),
                max_targets = self.config.max_targets,
                "ranking candidates"
            );
        }

        let mut targets = TargetList::with_capacity(self.config.max_targets);
        for candidate in candidates {
            if targets.len() >= self.config.max_targets {
                break;
            }

            let blocker = targets.iter().find(|t: &&Target| {
                t.position.chebyshev_distance(&candidate.position) <= self.config.exclusion_radius
            });

            match blocker {
                Some(blocker) => {
                    if debug {
                        tracing::info!(
                            target: "thermeye::peaks",
                            column = candidate.position.column,
                            row = candidate.position.row,
                            score = candidate.score,
                            blocked_by_column = blocker.position.column,
                            blocked_by_row = blocker.position.row,
                            "suppressed"
                        );
                    }
                }
                None => {
                    if debug {
                        tracing::info!(
                            target: "thermeye::peaks",
                            column = candidate.position.column,
                            row = candidate.position.row,
                            score = candidate.score,
                            "accepted"
                        );
                    }
                    targets.push(Target::new(candidate.position, candidate.score));
                }
            }
        }

        targets
    }
}

/// Extract targets with the default configuration.
pub fn extract_targets(frame: &Frame, previous_targets: &[Target], debug: bool) -> TargetList {
    PeakExtractor::with_defaults().extract(frame, previous_targets, debug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thermeye_frame_model::targets_separated;

    fn frame_with(hot: &[((usize, usize), f64)]) -> Frame {
        let cells: Vec<(GridPos, f64)> = hot
            .iter()
            .map(|&((column, row), value)| (GridPos::new(column, row), value))
            .collect();
        Frame::with_cells(0.0, &cells).unwrap()
    }

    fn positions(targets: &[Target]) -> Vec<(usize, usize)> {
        targets
            .iter()
            .map(|t| (t.position.column, t.position.row))
            .collect()
    }

    #[test]
    fn test_three_separated_equal_peaks() {
        let frame = frame_with(&[((0, 0), 90.0), ((4, 4), 90.0), ((7, 7), 90.0)]);
        let targets = extract_targets(&frame, &[], false);

        assert_eq!(targets.len(), 3);
        assert!(targets.iter().all(|t| t.value == 90_000));
        // Ties rank by column, then row, largest first.
        assert_eq!(positions(&targets), vec![(7, 7), (4, 4), (0, 0)]);
        assert!(targets_separated(&targets, 1));
    }

    #[test]
    fn test_adjacent_weaker_peak_is_suppressed() {
        let frame = frame_with(&[((0, 0), 90.0), ((1, 1), 80.0)]);
        let targets = extract_targets(&frame, &[], false);

        assert_eq!(targets[0].position, GridPos::new(0, 0));
        assert_eq!(targets[0].value, 90_000);
        assert!(targets.iter().all(|t| t.position != GridPos::new(1, 1)));
        // Only cold cells remain to fill the list.
        assert!(targets[1..].iter().all(|t| t.value == 0));
    }

    #[test]
    fn test_ranked_by_descending_score() {
        let frame = frame_with(&[((1, 6), 40.0), ((6, 1), 60.0), ((3, 3), 50.0)]);
        let targets = extract_targets(&frame, &[], false);

        assert_eq!(positions(&targets), vec![(6, 1), (3, 3), (1, 6)]);
        assert_eq!(
            targets.iter().map(|t| t.value).collect::<Vec<_>>(),
            vec![60_000, 50_000, 40_000]
        );
        assert!(targets.iter().all(|t| t.velocity.is_none()));
    }

    #[test]
    fn test_zero_frame_orders_by_tie_break() {
        let targets = extract_targets(&Frame::ZERO, &[], false);
        // (7,7) first; (7,6) touches it; (7,5) is two rows away.
        assert_eq!(positions(&targets), vec![(7, 7), (7, 5), (7, 3)]);
        assert!(targets.iter().all(|t| t.value == 0));
    }

    #[test]
    fn test_scores_truncate_readings() {
        let frame = frame_with(&[((2, 2), 36.6789)]);
        let targets = extract_targets(&frame, &[], false);
        assert_eq!(targets[0].value, 36_678);
    }

    #[test]
    fn test_negative_scores_rank_below_zero() {
        let frame = Frame::with_cells(-1.0, &[(GridPos::new(0, 0), -0.5)]).unwrap();
        let targets = extract_targets(&frame, &[], false);
        assert_eq!(targets[0].position, GridPos::new(0, 0));
        assert_eq!(targets[0].value, -500);
        assert_eq!(targets[1].value, -1000);
    }

    #[test]
    fn test_max_targets_is_configurable() {
        let frame = frame_with(&[((0, 0), 90.0), ((4, 4), 80.0), ((7, 7), 70.0)]);

        let one = PeakExtractor::new(PeakConfig {
            max_targets: 1,
            ..Default::default()
        });
        assert_eq!(positions(&one.extract(&frame, &[], false)), vec![(0, 0)]);

        let none = PeakExtractor::new(PeakConfig {
            max_targets: 0,
            ..Default::default()
        });
        assert!(none.extract(&frame, &[], false).is_empty());
    }

    #[test]
    fn test_wider_exclusion_radius() {
        let frame = frame_with(&[((0, 0), 90.0), ((2, 2), 80.0), ((5, 5), 70.0)]);
        let extractor = PeakExtractor::new(PeakConfig {
            max_targets: 2,
            exclusion_radius: 2,
        });
        let targets = extractor.extract(&frame, &[], false);
        assert_eq!(positions(&targets), vec![(0, 0), (5, 5)]);
        assert!(targets_separated(&targets, 2));
    }

    #[test]
    fn test_fewer_targets_when_grid_exhausted() {
        // Radius 7 covers the whole grid from any cell.
        let extractor = PeakExtractor::new(PeakConfig {
            max_targets: 3,
            exclusion_radius: 7,
        });
        let targets = extractor.extract(&frame_with(&[((3, 4), 10.0)]), &[], false);
        assert_eq!(positions(&targets), vec![(3, 4)]);
    }

    #[test]
    fn test_previous_targets_do_not_change_selection() {
        let frame = frame_with(&[((2, 3), 55.0), ((6, 6), 45.0)]);
        let fresh = extract_targets(&frame, &[], false);
        let previous = vec![Target::new(GridPos::new(2, 3), 1), Target::new(GridPos::new(0, 7), 2)];
        assert_eq!(extract_targets(&frame, &previous, true), fresh);
    }
}

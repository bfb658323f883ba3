//! Recursive fractal tree generator.

use fractree_core::{Branch, MAX_SUPPORTED_DEPTH, Point, Seed, TreeParams};

/// Grow a full tree from `seed`.
pub fn grow(seed: Seed, params: &TreeParams) -> Vec<Branch> {
    grow_from(seed.origin, seed.angle, seed.length, seed.width, 0, params)
}

/// Grow the subtree rooted at `start` at the given `depth`.
///
/// `params` should have passed [`TreeParams::validate`]; the up-front
/// allocation is capped at a tree of [`MAX_SUPPORTED_DEPTH`] levels.
///
/// Branches come out in pre-order: each parent precedes its left subtree,
/// which precedes its right subtree. Depths past `params.max_depth` yield
/// nothing.
pub fn grow_from(
    start: Point,
    angle: f64,
    length: f64,
    width: f64,
    depth: u32,
    params: &TreeParams,
) -> Vec<Branch> {
    let capacity = params
        .max_depth
        .checked_sub(depth)
        .map_or(0, |remaining| {
            (1usize << (remaining.min(MAX_SUPPORTED_DEPTH) + 1)) - 1
        });
    let mut branches = Vec::with_capacity(capacity);
    extend(&mut branches, start, angle, length, width, depth, params);
    branches
}

fn extend(
    out: &mut Vec<Branch>,
    start: Point,
    angle: f64,
    length: f64,
    width: f64,
    depth: u32,
    params: &TreeParams,
) {
    if depth > params.max_depth {
        return;
    }

    let end = start.project(angle, length);
    out.push(Branch {
        start,
        end,
        width,
        depth,
    });

    let length = length * params.length_scale;
    let width = width * params.width_scale;
    for heading in [angle - params.angle_offset, angle + params.angle_offset] {
        extend(out, end, heading, length, width, depth + 1, params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample() -> Vec<Branch> {
        grow_from(
            Point::new(500.0, 800.0),
            -90.0,
            100.0,
            10.0,
            0,
            &TreeParams::default(),
        )
    }

    /// Walk the pre-order sequence, pairing each branch with its parent index.
    fn parents(branches: &[Branch]) -> Vec<Option<usize>> {
        let mut stack: Vec<usize> = Vec::new();
        branches
            .iter()
            .enumerate()
            .map(|(i, branch)| {
                while let Some(&top) = stack.last() {
                    if branches[top].depth < branch.depth {
                        break;
                    }
                    stack.pop();
                }
                let parent = stack.last().copied();
                stack.push(i);
                parent
            })
            .collect()
    }

    #[test]
    fn test_full_tree_has_8191_branches() {
        let branches = sample();
        assert_eq!(branches.len(), 8191);
        assert_eq!(branches.len(), TreeParams::default().branch_count());
    }

    #[test]
    fn test_trunk_points_straight_up() {
        let trunk = sample()[0];
        assert_eq!(trunk.start, Point::new(500.0, 800.0));
        assert!((trunk.end.x - 500.0).abs() < EPS);
        assert!((trunk.end.y - 700.0).abs() < EPS);
        assert_eq!(trunk.width, 10.0);
        assert_eq!(trunk.depth, 0);
    }

    #[test]
    fn test_children_start_at_parent_end() {
        let branches = sample();
        let parents = parents(&branches);
        assert_eq!(parents[0], None);
        for (i, parent) in parents.iter().enumerate().skip(1) {
            let parent = &branches[parent.expect("non-root branch has a parent")];
            let child = &branches[i];
            assert_eq!(child.depth, parent.depth + 1);
            assert!((child.start.x - parent.end.x).abs() < EPS);
            assert!((child.start.y - parent.end.y).abs() < EPS);
        }
    }

    #[test]
    fn test_width_and_length_scale_with_depth() {
        for branch in sample() {
            let d = branch.depth as i32;
            let width = 10.0 * 0.7f64.powi(d);
            let length = 100.0 * 0.8f64.powi(d);
            assert!((branch.width - width).abs() < EPS, "width at depth {d}");
            assert!((branch.length() - length).abs() < 1e-6, "length at depth {d}");
        }
    }

    #[test]
    fn test_depths_are_bounded_and_preorder() {
        let branches = sample();
        assert!(branches.iter().all(|b| b.depth <= 12));
        // Pre-order: a depth may only grow by one step at a time.
        for pair in branches.windows(2) {
            assert!(pair[1].depth <= pair[0].depth + 1);
        }
        // Leftmost path descends first, one level per branch.
        for (i, branch) in branches.iter().take(13).enumerate() {
            assert_eq!(branch.depth, i as u32);
        }
        assert_eq!(branches.iter().filter(|b| b.depth == 12).count(), 4096);
    }

    #[test]
    fn test_left_child_turns_counterclockwise_first() {
        let branches = sample();
        let left = branches[1];
        // Heading -115 degrees leans left of straight up.
        assert!(left.end.x < left.start.x);
        let right = branches.iter().skip(2).find(|b| b.depth == 1).copied();
        let right = right.expect("right child exists");
        assert!(right.end.x > right.start.x);
        assert_eq!(right.start, left.start);
    }

    #[test]
    fn test_generation_is_deterministic() {
        assert_eq!(sample(), sample());
    }

    #[test]
    fn test_depth_past_max_yields_nothing() {
        let params = TreeParams::default();
        let branches = grow_from(Point::default(), 0.0, 10.0, 1.0, 13, &params);
        assert!(branches.is_empty());

        let leaves = grow_from(Point::default(), 0.0, 10.0, 1.0, 12, &params);
        assert_eq!(leaves.len(), 1);
    }

    #[test]
    fn test_custom_params() {
        let params = TreeParams {
            max_depth: 3,
            ..Default::default()
        };
        let seed = Seed::for_surface(200.0, 100.0);
        let branches = grow(seed, &params);
        assert_eq!(branches.len(), 15);
        assert!((branches[0].length() - 20.0).abs() < EPS);
    }
}

// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! Bucket-level semantics of the spatial key: quantization, determinism,
//! and the three input-shape adapters.

use beacon_geom::Pose2;
use beacon_hash::{ArrayHasher, PoseHasher, SpatialHash, TupleHasher};

#[test]
fn values_in_the_same_cell_share_a_key() {
    let hasher: ArrayHasher<2> = ArrayHasher::new([1.0, 1.0]);
    // Both floor to cell (1, 2).
    assert_eq!(hasher.hash(&[1.0, 2.0]), hasher.hash(&[1.4, 2.9]));
    // Cell (2, 2) differs.
    assert_ne!(hasher.hash(&[1.0, 2.0]), hasher.hash(&[2.0, 2.0]));
}

#[test]
fn keys_are_deterministic_across_calls_and_instances() {
    let a: ArrayHasher<3> = ArrayHasher::new([0.1, 0.2, 0.3]);
    let b: ArrayHasher<3> = ArrayHasher::new([0.1, 0.2, 0.3]);
    let state = [4.2, -1.7, 0.05];
    let key = a.hash(&state);
    assert_eq!(a.hash(&state), key);
    assert_eq!(b.hash(&state), key);
}

#[test]
fn negative_values_floor_toward_negative_infinity() {
    let hasher: ArrayHasher<1> = ArrayHasher::new([1.0]);
    // -0.3 buckets to -1, not 0: floor semantics, not truncation.
    assert_eq!(hasher.hash(&[-0.3]), hasher.hash(&[-1.0]));
    assert_ne!(hasher.hash(&[-0.3]), hasher.hash(&[0.0]));
    assert_ne!(hasher.hash(&[-0.3]), hasher.hash(&[0.3]));
}

#[test]
fn pose_samples_cluster_by_cell() {
    let hasher: PoseHasher = PoseHasher::linear_angular(0.1, 0.1);
    // All three coordinates floor to cell (0, 0, 0).
    let a = Pose2::from_xy_theta(0.05, 0.05, 0.01);
    let b = Pose2::from_xy_theta(0.09, 0.02, 0.05);
    assert_eq!(hasher.hash(&a), hasher.hash(&b));
    // x buckets to 1.
    let c = Pose2::from_xy_theta(0.15, 0.05, 0.01);
    assert_ne!(hasher.hash(&a), hasher.hash(&c));
}

#[test]
fn default_pose_hasher_uses_unit_resolutions() {
    let defaulted: PoseHasher = PoseHasher::default();
    let explicit: PoseHasher = PoseHasher::new(1.0, 1.0, 1.0);
    for pose in [
        Pose2::identity(),
        Pose2::from_xy_theta(0.25, 0.75, 0.5),
        Pose2::from_xy_theta(-3.5, 12.0, -1.2),
    ] {
        assert_eq!(defaulted.hash(&pose), explicit.hash(&pose));
    }
}

#[test]
fn tuple_elements_widen_before_quantization() {
    let hasher: TupleHasher<3> = TupleHasher::new([1.0, 1.0, 1.0]);
    // Mixed integer/float states land in the same cell as their f64 twins.
    let mixed = hasher.hash(&(1_i32, 2.5_f32, 3_u16));
    let floats = hasher.hash(&(1.9_f64, 2.75_f64, 3.0_f64));
    assert_eq!(mixed, floats);
}

#[test]
fn array_and_tuple_adapters_agree() {
    let resolution = [0.5, 0.25];
    let arrays: ArrayHasher<2> = ArrayHasher::new(resolution);
    let tuples: TupleHasher<2> = TupleHasher::new(resolution);
    assert_eq!(arrays.hash(&[3.1_f64, -0.2]), tuples.hash(&(3.1_f64, -0.2_f64)));
}

#[test]
fn u32_words_uphold_the_same_bucket_semantics() {
    let hasher: ArrayHasher<2, u32> = ArrayHasher::new([1.0, 1.0]);
    assert_eq!(hasher.hash(&[1.0, 2.0]), hasher.hash(&[1.4, 2.9]));
    assert_ne!(hasher.hash(&[1.0, 2.0]), hasher.hash(&[2.0, 2.0]));

    let pose_hasher: PoseHasher<u32> = PoseHasher::linear_angular(0.1, 0.1);
    let a = Pose2::from_xy_theta(0.05, 0.05, 0.01);
    let b = Pose2::from_xy_theta(0.09, 0.02, 0.05);
    assert_eq!(pose_hasher.hash(&a), pose_hasher.hash(&b));
}

#[test]
fn resolution_scales_the_cell_size() {
    let coarse: ArrayHasher<1> = ArrayHasher::new([10.0]);
    let fine: ArrayHasher<1> = ArrayHasher::new([0.1]);
    // 3.0 and 7.0 share a 10 m cell but not a 10 cm cell.
    assert_eq!(coarse.hash(&[3.0]), coarse.hash(&[7.0]));
    assert_ne!(fine.hash(&[3.0]), fine.hash(&[7.0]));
}

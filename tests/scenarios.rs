#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use wireframe_bodies::analysis::{GroupingEvent, Link, MergePhase, Nuclei};
use wireframe_bodies::error::{GeometryError, SceneError};
use wireframe_bodies::math::Point2;
use wireframe_bodies::scene::kind_entries;
use wireframe_bodies::{
    GroupBodies, Grouping, Junction, RegionId, Scene, Thresholds, WireframeError,
};

const CUBE: &str = include_str!("fixtures/cube.json");

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn body_ids(grouping: &Grouping) -> Vec<Vec<u32>> {
    grouping
        .bodies
        .iter()
        .map(|b| b.regions().iter().map(|r| r.0).collect())
        .collect()
}

/// Bodies must cover every non-background region exactly once.
fn assert_partition(scene: &Scene, grouping: &Grouping) {
    let mut seen = BTreeSet::new();
    for body in &grouping.bodies {
        assert!(!body.is_empty());
        assert!(body.regions().windows(2).all(|w| w[0] < w[1]), "{body:?}");
        for &region in body.regions() {
            assert!(seen.insert(region), "region {region} in two bodies");
        }
    }
    assert_eq!(seen, scene.regions());
}

fn assert_no_self_links(grouping: &Grouping) {
    assert!(grouping.links.iter().all(|l| l.a() != l.b()));
}

/// An isometric cube: a fork in the middle, arrows and corners around it.
/// `faces` are the top, left and right faces.
fn add_cube(scene: &mut Scene, prefix: &str, dx: f64, faces: [u32; 3]) {
    let s3 = 3.0_f64.sqrt();
    let [top, left, right] = faces;
    let v = |name: &str| format!("{prefix}{name}");
    let [c, t, ul, ll, b, lr, ur] = ["C", "T", "UL", "LL", "B", "LR", "UR"].map(v);
    let vertices = [
        ("C", 0.0, 0.0, format!("{ur} {top} {ul} {left} {b} {right} {ur}")),
        ("T", 0.0, 2.0, format!("{ul} {top} {ur} 0 {ul}")),
        ("UL", -s3, 1.0, format!("{ll} {left} {c} {top} {t} 0 {ll}")),
        ("LL", -s3, -1.0, format!("{b} {left} {ul} 0 {b}")),
        ("B", 0.0, -2.0, format!("{lr} {right} {c} {left} {ll} 0 {lr}")),
        ("LR", s3, -1.0, format!("{ur} {right} {b} 0 {ur}")),
        ("UR", s3, 1.0, format!("{t} {top} {c} {right} {lr} 0 {t}")),
    ];
    for (name, x, y, kinds) in vertices {
        scene
            .add_vertex(v(name), Point2::new(x + dx, y), kind_entries(&kinds))
            .unwrap();
    }
}

/// A fork `name` at `(cx, 0)` whose three arms end in corner vertices. The
/// corners mention `corner_region` so it exists in the scene.
fn add_fork(scene: &mut Scene, name: &str, cx: f64, regions: [u32; 3], corner_region: u32) {
    let arms: Vec<String> = (0..3).map(|i| format!("{name}{i}")).collect();
    let kinds = format!(
        "{} {} {} {} {} {} {}",
        arms[0], regions[0], arms[1], regions[1], arms[2], regions[2], arms[0]
    );
    scene
        .add_vertex(name, Point2::new(cx, 0.0), kind_entries(&kinds))
        .unwrap();
    for (i, deg) in [90.0_f64, 210.0, 330.0].into_iter().enumerate() {
        let (sin, cos) = deg.to_radians().sin_cos();
        let next = &arms[(i + 1) % 3];
        scene
            .add_vertex(
                arms[i].as_str(),
                Point2::new(cx + cos, sin),
                kind_entries(&format!("{name} {corner_region} {next} 0 {name}")),
            )
            .unwrap();
    }
}

#[test]
fn cube_fixture_is_one_body() {
    init_tracing();
    let scene = Scene::from_json_str(CUBE).unwrap();
    let grouping = GroupBodies::new(&scene).execute().unwrap();

    assert_eq!(grouping.links.len(), 6);
    assert_eq!(body_ids(&grouping), vec![vec![1, 2, 3]]);
    assert_partition(&scene, &grouping);
    assert_no_self_links(&grouping);
}

#[test]
fn cube_junctions_are_classified() {
    init_tracing();
    let scene = Scene::from_json_str(CUBE).unwrap();
    let grouping = GroupBodies::new(&scene).execute().unwrap();

    let junction_of = |name: &str| {
        grouping.events.iter().find_map(|e| match e {
            GroupingEvent::Classified { vertex, junction } if vertex == name => Some(*junction),
            _ => None,
        })
    };
    assert_eq!(junction_of("C"), Some(Junction::Fork));
    assert_eq!(junction_of("UL"), Some(Junction::Arrow));
    assert_eq!(junction_of("B"), Some(Junction::Arrow));
    assert_eq!(junction_of("UR"), Some(Junction::Arrow));
    assert_eq!(junction_of("T"), Some(Junction::L));
    assert_eq!(junction_of("LL"), Some(Junction::L));
}

#[test]
fn two_cubes_stay_apart() {
    init_tracing();
    let mut scene = Scene::new(RegionId(0));
    add_cube(&mut scene, "a", 0.0, [1, 2, 3]);
    add_cube(&mut scene, "b", 10.0, [4, 5, 6]);

    let grouping = GroupBodies::new(&scene).execute().unwrap();
    assert_eq!(body_ids(&grouping), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    assert_partition(&scene, &grouping);
}

#[test]
fn lone_fork_leaves_three_bodies() {
    init_tracing();
    let mut scene = Scene::new(RegionId(0));
    add_fork(&mut scene, "F", 0.0, [1, 2, 3], 0);

    let grouping = GroupBodies::new(&scene).execute().unwrap();
    assert_eq!(grouping.links.len(), 3);
    // Every region has two neighbours, so weak evidence decides nothing.
    assert_eq!(body_ids(&grouping), vec![vec![1], vec![2], vec![3]]);
    assert!(!grouping
        .events
        .iter()
        .any(|e| matches!(e, GroupingEvent::Merged { .. })));
}

#[test]
fn repeated_pair_merges_globally() {
    init_tracing();
    let mut scene = Scene::new(RegionId(0));
    add_fork(&mut scene, "F", 0.0, [1, 2, 0], 3);
    add_fork(&mut scene, "G", 10.0, [1, 2, 0], 3);

    let grouping = GroupBodies::new(&scene).execute().unwrap();
    let one_two = Link::new(RegionId(1), RegionId(2)).unwrap();
    assert_eq!(grouping.links, vec![one_two, one_two]);
    assert_eq!(body_ids(&grouping), vec![vec![1, 2], vec![3]]);
    assert!(grouping.events.contains(&GroupingEvent::Merged {
        phase: MergePhase::Global,
        a: RegionId(1),
        b: RegionId(2),
    }));
    assert_partition(&scene, &grouping);
}

#[test]
fn background_never_grouped() {
    init_tracing();
    let mut scene = Scene::new(RegionId(0));
    add_cube(&mut scene, "", 0.0, [1, 2, 3]);
    add_fork(&mut scene, "F", 10.0, [4, 0, 5], 0);

    let background_mentions = scene
        .vertices()
        .filter(|(_, v)| v.kind_list.regions().any(|r| r == RegionId(0)))
        .count();
    assert!(background_mentions > 3);

    let grouping = GroupBodies::new(&scene).execute().unwrap();
    assert!(grouping.links.iter().all(|l| !l.touches(RegionId(0))));
    assert!(grouping.bodies.iter().all(|b| !b.contains(RegionId(0))));
    assert_eq!(body_ids(&grouping), vec![vec![1, 2, 3], vec![4, 5]]);
}

#[test]
fn inconsistent_geometry_yields_no_bodies() {
    init_tracing();
    let mut scene = Scene::new(RegionId(0));
    add_cube(&mut scene, "", 0.0, [1, 2, 3]);
    // Three arms all pointing along +x.
    scene
        .add_vertex("X", Point2::new(20.0, 0.0), kind_entries("X0 4 X1 5 X2 6 X0"))
        .unwrap();
    for (i, x) in [21.0, 22.0, 23.0].into_iter().enumerate() {
        scene
            .add_vertex(format!("X{i}"), Point2::new(x, 0.0), kind_entries("X 4 X"))
            .unwrap();
    }

    let err = GroupBodies::new(&scene).execute().unwrap_err();
    match err {
        WireframeError::Geometry(GeometryError::Inconsistent { vertex, .. }) => {
            assert_eq!(vertex, "X");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn dangling_reference_yields_no_bodies() {
    init_tracing();
    let mut scene = Scene::new(RegionId(0));
    add_cube(&mut scene, "", 0.0, [1, 2, 3]);
    scene
        .add_vertex("Y", Point2::new(5.0, 5.0), kind_entries("T 1 nowhere 0 T"))
        .unwrap();

    let err = GroupBodies::new(&scene).execute().unwrap_err();
    let WireframeError::Scene(SceneError::MissingVertexReference { missing, .. }) = &err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(missing, "nowhere");
}

#[test]
fn regrouping_a_fixed_point_changes_nothing() {
    init_tracing();
    let mut scene = Scene::new(RegionId(0));
    add_cube(&mut scene, "a", 0.0, [1, 2, 3]);
    add_fork(&mut scene, "F", 10.0, [4, 5, 0], 6);
    add_fork(&mut scene, "G", 20.0, [7, 8, 9], 0);

    let grouping = GroupBodies::new(&scene).execute().unwrap();
    assert_partition(&scene, &grouping);

    let mut nuclei = Nuclei::new(scene.regions());
    let strong = Thresholds::default().strong_evidence;
    nuclei.merge_global(&grouping.links, strong);
    nuclei.merge_single_body(&grouping.links);
    let settled = nuclei.groups();

    assert!(nuclei.merge_global(&grouping.links, strong).is_empty());
    assert!(nuclei.merge_single_body(&grouping.links).is_empty());
    assert_eq!(nuclei.groups(), settled);

    let from_bodies: Vec<Vec<RegionId>> = grouping
        .bodies
        .iter()
        .map(|b| b.regions().to_vec())
        .collect();
    assert_eq!(settled, from_bodies);
}

#[test]
fn clockwise_drawing_groups_the_same() {
    init_tracing();
    // The cube fixture with every kind-list reversed.
    let mut scene = Scene::new(RegionId(0));
    let counter_clockwise = Scene::from_json_str(CUBE).unwrap();
    for (_, vertex) in counter_clockwise.vertices() {
        let mut entries = vertex.kind_list.entries().to_vec();
        entries.reverse();
        // Reversal keeps the list closed but moves each region next to the
        // other neighbour, which is exactly the clockwise reading.
        scene
            .add_vertex(vertex.name.clone(), vertex.point, entries)
            .unwrap();
    }

    let grouping = GroupBodies::new(&scene).execute().unwrap();
    assert_eq!(body_ids(&grouping), vec![vec![1, 2, 3]]);
}

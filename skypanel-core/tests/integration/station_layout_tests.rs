//! Ground-station layout integration tests
//!
//! Builds the pane layouts a drone ground station actually uses (a main
//! camera pane with an instrument sidebar, grids of feeds) and walks
//! them through the full lifecycle: splitting, attaching and moving
//! content, collapsing subdivisions, and tearing the layout down.

use skypanel_core::alignment::{Alignment, Margins};
use skypanel_core::freeform::{
    AnchorTarget, AttachError, ContentId, MergeError, PaneId, PaneRecord, PaneTree, SplitAxis,
};

/// The panes of the standard cockpit layout.
struct Cockpit {
    main: PaneId,
    sidebar: PaneId,
    telemetry: PaneId,
    map: PaneId,
    status: PaneId,
}

/// Builds the standard cockpit: a wide main pane on the left and a
/// sidebar on the right subdivided into three instrument rows.
fn cockpit_layout() -> (PaneTree, Cockpit) {
    let mut tree = PaneTree::new();
    let columns = tree
        .split(tree.root(), SplitAxis::Horizontal, &[0.7, 0.3])
        .expect("root starts as a leaf");
    let rows = tree
        .split_evenly(columns[1], SplitAxis::Vertical, 3)
        .expect("sidebar starts as a leaf");

    let cockpit = Cockpit {
        main: columns[0],
        sidebar: columns[1],
        telemetry: rows[0],
        map: rows[1],
        status: rows[2],
    };
    (tree, cockpit)
}

// ============================================================================
// Layout Construction Tests
// ============================================================================

#[test]
fn test_cockpit_layout_structure() {
    let (tree, cockpit) = cockpit_layout();

    // Root, two columns, three sidebar rows
    assert_eq!(tree.pane_count(), 6);
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.leaves().len(), 4);

    assert!(!tree.is_split(cockpit.main));
    assert!(tree.is_split(cockpit.sidebar));
    assert_eq!(tree.parent_of(cockpit.telemetry), Some(cockpit.sidebar));
    assert_eq!(
        tree.split_axis_of(cockpit.sidebar),
        Some(SplitAxis::Vertical)
    );

    let main_weight = tree.weight_of(cockpit.main).unwrap();
    let sidebar_weight = tree.weight_of(cockpit.sidebar).unwrap();
    assert!((main_weight - 0.7).abs() < 1e-12);
    assert!((sidebar_weight - 0.3).abs() < 1e-12);

    let record: &PaneRecord = tree.pane(cockpit.sidebar).expect("sidebar is live");
    assert_eq!(record.parent, Some(tree.root()));
    assert_eq!(
        record.children,
        vec![cockpit.telemetry, cockpit.map, cockpit.status]
    );
}

#[test]
fn test_cockpit_anchor_chains_describe_the_geometry() {
    let (tree, cockpit) = cockpit_layout();

    let columns = tree.anchor_chain(tree.root()).unwrap();
    assert_eq!(columns.len(), 2);
    assert_eq!(columns[0].pane, cockpit.main);
    assert_eq!(columns[0].anchors.leading, AnchorTarget::ParentStart);
    assert_eq!(columns[0].anchors.trailing, AnchorTarget::Sibling(1));
    assert_eq!(columns[1].anchors.trailing, AnchorTarget::ParentEnd);

    let rows = tree.anchor_chain(cockpit.sidebar).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|slot| slot.anchors.axis == SplitAxis::Vertical));
    let total: f64 = rows.iter().map(|slot| slot.weight).sum();
    assert!((total - 1.0).abs() < 1e-9);

    // Leaves have no chain of their own
    assert!(tree.anchor_chain(cockpit.main).is_none());
}

#[test]
fn test_quad_feed_grid_layout() {
    let mut tree = PaneTree::new();
    let columns = tree
        .split(tree.root(), SplitAxis::Horizontal, &[0.5, 0.5])
        .unwrap();
    for column in &columns {
        tree.split(*column, SplitAxis::Vertical, &[0.5, 0.5]).unwrap();
    }

    assert_eq!(tree.leaves().len(), 4);
    assert_eq!(tree.depth(), 2);
    for feed in tree.leaves() {
        let camera = ContentId::new();
        tree.attach_content(feed, camera, Alignment::Center, Margins::default())
            .unwrap();
        assert_eq!(tree.find_pane_for_content(camera), Some(feed));
    }
}

// ============================================================================
// Content Lifecycle Tests
// ============================================================================

#[test]
fn test_populating_the_cockpit() {
    let (mut tree, cockpit) = cockpit_layout();
    let camera = ContentId::new();
    let gauges = ContentId::new();
    let minimap = ContentId::new();
    let banner = ContentId::new();

    tree.attach_content(cockpit.main, camera, Alignment::Center, Margins::default())
        .unwrap();
    tree.attach_content(cockpit.telemetry, gauges, Alignment::LeftTop, Margins::uniform(4))
        .unwrap();
    tree.attach_content(cockpit.map, minimap, Alignment::Center, Margins::uniform(4))
        .unwrap();
    tree.attach_content(cockpit.status, banner, Alignment::Bottom, Margins::default())
        .unwrap();

    assert_eq!(tree.find_pane_for_content(camera), Some(cockpit.main));
    assert_eq!(tree.find_pane_for_content(gauges), Some(cockpit.telemetry));

    // The status banner stretches across the pane's width
    let placement = tree.placement_of(cockpit.status).unwrap();
    assert!(placement.fills_width());
    assert!(!placement.fills_height());

    // The sidebar itself is split and must refuse content
    let rejected = tree.attach_content(
        cockpit.sidebar,
        ContentId::new(),
        Alignment::Center,
        Margins::default(),
    );
    assert_eq!(rejected, Err(AttachError::PaneIsSplit(cockpit.sidebar)));
}

#[test]
fn test_moving_a_feed_between_panes() {
    let (mut tree, cockpit) = cockpit_layout();
    let camera = ContentId::new();
    tree.attach_content(cockpit.map, camera, Alignment::Center, Margins::default())
        .unwrap();

    // Promote the feed from the sidebar map slot to the main pane
    let detached = tree.detach_content(cockpit.map).unwrap();
    assert_eq!(detached, camera);
    tree.attach_content(cockpit.main, detached, Alignment::Center, Margins::default())
        .unwrap();

    assert_eq!(tree.find_pane_for_content(camera), Some(cockpit.main));
    assert_eq!(tree.content_of(cockpit.map), None);
}

#[test]
fn test_swapping_feeds_via_detach() {
    let (mut tree, cockpit) = cockpit_layout();
    let front_camera = ContentId::new();
    let rear_camera = ContentId::new();
    tree.attach_content(cockpit.main, front_camera, Alignment::Center, Margins::default())
        .unwrap();
    tree.attach_content(cockpit.map, rear_camera, Alignment::Center, Margins::default())
        .unwrap();

    let from_main = tree.detach_content(cockpit.main).unwrap();
    let from_map = tree.detach_content(cockpit.map).unwrap();
    tree.attach_content(cockpit.main, from_map, Alignment::Center, Margins::default())
        .unwrap();
    tree.attach_content(cockpit.map, from_main, Alignment::Center, Margins::default())
        .unwrap();

    assert_eq!(tree.find_pane_for_content(rear_camera), Some(cockpit.main));
    assert_eq!(tree.find_pane_for_content(front_camera), Some(cockpit.map));
}

// ============================================================================
// Collapse and Teardown Tests
// ============================================================================

#[test]
fn test_collapsing_the_sidebar_from_one_of_its_rows() {
    let (mut tree, cockpit) = cockpit_layout();
    let minimap = ContentId::new();
    tree.attach_content(cockpit.map, minimap, Alignment::Center, Margins::default())
        .unwrap();

    // Any row can collapse the whole sidebar subdivision
    tree.merge_siblings(cockpit.status).unwrap();

    assert!(!tree.is_split(cockpit.sidebar));
    assert!(!tree.contains(cockpit.telemetry));
    assert!(!tree.contains(cockpit.map));
    assert!(!tree.contains(cockpit.status));
    assert_eq!(tree.find_pane_for_content(minimap), None);

    // The sidebar is a leaf again and can hold the map directly
    tree.attach_content(cockpit.sidebar, minimap, Alignment::Center, Margins::default())
        .unwrap();
    assert_eq!(tree.find_pane_for_content(minimap), Some(cockpit.sidebar));
}

#[test]
fn test_full_teardown_to_a_single_pane() {
    let (mut tree, cockpit) = cockpit_layout();
    let root = tree.root();
    tree.attach_content(cockpit.main, ContentId::new(), Alignment::Center, Margins::default())
        .unwrap();

    tree.merge_children(root).unwrap();

    assert_eq!(tree.pane_count(), 1);
    assert_eq!(tree.leaves(), vec![root]);
    for dead in [
        cockpit.main,
        cockpit.sidebar,
        cockpit.telemetry,
        cockpit.map,
        cockpit.status,
    ] {
        assert!(!tree.contains(dead));
    }

    // The root accepts a fresh layout immediately
    assert!(tree.split(root, SplitAxis::Vertical, &[0.5, 0.5]).is_ok());
}

#[test]
fn test_root_cannot_merge_its_siblings() {
    let (mut tree, _) = cockpit_layout();
    let root = tree.root();
    assert_eq!(tree.merge_siblings(root), Err(MergeError::NoParent(root)));
}

// ============================================================================
// Presentation Attribute Tests
// ============================================================================

#[test]
fn test_hiding_a_pane_keeps_it_in_the_layout() {
    let (mut tree, cockpit) = cockpit_layout();

    tree.set_visible(cockpit.telemetry, false).unwrap();

    // Visibility is presentational only; structure and weights hold
    assert!(!tree.is_visible(cockpit.telemetry));
    assert!(tree.leaves().contains(&cockpit.telemetry));
    let rows = tree.anchor_chain(cockpit.sidebar).unwrap();
    assert_eq!(rows.len(), 3);

    tree.set_visible(cockpit.telemetry, true).unwrap();
    assert!(tree.is_visible(cockpit.telemetry));
}

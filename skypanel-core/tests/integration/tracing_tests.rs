//! Tracing integration tests
//!
//! The library emits structured `tracing` events on every successful
//! mutation and never installs a subscriber of its own. These tests run
//! operations under a captured subscriber and check what actually comes
//! out: mutation events with pane IDs, overlay transitions, and silence
//! from queries and filtered-out levels.

use std::io;
use std::sync::{Arc, Mutex};

use skypanel_core::freeform::{DebugOverlay, OverlayOptions, PaneTree, SplitAxis};
use tracing_subscriber::EnvFilter;

/// `io::Write` sink appending into a shared buffer.
#[derive(Clone)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a subscriber built from the given filter directive and
/// returns everything it logged.
fn capture_logs(filter: &str, f: impl FnOnce()) -> String {
    let buffer = Arc::new(Mutex::new(Vec::new()));
    let sink = Capture(Arc::clone(&buffer));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.lock().unwrap();
    String::from_utf8_lossy(&bytes).into_owned()
}

#[test]
fn test_structural_mutations_emit_debug_events() {
    let output = capture_logs("skypanel_core=debug", || {
        let mut tree = PaneTree::new();
        let root = tree.root();
        tree.split(root, SplitAxis::Horizontal, &[0.5, 0.5]).unwrap();
        tree.merge_children(root).unwrap();
    });

    assert!(output.contains("split pane"), "missing split event:\n{output}");
    assert!(
        output.contains("merged children"),
        "missing merge event:\n{output}"
    );
    assert!(output.contains("Pane(1)"), "events must carry the pane id");
}

#[test]
fn test_overlay_transitions_are_logged() {
    let output = capture_logs("skypanel_core=debug", || {
        let mut tree = PaneTree::new();
        tree.split(tree.root(), SplitAxis::Vertical, &[0.3, 0.7])
            .unwrap();
        let mut overlay = DebugOverlay::new();
        overlay.enable(&mut tree, &OverlayOptions::new());
        overlay.disable(&mut tree);
    });

    assert!(output.contains("debug overlay enabled"));
    assert!(output.contains("debug overlay disabled"));
}

#[test]
fn test_queries_are_silent() {
    let mut tree = PaneTree::new();
    let children = tree
        .split(tree.root(), SplitAxis::Horizontal, &[0.5, 0.5])
        .unwrap();

    let output = capture_logs("skypanel_core=debug", || {
        let _ = tree.leaves();
        let _ = tree.children_of(tree.root());
        let _ = tree.content_of(children[0]);
        let _ = tree.anchor_chain(tree.root());
        let _ = tree.pane_count();
    });

    assert!(output.is_empty(), "queries must not log:\n{output}");
}

#[test]
fn test_env_filter_suppresses_debug_events() {
    let output = capture_logs("skypanel_core=info", || {
        let mut tree = PaneTree::new();
        tree.split(tree.root(), SplitAxis::Horizontal, &[0.5, 0.5])
            .unwrap();
    });

    assert!(
        output.is_empty(),
        "info-level filter must drop debug events:\n{output}"
    );
}

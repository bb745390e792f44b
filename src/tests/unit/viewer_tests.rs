//! Detail Viewer Tests

use crate::core::viewer::{Viewer, ViewerCommand, ViewerState, ZOOM_MAX, ZOOM_MIN};

fn opened(len: usize) -> Viewer {
    let mut viewer = Viewer::new();
    viewer.apply(ViewerCommand::Open(0), len);
    viewer
}

#[test]
fn test_zoom_in_clamps_at_max() {
    let mut viewer = opened(3);
    for _ in 0..5 {
        viewer.apply(ViewerCommand::ZoomIn, 3);
    }
    assert_eq!(viewer.zoom(), ZOOM_MAX);
    assert_eq!(viewer.zoom_percent(), 300);
}

#[test]
fn test_zoom_out_clamps_at_min() {
    let mut viewer = opened(3);
    for _ in 0..5 {
        viewer.apply(ViewerCommand::ZoomOut, 3);
    }
    assert_eq!(viewer.zoom(), ZOOM_MIN);
}

#[test]
fn test_navigation_resets_zoom() {
    let mut viewer = opened(3);
    viewer.apply(ViewerCommand::ZoomIn, 3);
    viewer.apply(ViewerCommand::Next, 3);
    assert_eq!(viewer.zoom(), 1.0);
    assert_eq!(viewer.index(), Some(1));
}

#[test]
fn test_boundary_navigation_is_noop() {
    let mut viewer = opened(2);
    assert!(!viewer.apply(ViewerCommand::Previous, 2));
    assert!(viewer.apply(ViewerCommand::Next, 2));
    assert!(!viewer.apply(ViewerCommand::Next, 2));
    assert_eq!(viewer.state(), ViewerState::Open { index: 1 });
    assert!(!viewer.has_next(2));
    assert!(viewer.has_previous());
}

#[test]
fn test_open_out_of_range_refused() {
    let mut viewer = Viewer::new();
    assert!(!viewer.apply(ViewerCommand::Open(3), 3));
    assert!(!viewer.is_open());
}

#[test]
fn test_keys_drive_viewer_only_while_open() {
    let mut viewer = Viewer::new();
    assert!(!viewer.handle_key("ArrowRight", 3));

    viewer.apply(ViewerCommand::Open(0), 3);
    assert!(viewer.handle_key("ArrowRight", 3));
    assert!(viewer.handle_key("=", 3));
    assert_eq!(viewer.zoom(), 1.5);
    assert!(!viewer.handle_key("Enter", 3));
    assert!(viewer.handle_key("Escape", 3));
    assert!(!viewer.is_open());
}

//! Editor aggregate integration tests: undo/redo scenarios, the
//! notification contract, drag batching, and scheme load/save.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use schemekit_editor::{
    CatalogDevice, Color, EditorEvent, PlacedDevice, Point, SchemeDocument, SchemeEditor,
    Selection,
};

#[test]
fn test_device_placement_scenario() {
    // Place D1 at (10,10), move it by (5,5), then unwind everything.
    let mut editor = SchemeEditor::new();
    assert!(editor.place_device(1, 10.0, 10.0));
    assert_eq!(editor.undo_len(), 1);

    editor.move_device(1, 5.0, 5.0);
    let placed = editor.scene().devices.get(1).unwrap();
    assert_eq!((placed.x, placed.y), (15.0, 15.0));

    assert!(editor.undo());
    let placed = editor.scene().devices.get(1).unwrap();
    assert_eq!((placed.x, placed.y), (10.0, 10.0));

    assert!(editor.undo());
    assert!(editor.scene().devices.is_empty());
}

#[test]
fn test_history_capacity_two_scenario() {
    let mut editor = SchemeEditor::with_history_limit(2);
    let a = editor.add_rectangle(0.0, 0.0, 10.0, 10.0);
    editor.add_rectangle(20.0, 0.0, 10.0, 10.0);
    editor.add_rectangle(40.0, 0.0, 10.0, 10.0);

    // Only the last two adds are undoable; the first survives.
    assert_eq!(editor.undo_len(), 2);
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    assert_eq!(editor.scene().shapes.len(), 1);
    assert!(editor.scene().shapes.get(a).is_some());
}

#[test]
fn test_redo_branch_discarded_by_new_command() {
    let mut editor = SchemeEditor::new();
    editor.add_rectangle(0.0, 0.0, 10.0, 10.0);
    editor.add_ellipse(20.0, 0.0, 10.0, 10.0);
    assert!(editor.undo());
    assert!(editor.can_redo());

    editor.add_rhombus(40.0, 0.0, 10.0, 10.0);
    assert!(!editor.can_redo());
    assert!(!editor.redo());
    assert_eq!(editor.scene().shapes.len(), 2);
}

#[test]
fn test_undo_redo_reproduces_state() {
    let mut editor = SchemeEditor::new();
    let id = editor.add_rectangle(0.0, 0.0, 30.0, 30.0);
    editor.select_shape(id);
    editor.set_fill_color(Color::rgb(10, 120, 200));

    let recolored = editor.scene().shapes.get(id).unwrap().clone();
    assert!(editor.undo());
    assert_eq!(editor.scene().shapes.get(id).unwrap().fill, Color::WHITE);
    assert!(editor.redo());
    assert_eq!(editor.scene().shapes.get(id).unwrap(), &recolored);
}

#[test]
fn test_dirty_flag_and_saved_signal() {
    let mut editor = SchemeEditor::new();
    assert!(!editor.state().ui.is_dirty);

    editor.add_rectangle(0.0, 0.0, 10.0, 10.0);
    assert!(editor.state().ui.is_dirty);

    editor.mark_saved();
    assert!(!editor.state().ui.is_dirty);

    // Undo also counts as a mutation.
    assert!(editor.undo());
    assert!(editor.state().ui.is_dirty);
}

#[test]
fn test_destructive_command_clears_selection() {
    let mut editor = SchemeEditor::new();
    let id = editor.add_rectangle(0.0, 0.0, 40.0, 40.0);
    editor.select_shape(id);
    assert_eq!(editor.state().selection, Some(Selection::Shape(id)));
    assert!(editor.state().ui.show_shape_properties);

    editor.remove_selected();
    let state = editor.state();
    assert_eq!(state.selection, None);
    assert!(!state.ui.show_shape_properties);
    assert!(editor.scene().shapes.is_empty());
}

#[test]
fn test_selection_is_not_undoable() {
    let mut editor = SchemeEditor::new();
    let id = editor.add_rectangle(0.0, 0.0, 40.0, 40.0);
    let before = editor.undo_len();

    editor.select_shape(id);
    editor.clear_selection();
    editor.pan_by(10.0, 10.0);
    editor.zoom_in();
    assert_eq!(editor.undo_len(), before);
}

#[test]
fn test_select_at_resolves_topmost_and_panel() {
    let mut editor = SchemeEditor::new();
    let shape_id = editor.add_rectangle(0.0, 0.0, 200.0, 200.0);
    editor.place_device(5, 100.0, 100.0);
    editor.pan_by(50.0, 0.0);

    // Screen (150, 100) maps to canvas (100, 100): the device wins.
    assert_eq!(
        editor.select_at(Point::new(150.0, 100.0)),
        Some(Selection::Device(5))
    );
    assert!(!editor.state().ui.show_shape_properties);

    // Screen (60, 10) maps to canvas (10, 10): only the shape is there.
    assert_eq!(
        editor.select_at(Point::new(60.0, 10.0)),
        Some(Selection::Shape(shape_id))
    );
    assert!(editor.state().ui.show_shape_properties);

    // A miss clears the selection.
    assert_eq!(editor.select_at(Point::new(2000.0, 2000.0)), None);
    assert_eq!(editor.state().selection, None);
}

#[test]
fn test_drag_batches_into_single_command() {
    let mut editor = SchemeEditor::new();
    let id = editor.add_rectangle(0.0, 0.0, 20.0, 20.0);
    editor.select_shape(id);
    let history_before = editor.undo_len();

    assert!(editor.begin_drag());
    for _ in 0..25 {
        editor.update_drag(1.0, 0.5);
    }
    editor.end_drag();

    // 25 pointer deltas, one history entry.
    assert_eq!(editor.undo_len(), history_before + 1);
    let shape = editor.scene().shapes.get(id).unwrap();
    assert_eq!((shape.x, shape.y), (25.0, 12.5));

    assert!(editor.undo());
    let shape = editor.scene().shapes.get(id).unwrap();
    assert_eq!((shape.x, shape.y), (0.0, 0.0));
}

#[test]
fn test_zero_delta_drag_records_nothing() {
    let mut editor = SchemeEditor::new();
    let id = editor.add_rectangle(0.0, 0.0, 20.0, 20.0);
    editor.select_shape(id);
    let history_before = editor.undo_len();

    assert!(editor.begin_drag());
    editor.end_drag();
    assert_eq!(editor.undo_len(), history_before);
}

#[test]
fn test_cancel_drag_reverts_preview() {
    let mut editor = SchemeEditor::new();
    editor.place_device(3, 40.0, 40.0);
    editor.select_device(3);
    let history_before = editor.undo_len();

    assert!(editor.begin_drag());
    editor.update_drag(9.0, 9.0);
    editor.cancel_drag();

    let placed = editor.scene().devices.get(3).unwrap();
    assert_eq!((placed.x, placed.y), (40.0, 40.0));
    assert_eq!(editor.undo_len(), history_before);
}

#[test]
fn test_change_events_reach_subscribers() {
    let mut editor = SchemeEditor::new();
    let shape_events = Arc::new(AtomicUsize::new(0));
    let counter = shape_events.clone();
    editor.subscribe(move |event| {
        if *event == EditorEvent::ShapesChanged {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    editor.add_rectangle(0.0, 0.0, 10.0, 10.0);
    editor.undo();
    assert_eq!(shape_events.load(Ordering::SeqCst), 2);
}

#[test]
fn test_load_and_save_scheme_round_trip() {
    let mut editor = SchemeEditor::new();
    editor.set_catalog(vec![CatalogDevice {
        id: 7,
        kind: "sensor".to_string(),
        name: "Flow sensor FT-1".to_string(),
    }]);

    let doc = SchemeDocument {
        width: 600.0,
        height: 400.0,
        grid_enabled: false,
        devices: vec![PlacedDevice {
            device_id: 7,
            x: 30.0,
            y: 30.0,
            rotation: 0.0,
            scale: 1.0,
            z_index: 0,
        }],
        ..SchemeDocument::default()
    };
    editor.load_scheme(doc.clone(), "[]");
    assert_eq!(editor.scene().devices.len(), 1);
    assert!(!editor.state().ui.is_dirty);
    assert!(!editor.can_undo());

    editor.add_text("Boiler room", 10.0, 10.0, 120.0, 24.0);
    let (saved_doc, shapes_json) = editor.save_scheme().unwrap();
    assert_eq!(saved_doc.devices, doc.devices);
    assert_eq!(saved_doc.width, 600.0);

    let mut reopened = SchemeEditor::new();
    reopened.load_scheme(saved_doc, &shapes_json);
    assert_eq!(reopened.scene().shapes.len(), 1);
    assert_eq!(reopened.scene().devices.len(), 1);
}

#[test]
fn test_malformed_shape_blob_opens_empty() {
    let mut editor = SchemeEditor::new();
    editor.load_scheme(SchemeDocument::default(), "{{{ definitely not json");
    assert!(editor.scene().shapes.is_empty());
}

#[test]
fn test_duplicate_device_placement_rejected() {
    let mut editor = SchemeEditor::new();
    assert!(editor.place_device(4, 10.0, 10.0));
    let history_before = editor.undo_len();

    assert!(!editor.place_device(4, 90.0, 90.0));
    assert_eq!(editor.undo_len(), history_before);
    assert_eq!(editor.scene().devices.get(4).unwrap().x, 10.0);
}

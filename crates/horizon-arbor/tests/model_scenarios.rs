//! Integration tests for `TreeModel`: structural edits, notifications and drops.

use std::sync::Arc;

use horizon_arbor::model::{KEY_COLUMN, ModelSignals, MoveDestination};
use horizon_arbor::prelude::*;
use parking_lot::Mutex;
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<(&'static str, ModelChange)>>,
}

impl ModelObserver for Recorder {
    fn on_begin(&self, change: &ModelChange) {
        self.events.lock().push(("begin", *change));
    }

    fn on_end(&self, change: &ModelChange) {
        self.events.lock().push(("end", *change));
    }
}

impl Recorder {
    fn attach(signals: &ModelSignals) -> Arc<Self> {
        let recorder = Arc::new(Self::default());
        signals.connect_observer(Arc::clone(&recorder));
        recorder
    }

    fn take(&self) -> Vec<(&'static str, ModelChange)> {
        std::mem::take(&mut *self.events.lock())
    }
}

fn model(value: serde_json::Value) -> TreeModel<DocumentTree> {
    init_tracing();
    TreeModel::from_value(Value::from(value))
}

fn json_of(model: &TreeModel<DocumentTree>) -> serde_json::Value {
    model.with_tree(|doc| doc.check_sync()).expect("document in sync");
    serde_json::Value::from(model.tree_value())
}

/// Labels of the top-level rows, in order.
fn row_labels(model: &TreeModel<DocumentTree>) -> Vec<Value> {
    let root = ModelIndex::invalid();
    (0..model.row_count(&root))
        .filter_map(|row| model.data(&model.index(row, 1, &root)))
        .collect()
}

#[test]
fn reorder_moves_first_row_to_the_end() {
    let model = model(json!(["A", "B", "C"]));
    let recorder = Recorder::attach(model.signals());
    let root = model.root();

    assert!(model.move_row(root, 0, root, 3));
    assert_eq!(row_labels(&model), [Value::from("B"), Value::from("C"), Value::from("A")]);

    let change = ModelChange::moved(root, 0, 0, MoveDestination { parent: root, row: 3 });
    assert_eq!(recorder.take(), vec![("begin", change), ("end", change)]);
}

#[test]
fn adjacent_moves_are_no_ops() {
    let model = model(json!(["A", "B", "C"]));
    let recorder = Recorder::attach(model.signals());
    let root = model.root();

    assert!(!model.move_row(root, 1, root, 1));
    assert!(!model.move_row(root, 1, root, 2));
    assert_eq!(json_of(&model), json!(["A", "B", "C"]));
    assert!(recorder.take().is_empty());
}

#[test]
fn backward_and_negative_moves() {
    let model = model(json!(["A", "B", "C", "D"]));
    let root = model.root();

    assert!(model.move_row(root, 3, root, 0));
    assert_eq!(json_of(&model), json!(["D", "A", "B", "C"]));
    assert!(model.move_row(root, -1, root, 1));
    assert_eq!(json_of(&model), json!(["D", "C", "A", "B"]));
    assert!(model.move_rows(root, 0, 2, root, -1));
    assert_eq!(json_of(&model), json!(["A", "B", "D", "C"]));
}

#[test]
fn removing_a_path_edits_the_document() {
    let model = model(json!({"a": 1, "b": [1, 2, 3]}));
    let recorder = Recorder::attach(model.signals());
    let b = model.node_for_path("/b").unwrap();

    assert!(model.remove_paths(&["/b/1"]));
    assert_eq!(json_of(&model), json!({"a": 1, "b": [1, 3]}));
    let change = ModelChange::remove(b, 1, 1);
    assert_eq!(recorder.take(), vec![("begin", change), ("end", change)]);
}

#[test]
fn observers_see_the_model_before_and_after() {
    let model = Arc::new(model(json!({"items": [1, 2, 3]})));
    let items = model.node_for_path("/items").unwrap();
    let counts = Arc::new(Mutex::new(Vec::new()));

    for signal in [&model.signals().about_to_change, &model.signals().changed] {
        let observed = Arc::downgrade(&model);
        let counts = Arc::clone(&counts);
        signal.connect(move |_| {
            if let Some(model) = observed.upgrade() {
                counts.lock().push(model.row_count_of(items));
            }
        });
    }

    assert!(model.remove_rows(0, 2, items));
    assert_eq!(*counts.lock(), [3, 1]);
}

#[test]
fn moving_into_a_descendant_is_rejected() {
    let model = model(json!({"x": {"y": {"z": []}}}));
    let recorder = Recorder::attach(model.signals());
    let root = model.root();
    let z = model.node_for_path("/x/y/z").unwrap();

    assert!(!model.move_row(root, 0, z, 0));
    assert_eq!(json_of(&model), json!({"x": {"y": {"z": []}}}));
    assert!(recorder.take().is_empty());
}

#[test]
fn key_edits_report_collisions() {
    let model = model(json!({"a": 1, "b": 2}));
    let a = model.index(0, KEY_COLUMN, &ModelIndex::invalid());

    assert!(!model.set_data(&a, Value::from("b")));
    assert_eq!(
        model.try_set_data(model.node_for_index(&a), KEY_COLUMN, Value::from("b")),
        Err(TreeError::KeyCollision { key: "b".into() })
    );
    assert!(model.set_data(&a, Value::from("renamed")));
    assert_eq!(json_of(&model), json!({"renamed": 1, "b": 2}));
    assert_eq!(model.path_for_index(&a).as_deref(), Some("/renamed"));
}

#[test]
fn header_changes_notify_only_differing_sections() {
    let model = model(json!({}));
    let recorder = Recorder::attach(model.signals());

    model.set_header_labels(Orientation::Horizontal, ["Key", "Value", "Type"]);
    let change = ModelChange::header_changed(Orientation::Horizontal, 2, 2);
    assert_eq!(recorder.take(), vec![("begin", change), ("end", change)]);

    model.set_header_labels(Orientation::Horizontal, ["Name", "Value"]);
    let change = ModelChange::header_changed(Orientation::Horizontal, 0, 2);
    assert_eq!(recorder.take(), vec![("begin", change), ("end", change)]);
    assert_eq!(model.header_data(0, Orientation::Horizontal).as_deref(), Some("Name"));
}

#[test]
fn drops_become_single_moves() {
    let model = model(json!({"folder": [], "a": 1, "b": 2}));
    let recorder = Recorder::attach(model.signals());
    let root = ModelIndex::invalid();
    let folder = model.index(0, 0, &root);
    let b = model.index(2, 0, &root);

    assert!(model.drop_rows(&b, &folder, DropPosition::OnNode));
    let events = recorder.take();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].1.kind, ChangeKind::Move);
    assert_eq!(json_of(&model), json!({"folder": [2], "a": 1}));

    let a = model.index(1, 0, &root);
    assert!(model.drop_rows(&a, &folder, DropPosition::Before));
    assert_eq!(json_of(&model), json!({"a": 1, "folder": [2]}));

    let inner = model.index(0, 0, &model.index(1, 0, &root));
    assert!(model.drop_rows(&inner, &root, DropPosition::OnEmptyArea));
    assert_eq!(json_of(&model), json!({"a": 1, "folder": [], "key": 2}));
}

#[test]
fn generic_node_trees_work_as_models() {
    init_tracing();
    let mut tree = NodeTree::new();
    let root = tree.new_node(None, 0u32);
    let fruit = tree.new_node(Some("fruit"), 1);
    let apple = tree.new_node(Some("apple"), 2);
    tree.append_child(root, fruit).unwrap();
    tree.append_child(fruit, apple).unwrap();
    let loose = tree.new_node(Some("pear"), 3);

    let model = TreeModel::new(tree, root);
    assert_eq!(model.column_count(&ModelIndex::invalid()), 1);
    assert!(model.append_items(&[loose], fruit));
    assert_eq!(model.path_for_node(loose).as_deref(), Some("/fruit/pear"));
    assert_eq!(model.max_depth(), 2);

    assert!(model.remove_items(&[apple, loose]));
    assert_eq!(model.row_count_of(fruit), 0);
    assert!(model.with_tree(|tree| !tree.contains(apple)));
}

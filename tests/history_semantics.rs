use sticker_sketchpad::History;
use sticker_sketchpad::drawable::factory;

use egui::{Color32, pos2};

// Helper to build a history with two committed drawables
fn history_with_two() -> History {
    let mut history = History::new();
    history.commit(factory::marker_stroke(pos2(1.0, 1.0), 2.0, Color32::RED));
    history.commit(factory::sticker_placement(pos2(5.0, 5.0), "⭐"));
    history
}

#[test]
fn test_undo_redo_round_trip() {
    let mut history = history_with_two();
    assert!(history.can_undo());
    assert!(!history.can_redo());

    assert!(history.undo());
    assert_eq!(history.committed().len(), 1);
    assert!(history.can_redo());

    assert!(history.redo());
    assert_eq!(history.committed().len(), 2);
    assert!(!history.can_redo());
}

#[test]
fn test_redo_restores_z_order() {
    let mut history = history_with_two();
    let before = history.committed().to_vec();

    assert!(history.undo());
    assert!(history.undo());
    assert!(history.committed().is_empty());
    // Redo buffer holds the undone drawables newest-first.
    assert_eq!(
        history.redo_buffer(),
        &[before[1].clone(), before[0].clone()]
    );

    assert!(history.redo());
    assert!(history.redo());
    assert_eq!(history.committed(), &before[..]);
}

#[test]
fn test_commit_discards_redo() {
    let mut history = history_with_two();
    assert!(history.undo());
    assert!(history.can_redo());

    history.commit(factory::marker_stroke(pos2(9.0, 9.0), 6.0, Color32::BLUE));
    assert!(!history.can_redo());
    assert!(!history.redo());
    assert_eq!(history.committed().len(), 2);
}

#[test]
fn test_empty_history_is_a_noop() {
    let mut history = History::new();
    assert!(!history.undo());
    assert!(!history.redo());
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_clear_empties_both_stacks() {
    let mut history = history_with_two();
    assert!(history.undo());

    history.clear();
    assert!(!history.can_undo());
    assert!(!history.can_redo());
    assert!(history.committed().is_empty());
    assert!(history.redo_buffer().is_empty());
}

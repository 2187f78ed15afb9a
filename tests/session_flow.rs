use sticker_sketchpad::{Drawable, MarkerWidth, Sketchpad, ToolPreview};

use egui::ecolor::Hsva;
use egui::{Color32, Pos2, pos2};

// Helper that draws one finished stroke from a to b
fn draw_stroke(pad: &mut Sketchpad, a: Pos2, b: Pos2) {
    pad.pointer_pressed(a);
    pad.pointer_moved(b);
    pad.pointer_released(b);
}

#[test]
fn test_marker_gesture_flow() {
    let mut pad = Sketchpad::new();
    assert!(pad.state().is_idle());

    pad.pointer_pressed(pos2(10.0, 10.0));
    assert!(pad.state().is_drawing());
    assert!(pad.preview().is_none());

    pad.pointer_moved(pos2(20.0, 20.0));
    pad.pointer_moved(pos2(30.0, 25.0));
    pad.pointer_released(pos2(30.0, 25.0));
    assert!(pad.state().is_idle());

    let [Drawable::Marker(stroke)] = pad.drawables() else {
        panic!("one marker stroke should be committed");
    };
    assert_eq!(stroke.points().len(), 3);
    assert_eq!(stroke.thickness(), MarkerWidth::Thin.px());
}

#[test]
fn test_sticker_gesture_repositions_until_release() {
    let mut pad = Sketchpad::new();
    pad.select_sticker("🎉");

    pad.pointer_pressed(pos2(40.0, 40.0));
    pad.pointer_moved(pos2(80.0, 90.0));
    pad.pointer_released(pos2(80.0, 90.0));

    let [Drawable::Sticker(placement)] = pad.drawables() else {
        panic!("one sticker should be committed");
    };
    assert_eq!(placement.pos(), pos2(80.0, 90.0));
    assert_eq!(placement.glyph(), "🎉");
}

#[test]
fn test_tool_settings_shape_new_strokes() {
    let mut pad = Sketchpad::new();
    pad.select_marker(MarkerWidth::Thick);
    pad.select_hue(120.0);
    draw_stroke(&mut pad, pos2(10.0, 10.0), pos2(50.0, 50.0));

    let [Drawable::Marker(stroke)] = pad.drawables() else {
        panic!("one marker stroke should be committed");
    };
    assert_eq!(stroke.thickness(), MarkerWidth::Thick.px());
    assert_eq!(
        stroke.color(),
        Color32::from(Hsva::new(120.0 / 360.0, 1.0, 1.0, 1.0))
    );
}

#[test]
fn test_preview_follows_idle_pointer() {
    let mut pad = Sketchpad::new();
    pad.pointer_moved(pos2(30.0, 30.0));
    let Some(Drawable::Preview(ToolPreview::SizeRing { center, radius, .. })) = pad.preview()
    else {
        panic!("idle pointer should carry a marker preview");
    };
    assert_eq!(*center, pos2(30.0, 30.0));
    assert_eq!(*radius, MarkerWidth::Thin.px() / 2.0);

    pad.pointer_moved(pos2(99.0, 40.0));
    let Some(Drawable::Preview(ToolPreview::SizeRing { center, .. })) = pad.preview() else {
        panic!("preview should persist while idle");
    };
    assert_eq!(*center, pos2(99.0, 40.0));

    pad.pointer_left();
    assert!(pad.preview().is_none());
}

#[test]
fn test_new_stroke_discards_redo() {
    let mut pad = Sketchpad::new();
    draw_stroke(&mut pad, pos2(10.0, 10.0), pos2(20.0, 20.0));
    assert!(pad.undo());
    assert!(pad.can_redo());

    draw_stroke(&mut pad, pos2(30.0, 30.0), pos2(40.0, 40.0));
    assert!(!pad.can_redo());
    assert_eq!(pad.drawables().len(), 1);
}

#[test]
fn test_clear_resets_everything() {
    let mut pad = Sketchpad::new();
    draw_stroke(&mut pad, pos2(10.0, 10.0), pos2(20.0, 20.0));
    draw_stroke(&mut pad, pos2(30.0, 30.0), pos2(40.0, 40.0));
    assert!(pad.undo());

    pad.clear();
    assert!(pad.drawables().is_empty());
    assert!(!pad.can_undo());
    assert!(!pad.can_redo());
    assert!(pad.state().is_idle());
}

#[test]
fn test_undo_then_redo_restores_sticker() {
    let mut pad = Sketchpad::new();
    pad.select_sticker("😀");
    pad.pointer_pressed(pos2(64.0, 64.0));
    pad.pointer_released(pos2(64.0, 64.0));

    assert!(pad.undo());
    assert!(pad.drawables().is_empty());

    assert!(pad.redo());
    let [Drawable::Sticker(placement)] = pad.drawables() else {
        panic!("redo should restore the sticker");
    };
    assert_eq!(placement.glyph(), "😀");
}

use super::*;
use crate::assets::font::Glyph;
use crate::foundation::ident::SequentialIdGen;

fn test_font(id: &str) -> FontAsset {
    FontAsset {
        id: Some(id.to_string()),
        name: "pixel".to_string(),
        path: "fonts/pixel.ttf".to_string(),
        height: 8,
        glyphstr: "AB\"".to_string(),
        glyphs: vec![Glyph {
            glyph: 'A',
            offset_x: 0,
            offset_y: 0,
            width: 5,
            height: 8,
            start: 0,
        }],
        data: vec![0; 40],
    }
}

fn text_element(id: &str) -> SceneElement {
    let mut ids = SequentialIdGen::new("el");
    let font = test_font(id);
    let bounds = TextBound {
        width: 20,
        height: 10,
    };
    let mut el = SceneElement::new(
        ElementPayload::Text(TextPayload {
            font,
            text: "AA".to_string(),
            bounds,
            color: None,
            align: None,
        }),
        Coord::new(10, 20),
        0,
        &mut ids,
    );
    el.name = "text1".to_string();
    el
}

fn image_element(id: &str) -> SceneElement {
    let mut ids = SequentialIdGen::new("img");
    let mut el = SceneElement::new(
        ElementPayload::Image(ImagePayload {
            image: ImageAsset {
                id: id.to_string(),
                width: 16,
                height: 9,
                name: "logo".to_string(),
                path: "images/logo.png".to_string(),
                kind: "RGB24".to_string(),
                dataurl: String::new(),
            },
        }),
        Coord::new(0, 0),
        0,
        &mut ids,
    );
    el.name = "image1".to_string();
    el
}

#[test]
fn new_element_takes_payload_asset_identity() {
    let el = text_element("font1");
    assert_eq!(el.esphome_id, "font1");
    assert_eq!(el.internal_id(), "el-0");
    assert_eq!(el.kind(), ElementKind::Text);
    assert!(el.resizable());
    assert!(!image_element("img1").resizable());
}

#[test]
fn size_prefers_non_zero_override() {
    let mut el = text_element("font1");
    assert_eq!((el.get_width(), el.get_height()), (20, 10));
    el.width = Some(33);
    assert_eq!(el.get_width(), 33);
    el.width = Some(0); // zero override falls back to intrinsic
    assert_eq!(el.get_width(), 20);
}

#[test]
fn hit_test_edges() {
    let el = image_element("img1"); // at (0,0), 16x9
    assert!(!el.is_at(Coord::new(0, 5))); // left edge: outside
    assert!(!el.is_at(Coord::new(5, 0))); // top edge: outside
    assert!(el.is_at(Coord::new(16, 9))); // right/bottom edge: inside
    assert!(el.is_at(Coord::new(1, 1)));
    assert!(!el.is_at(Coord::new(17, 5)));
}

#[test]
fn move_applies_incremental_deltas_only() {
    let mut el = image_element("img1");
    el.begin_move(Coord::new(100, 100));
    assert!(el.is_moving());

    el.move_by(Coord::new(103, 101));
    el.move_by(Coord::new(103, 101)); // repeated report adds nothing
    el.move_by(Coord::new(105, 100));
    assert_eq!((el.x, el.y), (5, 0));
    assert!(el.has_moved());

    el.end_move();
    assert!(!el.is_moving());
    // Still reflects the most recent gesture.
    assert!(el.has_moved());
}

#[test]
fn move_requires_active_gesture() {
    let mut el = image_element("img1");
    el.move_by(Coord::new(50, 50));
    assert_eq!((el.x, el.y), (0, 0));
}

#[test]
fn gestures_are_mutually_exclusive() {
    let mut el = text_element("font1");
    el.begin_move(Coord::new(0, 0));
    el.begin_resize(ResizeCorner::TopLeft, Coord::new(0, 0));
    assert!(el.is_moving());
    assert!(!el.is_resizing());
    el.end_move();
    el.begin_resize(ResizeCorner::TopLeft, Coord::new(0, 0));
    assert!(el.is_resizing());
    assert_eq!(el.active_corner(), Some(ResizeCorner::TopLeft));
    el.end_resize();
    assert_eq!(el.active_corner(), None);
}

#[test]
fn resize_bottom_right_never_double_counts() {
    let mut el = text_element("font1"); // 20x10 at (10,20)
    let c0 = Coord::new(50, 50);
    el.begin_resize(ResizeCorner::BottomRight, c0);
    el.resize(Coord::new(57, 53));
    el.resize(Coord::new(62, 49));
    // Total width delta equals c2.x - c0.x exactly once.
    assert_eq!(el.get_width(), 20 + (62 - 50) as u32);
    assert_eq!(el.get_height(), 10 - 1);
    assert_eq!((el.x, el.y), (10, 20));
}

#[test]
fn resize_top_left_moves_origin_and_shrinks() {
    let mut el = text_element("font1");
    el.begin_resize(ResizeCorner::TopLeft, Coord::new(0, 0));
    el.resize(Coord::new(4, 3));
    assert_eq!((el.x, el.y), (14, 23));
    assert_eq!((el.get_width(), el.get_height()), (16, 7));
}

#[test]
fn resize_top_right_and_bottom_left_move_one_axis() {
    let mut el = text_element("font1");
    el.begin_resize(ResizeCorner::TopRight, Coord::new(0, 0));
    el.resize(Coord::new(2, 3));
    assert_eq!((el.x, el.y), (10, 23));
    assert_eq!((el.get_width(), el.get_height()), (22, 7));
    el.end_resize();

    let mut el = text_element("font1");
    el.begin_resize(ResizeCorner::BottomLeft, Coord::new(0, 0));
    el.resize(Coord::new(2, 3));
    assert_eq!((el.x, el.y), (12, 20));
    assert_eq!((el.get_width(), el.get_height()), (18, 13));
}

#[test]
fn resize_through_zero_flips_origin_and_corner() {
    // 20x10 at (10,20); drag TopLeft right past the right edge.
    let mut el = text_element("font1");
    el.begin_resize(ResizeCorner::TopLeft, Coord::new(0, 0));
    el.resize(Coord::new(25, 0));
    // Width crossed zero by 5: origin flips to the old right edge.
    assert_eq!(el.x, 10 + 20);
    assert_eq!(el.get_width(), 5);
    assert_eq!(el.active_corner(), Some(ResizeCorner::TopRight));

    // Dragging back left keeps tracking the same physical corner.
    el.resize(Coord::new(20, 0));
    assert_eq!(el.x, 30);
    assert_eq!(el.width, Some(0)); // shrank back to zero extent
}

#[test]
fn resize_exactly_to_opposite_edge_keeps_corner() {
    let mut el = text_element("font1");
    el.begin_resize(ResizeCorner::TopLeft, Coord::new(0, 0));
    el.resize(Coord::new(20, 0));
    assert_eq!(el.x, 30);
    assert_eq!(el.width, Some(0)); // exactly zero: no flip yet
    assert_eq!(el.get_width(), 20); // zero override paints at intrinsic size
    assert_eq!(el.active_corner(), Some(ResizeCorner::TopLeft));
}

#[test]
fn resize_height_flip_mirrors_vertically() {
    let mut el = text_element("font1"); // 20x10 at (10,20)
    el.begin_resize(ResizeCorner::BottomRight, Coord::new(0, 0));
    el.resize(Coord::new(0, -13));
    assert_eq!(el.y, 20 - 3);
    assert_eq!(el.get_height(), 3);
    assert_eq!(el.active_corner(), Some(ResizeCorner::TopRight));
}

#[test]
fn scaled_rect_bakes_in_grid_lines() {
    let el = image_element("img1"); // 16x9
    let r = el.scaled_rect(2, 3, 4, 1);
    assert_eq!(r.x, 2 * 4 + 1 * 3);
    assert_eq!(r.y, 3 * 4 + 1 * 4);
    assert_eq!(r.w, 16 * 4 + 1 * 15);
    assert_eq!(r.h, 9 * 4 + 1 * 8);
}

#[test]
fn draw_paints_nothing_without_asset_data() {
    let mut el = image_element("img1"); // empty dataurl
    let mut surface = Surface::new(32, 32);
    let before = surface.clone();
    el.draw_to(&mut surface);
    el.draw_ghost_to(&mut surface, Coord::new(3, 3));
    assert_eq!(surface, before);
}

#[test]
fn text_yaml_escapes_glyphstr_quotes() {
    let el = text_element("font1");
    assert_eq!(
        el.to_yaml(),
        "  #text1\n  - id: \"font1\"\n    file: \"fonts/pixel.ttf\"\n    size: 8\n    glyphs: \"AB\\\"\"\n"
    );
}

#[test]
fn image_yaml_carries_type() {
    let el = image_element("img1");
    assert_eq!(
        el.to_yaml(),
        "  #image1\n  - id: \"img1\"\n    file: \"images/logo.png\"\n    type: RGB24\n"
    );
}

#[test]
fn text_cpp_prints_at_position() {
    let mut el = text_element("font1");
    if let ElementPayload::Text(p) = el.payload_mut() {
        p.text = "say \"hi\"".to_string();
    }
    assert_eq!(
        el.to_cpp(),
        "\t// text1\n\tit.print(10, 20, id(font1), \"say \\\"hi\\\"\");\n"
    );
}

#[test]
fn text_cpp_includes_alignment_when_set() {
    let mut el = text_element("font1");
    if let ElementPayload::Text(p) = el.payload_mut() {
        p.align = Some(crate::foundation::core::TextAlign::BottomCenter);
    }
    assert!(el.to_cpp().contains("TextAlign::BOTTOM_CENTER"));
}

#[test]
fn animation_cpp_steps_then_draws() {
    let mut ids = SequentialIdGen::new("anim");
    let mut el = SceneElement::new(
        ElementPayload::Animation(AnimationPayload {
            animation: AnimationAsset {
                id: "anim1".to_string(),
                width: 2,
                height: 2,
                name: "spinner".to_string(),
                path: "animations/spinner.gif".to_string(),
                frames: 2,
                data: vec![0; 24],
                dataurl: String::new(),
            },
            cursor: Default::default(),
        }),
        Coord::new(1, 2),
        0,
        &mut ids,
    );
    el.name = "animation1".to_string();
    assert_eq!(
        el.to_cpp(),
        "\t// animation1\n\tid(anim1).next_frame();\n\tit.image(1, 2, id(anim1));\n"
    );
}

use super::*;
use crate::assets::font::{FontAsset, Glyph, TextBound};
use crate::assets::image::ImageAsset;
use crate::foundation::core::Coord;
use crate::foundation::ident::{IdGen, SequentialIdGen};
use crate::scene::element::{ElementPayload, ImagePayload, TextPayload};

fn text_element(ids: &mut dyn IdGen, font_id: &str, text: &str, name: &str) -> SceneElement {
    let font = FontAsset {
        id: Some(font_id.to_string()),
        name: "pixel".to_string(),
        path: "fonts/pixel.ttf".to_string(),
        height: 8,
        glyphstr: "ab".to_string(),
        glyphs: vec![Glyph {
            glyph: 'a',
            offset_x: 0,
            offset_y: 0,
            width: 3,
            height: 5,
            start: 0,
        }],
        data: vec![0; 15],
    };
    let mut el = SceneElement::new(
        ElementPayload::Text(TextPayload {
            font,
            text: text.to_string(),
            bounds: TextBound {
                width: 3,
                height: 5,
            },
            color: None,
            align: None,
        }),
        Coord::new(0, 0),
        0,
        ids,
    );
    el.name = name.to_string();
    el
}

fn image_element(ids: &mut dyn IdGen, asset_id: &str, name: &str) -> SceneElement {
    let mut el = SceneElement::new(
        ElementPayload::Image(ImagePayload {
            image: ImageAsset {
                id: asset_id.to_string(),
                width: 4,
                height: 4,
                name: name.to_string(),
                path: format!("images/{asset_id}.png"),
                kind: "RGB24".to_string(),
                dataurl: String::new(),
            },
        }),
        Coord::new(0, 0),
        0,
        ids,
    );
    el.name = name.to_string();
    el
}

#[test]
fn empty_scene_yields_sentinel_comment() {
    assert_eq!(generate_yaml(&[]), EMPTY_SCENE_YAML);
}

#[test]
fn buckets_appear_in_fixed_order_and_only_when_non_empty() {
    let mut ids = SequentialIdGen::new("el");
    let elements = vec![
        image_element(&mut ids, "img1", "image1"),
        text_element(&mut ids, "font1", "hello", "text1"),
    ];
    let yaml = generate_yaml(&elements);

    let fonts = yaml.find("fonts:\n").unwrap();
    let images = yaml.find("images:\n").unwrap();
    assert!(fonts < images);
    assert!(!yaml.contains("animations:"));
}

#[test]
fn deduplicates_by_asset_identity() {
    let mut ids = SequentialIdGen::new("el");
    let mut a = text_element(&mut ids, "font1", "one", "text1");
    a.x = 0;
    let mut b = text_element(&mut ids, "font1", "two", "text2");
    b.x = 40; // different placement, same asset
    let yaml = generate_yaml(&[a, b]);

    assert_eq!(yaml.matches("- id: \"font1\"").count(), 1);
    assert!(yaml.contains("#text1"));
    assert!(!yaml.contains("#text2"));
}

#[test]
fn dedup_is_global_across_kinds_first_occurrence_wins() {
    let mut ids = SequentialIdGen::new("el");
    let elements = vec![
        image_element(&mut ids, "shared", "image1"),
        image_element(&mut ids, "shared", "image2"),
        image_element(&mut ids, "other", "image3"),
    ];
    let yaml = generate_yaml(&elements);
    assert!(yaml.contains("#image1"));
    assert!(!yaml.contains("#image2"));
    assert!(yaml.contains("#image3"));
    // Order within the bucket preserves list order.
    assert!(yaml.find("#image1").unwrap() < yaml.find("#image3").unwrap());
}

#[test]
fn generation_is_idempotent() {
    let mut ids = SequentialIdGen::new("el");
    let elements = vec![
        text_element(&mut ids, "font1", "hello", "text1"),
        image_element(&mut ids, "img1", "image1"),
    ];
    assert_eq!(generate_yaml(&elements), generate_yaml(&elements));
}

#[test]
fn full_document_shape() {
    let mut ids = SequentialIdGen::new("el");
    let elements = vec![text_element(&mut ids, "font1", "hi", "text1")];
    assert_eq!(
        generate_yaml(&elements),
        "fonts:\n  #text1\n  - id: \"font1\"\n    file: \"fonts/pixel.ttf\"\n    size: 8\n    glyphs: \"ab\"\n"
    );
}

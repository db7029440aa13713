//! espscene is the scene-composition core of a visual editor for ESPHome
//! displays.
//!
//! It models a display scene as an ordered graph of placed elements (text
//! rendered with bitmap fonts, images, animations) and turns that graph
//! into three artifacts:
//!
//! 1. **Pixels**: a deterministic rasterizer converts packed 1-bit glyph
//!    tables into RGBA surfaces ([`FontAsset::render`]), and elements blit
//!    themselves onto a shared [`Surface`].
//! 2. **ESPHome YAML**: [`generate_yaml`] describes the scene's assets,
//!    deduplicated by asset identity.
//! 3. **Lambda C++**: [`generate_cpp`] emits one illustrative display call
//!    per placement.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single UI turn**: every graph mutation and generator run executes
//!   synchronously inside one interaction callback; generators observe
//!   only fully-applied states.
//! - **Recoverable means quiet**: absent asset data and unmatched glyphs
//!   return `None`/skip instead of erroring; only malformed construction
//!   input fails an element.
//! - **Deterministic ids on demand**: element identity comes from an
//!   injected [`IdGen`], random in production, sequential in tests.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod generate;
mod render;
mod scene;

pub use assets::animation::{AnimationAsset, FrameCursor};
pub use assets::font::{FontAsset, Glyph, TextBound};
pub use assets::image::ImageAsset;
pub use assets::library::AssetLibrary;
pub use foundation::core::{Coord, Rect, Rgb24, Rgba8, TextAlign};
pub use foundation::error::{SceneError, SceneResult};
pub use foundation::ident::{IdGen, RandomIdGen, SequentialIdGen};
pub use generate::cpp::{EMPTY_SCENE_CPP, generate_cpp};
pub use generate::yaml::{EMPTY_SCENE_YAML, generate_yaml};
pub use render::surface::Surface;
pub use scene::element::{
    AnimationPayload, ElementKind, ElementPayload, ImagePayload, NO_ESPHOME_ID, NO_NAME,
    ResizeCorner, SceneElement, TextPayload,
};
pub use scene::graph::SceneGraph;
pub use scene::wire::{ElementJson, SCENE_FORMAT_VERSION, SceneFile};

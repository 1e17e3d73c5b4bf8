//! Polygon workspace engine.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! whole interactive surface: a tray of randomly generated polygons, an SVG
//! workspace with a pan/zoom camera and a ruled grid, drag-and-drop from the
//! tray onto the workspace, and saving the result to `localStorage`. Everything
//! except [`host`] and [`render`] is plain Rust and is tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`viewport`] | Pan/zoom controller and placed shapes |
//! | [`tray`] | Buffer tray and drag source |
//! | [`toolbar`] | Create / Save / Clear buttons |
//! | [`component`] | Shared component trait |
//! | [`input`] | UI events, gesture state and the global input bus |
//! | [`grid`] | Grid lines and ruler labels |
//! | [`polygon`] | Random regular-polygon generator |
//! | [`doc`] | Point lists, polygons and the persisted document |
//! | [`persist`] | Persistence gateways (memory and `localStorage`) |
//! | [`scene`] | Declarative layer contents |
//! | [`render`] | SVG/DOM back end for scenes |
//! | [`host`] | wasm entry point and DOM listeners |
//! | [`error`] | Errors raised while binding to the page |
//! | [`consts`] | Shared numeric and string constants |

pub mod camera;
pub mod component;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod grid;
pub mod host;
pub mod input;
pub mod persist;
pub mod polygon;
pub mod render;
pub mod scene;
pub mod toolbar;
pub mod tray;
pub mod viewport;

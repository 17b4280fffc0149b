// Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use particle_field_backend::{
    CanvasSurface, DrawingSurface, FieldError, ParticleBackground, Simulator,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn missing_canvas_is_reported_by_id() {
    let err = CanvasSurface::from_element_id("no-such-canvas").err().unwrap();
    assert_eq!(err, FieldError::CanvasNotFound("no-such-canvas".to_owned()));
}

#[wasm_bindgen_test]
fn non_canvas_element_is_rejected() {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    div.set_id("not-a-canvas");
    document.body().unwrap().append_child(&div).unwrap();

    let err = CanvasSurface::from_element_id("not-a-canvas").err().unwrap();
    assert_eq!(err, FieldError::NotACanvas("not-a-canvas".to_owned()));
}

#[wasm_bindgen_test]
fn resize_sets_canvas_pixel_size() {
    let canvas = add_canvas("resize-canvas");
    let mut sim = Simulator::new(CanvasSurface::new(canvas.clone()).unwrap(), 320, 200).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (320, 200));

    assert!(sim.resize(800, 600));
    assert_eq!((canvas.width(), canvas.height()), (800, 600));

    assert!(!sim.resize(0, 600));
    assert_eq!((canvas.width(), canvas.height()), (800, 600));
}

#[wasm_bindgen_test]
fn canvas_surface_draws_without_errors() {
    let canvas = add_canvas("draw-canvas");
    let mut surface = CanvasSurface::new(canvas).unwrap();
    surface.set_size(100, 100);
    surface.clear();
    surface
        .fill_circle([50.0, 50.0], 2.0, particle_field_backend::Color::PALETTE[0])
        .unwrap();
    surface
        .stroke_line([0.0, 0.0], [10.0, 10.0], particle_field_backend::Color::PALETTE[1])
        .unwrap();
}

#[wasm_bindgen_test]
fn background_initializes_and_runs() {
    add_canvas("particles-js");
    let mut background = ParticleBackground::new("particles-js").unwrap();
    background.initialize(60);
    assert_eq!(background.particle_count(), 60);

    background.enable_links(150.0, 0.4);
    background.render().unwrap();

    background.run().unwrap();
    assert!(background.is_running());
    background.run().unwrap();
    background.stop();
    assert!(!background.is_running());
}

#[wasm_bindgen_test]
fn fit_to_window_matches_viewport() {
    add_canvas("fit-canvas");
    let mut background = ParticleBackground::new("fit-canvas").unwrap();
    background.fit_to_window().unwrap();
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap() as u32;
    assert_eq!(background.width(), width);
}

#[wasm_bindgen_test]
fn density_start_scales_count_to_viewport() {
    add_canvas("density-canvas");
    let mut background =
        particle_field_backend::start_with_density("density-canvas", 120, 800.0).unwrap();
    let expected = particle_field_backend::Density::default()
        .count_for(background.width(), background.height());
    assert_eq!(background.particle_count(), expected);
    assert!(background.is_running());
    background.stop();
}

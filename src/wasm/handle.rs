//! JS-facing handle. The page's buttons call these methods; downloading the
//! exported text is left to the page.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use super::render::{self, Renderer};
use crate::{ExportedShader, StepParameter, Studio, StudioConfig, StudioError};

type Clock = fn() -> i64;

fn date_now() -> i64 {
    js_sys::Date::now() as i64
}

impl From<StudioError> for JsValue {
    fn from(err: StudioError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[wasm_bindgen]
pub struct ShaderExport {
    inner: ExportedShader,
}

#[wasm_bindgen]
impl ShaderExport {
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.inner.filename.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn source(&self) -> String {
        self.inner.source.clone()
    }
}

#[wasm_bindgen]
pub struct StudioHandle {
    studio: Rc<RefCell<Studio<Clock>>>,
}

/// Attach a studio to the canvas with `canvas_id` (default `glCanvas`) and
/// start rendering.
#[wasm_bindgen]
pub fn launch(canvas_id: Option<String>) -> Result<StudioHandle, JsValue> {
    let mut config = StudioConfig::default();
    if let Some(id) = canvas_id {
        config.canvas_id = id;
    }

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let canvas = document
        .get_element_by_id(&config.canvas_id)
        .ok_or("canvas not found")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let studio = Rc::new(RefCell::new(Studio::new(config.initial, date_now as Clock)?));
    let renderer = Renderer::new(canvas)?;
    render::start(studio.clone(), renderer)?;
    log::info!("studio attached to #{}", config.canvas_id);

    Ok(StudioHandle { studio })
}

#[wasm_bindgen]
impl StudioHandle {
    #[wasm_bindgen(js_name = setPreset)]
    pub fn set_preset(&self, id: &str) -> Result<(), JsValue> {
        Ok(self.studio.borrow_mut().set_preset(id)?)
    }

    #[wasm_bindgen(js_name = setFlow)]
    pub fn set_flow(&self, level: i32) -> Result<(), JsValue> {
        Ok(self.studio.borrow_mut().set_flow(level.into())?)
    }

    #[wasm_bindgen(js_name = setDepth)]
    pub fn set_depth(&self, level: i32) -> Result<(), JsValue> {
        Ok(self.studio.borrow_mut().set_depth(level.into())?)
    }

    #[wasm_bindgen(js_name = setMovement)]
    pub fn set_movement(&self, level: i32) -> Result<(), JsValue> {
        Ok(self.studio.borrow_mut().set_movement(level.into())?)
    }

    #[wasm_bindgen(js_name = setHarmony)]
    pub fn set_harmony(&self, id: &str) -> Result<(), JsValue> {
        Ok(self.studio.borrow_mut().set_harmony(id)?)
    }

    /// Returns whether the animation is playing after the toggle.
    #[wasm_bindgen(js_name = togglePlay)]
    pub fn toggle_play(&self) -> bool {
        let mut studio = self.studio.borrow_mut();
        studio.toggle_play();
        studio.is_playing()
    }

    #[wasm_bindgen(js_name = resetClock)]
    pub fn reset_clock(&self) {
        self.studio.borrow_mut().reset_clock();
    }

    #[wasm_bindgen(js_name = requestExport)]
    pub fn request_export(&self) -> ShaderExport {
        ShaderExport {
            inner: self.studio.borrow().request_export(),
        }
    }

    #[wasm_bindgen(getter, js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.studio.borrow().is_playing()
    }

    #[wasm_bindgen(getter, js_name = elapsedLabel)]
    pub fn elapsed_label(&self) -> String {
        self.studio.borrow().elapsed_label()
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> u32 {
        self.studio.borrow().fps()
    }

    #[wasm_bindgen(getter, js_name = flowLabel)]
    pub fn flow_label(&self) -> String {
        self.studio.borrow().level_label(StepParameter::Flow).to_string()
    }

    #[wasm_bindgen(getter, js_name = depthLabel)]
    pub fn depth_label(&self) -> String {
        self.studio.borrow().level_label(StepParameter::Depth).to_string()
    }

    #[wasm_bindgen(getter, js_name = movementLabel)]
    pub fn movement_label(&self) -> String {
        self.studio.borrow().level_label(StepParameter::Movement).to_string()
    }
}

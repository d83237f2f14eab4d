#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

pub mod clock;
pub mod config;
pub mod error;
pub mod harmony;
pub mod params;
pub mod program;
pub mod shader;
pub mod studio;

pub use clock::{AnimationClock, FrameStats, PlayState, TimeSource};
pub use config::StudioConfig;
pub use error::{Result, StudioError};
pub use harmony::{Harmony, HarmonyPalette};
pub use params::{map, ControlState, ShaderParameters, StepParameter};
pub use program::ActiveProgram;
pub use shader::{fragment_source, generate, Preset, ShaderProgramSource, VERTEX_SHADER};
pub use studio::{ExportedShader, FrameUniforms, Studio};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod handle;
    mod render;

    pub use handle::{launch, ShaderExport, StudioHandle};

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(crate::StudioConfig::default().log_level).ok();
        log::info!("shader studio loaded");
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{launch, ShaderExport, StudioHandle};

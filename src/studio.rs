//! The editor session: control state, animation clock and the current
//! generated program.
//!
//! Shader source is regenerated only when preset, flow, depth or movement
//! change. Harmony and time only affect the per-frame uniforms.

use crate::clock::{elapsed_label, AnimationClock, FrameStats, PlayState, TimeSource};
use crate::error::Result;
use crate::harmony::{Harmony, Rgb};
use crate::params::{self, ControlState, ShaderParameters, StepParameter};
use crate::shader::{Preset, ShaderProgramSource};

/// Values bound every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub resolution: [f32; 2],
    pub colors: [Rgb; 3],
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedShader {
    pub filename: String,
    pub source: String,
}

pub struct Studio<T> {
    time: T,
    state: ControlState,
    params: ShaderParameters,
    clock: AnimationClock,
    stats: FrameStats,
    program: ShaderProgramSource,
    pending: bool,
}

impl<T: TimeSource> Studio<T> {
    pub fn new(initial: ControlState, time: T) -> Result<Self> {
        let mapped = params::map(&initial)?;
        let program = ShaderProgramSource::new(initial.preset, &mapped);
        let now = time.now_millis();
        Ok(Self {
            time,
            state: initial,
            params: mapped,
            clock: AnimationClock::new(now),
            stats: FrameStats::new(now),
            program,
            pending: true,
        })
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Parameters mapped from the current control state.
    pub fn parameters(&self) -> &ShaderParameters {
        &self.params
    }

    /// Display label of the active level, e.g. `Gentle` for flow 1.
    pub fn level_label(&self, parameter: StepParameter) -> &'static str {
        let index = match parameter {
            StepParameter::Flow => self.state.flow,
            StepParameter::Depth => self.state.depth,
            StepParameter::Movement => self.state.movement,
        };
        parameter.labels()[index]
    }

    pub fn program(&self) -> &ShaderProgramSource {
        &self.program
    }

    /// Hand out the program if it changed since the last call.
    pub fn take_pending_program(&mut self) -> Option<&ShaderProgramSource> {
        if std::mem::take(&mut self.pending) {
            Some(&self.program)
        } else {
            None
        }
    }

    pub fn set_preset(&mut self, id: &str) -> Result<()> {
        let preset: Preset = id.parse()?;
        self.apply(ControlState { preset, ..self.state })
    }

    pub fn set_flow(&mut self, index: i64) -> Result<()> {
        let flow = StepParameter::Flow.check_index(index)?;
        self.apply(ControlState { flow, ..self.state })
    }

    pub fn set_depth(&mut self, index: i64) -> Result<()> {
        let depth = StepParameter::Depth.check_index(index)?;
        self.apply(ControlState { depth, ..self.state })
    }

    pub fn set_movement(&mut self, index: i64) -> Result<()> {
        let movement = StepParameter::Movement.check_index(index)?;
        self.apply(ControlState { movement, ..self.state })
    }

    pub fn set_harmony(&mut self, id: &str) -> Result<()> {
        let harmony: Harmony = id.parse()?;
        let next = ControlState { harmony, ..self.state };
        // Colors are uniforms; the program stays as it is.
        self.params = params::map(&next)?;
        self.state = next;
        log::debug!("harmony -> {harmony}");
        Ok(())
    }

    fn apply(&mut self, next: ControlState) -> Result<()> {
        let mapped = params::map(&next)?;
        self.program = ShaderProgramSource::new(next.preset, &mapped);
        self.params = mapped;
        self.state = next;
        self.pending = true;
        log::debug!(
            "regenerated {} (speed {:.2}, complexity {:.2}, intensity {:.2})",
            next.preset,
            mapped.speed,
            mapped.complexity,
            mapped.intensity
        );
        Ok(())
    }

    pub fn toggle_play(&mut self) -> PlayState {
        let state = self.clock.toggle_play(self.time.now_millis());
        log::info!("clock {state:?} at {}", elapsed_label(self.clock.elapsed_seconds()));
        state
    }

    pub fn reset_clock(&mut self) {
        self.clock.reset(self.time.now_millis());
        log::info!("clock reset");
    }

    /// Advance one rendered frame.
    pub fn tick(&mut self) {
        let now = self.time.now_millis();
        self.clock.tick(now);
        if let Some(fps) = self.stats.record(now) {
            log::trace!("{fps} fps");
        }
    }

    pub fn is_playing(&self) -> bool {
        self.clock.is_playing()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.clock.elapsed_seconds()
    }

    pub fn elapsed_label(&self) -> String {
        elapsed_label(self.clock.elapsed_seconds())
    }

    pub fn fps(&self) -> u32 {
        self.stats.fps()
    }

    pub fn frame_uniforms(&self, width: u32, height: u32) -> FrameUniforms {
        FrameUniforms {
            time: self.clock.elapsed_seconds() as f32,
            resolution: [width as f32, height as f32],
            colors: self.params.colors.colors(),
        }
    }

    pub fn request_export(&self) -> ExportedShader {
        let filename = format!("shader_{}_{}.frag", self.state.preset, self.time.now_millis());
        log::info!("exporting {filename}");
        ExportedShader {
            filename,
            source: self.program.fragment.clone(),
        }
    }
}

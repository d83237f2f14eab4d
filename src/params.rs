//! Stepped controls and their mapping onto continuous shader parameters.

use std::fmt;

use crate::error::{Result, StudioError};
use crate::harmony::{Harmony, HarmonyPalette};
use crate::shader::Preset;

const FLOW_SPEED: [f32; 4] = [0.2, 0.5, 1.0, 1.8];
const DEPTH_COMPLEXITY: [f32; 3] = [0.8, 1.2, 2.0];
const MOVEMENT_INTENSITY: [f32; 3] = [0.6, 1.0, 1.5];

/// One of the three stepped sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepParameter {
    Flow,
    Depth,
    Movement,
}

impl StepParameter {
    pub const fn levels(self) -> &'static [f32] {
        match self {
            Self::Flow => &FLOW_SPEED,
            Self::Depth => &DEPTH_COMPLEXITY,
            Self::Movement => &MOVEMENT_INTENSITY,
        }
    }

    pub const fn labels(self) -> &'static [&'static str] {
        match self {
            Self::Flow => &["Still", "Gentle", "Moderate", "Active"],
            Self::Depth => &["Shallow", "Medium", "Deep"],
            Self::Movement => &["Calm", "Flowing", "Dynamic"],
        }
    }

    /// Resolve a level index into its table value.
    pub fn value(self, index: usize) -> Result<f32> {
        let levels = self.levels();
        levels.get(index).copied().ok_or(StudioError::ParameterIndexOutOfRange {
            parameter: self,
            index: index as i64,
            levels: levels.len(),
        })
    }

    /// Validate a raw index coming from an untyped caller (e.g. JS).
    pub fn check_index(self, index: i64) -> Result<usize> {
        let levels = self.levels().len();
        usize::try_from(index)
            .ok()
            .filter(|&i| i < levels)
            .ok_or(StudioError::ParameterIndexOutOfRange {
                parameter: self,
                index,
                levels,
            })
    }
}

impl fmt::Display for StepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Flow => "flow",
            Self::Depth => "depth",
            Self::Movement => "movement",
        })
    }
}

/// The full discrete state of the editor controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlState {
    pub preset: Preset,
    pub flow: usize,
    pub depth: usize,
    pub movement: usize,
    pub harmony: Harmony,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            preset: Preset::Ripples,
            flow: 0,
            depth: 0,
            movement: 0,
            harmony: Harmony::Ash,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderParameters {
    pub speed: f32,
    pub complexity: f32,
    pub intensity: f32,
    pub colors: HarmonyPalette,
}

/// Map a control state onto shader parameters.
pub fn map(state: &ControlState) -> Result<ShaderParameters> {
    Ok(ShaderParameters {
        speed: StepParameter::Flow.value(state.flow)?,
        complexity: StepParameter::Depth.value(state.depth)?,
        intensity: StepParameter::Movement.value(state.movement)?,
        colors: *state.harmony.palette(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_line_up_with_levels() {
        for p in [StepParameter::Flow, StepParameter::Depth, StepParameter::Movement] {
            assert_eq!(p.labels().len(), p.levels().len(), "{p}");
        }
    }

    #[test]
    fn check_index_rejects_negative() {
        let err = StepParameter::Depth.check_index(-1).unwrap_err();
        assert_eq!(
            err,
            StudioError::ParameterIndexOutOfRange {
                parameter: StepParameter::Depth,
                index: -1,
                levels: 3
            }
        );
        assert_eq!(StepParameter::Flow.check_index(3).unwrap(), 3);
    }
}

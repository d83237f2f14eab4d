//! GLSL source generation for the six water presets.
//!
//! Every preset body reads `uv`, `t`, `speed`, `complexity`, `intensity` and
//! the three color uniforms, and must leave a `vec3 col` in scope for the
//! shared glow/clamp tail.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StudioError};
use crate::params::ShaderParameters;

/// Pass-through full-screen quad, shared by every preset.
pub const VERTEX_SHADER: &str = "attribute vec2 position;
void main() {
    gl_Position = vec4(position, 0.0, 1.0);
}
";

const FRAGMENT_HEADER: &str = "precision mediump float;

uniform float iTime;
uniform vec2 iResolution;
uniform vec3 color1;
uniform vec3 color2;
uniform vec3 color3;

void main() {
    vec2 uv = (gl_FragCoord.xy * 2.0 - iResolution) / iResolution.y;
    float t = iTime;
";

// `dist` may already be declared by the preset body, so the glow measures
// `length(uv)` inline.
const FRAGMENT_TAIL: &str = "
    col += vec3(0.15) / (length(uv) * 3.0 + 1.0);
    col = clamp(col, 0.0, 1.2);

    gl_FragColor = vec4(col, 1.0);
}
";

const RIPPLES: &str = "
    vec2 p = uv;
    float dist = length(p);

    float ripple1 = sin(dist * 12.0 * complexity - t * speed * 2.0) * 0.5 + 0.5;
    float ripple2 = sin(dist * 8.0 * complexity - t * speed * 1.5 + 1.0) * 0.5 + 0.5;
    float ripple3 = sin(dist * 15.0 * complexity - t * speed * 2.5 + 2.0) * 0.5 + 0.5;

    float falloff = exp(-dist * (2.0 - intensity));

    float pattern = (ripple1 * 0.5 + ripple2 * 0.3 + ripple3 * 0.2) * falloff;

    vec3 col = mix(color1, color2, pattern);
    col = mix(col, color3, ripple1 * falloff);
";

const CURRENT: &str = "
    vec2 p = uv;

    float current = sin(p.x * 4.0 * complexity - t * speed * 1.5);
    current += sin((p.x - p.y * 0.5) * 6.0 * complexity - t * speed * 2.0) * 0.5;
    current += cos(p.x * 3.0 * complexity + p.y * 2.0 - t * speed) * 0.3;

    float depthGrad = (p.y + 1.0) * 0.5;
    depthGrad = pow(depthGrad, 1.5 - intensity * 0.5);

    float pattern = (current * 0.4 + 0.5) * depthGrad;

    vec3 col = mix(color2, color1, pattern);
    col = mix(col, color3, sin(pattern * 3.14159 + t * speed * 0.5) * 0.5 + 0.5);
";

const DEEP: &str = "
    vec2 p = uv;
    float dist = length(p);

    float layer1 = sin(p.y * 5.0 * complexity + t * speed * 0.3);
    float layer2 = sin(p.y * 8.0 * complexity + t * speed * 0.5 + 1.0);
    float layer3 = sin(p.y * 12.0 * complexity + t * speed * 0.7 + 2.0);

    float variation = sin(p.x * 3.0 + t * speed * 0.2) * 0.3;

    float pattern = (layer1 * 0.5 + layer2 * 0.3 + layer3 * 0.2 + variation);
    pattern = pattern * 0.5 + 0.5;

    pattern *= 1.0 - dist * (1.5 - intensity * 0.5);

    vec3 col = mix(color3, color2, pattern);
    col = mix(col, color1, layer1 * 0.3 + 0.4);
";

const SURFACE: &str = "
    vec2 p = uv;

    float scatter1 = sin(p.x * 10.0 * complexity + t * speed * 2.0);
    float scatter2 = sin(p.y * 8.0 * complexity - t * speed * 1.5);
    float scatter3 = sin((p.x + p.y) * 6.0 * complexity + t * speed * 1.8);

    float pattern = scatter1 * scatter2 * 0.5 + scatter3 * 0.3 + 0.5;
    pattern *= 1.0 + sin(t * speed * 0.5) * intensity * 0.3;

    float shimmer = sin(p.x * 20.0 + p.y * 15.0 + t * speed * 3.0) * 0.1;
    pattern += shimmer;

    vec3 col = mix(color1, color3, pattern * 0.8);
    col = mix(col, color2, scatter1 * 0.4 + 0.5);
";

const TIDE: &str = "
    vec2 p = uv;

    float tide = sin(t * speed * 0.8) * intensity * 0.5;

    float wave1 = sin(p.x * 6.0 * complexity + t * speed * 1.2 + tide);
    float wave2 = sin(p.x * 4.0 * complexity - t * speed * 0.8 + tide * 1.5);

    float gradient = (p.y + 1.0 + tide * 0.3) * 0.5;

    float pattern = (wave1 * 0.6 + wave2 * 0.4) * 0.5 + 0.5;
    pattern *= gradient;

    vec3 col = mix(color2, color1, pattern);
    col = mix(col, color3, abs(sin(t * speed * 0.4)) * 0.6 + 0.2);
";

const REFLECT: &str = "
    vec2 p = uv;

    float dist = length(p);
    float angle = atan(p.y, p.x);

    float reflect1 = sin(dist * 10.0 * complexity - t * speed) * cos(angle * 4.0);
    float reflect2 = cos(dist * 8.0 * complexity + t * speed * 0.7) * sin(angle * 6.0);

    float radial = exp(-dist * (2.0 - intensity * 0.5));

    float pattern = (reflect1 * 0.6 + reflect2 * 0.4) * 0.5 + 0.5;
    pattern *= radial;

    vec3 col = mix(color1, color2, pattern);
    col = mix(col, color3, reflect1 * radial * 0.5 + 0.5);
";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Ripples,
    Current,
    Deep,
    Surface,
    Tide,
    Reflect,
}

impl Preset {
    pub const ALL: [Self; 6] = [
        Self::Ripples,
        Self::Current,
        Self::Deep,
        Self::Surface,
        Self::Tide,
        Self::Reflect,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Ripples => "ripples",
            Self::Current => "current",
            Self::Deep => "deep",
            Self::Surface => "surface",
            Self::Tide => "tide",
            Self::Reflect => "reflect",
        }
    }

    /// GLSL statements computing `pattern` and `col` for this preset.
    pub const fn body(self) -> &'static str {
        match self {
            Self::Ripples => RIPPLES,
            Self::Current => CURRENT,
            Self::Deep => DEEP,
            Self::Surface => SURFACE,
            Self::Tide => TIDE,
            Self::Reflect => REFLECT,
        }
    }
}

impl FromStr for Preset {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| StudioError::UnknownPreset(s.to_string()))
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    pub fn new(preset: Preset, params: &ShaderParameters) -> Self {
        Self {
            vertex: VERTEX_SHADER.to_string(),
            fragment: fragment_source(preset, params.speed, params.complexity, params.intensity),
        }
    }
}

/// Assemble the fragment program for `preset`, baking the three numeric
/// parameters in as two-decimal literals.
pub fn fragment_source(preset: Preset, speed: f32, complexity: f32, intensity: f32) -> String {
    let body = preset.body();
    let params = format!(
        "
    float speed = {speed:.2};
    float complexity = {complexity:.2};
    float intensity = {intensity:.2};
"
    );
    let len = FRAGMENT_HEADER.len() + params.len() + body.len() + FRAGMENT_TAIL.len();
    let mut src = String::with_capacity(len);
    src.push_str(FRAGMENT_HEADER);
    src.push_str(&params);
    src.push_str(body);
    src.push_str(FRAGMENT_TAIL);
    src
}

/// String-keyed entry point for callers holding a raw preset id.
pub fn generate(preset: &str, speed: f32, complexity: f32, intensity: f32) -> Result<String> {
    let preset: Preset = preset.parse()?;
    Ok(fragment_source(preset, speed, complexity, intensity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_body_leaves_col_in_scope() {
        for preset in Preset::ALL {
            assert!(preset.body().contains("vec3 col = mix("), "{preset}");
            assert!(preset.body().contains("float pattern"), "{preset}");
        }
    }

    #[test]
    fn braces_balance() {
        for preset in Preset::ALL {
            let src = fragment_source(preset, 0.5, 1.2, 1.0);
            let open = src.matches('{').count();
            let close = src.matches('}').count();
            assert_eq!(open, close, "{preset}");
        }
    }

    #[test]
    fn dist_declared_at_most_once() {
        for preset in Preset::ALL {
            let src = fragment_source(preset, 0.2, 0.8, 0.6);
            assert!(src.matches("float dist").count() <= 1, "{preset}");
        }
    }
}

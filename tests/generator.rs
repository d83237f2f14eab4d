use shader_studio::{
    fragment_source, generate, map, ControlState, Harmony, Preset, ShaderProgramSource,
    StudioError, VERTEX_SHADER,
};

#[test]
fn generation_is_pure() {
    for preset in Preset::ALL {
        let a = fragment_source(preset, 1.8, 2.0, 1.5);
        let b = fragment_source(preset, 1.8, 2.0, 1.5);
        assert_eq!(a, b, "{preset}");
    }
}

#[test]
fn every_preset_id_generates() {
    for id in ["ripples", "current", "deep", "surface", "tide", "reflect"] {
        let src = generate(id, 0.5, 1.2, 1.0).unwrap();
        assert!(src.contains("gl_FragColor = vec4(col, 1.0);"), "{id}");
        assert_eq!(id.parse::<Preset>().unwrap().to_string(), id);
    }
}

#[test]
fn unknown_preset_is_rejected() {
    assert_eq!(
        generate("fog", 0.5, 1.2, 1.0).unwrap_err(),
        StudioError::UnknownPreset("fog".into())
    );
}

#[test]
fn parameters_are_baked_with_two_decimals() {
    let src = generate("ripples", 1.0, 1.2, 0.6).unwrap();
    assert!(src.contains("float speed = 1.00;"));
    assert!(src.contains("float complexity = 1.20;"));
    assert!(src.contains("float intensity = 0.60;"));
}

#[test]
fn shared_header_and_tail_are_present() {
    for preset in Preset::ALL {
        let src = fragment_source(preset, 0.2, 0.8, 0.6);
        assert!(src.starts_with("precision mediump float;"));
        assert!(src.contains("vec2 uv = (gl_FragCoord.xy * 2.0 - iResolution) / iResolution.y;"));
        assert!(src.contains("col += vec3(0.15) / (length(uv) * 3.0 + 1.0);"));
        assert!(src.contains("col = clamp(col, 0.0, 1.2);"));
        for uniform in ["uniform float iTime;", "uniform vec2 iResolution;"] {
            assert!(src.contains(uniform), "{preset} missing {uniform}");
        }
    }
}

#[test]
fn presets_differ_only_in_body() {
    let ripples = fragment_source(Preset::Ripples, 0.2, 0.8, 0.6);
    let tide = fragment_source(Preset::Tide, 0.2, 0.8, 0.6);
    assert_ne!(ripples, tide);
    assert!(ripples.contains("float falloff = exp(-dist * (2.0 - intensity));"));
    assert!(!tide.contains("falloff"));
    assert!(tide.contains("float tide = sin(t * speed * 0.8) * intensity * 0.5;"));
}

#[test]
fn colors_stay_uniforms() {
    let state = ControlState::default();
    let params = map(&state).unwrap();
    let program = ShaderProgramSource::new(state.preset, &params);

    assert_eq!(program.vertex, VERTEX_SHADER);
    assert!(program.fragment.contains("dist * 12.0 * complexity"));
    assert!(program.fragment.contains("float speed = 0.20;"));
    assert!(program.fragment.contains("float complexity = 0.80;"));
    assert!(program.fragment.contains("float intensity = 0.60;"));
    for name in ["color1", "color2", "color3"] {
        assert!(program.fragment.contains(&format!("uniform vec3 {name};")));
    }
    assert!(!program.fragment.contains("0.902"));

    // Switching harmony cannot change the source.
    let ocean = ControlState { harmony: Harmony::Ocean, ..state };
    let again = ShaderProgramSource::new(ocean.preset, &map(&ocean).unwrap());
    assert_eq!(program, again);
}

#[test]
fn vertex_stage_is_a_passthrough_quad() {
    assert!(VERTEX_SHADER.contains("attribute vec2 position;"));
    assert!(VERTEX_SHADER.contains("gl_Position = vec4(position, 0.0, 1.0);"));
}

fn assert_lines(preset: Preset, lines: &[&str]) {
    let src = fragment_source(preset, 0.5, 1.2, 1.0);
    for line in lines {
        assert!(src.contains(line), "{preset} is missing `{line}`");
    }
}

#[test]
fn ripples_formula() {
    assert_lines(
        Preset::Ripples,
        &[
            "float ripple1 = sin(dist * 12.0 * complexity - t * speed * 2.0) * 0.5 + 0.5;",
            "float ripple2 = sin(dist * 8.0 * complexity - t * speed * 1.5 + 1.0) * 0.5 + 0.5;",
            "float ripple3 = sin(dist * 15.0 * complexity - t * speed * 2.5 + 2.0) * 0.5 + 0.5;",
            "float falloff = exp(-dist * (2.0 - intensity));",
            "float pattern = (ripple1 * 0.5 + ripple2 * 0.3 + ripple3 * 0.2) * falloff;",
            "vec3 col = mix(color1, color2, pattern);",
            "col = mix(col, color3, ripple1 * falloff);",
        ],
    );
}

#[test]
fn current_formula() {
    assert_lines(
        Preset::Current,
        &[
            "float current = sin(p.x * 4.0 * complexity - t * speed * 1.5);",
            "current += sin((p.x - p.y * 0.5) * 6.0 * complexity - t * speed * 2.0) * 0.5;",
            "current += cos(p.x * 3.0 * complexity + p.y * 2.0 - t * speed) * 0.3;",
            "float depthGrad = (p.y + 1.0) * 0.5;",
            "depthGrad = pow(depthGrad, 1.5 - intensity * 0.5);",
            "float pattern = (current * 0.4 + 0.5) * depthGrad;",
            "vec3 col = mix(color2, color1, pattern);",
            "col = mix(col, color3, sin(pattern * 3.14159 + t * speed * 0.5) * 0.5 + 0.5);",
        ],
    );
}

#[test]
fn deep_formula() {
    assert_lines(
        Preset::Deep,
        &[
            "float layer1 = sin(p.y * 5.0 * complexity + t * speed * 0.3);",
            "float layer2 = sin(p.y * 8.0 * complexity + t * speed * 0.5 + 1.0);",
            "float layer3 = sin(p.y * 12.0 * complexity + t * speed * 0.7 + 2.0);",
            "float variation = sin(p.x * 3.0 + t * speed * 0.2) * 0.3;",
            "float pattern = (layer1 * 0.5 + layer2 * 0.3 + layer3 * 0.2 + variation);",
            "pattern = pattern * 0.5 + 0.5;",
            "pattern *= 1.0 - dist * (1.5 - intensity * 0.5);",
            "vec3 col = mix(color3, color2, pattern);",
            "col = mix(col, color1, layer1 * 0.3 + 0.4);",
        ],
    );
}

#[test]
fn surface_formula() {
    assert_lines(
        Preset::Surface,
        &[
            "float scatter1 = sin(p.x * 10.0 * complexity + t * speed * 2.0);",
            "float scatter2 = sin(p.y * 8.0 * complexity - t * speed * 1.5);",
            "float scatter3 = sin((p.x + p.y) * 6.0 * complexity + t * speed * 1.8);",
            "float pattern = scatter1 * scatter2 * 0.5 + scatter3 * 0.3 + 0.5;",
            "pattern *= 1.0 + sin(t * speed * 0.5) * intensity * 0.3;",
            "float shimmer = sin(p.x * 20.0 + p.y * 15.0 + t * speed * 3.0) * 0.1;",
            "pattern += shimmer;",
            "vec3 col = mix(color1, color3, pattern * 0.8);",
            "col = mix(col, color2, scatter1 * 0.4 + 0.5);",
        ],
    );
}

#[test]
fn tide_formula() {
    assert_lines(
        Preset::Tide,
        &[
            "float tide = sin(t * speed * 0.8) * intensity * 0.5;",
            "float wave1 = sin(p.x * 6.0 * complexity + t * speed * 1.2 + tide);",
            "float wave2 = sin(p.x * 4.0 * complexity - t * speed * 0.8 + tide * 1.5);",
            "float gradient = (p.y + 1.0 + tide * 0.3) * 0.5;",
            "float pattern = (wave1 * 0.6 + wave2 * 0.4) * 0.5 + 0.5;",
            "pattern *= gradient;",
            "vec3 col = mix(color2, color1, pattern);",
            "col = mix(col, color3, abs(sin(t * speed * 0.4)) * 0.6 + 0.2);",
        ],
    );
}

#[test]
fn reflect_formula() {
    assert_lines(
        Preset::Reflect,
        &[
            "float angle = atan(p.y, p.x);",
            "float reflect1 = sin(dist * 10.0 * complexity - t * speed) * cos(angle * 4.0);",
            "float reflect2 = cos(dist * 8.0 * complexity + t * speed * 0.7) * sin(angle * 6.0);",
            "float radial = exp(-dist * (2.0 - intensity * 0.5));",
            "float pattern = (reflect1 * 0.6 + reflect2 * 0.4) * 0.5 + 0.5;",
            "pattern *= radial;",
            "vec3 col = mix(color1, color2, pattern);",
            "col = mix(col, color3, reflect1 * radial * 0.5 + 0.5);",
        ],
    );
}

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlProgram, WebGlShader,
    WebGlUniformLocation,
};

use crate::{ActiveProgram, FrameUniforms, ShaderProgramSource, Studio, StudioError, TimeSource};

const QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

/// A linked program with its uniform locations looked up once.
struct LinkedProgram {
    program: WebGlProgram,
    time: Option<WebGlUniformLocation>,
    resolution: Option<WebGlUniformLocation>,
    colors: [Option<WebGlUniformLocation>; 3],
}

pub struct Renderer {
    gl: GL,
    canvas: HtmlCanvasElement,
    active: ActiveProgram<LinkedProgram>,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let buffer = gl.create_buffer().ok_or("failed to create vertex buffer")?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let vertices = js_sys::Float32Array::from(&QUAD[..]);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &vertices, GL::STATIC_DRAW);

        Ok(Self {
            gl,
            canvas,
            active: ActiveProgram::default(),
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn rebuild(&mut self, source: &ShaderProgramSource) {
        let built = self.link(source);
        if let Some(old) = self.active.install(built) {
            self.gl.delete_program(Some(&old.program));
        }
        if let Some(linked) = self.active.current() {
            let position = self.gl.get_attrib_location(&linked.program, "position");
            if position >= 0 {
                self.gl.enable_vertex_attrib_array(position as u32);
                self.gl
                    .vertex_attrib_pointer_with_i32(position as u32, 2, GL::FLOAT, false, 0, 0);
            }
        }
    }

    fn link(&self, source: &ShaderProgramSource) -> Result<LinkedProgram, StudioError> {
        let gl = &self.gl;
        let vs = self.compile(GL::VERTEX_SHADER, &source.vertex)?;
        let fs = match self.compile(GL::FRAGMENT_SHADER, &source.fragment) {
            Ok(fs) => fs,
            Err(err) => {
                gl.delete_shader(Some(&vs));
                return Err(err);
            }
        };
        let program = gl
            .create_program()
            .ok_or_else(|| StudioError::BuildFailure("failed to create program".into()))?;
        gl.attach_shader(&program, &vs);
        gl.attach_shader(&program, &fs);
        gl.link_program(&program);
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let linked = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !linked {
            let info = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            return Err(StudioError::BuildFailure(format!("program link error: {info}")));
        }

        Ok(LinkedProgram {
            time: gl.get_uniform_location(&program, "iTime"),
            resolution: gl.get_uniform_location(&program, "iResolution"),
            colors: [
                gl.get_uniform_location(&program, "color1"),
                gl.get_uniform_location(&program, "color2"),
                gl.get_uniform_location(&program, "color3"),
            ],
            program,
        })
    }

    fn compile(&self, kind: u32, source: &str) -> Result<WebGlShader, StudioError> {
        let gl = &self.gl;
        let shader = gl
            .create_shader(kind)
            .ok_or_else(|| StudioError::BuildFailure("failed to create shader".into()))?;
        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);
        let ok = gl
            .get_shader_parameter(&shader, GL::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false);
        if ok {
            Ok(shader)
        } else {
            let info = gl.get_shader_info_log(&shader).unwrap_or_default();
            gl.delete_shader(Some(&shader));
            Err(StudioError::BuildFailure(format!("shader compilation error:\n{info}")))
        }
    }

    pub fn draw(&self, uniforms: &FrameUniforms) {
        let gl = &self.gl;
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        let Some(linked) = self.active.current() else {
            return;
        };
        gl.use_program(Some(&linked.program));
        gl.uniform1f(linked.time.as_ref(), uniforms.time);
        gl.uniform2f(
            linked.resolution.as_ref(),
            uniforms.resolution[0],
            uniforms.resolution[1],
        );
        for (loc, rgb) in linked.colors.iter().zip(uniforms.colors) {
            gl.uniform3f(loc.as_ref(), rgb[0], rgb[1], rgb[2]);
        }
        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
    }

    fn resize(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        self.gl.viewport(0, 0, width as i32, height as i32);
    }
}

fn window_size() -> Option<(u32, u32)> {
    let w = window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width as u32, height as u32))
}

/// Start the render loop: resize handling plus one tick/draw per animation
/// frame.
pub fn start<T: TimeSource + 'static>(
    studio: Rc<RefCell<Studio<T>>>,
    renderer: Renderer,
) -> Result<(), JsValue> {
    let win = window().ok_or("no window")?;

    if let Some((w, h)) = window_size() {
        renderer.resize(w, h);
    }
    let renderer = Rc::new(RefCell::new(renderer));

    // Resize canvas to fit window
    let resize_closure = {
        let renderer = renderer.clone();
        Closure::wrap(Box::new(move || {
            if let Some((w, h)) = window_size() {
                renderer.borrow().resize(w, h);
            }
        }) as Box<dyn FnMut()>)
    };
    win.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Animation loop
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively. Storing it inside an `Option`
    // allows us to create the `Closure` first and then obtain a reference to
    // it from within itself.
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let uniforms = {
            let mut studio = studio.borrow_mut();
            studio.tick();
            if let Some(source) = studio.take_pending_program() {
                renderer.borrow_mut().rebuild(source);
            }
            let canvas = renderer.borrow().canvas().clone();
            studio.frame_uniforms(canvas.width(), canvas.height())
        };
        renderer.borrow().draw(&uniforms);

        // schedule next
        let next = f.borrow();
        if let (Some(w), Some(cb)) = (window(), next.as_ref()) {
            if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame failed: {e:?}");
            }
        }
    }) as Box<dyn FnMut()>));

    let first = g.borrow();
    let callback = first.as_ref().ok_or("no frame callback")?;
    win.request_animation_frame(callback.as_ref().unchecked_ref())?;

    Ok(())
}

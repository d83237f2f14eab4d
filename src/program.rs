use crate::error::StudioError;

/// Holds the last successfully built program.
///
/// A failed rebuild is logged and dropped; whatever was installed before
/// keeps rendering until the next control change produces a good build.
#[derive(Debug)]
pub struct ActiveProgram<P> {
    current: Option<P>,
    failures: u32,
}

impl<P> Default for ActiveProgram<P> {
    fn default() -> Self {
        Self { current: None, failures: 0 }
    }
}

impl<P> ActiveProgram<P> {
    /// Install the outcome of a build. Returns the replaced program so the
    /// caller can release it.
    pub fn install(&mut self, built: Result<P, StudioError>) -> Option<P> {
        match built {
            Ok(program) => self.current.replace(program),
            Err(err) => {
                self.failures += 1;
                log::error!("{err}; keeping previous program");
                None
            }
        }
    }

    pub fn current(&self) -> Option<&P> {
        self.current.as_ref()
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }
}

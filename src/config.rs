use crate::params::ControlState;

#[derive(Clone, Debug)]
pub struct StudioConfig {
    /// Id of the `<canvas>` element the studio draws into.
    pub canvas_id: String,
    pub initial: ControlState,
    pub log_level: log::Level,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            canvas_id: "glCanvas".to_string(),
            initial: ControlState::default(),
            log_level: log::Level::Info,
        }
    }
}

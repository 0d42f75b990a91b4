/// Configuration for the outline engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit a `debug` event with every anchor point and the extrusion
    /// angles each time an outline is built.
    pub log_anchors: bool,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_anchors: false,
            profiling: ProfilingMode::Off,
        }
    }
}

impl Config {
    /// Configuration with anchor logging turned on.
    pub fn debug() -> Self {
        Config {
            log_anchors: true,
            ..Default::default()
        }
    }

    pub fn with_log_anchors(mut self, enabled: bool) -> Self {
        self.log_anchors = enabled;
        self
    }

    pub fn with_profiling(mut self, mode: ProfilingMode) -> Self {
        self.profiling = mode;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Scopes are recorded in-process
    On,
    /// Scopes are recorded and served to 'puffin_viewer' over HTTP
    WithWebServer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_quiet() {
        let config = Config::default();
        assert!(!config.log_anchors);
        assert_eq!(config.profiling, ProfilingMode::Off);
    }

    #[test]
    fn test_debug_config() {
        let config = Config::debug().with_profiling(ProfilingMode::On);
        assert!(config.log_anchors);
        assert_eq!(config.profiling, ProfilingMode::On);
    }
}

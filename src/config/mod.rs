mod directive;
mod settings;

pub use directive::{parse_directive, DIRECTIVE_NAME};
pub use settings::{
    LogFormat, LoggingConfig, PlaceholderConfig, RespondConfig, ServerConfig, Settings,
};

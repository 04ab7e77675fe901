// core/src/error/launch_error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("no command to run")]
    EmptyCommand,

    #[error("failed to run {}: {source}", .argv.join(" "))]
    Spawn {
        argv: Vec<String>,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to open {stream} pipe for {program}")]
    Pipe {
        program: String,
        stream: &'static str,
    },

    #[error("failed to wait for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lost track of {program}: supervisor exited without an exit status")]
    Supervisor { program: String },
}

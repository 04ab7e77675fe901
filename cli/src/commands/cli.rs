use std::path::PathBuf;

use clap::Parser;
use gotestsum_core::api as core_api;
use gotestsum_core::config::DEFAULT_FORMAT;

fn formats_help() -> String {
    let mut help = String::from("Formats:\n");
    for (name, about) in gotestsum_plugins::FORMATS {
        help.push_str(&format!("    {name:<18}{about}\n"));
    }
    help.push_str("\nArguments after the flags are passed to `go test`.");
    help
}

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "gotestsum",
    version,
    about = "Run go test and print a readable summary of the results",
    override_usage = "gotestsum [OPTIONS] [-- <GO TEST ARGS>...]",
    after_help = formats_help()
)]
pub struct Args {
    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Print test events in this format [env: GOTESTSUM_FORMAT] [default: short].
    #[arg(short = 'f', long)]
    pub format: Option<String>,

    /// Run the arguments as-is; the command must print `go test -json` output.
    #[arg(long)]
    pub raw_command: bool,

    /// Write all test events to this file [env: GOTESTSUM_JSONFILE].
    #[arg(long)]
    pub jsonfile: Option<String>,

    /// Write a JUnit XML report to this file [env: GOTESTSUM_JUNITFILE].
    #[arg(long)]
    pub junitfile: Option<String>,

    /// Never use colors.
    #[arg(long)]
    pub no_color: bool,

    /// Summary sections to omit: skipped, failed, errors, output.
    #[arg(long, value_delimiter = ',')]
    pub no_summary: Vec<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Args {
    /// Flags win over the environment, which wins over built-in defaults.
    pub fn into_options(self, env: &core_api::EnvOverrides) -> core_api::RunOptions {
        core_api::RunOptions {
            args: self.args,
            format: self
                .format
                .or_else(|| env.format.clone())
                .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            debug: self.debug,
            raw_command: self.raw_command,
            json_file: report_path(self.jsonfile, env.json_file.as_ref()),
            junit_file: report_path(self.junitfile, env.junit_file.as_ref()),
            no_color: self.no_color,
            no_summary: self.no_summary,
            test_directory: env.test_directory.clone(),
        }
    }
}

/// An empty flag value means no file, the same as an unset variable.
fn report_path(flag: Option<String>, env: Option<&String>) -> Option<PathBuf> {
    flag.filter(|p| !p.is_empty())
        .or_else(|| env.cloned())
        .map(PathBuf::from)
}

use crate::config::RunOptions;

const GO_TEST: [&str; 2] = ["go", "test"];
const JSON_FLAG: &str = "-json";
const DEFAULT_PACKAGES: &str = "./...";

/// Builds the argv of the test command.
///
/// - raw mode runs `opts.args` untouched;
/// - no args runs `go test -json` on `TEST_DIRECTORY` or `./...`;
/// - otherwise `go test` is prepended, with `-json` unless the args already
///   carry `-json`/`--json`, and `TEST_DIRECTORY` is appended when set.
pub fn compose_args(opts: &RunOptions) -> Vec<String> {
    if opts.raw_command {
        return opts.args.clone();
    }

    let test_dir = opts.test_directory.as_deref().filter(|d| !d.is_empty());
    let mut argv: Vec<String> = GO_TEST.iter().map(|s| s.to_string()).collect();

    if opts.args.is_empty() {
        argv.push(JSON_FLAG.to_string());
        argv.push(test_dir.unwrap_or(DEFAULT_PACKAGES).to_string());
        return argv;
    }

    if !has_json_arg(&opts.args) {
        argv.push(JSON_FLAG.to_string());
    }
    argv.extend(opts.args.iter().cloned());
    if let Some(dir) = test_dir {
        argv.push(dir.to_string());
    }
    argv
}

fn has_json_arg(args: &[String]) -> bool {
    args.iter().any(|a| a == "-json" || a == "--json")
}

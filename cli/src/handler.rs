use std::io::{self, Stderr, Stdout, Write};

use gotestsum_core::api as core_api;

/// Prints formatted events to stdout, stderr lines to stderr, and copies
/// every event to the `--jsonfile` capture if one was requested.
pub struct FormatHandler<O = Stdout, E = Stderr> {
    formatter: Box<dyn core_api::EventFormatter>,
    json_file: Option<core_api::JsonFileWriter>,
    out: O,
    err: E,
}

impl FormatHandler {
    /// Fails on an unknown format or an unwritable capture file, before any
    /// test process is started.
    pub fn new(
        opts: &core_api::RunOptions,
        ctx: core_api::FormatContext,
    ) -> Result<Self, core_api::HandlerError> {
        let formatter = gotestsum_plugins::build_formatter(&opts.format, ctx)?;
        let json_file = opts
            .json_file
            .as_deref()
            .map(|path| {
                core_api::JsonFileWriter::create(path).map_err(|source| {
                    core_api::HandlerError::OpenJsonFile {
                        path: path.to_path_buf(),
                        source,
                    }
                })
            })
            .transpose()?;
        Ok(Self::with_writers(formatter, json_file, io::stdout(), io::stderr()))
    }
}

impl<O: Write + Send, E: Write + Send> FormatHandler<O, E> {
    pub fn with_writers(
        formatter: Box<dyn core_api::EventFormatter>,
        json_file: Option<core_api::JsonFileWriter>,
        out: O,
        err: E,
    ) -> Self {
        Self {
            formatter,
            json_file,
            out,
            err,
        }
    }

    /// Flushes the capture file and stdout.
    pub fn close(&mut self) -> Result<(), core_api::HandlerError> {
        if let Some(file) = self.json_file.take() {
            file.close().map_err(core_api::HandlerError::JsonFile)?;
        }
        self.out.flush().map_err(core_api::HandlerError::Write)
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}

impl<O: Write + Send, E: Write + Send> core_api::EventHandler for FormatHandler<O, E> {
    fn event(
        &mut self,
        event: &core_api::TestEvent,
        execution: &core_api::Execution,
    ) -> Result<(), core_api::HandlerError> {
        if let Some(file) = self.json_file.as_mut() {
            file.write_line(event.raw())
                .map_err(core_api::HandlerError::JsonFile)?;
        }

        let text = self.formatter.format(event, execution)?;
        if text.is_empty() {
            return Ok(());
        }
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(core_api::HandlerError::Write)
    }

    fn err(&mut self, text: &str) -> Result<(), core_api::HandlerError> {
        writeln!(self.err, "{text}").map_err(core_api::HandlerError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_api::{EventHandler, Execution, FormatContext, RunOptions, TestEvent};
    use pretty_assertions::assert_eq;

    const PASS: &str = r#"{"Action":"pass","Package":"example.com/p","Test":"TestA","Elapsed":0.5}"#;
    const PKG_PASS: &str = r#"{"Action":"pass","Package":"example.com/p","Elapsed":0.5}"#;

    fn handler(
        format: &str,
        json_file: Option<core_api::JsonFileWriter>,
    ) -> FormatHandler<Vec<u8>, Vec<u8>> {
        let formatter =
            gotestsum_plugins::build_formatter(format, FormatContext::plain()).unwrap();
        FormatHandler::with_writers(formatter, json_file, Vec::new(), Vec::new())
    }

    fn feed<O: Write + Send, E: Write + Send>(h: &mut FormatHandler<O, E>, lines: &[&str]) {
        let mut exec = Execution::new();
        for line in lines {
            let event = TestEvent::parse(line).unwrap();
            exec.add(&event);
            h.event(&event, &exec).unwrap();
        }
    }

    #[test]
    fn formats_events_to_stdout() {
        let mut h = handler("short-verbose", None);
        feed(&mut h, &[PASS, PKG_PASS]);
        h.close().unwrap();
        let (out, err) = h.into_writers();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "PASS example.com/p.TestA (0.50s)\nPASS example.com/p\n"
        );
        assert!(err.is_empty());
    }

    #[test]
    fn stderr_lines_get_a_newline() {
        let mut h = handler("short", None);
        h.err("# example.com/p").unwrap();
        let (_, err) = h.into_writers();
        assert_eq!(String::from_utf8(err).unwrap(), "# example.com/p\n");
    }

    #[test]
    fn events_are_captured_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let file = core_api::JsonFileWriter::create(&path).unwrap();

        let mut h = handler("dots", Some(file));
        feed(&mut h, &[PASS, PKG_PASS]);
        h.close().unwrap();

        let captured = std::fs::read_to_string(&path).unwrap();
        assert_eq!(captured, format!("{PASS}\n{PKG_PASS}\n"));
    }

    #[test]
    fn unknown_format_fails_before_anything_runs() {
        let opts = RunOptions {
            format: "nope".to_string(),
            ..RunOptions::default()
        };
        let err = FormatHandler::new(&opts, FormatContext::plain()).err().unwrap();
        assert_eq!(err.to_string(), "unknown format nope");
    }

    #[test]
    fn unwritable_jsonfile_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let opts = RunOptions {
            json_file: Some(dir.path().join("missing").join("events.json")),
            ..RunOptions::default()
        };
        let err = FormatHandler::new(&opts, FormatContext::plain()).err().unwrap();
        assert!(matches!(err, core_api::HandlerError::OpenJsonFile { .. }));
    }
}

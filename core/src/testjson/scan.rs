use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;

use crate::error::ScanError;

use super::{EventHandler, Execution, TestEvent};

const LINE_CHANNEL_CAPACITY: usize = 1024;

/// test2json sometimes writes a bare `FAIL` line to stdout.
const BAD_EVENT: &str = "bad output from test2json";

const GO_MODULE_PREFIXES: [&str; 5] = [
    "go: copying",
    "go: creating",
    "go: downloading",
    "go: extracting",
    "go: finding",
];

/// The two output streams of a test process.
pub struct ScanConfig<O, E> {
    pub stdout: O,
    pub stderr: E,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn name(self) -> &'static str {
        match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

struct LineTap {
    stream: Stream,
    line: String,
}

/// Reads both streams to the end, feeding `handler` as lines arrive, and
/// returns the aggregated execution.
///
/// The first undecodable stdout line or handler error stops the scan; any
/// lines not yet consumed are dropped.
pub async fn scan_test_output<O, E, H>(
    config: ScanConfig<O, E>,
    handler: &mut H,
) -> Result<Execution, ScanError>
where
    O: AsyncRead + Unpin,
    E: AsyncRead + Unpin,
    H: EventHandler + ?Sized,
{
    let (line_tx, mut line_rx) = mpsc::channel::<LineTap>(LINE_CHANNEL_CAPACITY);
    let mut execution = Execution::new();

    {
        let out_pump = pump(config.stdout, Stream::Stdout, line_tx.clone());
        let err_pump = pump(config.stderr, Stream::Stderr, line_tx);
        let consume = async {
            let mut events = 0usize;
            while let Some(tap) = line_rx.recv().await {
                match tap.stream {
                    Stream::Stdout => {
                        if consume_stdout(&tap.line, &mut execution, &mut *handler)? {
                            events += 1;
                        }
                    }
                    Stream::Stderr => consume_stderr(tap.line, &mut execution, &mut *handler),
                }
            }
            tracing::debug!(target: "gotestsum.scan", events, "test output drained");
            Ok::<(), ScanError>(())
        };
        tokio::try_join!(out_pump, err_pump, consume)?;
    }

    Ok(execution)
}

/// Returns whether the line produced an event.
fn consume_stdout<H>(line: &str, execution: &mut Execution, handler: &mut H) -> Result<bool, ScanError>
where
    H: EventHandler + ?Sized,
{
    if line.trim().is_empty() {
        return Ok(false);
    }
    if line.starts_with("FAIL") {
        tracing::warn!(target: "gotestsum.scan", line = %line, "bad output from test2json");
        report_err(handler, &format!("{BAD_EVENT}: {line}"));
        return Ok(false);
    }

    let event = TestEvent::parse(line).map_err(|source| ScanError::Decode {
        line: line.to_string(),
        source,
    })?;
    execution.add(&event);
    handler.event(&event, execution)?;
    Ok(true)
}

fn consume_stderr<H>(line: String, execution: &mut Execution, handler: &mut H)
where
    H: EventHandler + ?Sized,
{
    report_err(handler, &line);
    if is_go_module_output(&line) {
        return;
    }
    execution.add_error(line);
}

fn report_err<H>(handler: &mut H, text: &str)
where
    H: EventHandler + ?Sized,
{
    if let Err(err) = handler.err(text) {
        tracing::debug!(target: "gotestsum.scan", error = %err, "handler failed to report stderr line");
    }
}

fn is_go_module_output(line: &str) -> bool {
    GO_MODULE_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Splits `reader` on `\n` (dropping a trailing `\r`) and forwards each line.
/// Stops early if the consumer has gone away.
async fn pump<R>(reader: R, stream: Stream, line_tx: mpsc::Sender<LineTap>) -> Result<(), ScanError>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::with_capacity(4096);
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|source| ScanError::Read {
                stream: stream.name(),
                source,
            })?;
        if n == 0 {
            return Ok(());
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        let line = String::from_utf8_lossy(&buf).into_owned();
        if line_tx.send(LineTap { stream, line }).await.is_err() {
            return Ok(());
        }
    }
}

//! Pipe mode: one JSON command per stdin line.
//!
//! ```text
//! {"command":"RecordEvent","event":{"traceId":"t1","spanId":"s1","serviceName":"api","operation":"get"}}
//! {"command":"GetTimeline","traceId":"t1"}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. A failing line is
//! reported on stderr and processing continues.

use std::io::BufRead;

use spanlog::Executor;
use tracing::debug;

use crate::format::{format_error, format_output, OutputMode};

/// Run every command read from stdin. Returns the process exit code.
pub fn run_pipe(executor: &Executor, mode: OutputMode) -> i32 {
    let stdin = std::io::stdin();
    run_lines(executor, stdin.lock(), mode, |line| println!("{}", line))
}

pub(crate) fn run_lines<R: BufRead>(
    executor: &Executor,
    input: R,
    mode: OutputMode,
    mut emit: impl FnMut(&str),
) -> i32 {
    let mut exit_code = 0;
    for (number, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) cannot read stdin: {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        debug!(line = number + 1, "Executing piped command");
        match executor.execute_json(trimmed) {
            Ok(output) => emit(&format_output(&output, mode)),
            Err(e) => {
                eprintln!("line {}: {}", number + 1, format_error(&e, mode));
                exit_code = 1;
            }
        }
    }
    exit_code
}

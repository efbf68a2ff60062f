// Copyright (C) Brian G. Milnes 2025

//! Per-run log files
//!
//! Runs log to logs/<tool-name>/<YYYY-MM-DD>/run-<HH-MM-SS>.log, one file
//! per invocation. Logging is opt-in from the command line; the lint core
//! itself never logs (non-matches are silent by contract).

pub mod logging {
    use anyhow::Result;
    use chrono::{DateTime, Local};
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    /// Mirrors messages to stdout and, when enabled, to a run log file.
    pub struct RunLogger {
        log_file: Option<fs::File>,
        log_path: Option<PathBuf>,
        started: DateTime<Local>,
    }

    impl RunLogger {
        /// A logger that only writes to stdout.
        pub fn disabled() -> Self {
            RunLogger {
                log_file: None,
                log_path: None,
                started: Local::now(),
            }
        }

        /// Open a run log for `tool_name`. If the log directory cannot be
        /// created the run continues with stdout only.
        pub fn new(tool_name: &str) -> Self {
            let started = Local::now();
            match Self::open_log(tool_name, &started) {
                Ok((file, path)) => RunLogger {
                    log_file: Some(file),
                    log_path: Some(path),
                    started,
                },
                Err(e) => {
                    eprintln!("Warning: Could not create log file: {e}");
                    RunLogger {
                        log_file: None,
                        log_path: None,
                        started,
                    }
                }
            }
        }

        fn open_log(tool_name: &str, started: &DateTime<Local>) -> Result<(fs::File, PathBuf)> {
            let dir = PathBuf::from("logs")
                .join(tool_name)
                .join(started.format("%Y-%m-%d").to_string());
            fs::create_dir_all(&dir)?;

            let path = dir.join(format!("run-{}.log", started.format("%H-%M-%S")));
            let file = fs::File::create(&path)?;
            Ok((file, path))
        }

        /// Print a message and append it to the run log when enabled.
        pub fn log(&mut self, message: &str) {
            println!("{message}");
            if let Some(ref mut file) = self.log_file {
                let _ = writeln!(file, "{message}");
            }
        }

        pub fn log_path(&self) -> Option<&Path> {
            self.log_path.as_deref()
        }

        /// Close out the run with a summary and timing lines.
        pub fn finalize(&mut self, summary: &str) {
            let ended = Local::now();
            let elapsed = ended.signed_duration_since(self.started);

            self.log("");
            self.log(summary);
            self.log(&format!("Completed in {}ms", elapsed.num_milliseconds()));
            if let Some(ref path) = self.log_path {
                self.log(&format!("Log saved to: {}", path.display()));
            }
        }
    }

    impl Drop for RunLogger {
        fn drop(&mut self) {
            if let Some(ref mut file) = self.log_file {
                let _ = file.flush();
            }
        }
    }
}

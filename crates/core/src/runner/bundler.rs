//! Bundler subprocess runner.
//!
//! The bundler is spawned in the project root with the build plan's
//! environment applied to the child process only. Its stdout and stderr are
//! read line by line and forwarded through `tracing` under the `bundler`
//! target.

use crate::runner::error::RunError;
use crate::runner::error::RunResult;
use std::process::Stdio;
use tokio::io::AsyncBufReadExt;
use tokio::io::AsyncRead;
use tokio::io::BufReader;
use tokio::process::Command;
use tracing::info;
use tracing::warn;
use vs_protocol::config_models::BundlerSettings;
use vs_protocol::plan_models::BuildPlan;

/// Line counts of a finished bundler run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BundlerReport {
    pub stdout_lines: usize,
    pub stderr_lines: usize,
}

/// Runs the frontend bundler for a resolved build plan.
pub struct BundlerRunner;

impl BundlerRunner {
    /// Run the bundler described by `bundler` for `plan`.
    ///
    /// # Arguments
    ///
    /// * `plan` - Resolved plan; `plan.root` is the working directory and
    ///   `plan.env` is added to the child's environment
    /// * `bundler` - Program and arguments to run
    ///
    /// # Errors
    ///
    /// - [`RunError::ProgramNotFound`] if the program is not on `PATH`
    /// - [`RunError::Spawn`] / [`RunError::Wait`] on process failures
    /// - [`RunError::Failed`] if the bundler exits unsuccessfully
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vs_core::plan::load_plan;
    /// use vs_core::runner::BundlerRunner;
    /// use vs_protocol::BundlerSettings;
    /// use std::path::Path;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let plan = load_plan(Path::new("web-ui"), None, false)?;
    ///     let report = BundlerRunner::run(&plan, &BundlerSettings::default()).await?;
    ///     println!("bundler wrote {} lines", report.stdout_lines);
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(plan: &BuildPlan, bundler: &BundlerSettings) -> RunResult<BundlerReport> {
        let program = which::which(&bundler.program).map_err(|source| RunError::ProgramNotFound {
            program: bundler.program.clone(),
            source,
        })?;

        info!(
            program = %program.display(),
            args = ?bundler.args,
            root = %plan.root,
            version = %plan.version,
            "starting bundler"
        );

        let mut cmd = Command::new(&program);
        cmd.args(&bundler.args);
        cmd.current_dir(&plan.root);
        cmd.envs(&plan.env);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| RunError::Spawn {
            program: bundler.program.clone(),
            source,
        })?;

        let stdout = child.stdout.take().ok_or(RunError::MissingPipe("stdout"))?;
        let stderr = child.stderr.take().ok_or(RunError::MissingPipe("stderr"))?;

        let (stdout_lines, stderr_lines, status) = tokio::join!(
            forward_lines(stdout, false),
            forward_lines(stderr, true),
            child.wait()
        );

        let status = status.map_err(|source| RunError::Wait {
            program: bundler.program.clone(),
            source,
        })?;

        if !status.success() {
            return Err(RunError::Failed {
                program: bundler.program.clone(),
                status: status.to_string(),
                code: status.code(),
            });
        }

        info!(stdout_lines, stderr_lines, "bundler finished");

        Ok(BundlerReport {
            stdout_lines,
            stderr_lines,
        })
    }
}

/// Forwards each line of `reader` to the log and returns how many were seen.
///
/// Lines are decoded lossily so that output which is not UTF-8 is still
/// drained; the pipe has to stay open until the bundler exits.
async fn forward_lines<R>(reader: R, is_stderr: bool) -> usize
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                warn!(error = %err, "stopped reading bundler output");
                break;
            }
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if is_stderr {
            warn!(target: "bundler", "{line}");
        } else {
            info!(target: "bundler", "{line}");
        }
        count += 1;
    }

    count
}

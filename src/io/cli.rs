//! Command-line interface for batch execution of tile plane scripts

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::io::configuration::{DEFAULT_RENDER_PATH, OUTPUT_SUFFIX, RENDER_SUFFIX, SCRIPT_EXTENSION};
use crate::io::error::{Result, ScriptError, invalid_target};
use crate::io::progress::ProgressManager;
use crate::io::render::export_plane_as_png;
use crate::io::script::ScriptRunner;
use crate::spatial::plane::TilePlane;

#[derive(Parser)]
#[command(name = "glowtile")]
#[command(
    author,
    version,
    about = "Execute tile plane scripts with rule-driven color propagation"
)]
/// Command-line arguments for the script execution tool
pub struct Cli {
    /// Script file or directory to process; reads standard input when omitted
    #[arg(value_name = "SCRIPT")]
    pub target: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process scripts even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Render the final plane of each script as a PNG image
    #[arg(short, long)]
    pub render: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch execution of scripts with progress tracking
pub struct ScriptProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ScriptProcessor {
    /// Create a new script processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process scripts according to CLI arguments
    ///
    /// Without a target, commands are read from standard input and answers
    /// written to standard output. With a file or directory target, each
    /// script's output lands next to it with the output suffix.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or script processing fails
    pub fn process(&mut self) -> Result<()> {
        let Some(target) = self.cli.target.clone() else {
            return self.process_stdin();
        };

        let scripts = self.collect_scripts(&target)?;

        if scripts.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(scripts.len());
        }

        for script in &scripts {
            self.process_script(script)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn process_stdin(&self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut runner = ScriptRunner::new(BufWriter::new(stdout.lock()));
        runner.run_script(stdin.lock())?;
        let (session, _output) = runner.finish()?;

        if self.cli.render {
            self.render_plane(session.plane(), Path::new(DEFAULT_RENDER_PATH))?;
        }

        Ok(())
    }

    fn collect_scripts(&self, target: &Path) -> Result<Vec<PathBuf>> {
        if target.is_file() {
            if target.extension().and_then(|s| s.to_str()) == Some(SCRIPT_EXTENSION) {
                if self.should_process_script(target) {
                    Ok(vec![target.to_path_buf()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_target(target, &"target file must be a .txt script"))
            }
        } else if target.is_dir() {
            let mut scripts = Vec::new();
            let entries = fs::read_dir(target).map_err(|source| ScriptError::FileSystem {
                path: target.to_path_buf(),
                operation: "read directory",
                source,
            })?;
            for entry in entries {
                let path = entry
                    .map_err(|source| ScriptError::FileSystem {
                        path: target.to_path_buf(),
                        operation: "read directory",
                        source,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some(SCRIPT_EXTENSION)
                    && self.should_process_script(&path)
                {
                    scripts.push(path);
                }
            }
            scripts.sort();
            Ok(scripts)
        } else {
            Err(invalid_target(
                target,
                &"target must be a .txt script or directory",
            ))
        }
    }

    fn should_process_script(&self, script_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(script_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", script_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_script(&mut self, script_path: &Path) -> Result<()> {
        let script = fs::read_to_string(script_path).map_err(|source| ScriptError::FileSystem {
            path: script_path.to_path_buf(),
            operation: "read",
            source,
        })?;
        let line_count = script.lines().count();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_script(script_path, line_count);
        }

        let output_path = Self::get_output_path(script_path);
        let output_file =
            fs::File::create(&output_path).map_err(|source| ScriptError::FileSystem {
                path: output_path.clone(),
                operation: "create",
                source,
            })?;
        let mut runner = ScriptRunner::new(BufWriter::new(output_file));

        for (index, line) in script.lines().enumerate() {
            if !runner.run_line(line)? {
                break;
            }
            if let Some(ref pm) = self.progress_manager {
                pm.update_lines(index + 1);
            }
        }

        let (session, _output) = runner.finish()?;

        if self.cli.render {
            let render_path = Self::get_render_path(script_path);
            self.render_plane(session.plane(), &render_path)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_script();
        }

        Ok(())
    }

    // Allow print for user feedback when there is nothing to render
    #[allow(clippy::print_stderr)]
    fn render_plane(&self, plane: &TilePlane, render_path: &Path) -> Result<()> {
        match export_plane_as_png(plane, render_path) {
            Err(ScriptError::EmptyPlane { .. }) => {
                if !self.cli.quiet {
                    eprintln!(
                        "Nothing to render for '{}': the plane has no lit tiles",
                        render_path.display()
                    );
                }
                Ok(())
            }
            other => other,
        }
    }

    fn get_output_path(script_path: &Path) -> PathBuf {
        let stem = script_path.file_stem().unwrap_or_default();
        let extension = script_path.extension().unwrap_or_default();
        script_path.with_file_name(format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        ))
    }

    fn get_render_path(script_path: &Path) -> PathBuf {
        let stem = script_path.file_stem().unwrap_or_default();
        script_path.with_file_name(format!("{}{}.png", stem.to_string_lossy(), RENDER_SUFFIX))
    }
}

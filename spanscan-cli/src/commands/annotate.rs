//! Annotate command implementation.
//!
//! Finds the strings and comments of each input file and prints their
//! ranges. Files are processed in parallel; results are printed in input
//! order once every file is done.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use spanscan_lex::{annotate, Annotations, LanguageRegistry};
use tracing::{debug, error};

use crate::commands::common::{error_messages, read_source, OutputFormat};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::Config;
use crate::error::{Result, SpanscanError};

/// Arguments for the annotate command.
#[derive(Debug, Clone, Default)]
pub struct AnnotateArgs {
    /// Files to annotate.
    pub files: Vec<PathBuf>,
    /// Language of every file; detected from the extension if absent.
    pub language: Option<String>,
    /// Language family used when the language is not registered.
    pub family: Option<String>,
    /// Output format; taken from the configuration if absent.
    pub format: Option<OutputFormat>,
}

/// Annotations of one file, as printed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    /// File label, as given on the command line.
    pub file: String,
    /// Strings and comments found.
    #[serde(flatten)]
    pub annotations: Annotations,
}

/// Annotate command handler.
pub struct AnnotateCommand {
    args: AnnotateArgs,
    config: Config,
}

impl AnnotateCommand {
    /// Execute the command, writing results to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let start_time = Instant::now();
        self.validate_input_files()?;

        let registry = self.config.registry()?;
        let results = self.process_all_files(&registry)?;

        let mut reports = Vec::with_capacity(results.len());
        let mut files_failed = 0;
        for (path, result) in self.args.files.iter().zip(results) {
            match result {
                Ok(report) => reports.push(report),
                Err(e) => {
                    files_failed += 1;
                    error!("Failed to annotate {}: {}", path.display(), e);
                },
            }
        }

        self.write_reports(&reports, out)?;
        debug!(
            files = reports.len(),
            failed = files_failed,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "annotation finished"
        );
        self.check_for_failures(files_failed)
    }

    /// Validate that input files are provided.
    fn validate_input_files(&self) -> Result<()> {
        if self.args.files.is_empty() {
            return Err(SpanscanError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }
        Ok(())
    }

    /// Annotate every file on a pool of `jobs` threads.
    ///
    /// Results come back in input order.
    fn process_all_files(&self, registry: &LanguageRegistry) -> Result<Vec<Result<FileReport>>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.jobs)
            .build()
            .map_err(|e| SpanscanError::Config(format!("Failed to start worker pool: {}", e)))?;

        Ok(pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| self.annotate_file(path, registry))
                .collect()
        }))
    }

    /// Annotate a single file.
    fn annotate_file(&self, path: &Path, registry: &LanguageRegistry) -> Result<FileReport> {
        let language = self.language_for(path, registry)?;
        let family = self.args.family.as_deref().unwrap_or(language);
        let table = registry.resolve(language, family)?;

        let file = read_source(path)?;
        debug!(file = %path.display(), language, "annotating");
        let annotations = annotate(&file, &table)?;

        Ok(FileReport {
            file: file.name().to_string(),
            annotations,
        })
    }

    /// Language given on the command line, or detected from the extension.
    fn language_for<'a>(&'a self, path: &Path, registry: &'a LanguageRegistry) -> Result<&'a str> {
        if let Some(language) = self.args.language.as_deref() {
            return Ok(language);
        }
        registry.language_for_path(path).ok_or_else(|| {
            SpanscanError::Validation(format!(
                "{} {} (use --language)",
                error_messages::UNDETECTED_LANGUAGE,
                path.display()
            ))
        })
    }

    /// Print the reports in the requested format.
    fn write_reports(&self, reports: &[FileReport], out: &mut impl Write) -> Result<()> {
        match self.args.format.unwrap_or(self.config.default_format) {
            OutputFormat::Text => {
                for report in reports {
                    for range in &report.annotations.strings {
                        writeln!(out, "{}\tstring", range)?;
                    }
                    for range in &report.annotations.comments {
                        writeln!(out, "{}\tcomment", range)?;
                    }
                }
            },
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, reports)?;
                writeln!(out)?;
            },
        }
        Ok(())
    }

    /// Return an error if any file failed.
    fn check_for_failures(&self, files_failed: usize) -> Result<()> {
        if files_failed > 0 {
            return Err(SpanscanError::FileOperation(format!(
                "{} {}",
                files_failed,
                error_messages::FILES_FAILED
            )));
        }
        Ok(())
    }
}

impl Command for AnnotateCommand {
    type Args = AnnotateArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    fn name() -> &'static str {
        "annotate"
    }
}

impl CommandDescription for AnnotateCommand {
    fn description() -> &'static str {
        "Find strings and comments in source files"
    }

    fn help() -> &'static str {
        "Prints the range of every string literal and comment found in the \
         input files, detecting each file's language from its extension."
    }
}

/// Run the annotate command.
pub fn run_annotate(args: AnnotateArgs, config: Config) -> Result<()> {
    AnnotateCommand::new(args, config).execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn run(args: AnnotateArgs) -> (Result<()>, String) {
        let command = AnnotateCommand::new(args, Config::default());
        let mut out = Vec::new();
        let result = command.run_to(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_annotate_args_default() {
        let args = AnnotateArgs::default();
        assert!(args.files.is_empty());
        assert!(args.language.is_none());
        assert!(args.format.is_none());
    }

    #[test]
    fn test_annotate_command_name() {
        assert_eq!(<AnnotateCommand as Command>::name(), "annotate");
        assert_eq!(
            <AnnotateCommand as CommandDescription>::description(),
            "Find strings and comments in source files"
        );
    }

    #[test]
    fn test_annotate_no_input() {
        let (result, _) = run(AnnotateArgs::default());
        if let Err(SpanscanError::Validation(msg)) = result {
            assert!(msg.contains("No input files"));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_annotate_text_output() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.py", "x = 'a'  # note\n");

        let (result, out) = run(AnnotateArgs {
            files: vec![path.clone()],
            ..Default::default()
        });
        assert!(result.is_ok());

        let name = path.display().to_string();
        assert_eq!(
            out,
            format!("{name}:1:5-1:7\tstring\n{name}:1:10-1:15\tcomment\n")
        );
    }

    #[test]
    fn test_annotate_json_output() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.c", "/* c */ int x;\n");

        let (result, out) = run(AnnotateArgs {
            files: vec![path],
            format: Some(OutputFormat::Json),
            ..Default::default()
        });
        assert!(result.is_ok());

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let report = &value[0];
        assert!(report["strings"].as_array().unwrap().is_empty());
        assert_eq!(report["comments"][0]["start"]["offset"], 0);
        assert_eq!(report["comments"][0]["end"]["offset"], 6);
    }

    #[test]
    fn test_annotate_explicit_language() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "script", "# shell comment\n");

        let (result, out) = run(AnnotateArgs {
            files: vec![path],
            language: Some("bash".to_string()),
            ..Default::default()
        });
        assert!(result.is_ok());
        assert!(out.ends_with("\tcomment\n"));
    }

    #[test]
    fn test_annotate_undetected_language_fails_after_others() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "a.py", "# ok\n");
        let bad = write(&dir, "README", "# no extension\n");

        let (result, out) = run(AnnotateArgs {
            files: vec![bad, good],
            ..Default::default()
        });
        assert!(matches!(result, Err(SpanscanError::FileOperation(_))));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_annotate_unknown_language() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "a.txt", "text\n");

        let (result, _) = run(AnnotateArgs {
            files: vec![path],
            language: Some("cobol".to_string()),
            family: Some("cobol".to_string()),
            ..Default::default()
        });
        assert!(result.is_err());
    }
}

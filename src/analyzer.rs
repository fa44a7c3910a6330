use std::{fmt, path::Path};

use log::Level;

use crate::{
    document::Document,
    error::{Error, Result},
    indexer::{self, FrequencyIndex},
    keywords,
    report::{self, ReportFormat},
};

/// Pipeline step a notification belongs to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Stage {
    Start,
    LoadKeywords,
    LoadText,
    Analyze,
    SaveReport,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::LoadKeywords => "load-keywords",
            Self::LoadText => "load-text",
            Self::Analyze => "analyze",
            Self::SaveReport => "save-report",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Receives progress notifications from an [`Analyzer`] run.
pub trait AnalysisObserver {
    fn notify(&self, stage: Stage, level: Level, message: &str);
}

impl<F> AnalysisObserver for F
where
    F: Fn(Stage, Level, &str),
{
    fn notify(&self, stage: Stage, level: Level, message: &str) {
        self(stage, level, message);
    }
}

/// Forwards notifications to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl AnalysisObserver for LogObserver {
    fn notify(&self, stage: Stage, level: Level, message: &str) {
        log::log!(target: "word_locator::analyzer", level, "[{stage}] {message}");
    }
}

/// Counts gathered during a successful run.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct AnalysisSummary {
    pub keywords: usize,
    pub lines: usize,
    pub unique_words: usize,
    pub occurrences: usize,
}

/// Runs the load, index and report steps for one set of file paths.
pub struct Analyzer {
    format: ReportFormat,
    observer: Box<dyn AnalysisObserver>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            format: ReportFormat::default(),
            observer: Box::new(LogObserver),
        }
    }

    #[must_use]
    pub const fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: impl AnalysisObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Loads both inputs, indexes every non-keyword word and writes the
    /// report. All three paths must be non-empty; this is checked before any
    /// file is touched.
    pub fn run(
        &self,
        text_file: impl AsRef<Path>,
        keywords_file: impl AsRef<Path>,
        output_file: impl AsRef<Path>,
    ) -> Result<AnalysisSummary> {
        let (text_file, keywords_file, output_file) =
            (text_file.as_ref(), keywords_file.as_ref(), output_file.as_ref());

        self.notify(Stage::Start, Level::Info, "Starting analysis...");

        if [text_file, keywords_file, output_file]
            .iter()
            .any(|path| path.as_os_str().is_empty())
        {
            self.notify(Stage::Start, Level::Warn, "Not all file paths specified");
            return Err(Error::InvalidInput("Please specify all file paths".to_string()));
        }

        self.pipeline(text_file, keywords_file, output_file)
            .inspect_err(|e| {
                self.notify(Stage::Done, Level::Error, &format!("Error during analysis: {e}"));
            })
    }

    fn pipeline(
        &self,
        text_file: &Path,
        keywords_file: &Path,
        output_file: &Path,
    ) -> Result<AnalysisSummary> {
        self.notify(
            Stage::LoadKeywords,
            Level::Info,
            &format!("Loading keywords from: {}", keywords_file.display()),
        );
        let keywords = keywords::load(keywords_file)?;
        self.notify(
            Stage::LoadKeywords,
            Level::Info,
            &format!("Loaded {} keywords", keywords.len()),
        );

        self.notify(
            Stage::LoadText,
            Level::Info,
            &format!("Loading text file: {}", text_file.display()),
        );
        let document = Document::load(text_file)?;
        self.notify(
            Stage::LoadText,
            Level::Info,
            &format!("Loaded {} lines from text file", document.line_count()),
        );

        self.notify(Stage::Analyze, Level::Info, "Analyzing text...");
        let frequency_index: FrequencyIndex = indexer::index(&document, &keywords);
        self.notify(
            Stage::Analyze,
            Level::Info,
            &format!("Found {} unique non-keywords", frequency_index.len()),
        );

        self.notify(
            Stage::SaveReport,
            Level::Info,
            &format!("Saving results to: {}", output_file.display()),
        );
        report::write(output_file, &frequency_index, self.format)?;
        self.notify(Stage::SaveReport, Level::Info, "Results saved successfully");

        self.notify(Stage::Done, Level::Info, "Analysis completed successfully");

        Ok(AnalysisSummary {
            keywords: keywords.len(),
            lines: document.line_count(),
            unique_words: frequency_index.len(),
            occurrences: indexer::occurrence_count(&frequency_index),
        })
    }

    fn notify(&self, stage: Stage, level: Level, message: &str) {
        self.observer.notify(stage, level, message);
    }
}

/// Runs the default text-report analysis, logging through the `log` facade.
pub fn analyze(
    text_file: impl AsRef<Path>,
    keywords_file: impl AsRef<Path>,
    output_file: impl AsRef<Path>,
) -> Result<AnalysisSummary> {
    Analyzer::new().run(text_file, keywords_file, output_file)
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, fs, path::PathBuf, rc::Rc};

    use super::*;

    type Events = Rc<RefCell<Vec<(Stage, Level, String)>>>;

    fn recording_analyzer() -> (Analyzer, Events) {
        let events: Events = Rc::default();
        let sink = Rc::clone(&events);
        let analyzer =
            Analyzer::new().with_observer(move |stage: Stage, level: Level, message: &str| {
                sink.borrow_mut().push((stage, level, message.to_string()));
            });
        (analyzer, events)
    }

    #[test]
    fn empty_path_is_rejected_before_io() {
        let (analyzer, events) = recording_analyzer();

        let result = analyzer.run("tests/does_not_exist.txt", "", "tests/never_written.txt");

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert!(!PathBuf::from("tests/never_written.txt").exists());
        assert!(events
            .borrow()
            .iter()
            .any(|(stage, level, _)| *stage == Stage::Start && *level == Level::Warn));
    }

    #[test]
    fn missing_keywords_file_is_reported() {
        let (analyzer, events) = recording_analyzer();
        let keywords_file = PathBuf::from("tests/analyzer_missing_keywords.txt");

        let result = analyzer.run(
            "tests/analyzer_missing_text.txt",
            &keywords_file,
            "tests/analyzer_missing_output.txt",
        );

        match result {
            Err(Error::Io { path, .. }) => assert_eq!(path, keywords_file),
            other => panic!("expected Io error, got {other:?}"),
        }

        let events = events.borrow();
        let (stage, level, message) = events.last().expect("No events recorded");
        assert_eq!((*stage, *level), (Stage::Done, Level::Error));
        assert!(message.starts_with("Error during analysis:"));
        assert!(!PathBuf::from("tests/analyzer_missing_output.txt").exists());
    }

    #[test]
    fn full_run_notifies_every_stage() {
        let text_file = PathBuf::from("tests/analyzer_full_run_text.txt");
        let keywords_file = PathBuf::from("tests/analyzer_full_run_keywords.txt");
        let output_file = PathBuf::from("tests/analyzer_full_run_output.json");
        fs::write(&text_file, "The Cat sat on a Mat.\n\nthe cat").expect("Failed to write text");
        fs::write(&keywords_file, "the a").expect("Failed to write keywords");

        let (analyzer, events) = recording_analyzer();
        let summary = analyzer
            .with_format(ReportFormat::Json)
            .run(&text_file, &keywords_file, &output_file)
            .expect("Analysis failed");

        assert_eq!(
            summary,
            AnalysisSummary {
                keywords: 2,
                lines: 3,
                unique_words: 4,
                occurrences: 5,
            }
        );

        let stages: Vec<Stage> = events.borrow().iter().map(|(stage, _, _)| *stage).collect();
        for stage in [
            Stage::Start,
            Stage::LoadKeywords,
            Stage::LoadText,
            Stage::Analyze,
            Stage::SaveReport,
            Stage::Done,
        ] {
            assert!(stages.contains(&stage), "missing {stage}");
        }

        let report: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output_file).expect("Missing report"))
                .expect("Invalid JSON report");
        assert_eq!(
            report["cat"],
            serde_json::json!([{"line": 1, "column": 2}, {"line": 3, "column": 2}])
        );

        for path in [text_file, keywords_file, output_file] {
            fs::remove_file(path).expect("Failed to clean up");
        }
    }
}

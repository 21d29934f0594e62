//! Install signature handler component stubs into a project
//!
//! A one-shot installer: emit a start notice, hand a single publish request
//! to the publisher, emit a completion notice. The publisher owns the
//! overwrite-vs-skip decision for existing files; a publisher error
//! propagates out unchanged and suppresses the completion notice.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::publish::{PublishRequest, Publisher, StubPublisher};
use crate::reporter::{ConsoleReporter, Reporter};

/// Arguments accepted by `signature-handler install`.
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Overwrite files that already exist at the destination
    pub force: bool,
    /// Override the configured stub tag for this invocation
    pub tag: Option<String>,
}

/// The install command with its injected capabilities.
pub struct InstallCommand<'a> {
    reporter: &'a dyn Reporter,
    publisher: &'a dyn Publisher,
    stub_tag: String,
}

impl<'a> InstallCommand<'a> {
    pub fn new(
        reporter: &'a dyn Reporter,
        publisher: &'a dyn Publisher,
        stub_tag: impl Into<String>,
    ) -> Self {
        Self {
            reporter,
            publisher,
            stub_tag: stub_tag.into(),
        }
    }

    /// Run the installer once, returning the process exit code.
    ///
    /// Issues exactly one publish request; the tag comes from the options
    /// override or the configured default. Success is whatever the
    /// publisher says it is — no re-verification here.
    pub fn run(&self, options: &InstallOptions) -> Result<i32> {
        self.reporter.info("Installing signature handler...");

        let request = PublishRequest {
            tag: options.tag.clone().unwrap_or_else(|| self.stub_tag.clone()),
            force: options.force,
        };
        let report = self.publisher.publish(&request)?;

        for path in &report.written {
            self.reporter.info(&format!("  published {}", path.display()));
        }
        for path in &report.skipped {
            self.reporter.info(&format!(
                "  skipped {} (already exists, use --force to overwrite)",
                path.display()
            ));
        }

        self.reporter.info(&format!(
            "{} Signature handler installed successfully",
            "✓".green()
        ));

        Ok(0)
    }
}

/// Wire the production reporter and publisher and run the installer.
pub fn execute(force: bool, tag: Option<String>) -> Result<i32> {
    let config = Config::load()?;
    let reporter = ConsoleReporter;
    let publisher = StubPublisher::new(&config.components_dir);

    InstallCommand::new(&reporter, &publisher, config.stub_tag)
        .run(&InstallOptions { force, tag })
}

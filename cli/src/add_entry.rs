use crate::cli::AddEntryArgs;
use crate::config;
use crate::error::{CliError, Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use changelog::{
    ChangelogConfig, InsertMode, ReleaseArtifacts, ReleaseDate, ReleaseEntry, UrlClassifier,
};
use indicatif::{ProgressBar, ProgressStyle};
use release::{ReleaseMetadata, ReleaseTag};
use std::time::Duration;
use tokio::runtime::Runtime;

/// What the user asked for, after argument validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryRequest {
    Manual {
        urls: Vec<String>,
        date: Option<String>,
        commit: Option<String>,
    },
    Backfill {
        tag: String,
    },
}

impl EntryRequest {
    pub fn from_args(args: &AddEntryArgs) -> Result<Self> {
        if let Some(url) = args.urls.iter().find(|url| !url.starts_with("https://")) {
            return Err(CliError::argument(format!("Unhandled argument '{url}'")));
        }

        match &args.backfill_release {
            Some(tag) => {
                if !args.urls.is_empty() || args.date.is_some() || args.commit.is_some() {
                    return Err(CliError::argument(
                        "--backfill-release cannot be combined with other arguments!",
                    ));
                }
                Ok(Self::Backfill { tag: tag.clone() })
            }
            None => Ok(Self::Manual {
                urls: args.urls.clone(),
                date: args.date.clone(),
                commit: args.commit.clone(),
            }),
        }
    }

    pub fn mode(&self) -> InsertMode {
        match self {
            Self::Manual { .. } => InsertMode::AppendToTop,
            Self::Backfill { .. } => InsertMode::InsertByDate,
        }
    }
}

pub fn execute(args: AddEntryArgs) -> Result<()> {
    let request = EntryRequest::from_args(&args)?;
    let config = config::resolve(&args.common)?;
    let classifier = UrlClassifier::new()?;

    let mut progress = ProgressTracker::new("Add Changelog Entry").with_steps(vec![
        "Resolving release".to_string(),
        "Classifying download URLs".to_string(),
        "Validating entry".to_string(),
        format!("Updating {}", config.document.display()),
    ]);

    progress.start_step();
    let (urls, date, commit) = match &request {
        EntryRequest::Manual { urls, date, commit } => {
            progress.skip_step("manual entry");
            (urls.clone(), EntryDate::Given(date.clone()), commit.clone())
        }
        EntryRequest::Backfill { tag } => {
            let metadata = fetch_metadata(&config, tag)?;
            progress.complete_step();
            backfill_parts(metadata, &config)
        }
    };

    progress.start_step();
    let artifacts = classifier.classify_all(&urls)?;
    if config.verbose {
        report_artifacts(&artifacts);
    }
    progress.complete_step();

    progress.start_step();
    let entry = match date {
        EntryDate::Given(date) => ReleaseEntry::new(date.as_deref(), commit.as_deref(), artifacts)?,
        EntryDate::Resolved(date) => {
            ReleaseEntry::from_parts(date, commit.unwrap_or_default(), artifacts)?
        }
    };
    progress.complete_step();

    progress.start_step();
    let inserted = changelog::add_entry(&config.document, &entry, request.mode(), &config)
        .with_context(|| format!("Failed to update {}", config.document.display()))?;
    progress.complete_step();

    progress.complete();
    ui::success_message(&format!(
        "Added section '{}' to {}",
        inserted.id,
        config.document.display()
    ));
    if config.verbose {
        ui::info_message(&format!(
            "Inserted as section {} ({})",
            inserted.position + 1,
            request.mode()
        ));
    }

    Ok(())
}

enum EntryDate {
    Given(Option<String>),
    Resolved(ReleaseDate),
}

fn backfill_parts(
    metadata: ReleaseMetadata,
    config: &ChangelogConfig,
) -> (Vec<String>, EntryDate, Option<String>) {
    if config.verbose {
        ui::info_message(&format!(
            "Release {} was built from commit {} at {}",
            metadata.tag, metadata.commit, metadata.committed_at
        ));
        for name in &metadata.skipped_assets {
            ui::info_message(&format!("Skipping asset {name}"));
        }
    }
    (
        metadata.urls,
        EntryDate::Resolved(ReleaseDate::from_utc(metadata.committed_at)),
        Some(metadata.commit),
    )
}

fn fetch_metadata(config: &ChangelogConfig, tag: &str) -> Result<ReleaseMetadata> {
    // Reject malformed tags before spinning up the runtime
    ReleaseTag::parse(tag)?;

    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {e}")))?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(format!("Fetching {tag} from {}", config.github.api_url));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = rt.block_on(release::fetch_release(&config.github, tag));
    spinner.finish_and_clear();

    result.map_err(|err| {
        if err.is_remote() {
            CliError::from(err).with_context(format!("Could not look up {tag} on GitHub"))
        } else {
            err.into()
        }
    })
}

fn report_artifacts(artifacts: &ReleaseArtifacts) {
    for url in artifacts.iter() {
        ui::info_message(&format!(
            "{}: {} ({})",
            url.kind.label(),
            url.architecture.label(),
            url.url
        ));
    }
}

use crate::cli::AdjustHrefsArgs;
use crate::config;
use crate::error::{Result, ResultExt};
use crate::progress::ProgressTracker;
use crate::ui;
use changelog::HrefRewrite;

pub fn execute(args: AdjustHrefsArgs) -> Result<()> {
    let config = config::resolve(&args.common)?;

    let mut progress = ProgressTracker::new("Adjust Download Links")
        .with_steps(vec![format!("Rewriting links in {}", config.document.display())]);

    progress.start_step();
    let rewrite = changelog::adjust_hrefs(&config.document, &config)
        .with_context(|| format!("Failed to adjust links in {}", config.document.display()))?;
    progress.complete_step();

    report(&rewrite, config.verbose);
    progress.complete();
    Ok(())
}

fn report(rewrite: &HrefRewrite, verbose: bool) {
    if rewrite.is_changed() {
        ui::success_message(&format!("Rewrote links on {} line(s)", rewrite.rewritten_lines));
    } else {
        ui::info_message("No bare links found");
    }

    if !rewrite.skipped_lines.is_empty() {
        ui::warning_message(&format!(
            "{} line(s) with bare links precede the first 64-bit installer link and were left alone",
            rewrite.skipped_lines.len()
        ));
        if verbose {
            for (i, line) in rewrite.skipped_lines.iter().enumerate() {
                ui::step_message(i + 1, &format!("line {line}"));
            }
        }
    }
}

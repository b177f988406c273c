//! Run command - poll the feed and keep the wallpaper current

use crate::cache::ImageCache;
use crate::cli::args::RunArgs;
use crate::config::Config;
use crate::driver::{CycleOutcome, Driver};
use crate::error::{GeowallError, GeowallResult};
use crate::fetch::HttpSource;
use crate::wallpaper::{self, Desktop};
use console::style;
use std::time::Duration;
use tracing::{debug, error};

/// Execute the run command
pub async fn execute(args: RunArgs, config: &Config) -> GeowallResult<()> {
    // The only fatal error class: no point looping on a host we can
    // never set a wallpaper on
    wallpaper::ensure_supported()?;

    let cache = ImageCache::open(config.cache.resolved_dir())?;
    debug!("Cache directory: {}", cache.dir().display());

    let source = HttpSource::new(&config.source.digest_url, &config.source.image_url);
    let geometry = config.screen.geometry();
    let mut driver = Driver::new(
        source,
        Desktop,
        cache,
        geometry,
        config.cache.max_entries,
    );

    let interval = Duration::from_secs(config.poll.interval_secs);
    loop {
        println!(
            "{} {}x{}",
            style("Screen resolution:").bold(),
            geometry.screen_width,
            geometry.screen_height
        );
        println!("{}", style("Checking for a new image...").dim());
        let result = driver.run_cycle();
        if args.once {
            return report_cycle(result).map(|_| ());
        }
        // In loop mode every in-cycle error just fails this cycle; the
        // fixed wait is the retry backoff
        let _ = report_cycle(result);

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    Ok(())
}

/// Print the outcome of one cycle and pass it through
fn report_cycle(result: GeowallResult<CycleOutcome>) -> GeowallResult<CycleOutcome> {
    match &result {
        Ok(CycleOutcome::Unchanged) => {
            println!("Image has not changed yet.");
        }
        Ok(CycleOutcome::Updated { pair, applied }) => match applied {
            Ok(()) => {
                let name = pair.edited.file_name().unwrap_or_default().to_string_lossy();
                println!("{} Set wallpaper to \"{}\".", style("✓").green(), name);
            }
            Err(e) => {
                eprintln!("{} Failed to set wallpaper: {}", style("!").yellow(), e);
                print_hint(e);
            }
        },
        Err(e) => {
            error!("Cycle failed: {e}");
            eprintln!("{} {}", style("Cycle failed:").red().bold(), e);
            if let Some(source) = std::error::Error::source(e) {
                eprintln!("  caused by: {source}");
            }
            print_hint(e);
        }
    }
    result
}

fn print_hint(e: &GeowallError) {
    if let Some(hint) = e.hint() {
        eprintln!("{} {}", style("Hint:").yellow(), hint);
    }
}

mod cli;

use cli::CliOptions;
use indicatif::ProgressBar;
use spotglow_core::{count_source_entries, progress, run, ExtractorConfig};

fn main() {
    let options = CliOptions::from_env().unwrap_or_else(|err| match err {
        cli::CliError::Help | cli::CliError::Version => {
            println!("{}", err);
            std::process::exit(0);
        }
        _ => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    });

    let config = match build_config(options) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    let progress_bar = ProgressBar::new(count_source_entries(config.source_dir()));
    progress_bar.set_style(progress::default_style());

    match run(&config, &progress_bar) {
        Ok(stats) => {
            progress_bar.finish_and_clear();
            println!("{}", stats.new_files.len());
        }
        Err(error) => {
            progress_bar.finish_and_clear();
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}

fn build_config(options: CliOptions) -> Result<ExtractorConfig, spotglow_core::ConfigError> {
    match (options.source, options.dest) {
        // Both roots supplied: no home-directory lookup needed.
        (Some(source), Some(dest)) => Ok(ExtractorConfig::new(source, dest)),
        (source, dest) => {
            let mut config = ExtractorConfig::locate()?;
            if let Some(source) = source {
                config = config.with_source_dir(source);
            }
            if let Some(dest) = dest {
                config = config.with_dest_root(dest);
            }
            Ok(config)
        }
    }
}

use std::process::ExitCode;
use std::sync::Arc;

use log::LevelFilter;
use passforge::shell::{Shell, ShellConfig};
use passforge::shell::history::HistoryConfig;
use passforge::{Generator, LogConfig, Store, init_logging, paths, store};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> anyhow::Result<()> {
    match paths::log_file() {
        Ok(log_path) => {
            if let Err(e) = init_logging(&LogConfig::new(log_path).with_level(LevelFilter::Info)) {
                eprintln!("Warning: file logging disabled: {e}");
            }
        }
        Err(e) => eprintln!("Warning: file logging disabled: {e}"),
    }

    let store = Arc::new(Store::open(&paths::storage_dir(), store::DEFAULT_FILENAME)?);
    let mut generator = Generator::new(8, 20)?;

    println!("Welcome to passforge!");
    println!(
        "{} entries loaded from {}",
        store.len(),
        store.file_path().display()
    );

    let mut config = ShellConfig::default();
    if let Ok(history_path) = paths::history_file() {
        config.history = HistoryConfig::new(history_path);
    }

    let shell = Shell::with_config(config);
    shell.run(store, &mut generator)
}

use std::io;

use anyhow::Result;
use clap::{Arg, Command};
use tracing_subscriber::EnvFilter;

use cafe_kiosk::{KioskApp, KioskConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Command::new("cafe-kiosk")
        .version("0.1.0")
        .about("Single-terminal cafe kiosk: manager menu curation and customer ordering")
        .arg(
            Arg::new("menu-file")
                .long("menu-file")
                .help("Path to the menu file (default: menu.txt)"),
        )
        .arg(
            Arg::new("credentials-file")
                .long("credentials-file")
                .help("Path to the manager credentials file (default: credentials.txt)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a JSON config file"),
        );

    let matches = cli.get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => KioskConfig::from_file(path)?,
        None => KioskConfig::default(),
    };
    if let Some(path) = matches.get_one::<String>("menu-file") {
        config.menu_path = path.into();
    }
    if let Some(path) = matches.get_one::<String>("credentials-file") {
        config.credentials_path = path.into();
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();

    KioskApp::new(config).run(&mut input, &mut out)?;
    Ok(())
}

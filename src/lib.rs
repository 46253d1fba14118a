pub mod cards;
pub mod census;
pub mod equity;

/// Initialize terminal logging, plus a timestamped debug log file when `dir` is given.
/// The terminal shows INFO, or DEBUG when `verbose`.
#[cfg(feature = "cli")]
pub fn log(verbose: bool, dir: Option<&std::path::Path>) -> std::io::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = Vec::new();
    loggers.push(simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ));
    if let Some(dir) = dir {
        std::fs::create_dir_all(dir)?;
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let file = std::fs::File::create(dir.join(format!("{}.log", time)))?;
        loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        ));
    }
    simplelog::CombinedLogger::init(loggers).map_err(std::io::Error::other)
}

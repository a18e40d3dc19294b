use fern::Dispatch;
use log::LevelFilter;

pub fn setup_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let logger = Dispatch::new()
        .format(move |out, message, record| {
            let (color, reset) = match record.level() {
                log::Level::Error => ("\x1b[31m", "\x1b[0m"), // Red
                log::Level::Warn => ("\x1b[33m", "\x1b[0m"),  // Yellow
                _ => ("", ""),
            };
            if verbose {
                out.finish(format_args!(
                    "{}{}: ({}) {}{}",
                    color,
                    record.level(),
                    record.target(),
                    message,
                    reset
                ))
            } else {
                out.finish(format_args!("{}{}: {}{}", color, record.level(), message, reset))
            }
        })
        .level(level)
        .chain(std::io::stderr());

    if let Err(e) = logger.apply() {
        eprintln!("Failed to apply logger: {:?}", e);
    }
}

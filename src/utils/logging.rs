use tracing::Level;

pub fn setup_tracing(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout belongs to the menu.
        .with_writer(std::io::stderr);
    if json {
        builder.with_ansi(false).without_time().json().init();
    } else {
        builder.without_time().init();
    }
}

use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let stdout = io::stdout();
    let stderr = io::stderr();
    let code = trend_forecast::cli::run(
        std::env::args_os(),
        &mut stdout.lock(),
        &mut stderr.lock(),
    );
    process::exit(code);
}

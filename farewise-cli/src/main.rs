//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "Fatal errors are reported on stderr")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = farewise_cli::run() {
        log::debug!("command failed: {err:?}");
        eprintln!("farewise: {err}");
        std::process::exit(1);
    }
}

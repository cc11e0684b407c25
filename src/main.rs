use std::path::PathBuf;
use std::process;

use clap::Parser;
use mk_favicon::{source, targets};

#[derive(Parser)]
#[command(name = "mk-favicon", version)]
#[command(about = "Re-save an image as multi-size favicon ICO files")]
struct Cli {
    /// Source image (defaults to the bundled favicon design)
    image: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let cli = Cli::parse();
    let image_path = source::resolve_source(cli.image);

    let outcomes = match mk_favicon::run(&image_path, &targets::default_targets()) {
        Ok(outcomes) => outcomes,
        // Already logged by run
        Err(_) => process::exit(1),
    };

    let (succeeded, failed) = mk_favicon::summarize(&outcomes);
    if failed > 0 {
        log::error!("{} of {} favicons failed", failed, succeeded + failed);
        process::exit(1);
    }
}

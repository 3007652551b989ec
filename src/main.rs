use clap::Parser;
use iconkit::cli::{Cli, Commands};
use iconkit::output::Printer;
use miette::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => iconkit::cli::build::run(args, &printer)?,
        Commands::Optimize(args) => iconkit::cli::optimize::run(args, &printer)?,
        Commands::Sprite(args) => iconkit::cli::sprite::run(args, &printer)?,
        Commands::Preview(args) => iconkit::cli::preview::run(args, &printer)?,
        Commands::Stroke(args) => iconkit::cli::stroke::run(args, &printer)?,
        Commands::Png(args) => iconkit::cli::png::run(args, &printer)?,
        Commands::Init(args) => iconkit::cli::init::run(args, &printer)?,
        Commands::Completions(args) => iconkit::cli::completions::run(args)?,
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "iconkit=debug" } else { "iconkit=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

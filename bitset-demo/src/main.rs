use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod expression;

#[derive(Parser)]
#[command(name = "bitset-demo")]
#[command(about = "Evaluates A - (B ^ C) | ((!D & B) - A) | (C & D) with word-packed bitsets")]
struct Args {
    /// Also print the storage words of the result as 0/1 characters
    #[arg(long)]
    bit_view: bool,

    /// Tracing log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = expression::evaluate()?;
    info!(
        universe = expression::UNIVERSE,
        len = result.len(),
        "expression evaluated"
    );

    println!("{}", result.members("Result"));
    if args.bit_view {
        println!("{}", result.bit_view("Result"));
    }

    Ok(())
}

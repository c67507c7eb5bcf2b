use clap::Parser;
use tracing::debug;

use sigwrap_supervisor::{supervise, ChildSpec};

/// Exit code reserved for supervisor-internal failures (launch or wait),
/// as opposed to anything the child itself did.
const EXIT_CODE_INTERNAL: i32 = 255;

/// Run a program, forwarding SIGINT/SIGTERM to it and mirroring its exit status
#[derive(Parser, Debug)]
#[command(name = "sigwrap", version, about, long_about = None)]
struct Args {
    /// Child program followed by its arguments, passed through verbatim
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "PROG [ARG]..."
    )]
    command: Vec<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    initialize_logging();

    let (program, child_args) = match args.command.split_first() {
        Some((program, rest)) => (program.clone(), rest.to_vec()),
        None => unreachable!("clap enforces a non-empty command"),
    };

    let spec = ChildSpec::new(program, child_args);
    let code = match supervise(spec).await {
        Ok(outcome) => {
            debug!("mirroring child outcome: {:?}", outcome);
            outcome.exit_code()
        }
        Err(e) => {
            eprintln!("sigwrap: child: {e}");
            EXIT_CODE_INTERNAL
        }
    };

    std::process::exit(code);
}

/// Logs go to stderr only; the child owns stdout.
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

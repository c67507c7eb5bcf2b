use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::signal::unix::{signal, Signal, SignalKind};
use tokio::time::sleep;
use tracing::{error, info};

/// Scripted child process for sigwrap E2E testing
#[derive(Parser, Debug)]
#[command(name = "testexe")]
#[command(about = "Scripted child process for supervisor testing", long_about = None)]
struct Args {
    /// Duration in seconds to run before exiting (0 = run indefinitely)
    #[arg(long, default_value = "0")]
    run_duration: u64,

    /// Exit code to return on normal completion
    #[arg(long, default_value = "0")]
    exit_code: i32,

    /// If provided, write this file once the program is fully operational.
    /// The file will be removed on shutdown (best-effort).
    #[arg(long)]
    ready_file: Option<PathBuf>,

    /// Install an interrupt handler that logs and keeps running, instead of
    /// the default exit-on-SIGINT disposition
    #[arg(long)]
    ignore_interrupt: bool,

    /// Exit with this code when SIGINT arrives (takes precedence over
    /// --ignore-interrupt)
    #[arg(long)]
    interrupt_exit_code: Option<i32>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    info!("Starting testexe with args: {:?}", args);

    // Interrupt disposition must be in place before the ready file appears,
    // so tests may signal as soon as they see it.
    let handles_interrupt = args.ignore_interrupt || args.interrupt_exit_code.is_some();
    let mut interrupt = if handles_interrupt {
        match signal(SignalKind::interrupt()) {
            Ok(stream) => Some(stream),
            Err(e) => {
                error!("Failed to install interrupt handler: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    if let Some(path) = &args.ready_file {
        if let Err(e) = std::fs::write(path, "ready\n") {
            error!("Failed to write ready file {}: {}", path.display(), e);
            std::process::exit(1);
        }
        info!("Wrote ready file: {}", path.display());
    }

    let code = run(&args, interrupt.as_mut()).await;

    if let Some(path) = &args.ready_file {
        let _ = std::fs::remove_file(path);
    }

    info!("Testexe exiting with code {}", code);
    std::process::exit(code);
}

async fn run(args: &Args, interrupt: Option<&mut Signal>) -> i32 {
    let deadline = async {
        if args.run_duration == 0 {
            std::future::pending::<()>().await
        } else {
            sleep(Duration::from_secs(args.run_duration)).await
        }
    };
    tokio::pin!(deadline);

    let Some(interrupt) = interrupt else {
        deadline.await;
        return args.exit_code;
    };

    loop {
        tokio::select! {
            _ = &mut deadline => break args.exit_code,
            _ = interrupt.recv() => {
                if let Some(code) = args.interrupt_exit_code {
                    info!("Interrupt received, exiting");
                    break code;
                }
                info!("Interrupt received and ignored");
            }
        }
    }
}

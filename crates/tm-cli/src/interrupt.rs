//! Ctrl-C handling for the game loop.

use std::sync::{Arc, Mutex};
use std::{process, thread};

use colored::Colorize;
use tracing::warn;

/// Watch for Ctrl-C on a background thread.
///
/// The game loop blocks on stdin, so the watcher prints the interrupt
/// message and the most recent summary itself, then ends the process with a
/// success code.
pub fn install(message: String, summary: Arc<Mutex<String>>) {
    let spawned = thread::Builder::new()
        .name("interrupt".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    warn!(error = %e, "cannot start signal runtime");
                    return;
                }
            };

            if runtime.block_on(tokio::signal::ctrl_c()).is_ok() {
                println!("\n\n{}", message.yellow());
                match summary.lock() {
                    Ok(summary) => println!("\n{summary}"),
                    Err(poisoned) => println!("\n{}", poisoned.into_inner()),
                }
                process::exit(0);
            }
        });

    if let Err(e) = spawned {
        warn!(error = %e, "cannot install interrupt handler");
    }
}

use std::io;

use anyhow::Result;
use tracing::info;

use twenty48_play::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("twenty48 starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdout.lock());
    session.run(stdin.lock())?;
    Ok(())
}

use super::CommandContext;
use crate::cli::ProcessArgs;
use crate::display;
use crate::error::Result;
use chemlab::engine::explain::ProcessKind;
use chemlab::workflows::inspect;
use std::time::Duration;
use tracing::info;

pub async fn run(args: ProcessArgs, ctx: &CommandContext) -> Result<()> {
    let request = inspect::industrial_process(ctx.catalog, &args.molecule, args.process)?;
    let subject = request.subject();

    // Cracking keeps the spinner up for the configured animation time.
    let min_duration = match args.process {
        ProcessKind::Cracking => ctx.config.session.cracking_duration,
        ProcessKind::Reforming => Duration::ZERO,
    };
    info!("Running {} (at least {:?}).", subject, min_duration);

    let text = ctx.explain(&request, format!("{}...", subject), min_duration).await;
    println!("{}", subject);
    print!("{}", display::explanation_block(&text));
    Ok(())
}

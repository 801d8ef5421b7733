use super::CommandContext;
use crate::cli::ReactArgs;
use crate::display;
use crate::error::Result;
use chemlab::core::formula::to_subscript;
use chemlab::engine::progress::ProgressReporter;
use chemlab::workflows::react::{self, ReactionResult, ReactionStep};
use std::time::Duration;
use tracing::info;

pub async fn run(args: ReactArgs, ctx: &CommandContext) -> Result<()> {
    let steps: Vec<ReactionStep> = args
        .targets
        .iter()
        .map(|target| ReactionStep::new(target.as_str(), args.reactant))
        .collect();

    let reporter = ProgressReporter::with_callback(ctx.ui.progress_callback());
    info!("Invoking the reaction workflow with {} step(s)...", steps.len());
    let result = react::run(ctx.catalog, &args.molecule, &steps, &reporter)?;

    print!("{}", summary(&result, &args));
    if args.atoms {
        print!("{}", display::atom_lines(&result.atoms));
    }

    if !args.no_explain {
        let text = ctx
            .explain(
                &result.explanation,
                format!("Analysing {} + {}...", result.substrate_name, args.reactant),
                Duration::ZERO,
            )
            .await;
        println!();
        print!("{}", display::explanation_block(&text));
    }
    Ok(())
}

fn summary(result: &ReactionResult, args: &ReactArgs) -> String {
    let mut out = format!(
        "{} ({}) + {} {}\n",
        result.substrate_name,
        to_subscript(&result.initial_formula),
        args.reactant,
        to_subscript(args.reactant.reagent_formula())
    );
    for (target, formula) in args.targets.iter().zip(&result.intermediate_formulas) {
        out.push_str(&format!("  {} -> {}\n", target, to_subscript(formula)));
    }
    out.push_str(&format!("Product: {}\n", to_subscript(&result.formula)));
    out
}

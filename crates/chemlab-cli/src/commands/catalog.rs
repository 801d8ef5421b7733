use super::CommandContext;
use crate::cli::{ListArgs, ShowArgs};
use crate::display;
use crate::error::{CliError, Result};
use chemlab::workflows::inspect;
use std::time::Duration;
use tracing::info;

pub fn list(args: ListArgs, ctx: &CommandContext) -> Result<()> {
    let molecules = ctx.catalog.filter(&args.query, args.category);
    info!(
        "{} of {} molecules match '{}' ({}).",
        molecules.len(),
        ctx.catalog.len(),
        args.query,
        args.category
    );

    if molecules.is_empty() {
        println!(
            "No molecules match '{}' in category {}.",
            args.query, args.category
        );
    } else {
        print!("{}", display::molecule_table(&molecules));
    }
    Ok(())
}

pub async fn show(args: ShowArgs, ctx: &CommandContext) -> Result<()> {
    let report = inspect::describe(ctx.catalog, &args.molecule)?;

    if args.json {
        let json = serde_json::to_string_pretty(report.molecule)
            .map_err(|e| CliError::Other(e.into()))?;
        println!("{}", json);
        return Ok(());
    }

    print!("{}", display::molecule_details(&report));
    if !args.no_explain {
        let text = ctx
            .explain(
                &report.explanation,
                format!("Asking about {}...", report.molecule.name),
                Duration::ZERO,
            )
            .await;
        println!();
        print!("{}", display::explanation_block(&text));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::offline_context;
    use chemlab::core::catalog::CategoryFilter;
    use chemlab::engine::config::SessionConfig;
    use chemlab::engine::error::WorkflowError;

    #[test]
    fn list_accepts_queries_without_matches() {
        let (ctx, _ui) = offline_context(SessionConfig::default());
        let args = ListArgs {
            query: "benzene".into(),
            category: CategoryFilter::All,
        };
        assert!(list(args, &ctx).is_ok());
    }

    #[tokio::test]
    async fn show_rejects_unknown_molecules() {
        let (ctx, _ui) = offline_context(SessionConfig::default());
        let args = ShowArgs {
            molecule: "benzene".into(),
            json: false,
            no_explain: true,
        };
        assert!(matches!(
            show(args, &ctx).await,
            Err(CliError::Workflow(WorkflowError::UnknownMolecule(_)))
        ));
    }

    #[tokio::test]
    async fn show_prints_json_and_explanations() {
        let (ctx, _ui) = offline_context(SessionConfig::default());
        for json in [true, false] {
            let args = ShowArgs {
                molecule: "propyne".into(),
                json,
                no_explain: false,
            };
            show(args, &ctx).await.unwrap();
        }
    }
}

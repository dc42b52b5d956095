use anyhow::Result;
use clap::Args;
use voterstats_lib::composition_data;

use super::{report_diagnostics, Context};
use crate::output::{
    print_composition_csv, print_composition_markdown, print_composition_table, print_json,
    OutputFormat,
};

#[derive(Args)]
pub struct CompositionArgs {
    /// Fold NPA and minor parties into a single "Other" slice
    #[arg(long)]
    pub two_party: bool,
}

pub async fn run(args: &CompositionArgs, ctx: &Context<'_>) -> Result<()> {
    let resp = ctx.florida().await;
    let data = composition_data(&resp.data.totals, args.two_party);

    match ctx.format {
        OutputFormat::Table => print_composition_table(&data),
        OutputFormat::Json => print_json(&data),
        OutputFormat::Csv => print_composition_csv(&data)?,
        OutputFormat::Markdown => print_composition_markdown(&data),
    }

    if !matches!(ctx.format, OutputFormat::Json) {
        report_diagnostics(resp.meta.used_fallback, &resp.meta.diagnostics);
    }
    Ok(())
}

use anyhow::Result;
use clap::Args;
use voterstats_lib::{county_ranking, CountySortKey};

use super::{report_diagnostics, Context};
use crate::output::{
    print_counties_csv, print_counties_markdown, print_counties_table, print_json,
    print_statewide_markdown, print_statewide_table, print_summary_footer, OutputFormat,
};

#[derive(Args)]
pub struct FloridaArgs {
    /// Append data-quality notes when party counts and totals disagree
    #[arg(long)]
    pub check_consistency: bool,
}

/// `--check-consistency` is applied to the service config in `main`.
pub async fn run(_args: &FloridaArgs, ctx: &Context<'_>) -> Result<()> {
    let resp = ctx.florida().await;
    let top = county_ranking(&resp.data.by_county, "", CountySortKey::Total, false);

    match ctx.format {
        OutputFormat::Json => print_json(&resp),
        OutputFormat::Table => {
            print_statewide_table(&resp.data.totals);
            print_counties_table(&top);
            print_summary_footer(&resp.data);
        }
        OutputFormat::Markdown => {
            print_statewide_markdown(&resp.data.totals);
            print_counties_markdown(&top);
            print_summary_footer(&resp.data);
        }
        OutputFormat::Csv => print_counties_csv(&resp.data.by_county)?,
    }

    if !matches!(ctx.format, OutputFormat::Json) {
        report_diagnostics(resp.meta.used_fallback, &resp.meta.diagnostics);
    }
    Ok(())
}

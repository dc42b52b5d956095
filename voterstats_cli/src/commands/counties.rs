use anyhow::Result;
use clap::Args;
use voterstats_lib::county_ranking;
use voterstats_lib::validation;

use super::{report_diagnostics, Context};
use crate::output::{
    print_counties_csv, print_counties_markdown, print_counties_table, print_json, OutputFormat,
};

#[derive(Args)]
pub struct CountiesArgs {
    /// Case-insensitive county name filter (e.g. "st." or "beach")
    #[arg(long)]
    pub query: Option<String>,

    /// Sort field: total, republican, democratic, npa, rep-share, dem-share
    #[arg(long, default_value = "total")]
    pub sort_by: String,

    /// Show every county instead of the top ten
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: &CountiesArgs, ctx: &Context<'_>) -> Result<()> {
    let query = match &args.query {
        Some(q) => validation::validate_query(q)?,
        None => String::new(),
    };
    let sort_key = validation::validate_sort_key(&args.sort_by)?;

    let resp = ctx.florida().await;
    let rows = county_ranking(&resp.data.by_county, &query, sort_key, args.all);

    match ctx.format {
        OutputFormat::Table => print_counties_table(&rows),
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Csv => print_counties_csv(&rows)?,
        OutputFormat::Markdown => print_counties_markdown(&rows),
    }

    if !matches!(ctx.format, OutputFormat::Json) {
        report_diagnostics(resp.meta.used_fallback, &resp.meta.diagnostics);
    }
    Ok(())
}

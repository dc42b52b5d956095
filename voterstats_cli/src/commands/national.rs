use anyhow::Result;
use chrono::Utc;
use clap::Args;
use voterstats_lib::national::{chart_data, national_rows};
use voterstats_lib::validation;

use super::{report_diagnostics, Context};
use crate::output::{
    print_json, print_national_csv, print_national_markdown, print_national_table, OutputFormat,
};

#[derive(Args)]
pub struct NationalArgs {
    /// Breakdown: gender or age
    #[arg(long, default_value = "gender")]
    pub dimension: String,

    /// Include the independent/other column
    #[arg(long)]
    pub include_independent: bool,
}

pub async fn run(args: &NationalArgs, ctx: &Context<'_>) -> Result<()> {
    let dimension = validation::validate_dimension(&args.dimension)?;

    let resp = if ctx.offline {
        ctx.service.national_offline_at(Utc::now(), Vec::new())
    } else {
        ctx.service.national_response().await
    };
    let data = chart_data(national_rows(&resp.data, dimension), args.include_independent);

    match ctx.format {
        OutputFormat::Table => print_national_table(&data),
        OutputFormat::Json => print_json(&data),
        OutputFormat::Csv => print_national_csv(&data)?,
        OutputFormat::Markdown => print_national_markdown(&data),
    }

    if !matches!(ctx.format, OutputFormat::Json) {
        report_diagnostics(resp.meta.used_fallback, &resp.meta.diagnostics);
    }
    Ok(())
}

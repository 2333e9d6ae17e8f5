mod aggregate;
mod cli;
mod error;
mod filter;
mod output;
mod readers;
mod report;
mod survey;
mod table;
mod types;

use clap::Parser;
use cli::{Cli, Commands, SectionArg};
use types::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            input,
            out,
            section,
            distrito,
            genero,
            edad,
            jerarquia,
            estado_civil,
            actividad_fisica,
        } => {
            let table = readers::load_table(&input)?;
            let spec = cli::filter_spec(
                distrito,
                genero,
                edad,
                jerarquia,
                estado_civil,
                actividad_fisica,
            );
            let value = section_value(&table, &spec, section)?;

            match out {
                Some(path) => {
                    output::write_json_file(&value, &path)?;
                    eprintln!("Report written to: {}", path.display());
                }
                None => output::write_json_stdout(&value)?,
            }
        }
    }

    Ok(())
}

/// Compute the requested section as JSON. The filter pass runs once, and
/// only for the per-section variants; the full bundle applies it itself.
fn section_value(
    table: &table::Table,
    spec: &filter::FilterSpec,
    section: SectionArg,
) -> Result<serde_json::Value> {
    let subset = || filter::apply(table, spec);

    let value = match section {
        SectionArg::All => {
            if spec.is_empty() {
                serde_json::to_value(report::full_report(table))?
            } else {
                serde_json::to_value(report::filtered_report(table, spec))?
            }
        }
        SectionArg::Demographics => serde_json::to_value(report::demographics(&subset()))?,
        SectionArg::Habits => serde_json::to_value(report::habits(&subset()))?,
        SectionArg::Health => serde_json::to_value(report::health(&subset()))?,
        SectionArg::Knowledge => serde_json::to_value(report::knowledge(&subset()))?,
        SectionArg::QualityOfLife => serde_json::to_value(report::quality_of_life(&subset()))?,
        SectionArg::Kpis => serde_json::to_value(report::kpis(&subset()))?,
        // filter options always reflect the full dataset
        SectionArg::FilterOptions => serde_json::to_value(report::filter_options(table))?,
    };
    Ok(value)
}

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::filter::FilterSpec;

/// Report builder for the occupational wellness survey dashboard
#[derive(Parser, Debug)]
#[command(name = "survey-dashboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute report bundles from a survey export
    Report {
        /// Input file path (xlsx, xls, csv or tsv)
        #[arg(short, long)]
        input: PathBuf,

        /// Output JSON file path (stdout if not specified)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Report section to emit
        #[arg(short, long, value_enum, default_value_t = SectionArg::All)]
        section: SectionArg,

        /// Keep only responses from this district ("all" for no filter)
        #[arg(long)]
        distrito: Option<String>,

        /// Keep only responses with this gender
        #[arg(long)]
        genero: Option<String>,

        /// Keep only responses in this age band
        #[arg(long)]
        edad: Option<String>,

        /// Keep only responses with this hierarchy
        #[arg(long)]
        jerarquia: Option<String>,

        /// Keep only responses with this marital status
        #[arg(long)]
        estado_civil: Option<String>,

        /// Keep only respondents who report physical activity
        #[arg(long, default_value_t = false)]
        actividad_fisica: bool,
    },
}

/// Report sections, one per dashboard endpoint
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionArg {
    All,
    Demographics,
    Habits,
    Health,
    Knowledge,
    QualityOfLife,
    Kpis,
    FilterOptions,
}

/// Build the filter spec from query-style CLI parameters
pub fn filter_spec(
    distrito: Option<String>,
    genero: Option<String>,
    edad: Option<String>,
    jerarquia: Option<String>,
    estado_civil: Option<String>,
    actividad_fisica: bool,
) -> FilterSpec {
    FilterSpec {
        district: FilterSpec::param(distrito),
        gender: FilterSpec::param(genero),
        age: FilterSpec::param(edad),
        hierarchy: FilterSpec::param(jerarquia),
        civil_status: FilterSpec::param(estado_civil),
        physical_activity: actividad_fisica,
    }
}

//! Schema command - print the JSON output formats

use super::invest::InvestReport;
use super::tax::TaxReport;
use clap::{Args, ValueEnum};
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Which command's JSON output to describe
    #[arg(value_enum, default_value = "tax")]
    output: SchemaOutput,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaOutput {
    /// Output of `tax --json`
    Tax,
    /// Output of `invest --json`
    Invest,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schema = match self.output {
            SchemaOutput::Tax => schema_for!(TaxReport),
            SchemaOutput::Invest => schema_for!(InvestReport),
        };
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }
}

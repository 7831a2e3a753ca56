//! Schema command - print expected input formats

use crate::invoice::InvoiceInput;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or csv-fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the invoice input format
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// CSV column descriptions
    CsvFields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::CsvFields => self.print_csv_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(InvoiceInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        println!("{}", CSV_COLUMNS.join(","));
        Ok(())
    }

    fn print_csv_fields(&self) -> anyhow::Result<()> {
        println!("CSV Input Format (one line item per row)");
        println!("========================================");
        println!();
        for (name, required, description) in CSV_FIELD_DESCRIPTIONS {
            let req = if *required { "required" } else { "optional" };
            println!("{:16} ({:8})  {}", name, req, description);
        }
        println!();
        println!("The CIS status is not part of the CSV format; pass --cis-status instead.");
        Ok(())
    }
}

const CSV_COLUMNS: &[&str] = &[
    "id",
    "description",
    "quantity",
    "net_amount",
    "vat_rate",
    "cis_category",
];

const CSV_FIELD_DESCRIPTIONS: &[(&str, bool, &str)] = &[
    ("id", false, "Line identifier for linking back to source data"),
    ("description", true, "What was supplied"),
    ("quantity", true, "Number of units"),
    ("net_amount", true, "Per-unit net price in pounds and pence"),
    ("vat_rate", true, "0, 5, 20 or reverse_charge"),
    (
        "cis_category",
        false,
        "labour, materials or not_applicable (default)",
    ),
];

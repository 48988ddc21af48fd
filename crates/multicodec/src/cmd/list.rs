use multicodec_table::CodecEntry;
use serde::Serialize;

use crate::cmd::{Context, ListArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{format_code, print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct CodecOutput<'a> {
    name: &'a str,
    code: String,
    prefix: String,
}

pub fn run(args: ListArgs, ctx: &Context) -> CliResult<i32> {
    let registry = ctx.registry()?;
    let entries: Vec<CodecEntry> = registry
        .entries()
        .into_iter()
        .filter(|entry| match &args.filter {
            Some(filter) => entry.name.contains(filter.as_str()),
            None => true,
        })
        .collect();

    let rows: Vec<CodecOutput<'_>> = entries
        .iter()
        .map(|entry| CodecOutput {
            name: &entry.name,
            code: format_code(entry.code),
            prefix: hex::encode(multicodec_varint::encode(entry.code)),
        })
        .collect();

    match ctx.format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => print_table(
            &["CODE", "NAME", "PREFIX"],
            rows.iter()
                .map(|row| vec![row.code.clone(), row.name.to_string(), row.prefix.clone()])
                .collect(),
        ),
        OutputFormat::Pretty => {
            for row in &rows {
                println!("{:>8}  {}", row.code, row.name);
            }
        }
        OutputFormat::Raw => {
            for row in &rows {
                println!("{}", row.name);
            }
        }
    }

    Ok(SUCCESS)
}

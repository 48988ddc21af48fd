use serde::Serialize;

use crate::cmd::{parse_hex, VarintAction, VarintArgs};
use crate::exit::{varint_error, CliResult, SUCCESS};
use crate::output::{format_bits, print_json, print_raw, print_table, OutputFormat};

#[derive(Serialize)]
struct VarintOutput {
    value: u32,
    bytes: String,
    bits: String,
    len: usize,
}

pub fn run(args: VarintArgs, format: OutputFormat) -> CliResult<i32> {
    let (value, encoded) = match args.action {
        VarintAction::Encode { value } => {
            let encoded = multicodec_varint::encode_signed(value)
                .map_err(|err| varint_error("encode failed", err))?;
            let value = u32::try_from(value).unwrap_or_default();
            (value, encoded.to_vec())
        }
        VarintAction::Decode { hex, offset } => {
            let bytes = parse_hex(&hex)?;
            let (value, consumed) = multicodec_varint::decode(&bytes, offset)
                .map_err(|err| varint_error("decode failed", err))?;
            (value, bytes[offset..offset + consumed].to_vec())
        }
    };

    let out = VarintOutput {
        value,
        bytes: hex::encode(&encoded),
        bits: format_bits(&encoded),
        len: encoded.len(),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["VALUE", "BYTES", "BITS", "LEN"],
            vec![vec![
                out.value.to_string(),
                out.bytes.clone(),
                out.bits.clone(),
                out.len.to_string(),
            ]],
        ),
        OutputFormat::Pretty => println!("{} = {} ({})", out.value, out.bytes, out.bits),
        OutputFormat::Raw => print_raw(&encoded),
    }

    Ok(SUCCESS)
}

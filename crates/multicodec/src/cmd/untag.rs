use multicodec_table::MulticodecError;
use serde::Serialize;

use crate::cmd::{Context, UntagArgs};
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{
    format_code, payload_preview, print_json, print_raw, print_table, OutputFormat,
};

#[derive(Serialize)]
struct UntagOutput<'a> {
    codec: &'a str,
    code: String,
    prefix_len: usize,
    payload_size: usize,
    payload: String,
    payload_hex: String,
}

pub fn run(args: UntagArgs, ctx: &Context) -> CliResult<i32> {
    let registry = ctx.registry()?;
    let tagged = args.payload.resolve()?;

    let (code, prefix_len) = multicodec_varint::decode(&tagged, 0)
        .map_err(|err| registry_error("untag failed", MulticodecError::from(err)))?;
    let codec = registry
        .name_for(code)
        .map_err(|err| registry_error("untag failed", err))?;
    let payload = &tagged[prefix_len..];
    tracing::debug!(codec, code, prefix_len, "untagged payload");

    let out = UntagOutput {
        codec,
        code: format_code(code),
        prefix_len,
        payload_size: payload.len(),
        payload: payload_preview(payload),
        payload_hex: hex::encode(payload),
    };

    match ctx.format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["CODEC", "CODE", "PREFIX", "SIZE", "PAYLOAD"],
            vec![vec![
                out.codec.to_string(),
                out.code.clone(),
                out.prefix_len.to_string(),
                out.payload_size.to_string(),
                out.payload.clone(),
            ]],
        ),
        OutputFormat::Pretty => println!(
            "codec={} ({}) prefix={} size={} payload={}",
            out.codec, out.code, out.prefix_len, out.payload_size, out.payload
        ),
        OutputFormat::Raw => print_raw(payload),
    }

    Ok(SUCCESS)
}

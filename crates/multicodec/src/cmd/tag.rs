use multicodec_varint::encoded_len;
use serde::Serialize;

use crate::cmd::{Context, TagArgs};
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{format_code, print_json, print_raw, print_table, OutputFormat};

#[derive(Serialize)]
struct TagOutput<'a> {
    codec: &'a str,
    code: String,
    prefix_len: usize,
    payload_size: usize,
    tagged: String,
}

pub fn run(args: TagArgs, ctx: &Context) -> CliResult<i32> {
    let registry = ctx.registry()?;
    let payload = args.payload.resolve()?;

    let tagged = registry
        .tag(&args.codec, &payload)
        .map_err(|err| registry_error("tag failed", err))?;
    let code = registry
        .code_for(&args.codec)
        .map_err(|err| registry_error("tag failed", err))?;
    tracing::debug!(codec = %args.codec, code, size = tagged.len(), "tagged payload");

    let out = TagOutput {
        codec: &args.codec,
        code: format_code(code),
        prefix_len: encoded_len(code),
        payload_size: payload.len(),
        tagged: hex::encode(&tagged),
    };

    match ctx.format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["CODEC", "CODE", "PREFIX", "SIZE", "TAGGED"],
            vec![vec![
                out.codec.to_string(),
                out.code.clone(),
                out.prefix_len.to_string(),
                out.payload_size.to_string(),
                out.tagged.clone(),
            ]],
        ),
        OutputFormat::Pretty => println!("{}", out.tagged),
        OutputFormat::Raw => print_raw(&tagged),
    }

    Ok(SUCCESS)
}

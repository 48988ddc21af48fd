use multicodec_table::MulticodecRegistry;

use crate::cmd::VersionArgs;
use crate::exit::{registry_error, CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("multicodec {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: multicodec");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("MULTICODEC_BUILD_TARGET").unwrap_or("unknown")
    );
    println!("target_os: {}", std::env::consts::OS);
    println!("target_arch: {}", std::env::consts::ARCH);
    println!("git_hash: {}", option_env!("GIT_HASH").unwrap_or("unknown"));
    let builtin = MulticodecRegistry::builtin()
        .map_err(|err| registry_error("failed to load built-in table", err))?;
    println!("builtin_codecs: {}", builtin.len());

    Ok(SUCCESS)
}

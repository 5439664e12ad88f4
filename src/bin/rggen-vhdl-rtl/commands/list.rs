//! `rggen-vhdl-rtl list` command

use anyhow::Result;

use crate::cli::{Format, ListArgs};
use rggen_vhdl_rtl::ops::register_library;
use rggen_vhdl_rtl::util::Config;
use rggen_vhdl_rtl::CollectedFiles;

pub fn execute(args: ListArgs) -> Result<()> {
    // Config file first, then command-line defines on top
    let config = Config::load_or_default(args.config.as_deref())?;
    let mut macros = config.macro_set();
    for symbol in &args.defines {
        macros.define(symbol);
    }

    let mut sink = CollectedFiles::new();
    let manifest = register_library(&macros, &mut sink)?;

    match args.format {
        Format::Names => {
            for file in &manifest {
                println!("{}", file);
            }
        }
        Format::Paths => {
            for file in &manifest {
                match &args.base_dir {
                    Some(base) => println!("{}", file.path(base).display()),
                    None => println!("{}", file.file_name()),
                }
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
    }

    Ok(())
}

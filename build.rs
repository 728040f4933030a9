//! Renders the man page from the CLI definitions.

use std::path::PathBuf;

use clap::CommandFactory;

#[path = "src/cli_args.rs"]
#[allow(dead_code)]
mod cli_args;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli_args.rs");

    let Some(out_dir) = std::env::var_os("OUT_DIR").map(PathBuf::from) else {
        return Ok(());
    };

    let cmd = cli_args::Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    std::fs::write(out_dir.join("color-wallpaper.1"), buffer)
}

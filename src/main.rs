// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use yamlang::{Emitter, Flattener};

/// Convert a flat JSON translation table to nested YAML, or back
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Flat JSON language file to read (nested YAML with --flatten)
    input: PathBuf,
    /// Nested YAML file to write (flat JSON with --flatten)
    output: PathBuf,
    /// Convert in the other direction, nested YAML to a flat JSON table
    #[arg(long)]
    flatten: bool,
    /// Indent the JSON written by --flatten
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("could not read {}", cli.input.display()))?;
    let output = if cli.flatten {
        Flattener::new()
            .pretty(cli.pretty)
            .from_str(&input)?
    } else {
        Emitter::new()
            .apply_str(&input)?
    };
    fs::write(&cli.output, output)
        .with_context(|| format!("could not write {}", cli.output.display()))?;
    println!("All done, bye!");
    Ok(())
}

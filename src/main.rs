/*
 * Copyright 2025 Michael Krolikowski
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

mod error;
mod log;
mod registry;
mod select;
mod settings;

use ::log::debug;
use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use registry::Registry;
use settings::Settings;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Optional YAML settings file
    #[arg(short, long, default_value = "latest-tag.yaml")]
    config: String,
    /// Repository to look up, e.g. library/redis
    #[arg(short, long)]
    repository: Option<String>,
    /// Increase logging verbosity
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print shell completions
    Completions { shell: Shell },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(Command::Completions { shell }) = cli.command {
        let mut command = Cli::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        return Ok(());
    }

    log::init(cli.verbose)?;
    let settings = Settings::read(&cli.config, cli.repository)?;
    let tag = run(settings).await?;
    println!("{tag}");
    Ok(())
}

async fn run(settings: Settings) -> Result<String> {
    debug!("Using {settings:?}");
    let registry = Registry::new(settings)?;
    let token = registry.token().await?;
    let tags = registry.tags(&token).await?;
    let tag = select::latest_tag(&tags)?;
    Ok(tag.to_string())
}

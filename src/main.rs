use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use fontcat::Generator;
use fontcat::cli::Cli;
use fontcat_config::CatalogDescriptor;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let Some(input) = cli.input else {
        // Fatal: nothing has been written at this point.
        log::error!("no FontCatalog description JSON file was provided (-i)");
        std::process::exit(1);
    };
    let output = cli.output.unwrap_or_else(|| {
        log::warn!("no output path provided, using default \"output\" folder (-o)");
        PathBuf::from("./output")
    });

    let descriptor = CatalogDescriptor::load(&input)?;
    let generator = Generator::new(&descriptor, &input, &output)?;
    let catalog = generator.run()?;

    log::info!(
        "Generated catalog '{}': {} fonts, {} supported blocks",
        catalog.name,
        catalog.fonts.len(),
        catalog.supported_blocks.len()
    );
    Ok(())
}

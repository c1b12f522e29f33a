//! Refresh the bundled Unicode block table from unicode.org.
//!
//! Fetches the canonical `Blocks.txt` and rewrites
//! `fontcat-fonts/resources/unicode-ranges.json` in the record format the
//! block table loader expects. One-time data refresh utility; the generator
//! itself never touches the network.
//!
//! Usage: `unicode-ranges [output-file]`

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

const BLOCKS_URL: &str = "https://unicode.org/Public/UNIDATA/Blocks.txt";
const DEFAULT_OUTPUT: &str = "fontcat-fonts/resources/unicode-ranges.json";

/// One block record in the bundled table format.
#[derive(Debug, Serialize)]
struct BlockRecord {
    category: String,
    hexrange: [String; 2],
    range: [u32; 2],
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    log::info!("Fetching {BLOCKS_URL}");
    let mut body = ureq::get(BLOCKS_URL)
        .header("User-Agent", "fontcat")
        .call()
        .map_err(|e| anyhow::anyhow!("failed to fetch block table: {e}"))?
        .into_body();
    let text = body
        .read_to_string()
        .map_err(|e| anyhow::anyhow!("failed to read response body: {e}"))?;

    let records = parse_blocks(&text)?;
    anyhow::ensure!(
        !records.is_empty(),
        "no block definitions found in {BLOCKS_URL}"
    );

    std::fs::write(&output, serde_json::to_string(&records)?)?;
    log::info!("Wrote {} blocks to {}", records.len(), output.display());
    Ok(())
}

/// Parse `XXXX..YYYY; Block Name` lines out of Blocks.txt.
fn parse_blocks(text: &str) -> Result<Vec<BlockRecord>> {
    let re = regex::Regex::new(r"(?m)^([0-9A-F]{4,6})\.\.([0-9A-F]{4,6}); (.+)$")
        .expect("invalid regex");

    let mut records = Vec::new();
    for caps in re.captures_iter(text) {
        let min = u32::from_str_radix(&caps[1], 16)?;
        let max = u32::from_str_radix(&caps[2], 16)?;
        records.push(BlockRecord {
            category: caps[3].trim().to_string(),
            hexrange: [caps[1].to_string(), caps[2].to_string()],
            range: [min, max],
        });
    }
    Ok(records)
}

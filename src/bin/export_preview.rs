//! Static export: render one record JSON to `dist/{slug}/index.html`, for
//! hosting a preview without running the server.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use smb_previews::links::DEFAULT_UPSTREAM_BASE;
use smb_previews::record::PreviewRecord;
use smb_previews::views;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let record_path = args
        .next()
        .context("usage: export_preview <record.json> [out-dir]")?;
    let out_dir = args.next().unwrap_or_else(|| "dist".to_string());

    let raw = fs::read_to_string(&record_path)
        .with_context(|| format!("failed to read {record_path}"))?;
    let record: PreviewRecord =
        serde_json::from_str(&raw).with_context(|| format!("failed to parse {record_path}"))?;

    let upstream_base =
        std::env::var("UPSTREAM_BASE_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE.to_string());
    let html = views::render_preview_page(&record, &upstream_base);

    let target = Path::new(&out_dir).join(&record.slug);
    fs::create_dir_all(&target)?;
    let index = target.join("index.html");
    fs::write(&index, html)?;
    println!("Wrote {}", index.display());

    Ok(())
}

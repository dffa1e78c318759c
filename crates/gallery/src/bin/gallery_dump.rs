//! Lay out a JSON item manifest at a given container width and print the
//! resulting placements.

use anyhow::{Error, anyhow};
use gallery::{GalleryView, load_manifest};
use log::{error, info};
use std::env;
use std::path::PathBuf;

fn run() -> Result<(), Error> {
    let mut args = env::args().skip(1);
    let usage = "usage: gallery_dump <manifest.json> <container-width>";
    let manifest: PathBuf = args.next().ok_or_else(|| anyhow!(usage))?.into();
    let width: f32 = args.next().ok_or_else(|| anyhow!(usage))?.parse()?;

    let items = load_manifest(&manifest)?;
    info!("loaded {} items from {}", items.len(), manifest.display());

    let mut view = GalleryView::new();
    view.set_items(items);
    view.measure(width);

    let result = view.layout();
    for (index, placement) in result.placements.iter().enumerate() {
        println!(
            "item {index}: x={:.1} y={:.1} width={:.1}",
            placement.x, placement.y, placement.width
        );
    }
    println!("container height: {:.1}", result.container_height);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        error!("gallery_dump failed: {err:#}");
        std::process::exit(1);
    }
}

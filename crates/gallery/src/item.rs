use masonry::ItemSize;
use serde::{Deserialize, Serialize};

/// A gallery entry: source dimensions plus display metadata. Only the
/// dimensions feed the layout engine; everything else is opaque to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: u64,
    pub title: String,
    /// Price in integer cents; see `format_price` for display.
    pub price_cents: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub width: f32,
    pub height: f32,
}

impl GalleryItem {
    pub fn size(&self) -> ItemSize {
        ItemSize::new(self.width, self.height)
    }
}

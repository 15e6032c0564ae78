//! Gallery view model.

use serde::{Deserialize, Serialize};

/// A gallery image on a provider profile. Records without an image URL are
/// dropped during mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub image_url: String,
    pub caption: Option<String>,
}

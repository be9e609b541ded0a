use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};

/// Common locations of a font with CJK glyphs, tried in order when no font is
/// configured. egui's built-in fonts cannot render Chinese company names.
const SYSTEM_CJK_FONTS: &[&str] = &[
    r"C:\Windows\Fonts\simhei.ttf",
    r"C:\Windows\Fonts\msyh.ttc",
    "/System/Library/Fonts/PingFang.ttc",
    "/System/Library/Fonts/STHeiti Medium.ttc",
    "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
];

const CJK_FONT_NAME: &str = "cjk";

/// Register a CJK fallback font for both font families. Missing fonts are
/// logged; the UI still works with the default fonts.
pub fn install_cjk_font(ctx: &egui::Context, configured: Option<&Path>) {
    let candidates: Vec<PathBuf> = match configured {
        Some(path) => vec![path.to_path_buf()],
        None => SYSTEM_CJK_FONTS.iter().map(PathBuf::from).collect(),
    };

    let Some(path) = candidates.iter().find(|p| p.is_file()) else {
        log::warn!("No CJK font found; Chinese text may not render");
        return;
    };

    match font_definitions(path) {
        Ok(fonts) => {
            log::info!("Using CJK font {}", path.display());
            ctx.set_fonts(fonts);
        }
        Err(e) => log::warn!("Could not load CJK font: {e:#}"),
    }
}

fn font_definitions(path: &Path) -> Result<FontDefinitions> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(CJK_FONT_NAME.to_owned(), Arc::new(FontData::from_owned(bytes)));
    for family in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(CJK_FONT_NAME.to_owned());
    }
    Ok(fonts)
}

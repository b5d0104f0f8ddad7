//! SVG rendering of the tile layout.
//!
//! The drawing uses centimeters as user units, so the viewBox matches the
//! sheet size directly.

use super::currency::format_decimal;
use crate::layout::TileLayout;
use crate::model::ProductionPlan;

/// Drawing colors.
pub struct SvgColors {
    pub sheet_fill: &'static str,
    pub sheet_stroke: &'static str,
    pub tile_fill: &'static str,
    pub tile_stroke: &'static str,
    pub label: &'static str,
}

impl Default for SvgColors {
    fn default() -> Self {
        Self {
            sheet_fill: "#f1f5f9",
            sheet_stroke: "#cbd5e1",
            tile_fill: "#e0f2fe",
            tile_stroke: "#0ea5e9",
            label: "#0369a1",
        }
    }
}

/// SVG writer for the sheet drawing.
pub struct SvgWriter {
    output: String,
    colors: SvgColors,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self {
            output: String::new(),
            colors: SvgColors::default(),
        }
    }

    /// Get the generated SVG content.
    pub fn into_string(self) -> String {
        self.output
    }

    fn line(&mut self, s: &str) {
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Draw the sheet and every tile of the layout.
    pub fn write_plan(&mut self, plan: &ProductionPlan, layout: &TileLayout) {
        let w = format_decimal(plan.sheet_width);
        let h = format_decimal(plan.sheet_height);

        self.line(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}cm" height="{h}cm">"#
        ));
        self.line(&format!(
            r#"  <rect x="0" y="0" width="{w}" height="{h}" fill="{}" stroke="{}" stroke-width="0.2"/>"#,
            self.colors.sheet_fill, self.colors.sheet_stroke
        ));

        let tile_w = layout.tile_width * plan.sheet_width;
        let tile_h = layout.tile_height * plan.sheet_height;
        let font_size = format_decimal((tile_w.min(tile_h) / 5.0).max(0.5));

        for tile in &layout.tiles {
            let x = tile.x * plan.sheet_width;
            let y = tile.y * plan.sheet_height;
            self.line(&format!(
                r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="0.1"/>"#,
                format_decimal(x),
                format_decimal(y),
                format_decimal(tile_w),
                format_decimal(tile_h),
                self.colors.tile_fill,
                self.colors.tile_stroke
            ));
            self.line(&format!(
                r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
                format_decimal(x + tile_w / 2.0),
                format_decimal(y + tile_h / 2.0),
                font_size,
                self.colors.label,
                layout.label
            ));
        }

        if layout.truncated {
            self.line(&format!(
                r#"  <!-- showing {} of {} pieces -->"#,
                layout.len(),
                plan.best_yield
            ));
            self.line(&format!(
                r#"  <text x="1" y="{}" font-size="2" fill="{}">Showing {} of {} pieces</text>"#,
                format_decimal(plan.sheet_height - 1.0),
                self.colors.label,
                layout.len(),
                plan.best_yield
            ));
        }

        self.line("</svg>");
    }
}

/// Render the plan's tile layout as a standalone SVG document.
pub fn generate_svg(plan: &ProductionPlan) -> String {
    let layout = TileLayout::from_plan(plan);
    let mut writer = SvgWriter::new();
    writer.write_plan(plan, &layout);
    writer.into_string()
}

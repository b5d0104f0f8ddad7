//! Output generators: text report, currency formatting and SVG drawing.

mod currency;
mod report;
mod svg;

pub use currency::{format_decimal, format_rupiah, group_thousands};
pub use report::render_report;
pub use svg::{generate_svg, SvgWriter};

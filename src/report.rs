use docx_rs::{
    AlignmentType, BorderType, Docx, Footer, PageMargin, PageNum, PageOrientationType, Paragraph,
    Pic, Run, Table, TableBorder, TableBorderPosition, TableBorders, TableCell, TableRow,
};
use image::GenericImageView;
use std::path::Path;

use crate::error::ReportError;
use crate::types::{Orientation, YieldTable};
use crate::util::report_date;

// A4 in twips (1/20 pt). Landscape swaps the two.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
// 1 inch margins on all four sides, both orientations.
const MARGIN: u32 = 1440;
// Logo is embedded at a fixed 1.1 inch width (914400 EMU per inch).
const LOGO_WIDTH_EMU: u32 = 1_005_840;

const INSTITUTION: &str =
    "IDEAS - Institute of Data Engineering, Analytics and Science Foundation";
const CONTACT: &str = "ISI Kolkata | https://www.ideas-tih.org | +91 6289351800";
const REPORT_HEADING: &str = "Crop wise Yield forecasts";
const ATTRIBUTION: &str = "© 2025 IDEAS-TIH. All rights reserved.";
const CROP_HEADING_COLOR: &str = "0066CC";

/// One column of the per-crop table: fixed header, unit sub-label, and the
/// (year, method) tuple it reads from. `source: None` is the state-name
/// column.
pub struct Column {
    pub title: &'static str,
    pub unit: &'static str,
    pub source: Option<(i32, &'static str)>,
}

/// The fixed 9-column layout of every crop table.
pub const COLUMNS: [Column; 9] = [
    Column { title: "State", unit: "", source: None },
    Column { title: "2024-25 ARIMA", unit: "(Yield)", source: Some((2024, "ARIMA")) },
    Column { title: "ARIMA RMSE", unit: "(RMSE)", source: Some((2024, "ARIMA_RMSE")) },
    Column { title: "2024-25 XGBoost", unit: "(Yield)", source: Some((2024, "XGBoost")) },
    Column { title: "XGBoost RMSE", unit: "(RMSE)", source: Some((2024, "XGBoost_RMSE")) },
    Column { title: "2024-25 RF", unit: "(Yield)", source: Some((2024, "Random Forest")) },
    Column { title: "RF RMSE", unit: "(RMSE)", source: Some((2024, "RF_RMSE")) },
    Column { title: "2023-24 MoA&FW", unit: "", source: Some((2023, "MoA&FW")) },
    Column { title: "2022-23 MoA&FW", unit: "", source: Some((2022, "MoA&FW")) },
];

/// Logo image bytes plus the embedded size (fixed width, aspect-preserving
/// height).
///
/// Loaded and decoded before any document or output-file work, so a missing
/// or unreadable logo aborts the run with nothing written to disk.
#[derive(Debug)]
pub struct Logo {
    pub bytes: Vec<u8>,
    pub width_emu: u32,
    pub height_emu: u32,
}

impl Logo {
    pub fn load(path: &Path) -> Result<Self, ReportError> {
        let bytes = std::fs::read(path).map_err(|source| ReportError::LogoRead {
            path: path.to_path_buf(),
            source,
        })?;
        let img = image::load_from_memory(&bytes).map_err(|source| ReportError::LogoDecode {
            path: path.to_path_buf(),
            source,
        })?;
        let (w, h) = img.dimensions();
        let height_emu = ((LOGO_WIDTH_EMU as u64 * h as u64) / w.max(1) as u64) as u32;
        Ok(Logo {
            bytes,
            width_emu: LOGO_WIDTH_EMU,
            height_emu,
        })
    }
}

/// Page size in twips for the given orientation.
pub fn page_dimensions(orientation: Orientation) -> (u32, u32) {
    match orientation {
        Orientation::Portrait => (PAGE_WIDTH, PAGE_HEIGHT),
        Orientation::Landscape => (PAGE_HEIGHT, PAGE_WIDTH),
    }
}

/// Cell texts for one state row, in column order. Missing figures come back
/// as empty strings, never placeholders.
pub fn row_cells(table: &YieldTable, crop: &str, state: &str) -> Vec<String> {
    COLUMNS
        .iter()
        .map(|col| match col.source {
            None => state.to_string(),
            Some((year, method)) => table.cell_text(crop, state, year, method),
        })
        .collect()
}

/// Assemble the whole document in memory: page setup, header block, one
/// heading + table per crop, footer. Serialization happens later in
/// `output::save`.
pub fn build_document(table: &YieldTable, orientation: Orientation, logo: &Logo) -> Docx {
    let (page_w, page_h) = page_dimensions(orientation);
    let content_w = (page_w - 2 * MARGIN) as usize;

    let mut docx = Docx::new()
        .page_size(page_w, page_h)
        .page_margin(
            PageMargin::new()
                .top(MARGIN as i32)
                .bottom(MARGIN as i32)
                .left(MARGIN as i32)
                .right(MARGIN as i32),
        )
        .footer(page_footer());
    if orientation == Orientation::Landscape {
        docx = docx.page_orient(PageOrientationType::Landscape);
    }

    docx = docx
        .add_paragraph(logo_paragraph(logo))
        .add_paragraph(centered_line(INSTITUTION, 24, true))
        .add_paragraph(centered_line(CONTACT, 18, false))
        .add_paragraph(Paragraph::new())
        .add_table(horizontal_rule(content_w))
        .add_paragraph(centered_line(REPORT_HEADING, 28, true));

    for crop in table.crops() {
        docx = docx
            .add_paragraph(crop_heading(crop))
            .add_table(crop_table(table, crop, content_w))
            .add_paragraph(Paragraph::new());
    }

    docx
}

fn centered_line(text: &str, half_points: usize, bold: bool) -> Paragraph {
    let mut run = Run::new().add_text(text).size(half_points);
    if bold {
        run = run.bold();
    }
    Paragraph::new().align(AlignmentType::Center).add_run(run)
}

fn logo_paragraph(logo: &Logo) -> Paragraph {
    let pic = Pic::new(&logo.bytes).size(logo.width_emu, logo.height_emu);
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_image(pic))
}

// A full-width table with only its bottom border drawn, standing in for a
// horizontal rule under the contact block.
fn horizontal_rule(width: usize) -> Table {
    let bottom = TableBorder::new(TableBorderPosition::Bottom)
        .border_type(BorderType::Single)
        .size(12)
        .color("auto");
    Table::new(vec![TableRow::new(vec![
        TableCell::new().add_paragraph(Paragraph::new()),
    ])])
    .set_grid(vec![width])
    .set_borders(TableBorders::with_empty().set(bottom))
}

fn crop_heading(crop: &str) -> Paragraph {
    Paragraph::new().align(AlignmentType::Center).add_run(
        Run::new()
            .add_text(crop.to_uppercase())
            .bold()
            .underline("single")
            .size(24)
            .color(CROP_HEADING_COLOR),
    )
}

fn text_cell(text: String) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn crop_table(table: &YieldTable, crop: &str, width: usize) -> Table {
    let mut rows = Vec::new();
    rows.push(TableRow::new(
        COLUMNS.iter().map(|c| text_cell(c.title.to_string())).collect(),
    ));
    rows.push(TableRow::new(
        COLUMNS.iter().map(|c| text_cell(c.unit.to_string())).collect(),
    ));
    for state in table.states(crop) {
        rows.push(TableRow::new(
            row_cells(table, crop, state).into_iter().map(text_cell).collect(),
        ));
    }
    Table::new(rows).set_grid(vec![width / COLUMNS.len(); COLUMNS.len()])
}

// Identical on every page: attribution, generation date, and a PAGE field
// the viewer resolves at render time.
fn page_footer() -> Footer {
    let lead = format!("{} | Date: {} | ", ATTRIBUTION, report_date());
    Footer::new().add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(Run::new().add_text(lead))
            .add_run(Run::new().add_text("Page "))
            .add_page_num(PageNum::new()),
    )
}

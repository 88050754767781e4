use docx_rs::Docx;
use std::fs::File;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

use crate::error::ReportError;
use crate::types::YieldTable;
use crate::util::format_int;

/// Serialize the finished document to `path`.
///
/// The file is only created here, after the whole document has been built in
/// memory, so earlier failures never leave a partial file behind.
pub fn save(docx: Docx, path: &Path) -> Result<(), ReportError> {
    let file = File::create(path).map_err(|e| ReportError::Save {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    docx.build().pack(file).map_err(|e| ReportError::Save {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(())
}

#[derive(Tabled, Clone)]
struct CropSummary {
    #[tabled(rename = "Crop")]
    crop: String,
    #[tabled(rename = "States")]
    states: usize,
    #[tabled(rename = "Records")]
    records: String,
}

/// Print the post-run confirmation: output path, total counts, and a small
/// markdown table with one line per crop section.
pub fn print_summary(table: &YieldTable, path: &Path) {
    println!(
        "Report saved to {} ({} records, {} crops)\n",
        path.display(),
        format_int(table.len()),
        format_int(table.crops().len())
    );
    if table.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let rows: Vec<CropSummary> = table
        .crops()
        .iter()
        .map(|crop| CropSummary {
            crop: crop.to_string(),
            states: table.states(crop).len(),
            records: format_int(table.records_for(crop)),
        })
        .collect();
    let table_str = Table::new(rows).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}

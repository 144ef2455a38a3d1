//!
//! XLSX worksheet for benchmark data.
//!

use crate::matrix::Matrix;

///
/// XLSX worksheet for benchmark data.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
}

impl Worksheet {
    /// Width of the function count column.
    const ROW_HEADER_COLUMN_WIDTH: f64 = 18.0;
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: f64 = 24.0;

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#EEF3FF")
            .set_align(rust_xlsxwriter::FormatAlign::Center)
            .set_align(rust_xlsxwriter::FormatAlign::Top)
            .set_text_wrap()
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#1E1E1E")
            .set_background_color("#DDE6FF")
            .set_align(rust_xlsxwriter::FormatAlign::Left)
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        rust_xlsxwriter::Format::new()
            .set_font_size(12)
            .set_font_color("#000000")
            .set_align(rust_xlsxwriter::FormatAlign::Right)
    }
}

impl TryFrom<&Matrix> for Worksheet {
    type Error = anyhow::Error;

    fn try_from(matrix: &Matrix) -> Result<Self, Self::Error> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(matrix.metric.caption())?;

        for (column_index, caption) in matrix.header().into_iter().enumerate() {
            let column_index = column_index as u16;
            worksheet.write_with_format(0, column_index, caption, &Self::column_header_format())?;
            worksheet.set_column_width(
                column_index,
                if column_index == 0 {
                    Self::ROW_HEADER_COLUMN_WIDTH
                } else {
                    Self::VALUE_COLUMN_WIDTH
                },
            )?;
        }

        for (row_index, (function_count, cells)) in matrix.rows.iter().enumerate() {
            let row_index = (row_index as u32) + 1;
            worksheet.write_with_format(
                row_index,
                0,
                *function_count as f64,
                &Self::row_header_format(),
            )?;
            for (column_index, cell) in cells.iter().enumerate() {
                if let Some(value) = cell {
                    worksheet.write_with_format(
                        row_index,
                        (column_index as u16) + 1,
                        *value,
                        &Self::value_format(),
                    )?;
                }
            }
        }

        Ok(Self { worksheet })
    }
}

//! Workbook builders shared by the crate's tests.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

/// A cell written into a fixture workbook.
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Write `rows` into the first worksheet of a new workbook at `path`.
pub fn write_workbook(path: &Path, rows: &[Vec<Cell<'_>>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (r, c) = (r as u32, c as u16);
            match cell {
                Cell::Text(s) => {
                    sheet.write_string(r, c, *s).expect("write string");
                }
                Cell::Number(n) => {
                    sheet.write_number(r, c, *n).expect("write number");
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save(path).expect("save workbook");
}

/// Standard customer sheet with Vietnamese headers.
///
/// Row order in the sheet: Trần An, (blank row), Nguyễn Phước Lộc, Lê Bình.
pub fn customer_workbook(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("ThongTinKhachHang.xlsx");
    write_workbook(
        &path,
        &[
            vec![
                Cell::Text("Mã KH"),
                Cell::Text("Họ Tên"),
                Cell::Text("Ngày sinh"),
                Cell::Text("Số ĐT"),
                Cell::Text("Email"),
                Cell::Text("Địa Chỉ"),
                Cell::Text("Tổng tiền mua"),
                Cell::Text("Ngày cuối mua"),
            ],
            vec![
                Cell::Text("KH001"),
                Cell::Text("Trần An"),
                Cell::Text("01/02/1990"),
                Cell::Text("0901234567"),
                Cell::Text("an@example.vn"),
                Cell::Text("Đà Lạt"),
                Cell::Text("12,000,000đ"),
                Cell::Text("28/09/2025"),
            ],
            vec![Cell::Blank],
            vec![
                Cell::Text("KH002"),
                Cell::Text("Nguyễn Phước Lộc"),
                Cell::Blank,
                Cell::Text("0912345678"),
                Cell::Blank,
                Cell::Text("Huế"),
                Cell::Number(6_000_000.0),
                Cell::Text("Chưa có"),
            ],
            vec![
                Cell::Text("KH003"),
                Cell::Text("Lê Bình"),
                Cell::Blank,
                Cell::Blank,
                Cell::Text("binh@example.vn"),
                Cell::Blank,
                Cell::Text("1,000,000đ"),
                Cell::Text("15/08/2025"),
            ],
        ],
    );
    path
}

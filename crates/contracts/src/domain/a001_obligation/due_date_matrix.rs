//! Dense month × CUIT-ending grid of due days.
//!
//! The backend stores due dates sparsely as `(mes, terminacionCuit, dia)`
//! records. Screens always work on the full 12 × 10 grid and flatten it back
//! to the sparse form on save.

use super::aggregate::{DueDateEntry, DueDateRecord};

pub const MONTHS: usize = 12;
pub const DIGITS: usize = 10;
pub const MAX_DAY: u32 = 31;

pub const MONTH_SHORT: [&str; MONTHS] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

pub const MONTH_LONG: [&str; MONTHS] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Two records for the same cell. The first non-empty day is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellConflict {
    pub month: u32,
    pub digit: u32,
    pub kept: u32,
    pub ignored: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixBuild {
    pub matrix: DueDateMatrix,
    pub conflicts: Vec<CellConflict>,
    /// Records whose month or digit fall outside the grid.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DueDateMatrix {
    cells: [[Option<u32>; DIGITS]; MONTHS],
}

impl DueDateMatrix {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fills the grid from sparse records.
    ///
    /// Duplicates keep the first non-empty day and are reported in
    /// `conflicts`, never silently merged.
    pub fn build<I>(records: I) -> MatrixBuild
    where
        I: IntoIterator<Item = DueDateRecord>,
    {
        let mut matrix = Self::empty();
        let mut conflicts = Vec::new();
        let mut skipped = 0;

        for record in records {
            let Some((m, d)) = cell_index(record.mes, record.terminacion_cuit) else {
                skipped += 1;
                continue;
            };
            let Some(day) = record.dia else {
                continue;
            };
            match matrix.cells[m][d] {
                None => matrix.cells[m][d] = Some(day),
                Some(kept) => conflicts.push(CellConflict {
                    month: m as u32 + 1,
                    digit: d as u32,
                    kept,
                    ignored: day,
                }),
            }
        }

        MatrixBuild {
            matrix,
            conflicts,
            skipped,
        }
    }

    /// Day for `month` (1..=12) and CUIT ending `digit` (0..=9).
    pub fn get(&self, month: u32, digit: u32) -> Option<u32> {
        cell_index(month as i32, digit as i32).and_then(|(m, d)| self.cells[m][d])
    }

    /// Returns false when the coordinates are outside the grid.
    pub fn set(&mut self, month: u32, digit: u32, day: Option<u32>) -> bool {
        match cell_index(month as i32, digit as i32) {
            Some((m, d)) => {
                self.cells[m][d] = day;
                true
            }
            None => false,
        }
    }

    /// Applies raw cell input, see [`parse_day_input`].
    pub fn set_from_input(&mut self, month: u32, digit: u32, raw: &str) -> bool {
        self.set(month, digit, parse_day_input(raw))
    }

    /// Sparse form for the backend, month-major. Empty cells are omitted.
    pub fn flatten(&self) -> Vec<DueDateEntry> {
        let mut out = Vec::new();
        for (m, row) in self.cells.iter().enumerate() {
            for (d, cell) in row.iter().enumerate() {
                if let Some(dia) = cell {
                    out.push(DueDateEntry {
                        mes: m as u32 + 1,
                        terminacion_cuit: d as u32,
                        dia: *dia,
                    });
                }
            }
        }
        out
    }

    pub fn set_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.set_count() == 0
    }
}

fn cell_index(month: i32, digit: i32) -> Option<(usize, usize)> {
    let m = usize::try_from(month).ok()?.checked_sub(1)?;
    let d = usize::try_from(digit).ok()?;
    (m < MONTHS && d < DIGITS).then_some((m, d))
}

/// Parses what the user typed in a grid cell.
///
/// Sign and separator characters (`-`, `+`, `.`, `,`) and whitespace are
/// dropped, then the leading run of digits is read. No digits means the cell
/// is unset. Values above 31 become 31. There is no lower clamp: `"0"` is
/// stored as day 0.
pub fn parse_day_input(raw: &str) -> Option<u32> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, '-' | '+' | '.' | ',') && !c.is_whitespace())
        .collect();
    let digits: String = cleaned.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    // a digit-only string only fails to parse when it overflows
    let value = digits.parse::<u64>().unwrap_or(u64::MAX);
    Some(value.min(MAX_DAY as u64) as u32)
}

/// Column header of the read-only viewer.
pub fn digit_header(digit: u32) -> String {
    format!("CUIT Termina en {digit}")
}

pub fn format_cell(day: Option<u32>) -> String {
    day.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn rec(mes: i32, terminacion_cuit: i32, dia: Option<u32>) -> DueDateRecord {
        DueDateRecord {
            mes,
            terminacion_cuit,
            dia,
        }
    }

    #[test]
    fn test_build_fills_exact_cells() {
        let build = DueDateMatrix::build(vec![rec(1, 0, Some(18)), rec(12, 9, Some(24))]);
        assert_eq!(build.matrix.get(1, 0), Some(18));
        assert_eq!(build.matrix.get(12, 9), Some(24));
        assert_eq!(build.matrix.get(6, 5), None);
        assert_eq!(build.matrix.set_count(), 2);
        assert!(build.conflicts.is_empty());
    }

    #[test]
    fn test_duplicate_keeps_first_and_reports() {
        let build = DueDateMatrix::build(vec![
            rec(3, 4, None),
            rec(3, 4, Some(20)),
            rec(3, 4, Some(22)),
        ]);
        assert_eq!(build.matrix.get(3, 4), Some(20));
        assert_eq!(
            build.conflicts,
            vec![CellConflict {
                month: 3,
                digit: 4,
                kept: 20,
                ignored: 22
            }]
        );
    }

    #[test]
    fn test_out_of_range_records_are_skipped() {
        let build = DueDateMatrix::build(vec![
            rec(0, 1, Some(10)),
            rec(13, 1, Some(10)),
            rec(2, 10, Some(10)),
            rec(2, -1, Some(10)),
        ]);
        assert!(build.matrix.is_empty());
        assert_eq!(build.skipped, 4);
    }

    #[test]
    fn test_flatten_omits_unset_cells() {
        let mut matrix = DueDateMatrix::empty();
        matrix.set(5, 3, Some(15));
        matrix.set(2, 7, Some(9));
        matrix.set(2, 8, None);
        assert_eq!(
            matrix.flatten(),
            vec![
                DueDateEntry {
                    mes: 2,
                    terminacion_cuit: 7,
                    dia: 9
                },
                DueDateEntry {
                    mes: 5,
                    terminacion_cuit: 3,
                    dia: 15
                },
            ]
        );
    }

    #[test]
    fn test_round_trip_without_duplicates() {
        let mut input = Vec::new();
        for mes in 1..=12 {
            for digit in (0..10).step_by(3) {
                input.push(DueDateEntry {
                    mes,
                    terminacion_cuit: digit,
                    dia: (mes + digit) % 28 + 1,
                });
            }
        }
        let first = DueDateMatrix::build(input.iter().copied().map(Into::into));
        let flat = first.matrix.flatten();
        let expected: HashSet<_> = input.iter().copied().collect();
        assert_eq!(flat.iter().copied().collect::<HashSet<_>>(), expected);

        let second = DueDateMatrix::build(flat.into_iter().map(Into::into));
        assert_eq!(first.matrix, second.matrix);
    }

    #[test]
    fn test_parse_day_input() {
        assert_eq!(parse_day_input("15"), Some(15));
        assert_eq!(parse_day_input(" 1 5 "), Some(15));
        assert_eq!(parse_day_input("-7"), Some(7));
        assert_eq!(parse_day_input("+2.0"), Some(20));
        assert_eq!(parse_day_input("45"), Some(31));
        assert_eq!(parse_day_input("99999999999999999999999"), Some(31));
        assert_eq!(parse_day_input("12abc"), Some(12));
        assert_eq!(parse_day_input(""), None);
        assert_eq!(parse_day_input("abc"), None);
        assert_eq!(parse_day_input("--"), None);
    }

    #[test]
    fn test_zero_is_not_clamped() {
        assert_eq!(parse_day_input("0"), Some(0));
        assert_eq!(parse_day_input("00"), Some(0));
    }

    #[test]
    fn test_stored_day_never_exceeds_max() {
        for raw in ["31", "32", "100", "3,1", "310"] {
            let day = parse_day_input(raw).unwrap();
            assert!(day <= MAX_DAY, "{raw} -> {day}");
        }
    }

    #[test]
    fn test_set_from_input_and_bounds() {
        let mut matrix = DueDateMatrix::empty();
        assert!(matrix.set_from_input(4, 2, "40"));
        assert_eq!(matrix.get(4, 2), Some(31));
        assert!(matrix.set_from_input(4, 2, ""));
        assert_eq!(matrix.get(4, 2), None);
        assert!(!matrix.set(13, 0, Some(1)));
    }

    #[test]
    fn test_display_helpers() {
        assert_eq!(digit_header(7), "CUIT Termina en 7");
        assert_eq!(format_cell(None), "-");
        assert_eq!(format_cell(Some(9)), "9");
        assert_eq!(MONTH_SHORT[0], "Ene");
        assert_eq!(MONTH_LONG[11], "Diciembre");
    }
}

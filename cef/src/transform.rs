//! Pure transforms over [`MatrixDocument`]
//!
//! Each transform returns a new document and leaves its input untouched.

use cef_core::{parse_column_selector, parse_numeric_key, CefError, MatrixDocument, MatrixOperations};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Exchange rows and columns
///
/// Attribute lists and dimensions are swapped, headers and flags carried
/// over, and the matrix copied so that `result.get(col, row)` equals
/// `doc.get(row, col)`. A skipped matrix stays skipped.
pub fn transpose(doc: &MatrixDocument) -> MatrixDocument {
    let rows = doc.num_rows;
    let cols = doc.num_columns;

    let matrix = if doc.has_matrix() && rows > 0 && cols > 0 {
        let mut matrix = vec![0.0f32; rows * cols];
        // Row `r` of the result is column `r` of the input
        matrix
            .par_chunks_mut(rows)
            .enumerate()
            .for_each(|(r, out)| {
                for (c, value) in out.iter_mut().enumerate() {
                    *value = doc.matrix[r + c * cols];
                }
            });
        matrix
    } else if doc.has_matrix() {
        Vec::new()
    } else {
        doc.matrix.clone()
    };

    MatrixDocument {
        major_version: doc.major_version,
        minor_version: doc.minor_version,
        num_rows: cols,
        num_columns: rows,
        flags: doc.flags,
        headers: doc.headers.clone(),
        column_attributes: doc.row_attributes.clone(),
        row_attributes: doc.column_attributes.clone(),
        matrix,
    }
}

/// Order rows by the string values of a row attribute
///
/// The sort is stable; `reverse` yields descending order.
pub fn sort_by_row_attribute(
    doc: &MatrixDocument,
    attribute_name: &str,
    reverse: bool,
) -> cef_core::Result<MatrixDocument> {
    check_row_attributes(doc)?;
    let attribute = doc
        .row_attribute(attribute_name)
        .ok_or(CefError::AttributeNotFound)?;

    let mut order: Vec<usize> = (0..doc.num_rows).collect();
    order.sort_by(|&a, &b| {
        let ordering = attribute.values[a].cmp(&attribute.values[b]);
        if reverse {
            ordering.reverse()
        } else {
            ordering
        }
    });

    permute_rows(doc, &order)
}

/// Order rows numerically
///
/// `selector` is either `#N`, naming matrix column `N`, or the name of a row
/// attribute whose values all parse as numbers. NaN keys sort last in both
/// directions.
pub fn sort_numerical(
    doc: &MatrixDocument,
    selector: &str,
    reverse: bool,
) -> cef_core::Result<MatrixDocument> {
    check_row_attributes(doc)?;
    let keys: Vec<f64> = match parse_column_selector(selector) {
        Some(col) => {
            if col >= doc.num_columns {
                return Err(CefError::AttributeNotFound);
            }
            if !doc.has_matrix() {
                return Err(CefError::DimensionMismatch);
            }
            doc.get_col(col).into_iter().map(f64::from).collect()
        }
        None => doc
            .row_attribute(selector)
            .ok_or(CefError::AttributeNotFound)?
            .values
            .iter()
            .map(|value| parse_numeric_key(value))
            .collect::<cef_core::Result<_>>()?,
    };

    let mut order: Vec<usize> = (0..doc.num_rows).collect();
    order.sort_by(|&a, &b| compare_keys(keys[a], keys[b], reverse));

    permute_rows(doc, &order)
}

fn compare_keys(a: f64, b: f64, reverse: bool) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            if reverse {
                ordering.reverse()
            } else {
                ordering
            }
        }
    }
}

/// Every row attribute must carry one value per row before rows are reordered
fn check_row_attributes(doc: &MatrixDocument) -> cef_core::Result<()> {
    if doc
        .row_attributes
        .iter()
        .any(|attr| attr.values.len() != doc.num_rows)
    {
        return Err(CefError::DimensionMismatch);
    }
    Ok(())
}

/// Build a document whose row `i` is row `order[i]` of `doc`
fn permute_rows(doc: &MatrixDocument, order: &[usize]) -> cef_core::Result<MatrixDocument> {
    let mut result = doc.clone();
    if doc.has_matrix() {
        for (dst, &src) in order.iter().enumerate() {
            let cols = doc.num_columns;
            result.matrix[dst * cols..(dst + 1) * cols].copy_from_slice(doc.row(src));
        }
    }
    for (attribute, source) in result.row_attributes.iter_mut().zip(&doc.row_attributes) {
        for (dst, &src) in order.iter().enumerate() {
            attribute.values[dst].clone_from(&source.values[src]);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn sample() -> MatrixDocument {
        let mut doc =
            MatrixDocument::from_rows(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        doc.add_row_attribute("Gene", strings(&["B", "C", "A"])).unwrap();
        doc.add_row_attribute("Score", strings(&["10", "2.5", "-1"])).unwrap();
        doc.add_column_attribute("Cell", strings(&["X", "Y"])).unwrap();
        doc.add_header("Genome", "mm10");
        doc.flags = 4;
        doc
    }

    #[test]
    fn test_transpose() {
        let doc = sample();
        let t = transpose(&doc);

        assert_eq!(t.dimensions(), (2, 3));
        assert_eq!(t.row_attributes, doc.column_attributes);
        assert_eq!(t.column_attributes, doc.row_attributes);
        assert_eq!(t.headers, doc.headers);
        assert_eq!(t.flags, doc.flags);
        for row in 0..doc.num_rows {
            for col in 0..doc.num_columns {
                assert_eq!(t.get(row, col), doc.get(col, row));
            }
        }
        assert_eq!(t.matrix, vec![1.0, 3.0, 5.0, 2.0, 4.0, 6.0]);
        assert_eq!(transpose(&t), doc);
    }

    #[test]
    fn test_transpose_degenerate() {
        let mut doc = MatrixDocument::new(0, 3);
        doc.add_column_attribute("Cell", strings(&["a", "b", "c"])).unwrap();
        let t = transpose(&doc);
        assert_eq!(t.dimensions(), (3, 0));
        assert!(t.matrix.is_empty());
        assert_eq!(t.row_attributes[0].name, "Cell");

        let mut skipped = sample();
        skipped.matrix.clear();
        let t = transpose(&skipped);
        assert!(t.matrix.is_empty());
        assert_eq!(t.dimensions(), (2, 3));
    }

    #[test]
    fn test_sort_by_row_attribute() {
        let sorted = sort_by_row_attribute(&sample(), "Gene", false).unwrap();
        assert_eq!(sorted.row_attributes[0].values, strings(&["A", "B", "C"]));
        assert_eq!(sorted.row_attributes[1].values, strings(&["-1", "10", "2.5"]));
        assert_eq!(sorted.matrix, vec![5.0, 6.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(sorted.column_attributes, sample().column_attributes);
        assert_eq!(sorted.headers, sample().headers);

        let reversed = sort_by_row_attribute(&sample(), "Gene", true).unwrap();
        assert_eq!(reversed.row_attributes[0].values, strings(&["C", "B", "A"]));

        assert_eq!(
            sort_by_row_attribute(&sample(), "Missing", false),
            Err(CefError::AttributeNotFound)
        );
    }

    #[test]
    fn test_sort_numerical_by_attribute() {
        let sorted = sort_numerical(&sample(), "Score", false).unwrap();
        assert_eq!(sorted.row_attributes[1].values, strings(&["-1", "2.5", "10"]));
        assert_eq!(sorted.row_attributes[0].values, strings(&["A", "C", "B"]));
        assert_eq!(sorted.get(0, 0), 5.0);

        assert_eq!(
            sort_numerical(&sample(), "Gene", false),
            Err(CefError::NotNumeric)
        );
    }

    #[test]
    fn test_sort_numerical_by_column() {
        let mut doc = sample();
        doc.set(1, 0, 9.0);
        doc.set(1, 2, f32::NAN);

        let ascending = sort_numerical(&doc, "#1", false).unwrap();
        assert_eq!(ascending.row_attributes[0].values, strings(&["C", "B", "A"]));

        let descending = sort_numerical(&doc, "#1", true).unwrap();
        assert_eq!(descending.row_attributes[0].values, strings(&["B", "C", "A"]));
        assert!(descending.get(1, 2).is_nan());

        assert_eq!(
            sort_numerical(&doc, "#7", false),
            Err(CefError::AttributeNotFound)
        );
    }

    #[test]
    fn test_sort_rejects_short_row_attribute() {
        let mut doc = sample();
        doc.row_attributes[0].values.pop();

        assert_eq!(
            sort_by_row_attribute(&doc, "Gene", false),
            Err(CefError::DimensionMismatch)
        );
        assert_eq!(
            sort_numerical(&doc, "Score", false),
            Err(CefError::DimensionMismatch)
        );
        assert_eq!(
            sort_numerical(&doc, "#0", false),
            Err(CefError::DimensionMismatch)
        );
    }
}

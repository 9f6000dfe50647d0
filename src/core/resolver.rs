use crate::domain::model::{Gender, Table, TableSet, TierResult};
use crate::utils::error::{Result, StandardsError};

/// Body-weight buckets step by 10 units; the site's first data row is the
/// 120-unit bucket. `rounded / STEP + 1 - 12` is the row index the source
/// layout encodes, with row 0 being the header.
const BUCKET_STEP: u32 = 10;
const FIRST_BUCKET: u32 = 120;

pub fn select_table(tables: &TableSet, gender: Gender) -> Result<&Table> {
    tables
        .get(gender.table_index())
        .ok_or_else(|| StandardsError::MalformedTable {
            reason: format!(
                "document has no table at gender index {}",
                gender.table_index()
            ),
        })
}

/// Round to the nearest bucket, halves away from zero.
pub fn round_to_bucket(body_weight: f64) -> u32 {
    ((body_weight / BUCKET_STEP as f64).round() * BUCKET_STEP as f64) as u32
}

fn bucket_row_index(rounded: u32, row_count: usize) -> Result<usize> {
    let index =
        rounded as i64 / BUCKET_STEP as i64 + 1 - (FIRST_BUCKET / BUCKET_STEP) as i64;
    if index < 1 || index >= row_count as i64 {
        return Err(StandardsError::OutOfRangeWeight {
            weight: rounded,
            min: FIRST_BUCKET,
            max: FIRST_BUCKET + row_count.saturating_sub(2) as u32 * BUCKET_STEP,
        });
    }
    Ok(index as usize)
}

/// Leading run of ASCII digits, the rep-max threshold of a cell. The
/// multiplier tail (`x0.64`) is never consumed.
fn leading_integer(cell: &str) -> Option<u32> {
    let end = cell
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(cell.len());
    if end == 0 {
        return None;
    }
    cell[..end].parse().ok()
}

/// Locate the body-weight bucket row and walk its threshold cells.
///
/// The walk accumulates thresholds and stops inclusively at the first one at
/// or above `one_rep_max`. Exhausting the row is the no-next-tier outcome:
/// the lifter has passed every tabulated class, so the final tier comes back
/// as `current_tier` with no `next_tier`.
pub fn resolve_tier(table: &Table, body_weight: f64, one_rep_max: u32) -> Result<TierResult> {
    let header = table.first().ok_or_else(|| StandardsError::MalformedTable {
        reason: "table is empty".to_string(),
    })?;

    let rounded = round_to_bucket(body_weight);
    let row_index = bucket_row_index(rounded, table.len())?;
    let row = &table[row_index];

    let mut reached: Vec<u32> = Vec::new();
    let mut stopped = false;
    for (column, cell) in row.iter().enumerate().skip(1) {
        let threshold = leading_integer(cell).ok_or_else(|| StandardsError::MalformedCell {
            row: row_index,
            column,
            text: cell.clone(),
        })?;
        reached.push(threshold);
        if threshold >= one_rep_max {
            stopped = true;
            break;
        }
    }

    let next_goal = *reached
        .last()
        .ok_or_else(|| StandardsError::MalformedTable {
            reason: format!("bucket row {} has no threshold cells", row_index),
        })?;

    let label = |index: usize| -> Result<String> {
        header
            .get(index)
            .cloned()
            .ok_or_else(|| StandardsError::MalformedTable {
                reason: format!("header has no label at index {}", index),
            })
    };

    if stopped {
        Ok(TierResult {
            current_tier: label(reached.len() - 1)?,
            next_tier: Some(label(reached.len())?),
            next_goal,
        })
    } else {
        Ok(TierResult {
            current_tier: label(reached.len())?,
            next_tier: None,
            next_goal,
        })
    }
}

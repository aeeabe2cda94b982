//! Paging through raw trip records

use crate::{
    core::record::{RecordSet, TripRecord},
    error::{BikeshareError, Result},
    session::prompt::{INVALID_ANSWER, Prompter, parse_row_count},
};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Shown when the pager runs past the last record
pub const NO_MORE_ROWS: &str = "No more rows to display.";

/// Remembers how far into a record set the user has paged
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowViewer {
    offset: usize,
}

impl RowViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the next `size` records and advance past them.
    ///
    /// The last chunk may be short; past the end the slice is empty.
    pub fn next_chunk<'a>(&mut self, set: &'a RecordSet, size: usize) -> &'a [TripRecord] {
        let records = set.records();
        let start = self.offset.min(records.len());
        let end = self.offset.saturating_add(size).min(records.len());
        self.offset = self.offset.saturating_add(size);
        &records[start..end]
    }

    /// Offer to show rows until the user says no
    #[instrument(skip_all, fields(records = set.len()))]
    pub fn browse<R: BufRead, W: Write>(
        &mut self,
        prompter: &mut Prompter<R, W>,
        set: &RecordSet,
    ) -> Result<()> {
        while prompter.confirm("Would you want to display rows from the data, yes or no ?")? {
            let size = prompter.choose(
                "How many rows do you want to display ?\nPlease type it as an integer.",
                INVALID_ANSWER,
                parse_row_count,
            )?;
            let first = self.offset;
            let chunk = self.next_chunk(set, size);
            debug!("Showing {} rows from offset {}", chunk.len(), first);
            write_rows(prompter.output(), first, chunk)?;
        }
        Ok(())
    }
}

/// Print records numbered from `first`
pub fn write_rows<W: Write>(out: &mut W, first: usize, rows: &[TripRecord]) -> Result<()> {
    let write_err = |e| BikeshareError::input("write rows", e);
    if rows.is_empty() {
        return writeln!(out, "{NO_MORE_ROWS}").map_err(write_err);
    }
    for (index, row) in rows.iter().enumerate() {
        writeln!(out, "{:>7}  {row}", first + index).map_err(write_err)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{city::City, record::test_support::trip};
    use std::io::Cursor;

    fn numbered_set(count: u32) -> RecordSet {
        let records = (0..count)
            .map(|i| trip((2017, 1, 1 + i % 28), i % 24, &format!("S{i}"), "End", 60.0))
            .collect();
        RecordSet::new(City::Chicago, true, records)
    }

    fn names(rows: &[TripRecord]) -> Vec<String> {
        rows.iter().map(|r| r.start_station.clone()).collect()
    }

    #[test]
    fn test_chunks_advance_and_last_is_short() {
        let set = numbered_set(25);
        let mut viewer = RowViewer::new();

        let first = viewer.next_chunk(&set, 10);
        assert_eq!(names(first), names(&set.records()[0..10]));
        let second = viewer.next_chunk(&set, 10);
        assert_eq!(names(second), names(&set.records()[10..20]));
        let third = viewer.next_chunk(&set, 10);
        assert_eq!(names(third), names(&set.records()[20..25]));
        assert_eq!(third.len(), 5);

        assert!(viewer.next_chunk(&set, 10).is_empty());
        assert_eq!(viewer.offset, 40);
    }

    #[test]
    fn test_chunk_on_empty_set() {
        let set = numbered_set(0);
        let mut viewer = RowViewer::new();
        assert!(viewer.next_chunk(&set, 5).is_empty());
    }

    #[test]
    fn test_browse_reprompts_bad_count() {
        let set = numbered_set(3);
        let script = "yes\nten\n2\nyes\n2\nyes\n5\nno\n";
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
        let mut viewer = RowViewer::new();

        viewer.browse(&mut prompter, &set).unwrap();

        let text = String::from_utf8(prompter.output().clone()).unwrap();
        assert_eq!(text.matches(INVALID_ANSWER).count(), 1);
        assert!(text.contains("S0"));
        assert!(text.contains("S2"));
        assert!(text.contains(NO_MORE_ROWS));
        assert_eq!(viewer.offset, 9);
    }
}

use crate::calendar::month_name;
use crate::dataset::Record;

/// Text shown while hovering a record: `"<year> <MonthName> : <variance>"`.
pub fn tooltip_text(record: &Record) -> String {
    // -0 reads as 0
    let variance = if record.variance == 0.0 {
        0.0
    } else {
        record.variance
    };
    format!(
        "{} {} : {variance}",
        record.year,
        month_name(record.month_index()),
    )
}

/// The single floating tooltip. Visibility is a plain two-state toggle; the
/// last pointer event wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltip {
    visible: bool,
    text: String,
    data_year: Option<i32>,
}

impl Tooltip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a cell.
    pub fn show(&mut self, record: &Record) {
        self.visible = true;
        self.text = tooltip_text(record);
        self.data_year = Some(record.year);
    }

    /// Pointer left a cell. Text and year stay as last shown.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Year of the most recently hovered cell.
    pub const fn data_year(&self) -> Option<i32> {
        self.data_year
    }
}

/// Pointer transitions relative to the chart's cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter(usize),
    Leave(usize),
}

/// Tooltip plus the index of the cell currently under the pointer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoverState {
    tooltip: Tooltip,
    hovered: Option<usize>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    pub const fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Applies one pointer event. `record_for` resolves a cell index to its
    /// record; unknown indices are ignored.
    pub fn handle<'a, F>(&mut self, event: PointerEvent, record_for: F)
    where
        F: Fn(usize) -> Option<&'a Record>,
    {
        match event {
            PointerEvent::Enter(index) => {
                if let Some(record) = record_for(index) {
                    self.tooltip.show(record);
                    self.hovered = Some(index);
                }
            }
            PointerEvent::Leave(_) => {
                self.tooltip.hide();
                self.hovered = None;
            }
        }
    }

    /// Moves the pointer onto `target` (or off every cell), emitting the
    /// leave/enter pair a browser would.
    pub fn move_to<'a, F>(&mut self, target: Option<usize>, record_for: F)
    where
        F: Fn(usize) -> Option<&'a Record>,
    {
        if target == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered {
            self.handle(PointerEvent::Leave(previous), &record_for);
        }
        if let Some(next) = target {
            self.handle(PointerEvent::Enter(next), &record_for);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, month: u32, variance: f64) -> Record {
        Record {
            year,
            month,
            variance,
        }
    }

    #[test]
    fn text_uses_raw_variance() {
        assert_eq!(tooltip_text(&record(1900, 1, -0.5)), "1900 January : -0.5");
        assert_eq!(tooltip_text(&record(2015, 12, 1.0)), "2015 December : 1");
        assert_eq!(tooltip_text(&record(1753, 3, -1.366)), "1753 March : -1.366");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(tooltip_text(&record(1900, 1, -0.0)), "1900 January : 0");
        assert_eq!(tooltip_text(&record(1900, 1, 0.0)), "1900 January : 0");
    }

    #[test]
    fn show_records_year() {
        let mut tooltip = Tooltip::new();
        assert!(!tooltip.is_visible());

        tooltip.show(&record(1984, 7, 0.25));
        assert!(tooltip.is_visible());
        assert_eq!(tooltip.text(), "1984 July : 0.25");
        assert_eq!(tooltip.data_year(), Some(1984));

        tooltip.hide();
        assert!(!tooltip.is_visible());
    }

    #[test]
    fn hover_then_unhover_always_ends_hidden() {
        let records = [record(1900, 1, -0.5), record(1901, 2, 0.3), record(1902, 3, 1.7)];
        let lookup = |index: usize| records.get(index);

        let orders: [&[usize]; 3] = [&[0, 1, 2], &[2, 0], &[1, 1, 0]];
        for order in orders {
            let mut state = HoverState::new();
            for &index in order {
                state.handle(PointerEvent::Enter(index), lookup);
            }
            let last = *order.last().unwrap();
            assert_eq!(state.tooltip().data_year(), Some(records[last].year));

            state.handle(PointerEvent::Leave(last), lookup);
            assert!(!state.tooltip().is_visible());
            assert_eq!(state.hovered(), None);
        }
    }

    #[test]
    fn rapid_moves_overwrite_content() {
        let records = [record(1900, 1, -0.5), record(1950, 6, 0.1)];
        let lookup = |index: usize| records.get(index);
        let mut state = HoverState::new();

        state.move_to(Some(0), lookup);
        state.move_to(Some(1), lookup);
        assert!(state.tooltip().is_visible());
        assert_eq!(state.tooltip().text(), "1950 June : 0.1");

        state.move_to(None, lookup);
        assert!(!state.tooltip().is_visible());
    }

    #[test]
    fn unknown_index_is_ignored() {
        let records = [record(1900, 1, -0.5)];
        let mut state = HoverState::new();

        state.handle(PointerEvent::Enter(7), |index| records.get(index));
        assert!(!state.tooltip().is_visible());
        assert_eq!(state.hovered(), None);
    }
}

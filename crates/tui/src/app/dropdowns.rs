//! Dropdown state machine.
//!
//! Responsibilities:
//! - Track open/closed state, the committed selection, and the keyboard
//!   cursor for each configured dropdown.
//! - Enforce the screen-wide invariant that at most one dropdown is open.
//!
//! Does NOT handle:
//! - Hit-testing or event routing (see `app::mouse` and `app::input`).
//! - Rendering (see `ui::components::dropdown`).

use cohort_config::{DropdownOption, DropdownSpec};

/// State for a single dropdown built from a `DropdownSpec`.
#[derive(Debug, Clone)]
pub struct Dropdown {
    spec: DropdownSpec,
    open: bool,
    /// Index of the committed (active) option, if any.
    selected: Option<usize>,
    /// Keyboard cursor inside the open menu.
    cursor: usize,
}

impl Dropdown {
    /// Build dropdown state from its descriptor.
    pub fn new(spec: DropdownSpec) -> Self {
        Self {
            spec,
            open: false,
            selected: None,
            cursor: 0,
        }
    }

    /// Form field identifier.
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    /// Label rendered above the trigger.
    pub fn label(&self) -> &str {
        &self.spec.label
    }

    /// The selectable options.
    pub fn options(&self) -> &[DropdownOption] {
        &self.spec.options
    }

    /// Whether the menu is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the committed option, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The committed value, if any. This is the form-submission value.
    pub fn value(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.spec.options.get(i))
            .map(|o| o.value.as_str())
    }

    /// Text shown on the trigger: the selected label, or the placeholder.
    pub fn display_text(&self) -> &str {
        self.selected
            .and_then(|i| self.spec.options.get(i))
            .map(|o| o.label.as_str())
            .unwrap_or(&self.spec.placeholder)
    }

    /// Whether the trigger shows placeholder (dim) or committed text.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Keyboard cursor position inside the open menu.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the keyboard cursor down one option.
    pub fn cursor_down(&mut self) {
        if self.spec.options.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1).min(self.spec.options.len() - 1);
    }

    /// Move the keyboard cursor up one option.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Commit the option at `index` and close the menu. Out-of-range
    /// indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index >= self.spec.options.len() {
            return;
        }
        self.selected = Some(index);
        self.cursor = index;
        self.open = false;
    }

    /// Clear the committed selection (back to placeholder).
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.cursor = 0;
    }

    fn set_open(&mut self, open: bool) {
        self.open = open;
        if open {
            // Opening puts the cursor on the active option for quick
            // keyboard adjustment.
            self.cursor = self.selected.unwrap_or(0);
        }
    }
}

/// All dropdowns on the screen, with the one-open invariant enforced here.
#[derive(Debug, Clone, Default)]
pub struct DropdownSet {
    dropdowns: Vec<Dropdown>,
}

impl DropdownSet {
    /// Build the set from descriptors.
    pub fn new(specs: Vec<DropdownSpec>) -> Self {
        Self {
            dropdowns: specs.into_iter().map(Dropdown::new).collect(),
        }
    }

    /// Number of dropdowns.
    pub fn len(&self) -> usize {
        self.dropdowns.len()
    }

    /// Whether there are no dropdowns configured.
    pub fn is_empty(&self) -> bool {
        self.dropdowns.is_empty()
    }

    /// All dropdowns, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Dropdown> {
        self.dropdowns.iter()
    }

    /// The dropdown at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Dropdown> {
        self.dropdowns.get(index)
    }

    /// Mutable access to the dropdown at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Dropdown> {
        self.dropdowns.get_mut(index)
    }

    /// The index of the currently open dropdown, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.dropdowns.iter().position(Dropdown::is_open)
    }

    /// Toggle the dropdown at `index`, closing every other dropdown first
    /// so at most one menu is ever open.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.dropdowns.len() {
            return;
        }
        let was_open = self.dropdowns[index].is_open();
        self.close_all();
        if !was_open {
            self.dropdowns[index].set_open(true);
        }
    }

    /// Close every dropdown and reset every direction indicator.
    pub fn close_all(&mut self) {
        for dropdown in &mut self.dropdowns {
            dropdown.set_open(false);
        }
    }

    /// Commit the option `option_index` on dropdown `index`.
    pub fn select(&mut self, index: usize, option_index: usize) {
        if let Some(dropdown) = self.dropdowns.get_mut(index) {
            dropdown.select(option_index);
        }
    }

    /// Clear every dropdown's selection.
    pub fn clear_all(&mut self) {
        for dropdown in &mut self.dropdowns {
            dropdown.clear_selection();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(count: usize) -> Vec<DropdownSpec> {
        (0..count)
            .map(|i| DropdownSpec {
                id: format!("field_{i}"),
                label: format!("Field {i}"),
                placeholder: "Select an option".to_string(),
                options: vec![
                    DropdownOption::new("a", "Alpha"),
                    DropdownOption::new("b", "Beta"),
                    DropdownOption::new("c", "Gamma"),
                ],
            })
            .collect()
    }

    #[test]
    fn test_toggle_opens_and_closes() {
        let mut set = DropdownSet::new(specs(1));
        set.toggle(0);
        assert!(set.get(0).unwrap().is_open());
        set.toggle(0);
        assert!(!set.get(0).unwrap().is_open());
    }

    #[test]
    fn test_at_most_one_open() {
        let mut set = DropdownSet::new(specs(3));
        set.toggle(0);
        set.toggle(2);

        assert_eq!(set.open_index(), Some(2));
        assert!(!set.get(0).unwrap().is_open());
        let open_count = set.iter().filter(|d| d.is_open()).count();
        assert_eq!(open_count, 1);
    }

    #[test]
    fn test_select_commits_value_and_label_and_closes() {
        let mut set = DropdownSet::new(specs(1));
        set.toggle(0);
        set.select(0, 1);

        let dropdown = set.get(0).unwrap();
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.value(), Some("b"));
        assert_eq!(dropdown.display_text(), "Beta");
        assert_eq!(dropdown.selected_index(), Some(1));
    }

    #[test]
    fn test_exactly_one_active_after_reselect() {
        let mut set = DropdownSet::new(specs(1));
        set.select(0, 0);
        set.select(0, 2);

        let dropdown = set.get(0).unwrap();
        assert_eq!(dropdown.selected_index(), Some(2), "Active marker moves");
    }

    #[test]
    fn test_placeholder_before_selection() {
        let set = DropdownSet::new(specs(1));
        let dropdown = set.get(0).unwrap();
        assert!(!dropdown.has_selection());
        assert_eq!(dropdown.display_text(), "Select an option");
        assert_eq!(dropdown.value(), None);
    }

    #[test]
    fn test_empty_dropdown_is_valid() {
        let mut set = DropdownSet::new(vec![DropdownSpec {
            id: "empty".to_string(),
            label: String::new(),
            placeholder: "Nothing here".to_string(),
            options: Vec::new(),
        }]);

        set.toggle(0);
        assert!(set.get(0).unwrap().is_open());
        set.select(0, 0); // out of range: ignored
        assert_eq!(set.get(0).unwrap().value(), None);
    }

    #[test]
    fn test_out_of_range_indices_are_ignored() {
        let mut set = DropdownSet::new(specs(1));
        set.toggle(5);
        set.select(5, 0);
        assert_eq!(set.open_index(), None);
    }

    #[test]
    fn test_cursor_navigation_clamps() {
        let mut set = DropdownSet::new(specs(1));
        set.toggle(0);
        let dropdown = set.get_mut(0).unwrap();

        dropdown.cursor_up();
        assert_eq!(dropdown.cursor(), 0);
        dropdown.cursor_down();
        dropdown.cursor_down();
        dropdown.cursor_down();
        assert_eq!(dropdown.cursor(), 2, "Cursor clamps to last option");
    }

    #[test]
    fn test_opening_puts_cursor_on_active_option() {
        let mut set = DropdownSet::new(specs(1));
        set.select(0, 2);
        set.toggle(0);
        assert_eq!(set.get(0).unwrap().cursor(), 2);
    }

    #[test]
    fn test_clear_all_resets_selections() {
        let mut set = DropdownSet::new(specs(2));
        set.select(0, 1);
        set.select(1, 2);
        set.clear_all();

        assert!(set.iter().all(|d| !d.has_selection()));
    }
}

//! Checkbox selection of product identifiers.

/// Insertion-ordered set of selected ids.
///
/// Independent of filtering: an id stays selected while hidden by the
/// current filter or search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check or uncheck an id.
    pub fn set(&mut self, id: &str, checked: bool) {
        if checked {
            if !self.contains(id) {
                self.ids.push(id.to_string());
            }
        } else {
            self.ids.retain(|existing| existing != id);
        }
    }

    /// Flip an id; returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let checked = !self.contains(id);
        self.set(id, checked);
        checked
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Selected ids in the order they were checked
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SelectionSet::new();
        for id in iter {
            let id = id.into();
            set.set(&id, true);
        }
        set
    }
}

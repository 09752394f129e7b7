use super::selection_item::{
    FieldSelection, FieldValue, FragmentSpread, InlineFragment, SelectionItem,
};

/// The ordered field tree requested from a GraphQL type. Insertion order is
/// rendering order; there is no implicit sorting.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SelectionSet {
    pub items: Vec<SelectionItem>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.items.push(SelectionItem::Field(FieldSelection {
            name: name.into(),
            value: value.into(),
        }));
        self
    }

    pub fn spread(mut self, spread: FragmentSpread) -> Self {
        self.items.push(SelectionItem::FragmentSpread(spread));
        self
    }

    pub fn inline(mut self, fragment: InlineFragment) -> Self {
        self.items.push(SelectionItem::InlineFragment(fragment));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<SelectionItem> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = SelectionItem>>(iter: I) -> Self {
        SelectionSet {
            items: iter.into_iter().collect(),
        }
    }
}

pub mod directive;
pub mod document;
pub mod operation;
pub mod selection_item;
pub mod selection_set;
pub mod value;

pub use directive::Directive;
pub use document::{Definition, FragmentDefinition};
pub use operation::{Operation, OperationKind};
pub use selection_item::{
    Field, FieldSelection, FieldValue, FragmentSpread, InlineFragment, SelectionItem,
};
pub use selection_set::SelectionSet;
pub use value::{ArgValue, Args};

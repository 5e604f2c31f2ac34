//! Composite patterns: fully assembled widget controllers.
//!
//! A pattern combines capability units into one behavioral contract. The
//! listbox is the reference composite; its assembly recipe (unit states
//! embedded in dependency order, contracts implemented by delegation,
//! a union trait naming the full capability set, a fixed key-scheme
//! list) is the template further patterns follow.

mod listbox;
mod option;

pub use listbox::{Listbox, ListboxBuilder, ListboxHost, ListboxPattern};
pub use option::OptionItem;

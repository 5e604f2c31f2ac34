//! Listbox keyboard walkthrough.
//!
//! Drives a multi-select listbox through a short keyboard session and
//! prints the active/selected state after every key, the way a host
//! adapter would during integration bring-up.
//!
//! Run with: cargo run -p trellis --example keyboard_walkthrough
//!
//! Set `RUST_LOG=trellis=trace` to watch the behavior and key-scheme
//! trace output alongside the printed state.

use trellis::event::{Key, KeyEvent, KeyboardModifiers};
use trellis::pattern::{Listbox, OptionItem};
use trellis::prelude::*;

/// Minimal host adapter: owns the option list and a focus flag.
struct FruitHost {
    items: Vec<OptionItem>,
    focused: bool,
}

impl FruitHost {
    fn new(labels: &[&str]) -> Self {
        Self {
            items: labels.iter().map(|&label| OptionItem::new(label)).collect(),
            focused: false,
        }
    }
}

impl HasItems for FruitHost {
    type Item = OptionItem;

    fn items(&self) -> &[OptionItem] {
        &self.items
    }

    fn items_mut(&mut self) -> &mut [OptionItem] {
        &mut self.items
    }
}

impl CanBeFocused for FruitHost {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn tab_index(&self) -> i32 {
        0
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}

fn print_state(listbox: &Listbox<FruitHost>, after: &str) {
    let active = listbox
        .active_descendant_index()
        .and_then(|index| listbox.items().get(index))
        .map(|item| item.label().to_string())
        .unwrap_or_else(|| "(none)".to_string());
    let selected: Vec<&str> = listbox
        .items()
        .iter()
        .filter(|item| item.is_selected())
        .map(|item| item.label())
        .collect();
    println!("{after:<24} active = {active:<8} selected = {selected:?}");
}

fn main() -> PatternResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let host = FruitHost::new(&["Apple", "Banana", "Cherry", "Damson"]);
    let mut listbox = Listbox::builder(host).multiple(true).build();

    listbox.connect();
    listbox.focus();
    print_state(&listbox, "initial");

    listbox.activate_first_item()?;
    print_state(&listbox, "activate first");

    listbox.handle_key(&KeyEvent::key_only(Key::ArrowDown))?;
    print_state(&listbox, "ArrowDown");

    listbox.handle_key(&KeyEvent::key_only(Key::Space))?;
    print_state(&listbox, "Space");

    listbox.handle_key(&KeyEvent::key_only(Key::End))?;
    print_state(&listbox, "End");

    listbox.handle_key(&KeyEvent::key_only(Key::Enter))?;
    print_state(&listbox, "Enter");

    listbox.handle_key(&KeyEvent::new(
        Key::Character('a'),
        KeyboardModifiers::CTRL,
    ))?;
    print_state(&listbox, "Ctrl+A");

    listbox.handle_key(&KeyEvent::key_only(Key::ArrowUp))?;
    print_state(&listbox, "ArrowUp");

    listbox.blur();
    listbox.disconnect();

    Ok(())
}

//! Drive the dropdown state machine from scripted input and print the
//! button surface after each step.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use droplist::{Dropdown, DropdownOption, Key, KeyCombo};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("animals.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let placeholder = DropdownOption::new("Select an animal");
    placeholder.set_placeholder(true);

    let cat = DropdownOption::new("Cat");
    cat.set_disabled(true);

    let dropdown = Dropdown::with_options(vec![
        placeholder,
        DropdownOption::new("Dog"),
        cat,
        DropdownOption::new("Panda"),
        DropdownOption::with_value("Gentoo Penguin", "penguin"),
    ]);
    dropdown.take_events();

    report(&dropdown, "initial");

    dropdown.click_button();
    report(&dropdown, "button clicked");

    for key in [Key::Down, Key::Down, Key::Down] {
        dropdown.handle_key(&KeyCombo::key(key));
        report(&dropdown, "arrow down");
    }

    dropdown.handle_key(&KeyCombo::key(Key::Enter));
    report(&dropdown, "enter");

    dropdown.set_value("penguin");
    report(&dropdown, "value set to \"penguin\"");

    for event in dropdown.take_events() {
        println!("event: {:?} from {}", event.kind, event.source);
    }

    Ok(())
}

fn report(dropdown: &Dropdown, action: &str) {
    let surface = dropdown.button_surface();
    let highlighted = dropdown
        .preselected_option()
        .map(|option| option.text())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{action:>24}  [{}] value={:?} highlighted={}",
        if surface.open {
            format!("{} ▲", surface.content)
        } else {
            format!("{} ▼", surface.content)
        },
        dropdown.value(),
        highlighted,
    );
}

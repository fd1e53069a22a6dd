#![no_main]
use libfuzzer_sys::fuzz_target;
use lvlog::{Flags, Level, LineFormat};
use std::panic::Location;

fuzz_target!(|input: (u8, u8, &str, &str)| {
    let (bits, level, prefix, msg) = input;
    let format = LineFormat::new(Flags::from_bits_truncate(bits), prefix);
    let level = Level::all()[usize::from(level % 4)];
    let line = format.render(level, format_args!("{msg}"), Location::caller());
    // Every rendered line is newline-terminated and carries the level label
    assert!(line.ends_with('\n'));
    assert!(line.contains(level.prefix()));
});

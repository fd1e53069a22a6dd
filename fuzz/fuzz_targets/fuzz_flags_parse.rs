#![no_main]
use libfuzzer_sys::fuzz_target;
use lvlog::{Flags, Level};

fuzz_target!(|data: &str| {
    // Must not panic on any input; accepted flags must survive a display round trip
    if let Ok(flags) = data.parse::<Flags>() {
        assert_eq!(flags.to_string().parse::<Flags>(), Ok(flags));
    }
    let _ = data.parse::<Level>();
});

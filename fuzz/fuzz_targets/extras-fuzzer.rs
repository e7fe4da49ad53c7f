#![no_main]

use actifuzz::{ExtraType, ExtrasBuilder, reclassify_extras};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let pairs: Vec<&str> = input.lines().collect();

    let Ok(builder) = ExtrasBuilder::new().add(ExtraType::String, &pairs) else {
        return;
    };
    let Ok(builder) = builder.add(ExtraType::Bool, &pairs) else {
        return;
    };

    let once = reclassify_extras(builder.build());
    let twice = reclassify_extras(once.clone());
    // NaN floats never compare equal
    if once.values().all(|v| !matches!(v, actifuzz::ExtraValue::Float(f) if f.is_nan())) {
        assert_eq!(once, twice);
    }
});

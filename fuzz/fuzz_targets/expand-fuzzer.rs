#![no_main]

use actifuzz::{ExtraType, ExtrasBuilder, PayloadList, expand, expand_data, expand_extras};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let mut lines = input.lines();

    let Some(uri) = lines.next() else {
        return;
    };
    let Some(extra) = lines.next() else {
        return;
    };
    let payloads: Vec<String> = lines.take(32).map(str::to_owned).collect();

    let Ok(builder) = ExtrasBuilder::new().add(ExtraType::Int, [extra]) else {
        return;
    };
    let extras = builder.build();
    let payloads = PayloadList::new(Some(payloads));

    let variants = expand(&extras, Some(uri), &payloads);
    let expected = expand_extras(&extras, &payloads).len() * expand_data(Some(uri), &payloads).len();
    assert!(!variants.is_empty());
    assert_eq!(variants.len(), expected);
});

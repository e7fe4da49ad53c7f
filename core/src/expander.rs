use log::info;

use crate::PLACEHOLDER;
use crate::extras::{ExtraValue, ExtrasMap, reclassify_extras};
use crate::payloads::PayloadList;

/// One fully resolved launch: extras plus optional data URI
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub extras: ExtrasMap,
    pub data: Option<String>,
}

/// Keys of the extras whose value still contains the placeholder
pub fn fuzz_targets(extras: &ExtrasMap) -> Vec<&str> {
    extras
        .iter()
        .filter(|(_, value)| value.is_fuzz_target())
        .map(|(key, _)| key.as_str())
        .collect()
}

/// One extras map per payload, or the untouched map when nothing is fuzzed.
///
/// Every occurrence of the placeholder is replaced in a single pass, then the
/// whole map goes through content based coercion.
pub fn expand_extras(extras: &ExtrasMap, payloads: &PayloadList) -> Vec<ExtrasMap> {
    let targets = fuzz_targets(extras);
    if targets.is_empty() {
        return vec![extras.clone()];
    }

    let variants: Vec<ExtrasMap> = payloads
        .iter()
        .map(|payload| {
            let mut substituted = extras.clone();
            for key in &targets {
                if let Some(ExtraValue::String(value)) = substituted.get_mut(*key) {
                    *value = value.replace(PLACEHOLDER, payload);
                }
            }
            reclassify_extras(substituted)
        })
        .collect();

    info!(
        "FUZZ detected for {} -> {} variations generated",
        targets.join(", "),
        variants.len()
    );

    variants
}

/// One data URI per payload when it carries the placeholder, otherwise the original
pub fn expand_data(data: Option<&str>, payloads: &PayloadList) -> Vec<Option<String>> {
    match data {
        Some(uri) if uri.contains(PLACEHOLDER) => {
            let variants: Vec<Option<String>> = payloads
                .iter()
                .map(|payload| Some(uri.replace(PLACEHOLDER, payload)))
                .collect();
            info!("FUZZ detected in data -> {} data variations generated", variants.len());
            variants
        }
        _ => vec![data.map(str::to_owned)],
    }
}

/// Cross product of extras variants and data variants.
///
/// Extras variants form the outer loop, data variants the inner one, so the
/// result always holds `extras_count * data_count` entries and never is empty.
pub fn expand(extras: &ExtrasMap, data: Option<&str>, payloads: &PayloadList) -> Vec<Variant> {
    let extras_variants = expand_extras(extras, payloads);
    let data_variants = expand_data(data, payloads);

    extras_variants
        .iter()
        .flat_map(|extras| {
            data_variants.iter().map(move |data| Variant {
                extras: extras.clone(),
                data: data.clone(),
            })
        })
        .collect()
}

//! Variant Expander — turns a base prompt plus a VariableSet into the full
//! ordered list of variant prompts.

use crate::models::experiment::VariableSet;

/// Expands `base_prompt` into one prompt per combination of variable values.
///
/// The cartesian product is built by folding over the keys in their defined
/// order, so the last key varies fastest. Each combination is rendered as a
/// `"<key>: <value>"` prefix per pair, joined by ". ", then the base prompt:
///
/// `expand("Base", {a:[x], b:[1,2]})` → `["a: x. b: 1. Base", "a: x. b: 2. Base"]`
///
/// An empty VariableSet yields the base prompt unchanged. A key with an
/// empty value list yields an empty product (zero prompts). Pure function;
/// callers own any limit on combination count.
pub fn expand_variants(base_prompt: &str, variables: &VariableSet) -> Vec<String> {
    if variables.is_empty() {
        return vec![base_prompt.to_string()];
    }

    let keys: Vec<&str> = variables.keys().map(String::as_str).collect();

    // Left-fold cartesian product over the value lists in key order.
    let mut combos: Vec<Vec<&str>> = vec![Vec::new()];
    for values in variables.values() {
        let mut next = Vec::with_capacity(combos.len() * values.len());
        for combo in &combos {
            for value in values {
                let mut extended = combo.clone();
                extended.push(value.as_str());
                next.push(extended);
            }
        }
        combos = next;
    }

    combos
        .into_iter()
        .map(|combo| {
            let prefix = keys
                .iter()
                .zip(&combo)
                .map(|(key, value)| format!("{key}: {value}"))
                .collect::<Vec<_>>()
                .join(". ");
            format!("{prefix}. {base_prompt}")
        })
        .collect()
}

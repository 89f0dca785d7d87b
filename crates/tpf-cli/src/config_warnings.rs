use tpf_config::ENV_PREFIX;

/// Top-level configuration sections reachable through `TPF_<SECTION>__<KEY>`.
const SECTIONS: [&str; 6] = ["PATHS", "THRESHOLDS", "SCAN", "LIBRARY", "NOTES", "KEYWORDS"];

/// Variables read directly rather than through the configuration layers.
const DIRECT: [&str; 1] = ["TPF_LOG"];

/// Warn about `TPF_*` variables that cannot have reached any configuration key.
pub fn warn_unmapped_env() {
    for warning in collect_unmapped_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unmapped_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys: Vec<String> = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with(ENV_PREFIX) && !DIRECT.contains(&key.as_str()))
        .collect();
    keys.sort_unstable();

    keys.into_iter()
        .filter_map(|key| {
            let rest = key.strip_prefix(ENV_PREFIX).unwrap_or(&key);
            let mapped = rest
                .split_once("__")
                .is_some_and(|(section, field)| {
                    SECTIONS.contains(&section.to_ascii_uppercase().as_str()) && !field.is_empty()
                });
            (!mapped).then(|| {
                format!(
                    "{key} does not map to a configuration key and was ignored. \
                     Use a section and double underscores (example: TPF_PATHS__LITERATURE_ROOT)."
                )
            })
        })
        .collect()
}

#[cfg(debug_assertions)]
pub fn get_base_path() -> String {
    String::new() // Served from the root by `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn get_base_path() -> String {
    normalize_base_path(option_env!("AOK_BASE_PATH").unwrap_or(""))
}

/// Strips surrounding slashes and re-prefixes a single `/`, so `"/site/"`,
/// `"site"` and `"site/"` all become `"/site"`. Empty input stays empty.
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

pub fn asset_url(path: &str) -> String {
    join_asset(&get_base_path(), path)
}

fn join_asset(base: &str, path: &str) -> String {
    format!("{}/{}", base, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_normalized() {
        assert_eq!(normalize_base_path(""), "");
        assert_eq!(normalize_base_path("/"), "");
        assert_eq!(normalize_base_path("aok-site"), "/aok-site");
        assert_eq!(normalize_base_path("//aok-site/"), "/aok-site");
        assert_eq!(normalize_base_path(" /nested/path/ "), "/nested/path");
    }

    #[test]
    fn assets_join_without_double_slashes() {
        assert_eq!(join_asset("", "/ADHD.png"), "/ADHD.png");
        assert_eq!(join_asset("", "ADHD.png"), "/ADHD.png");
        assert_eq!(join_asset("/aok-site", "/aok logo 2.png"), "/aok-site/aok logo 2.png");
    }
}

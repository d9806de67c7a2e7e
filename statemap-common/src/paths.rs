const ASSET_FOLDERS: &[&str] = &["logos", "icons"];

/// Directory holding the per-state PDFs. The space is part of the on-disk
/// name.
pub const CONTENT_DIR: &str = "USA_States_app content";
pub const CONTENT_VIEWER_FRAGMENT: &str = "#toolbar=0&navpanes=0&scrollbar=0&view=FitH";

/// Rewrite a logo/icon path to the on-disk casing: the `logos`/`icons`
/// segment lowercased, the category and file segments after it capitalised.
pub fn normalize_asset_path(path: &str) -> String {
    normalize_with_folders(path, ASSET_FOLDERS)
}

pub fn normalize_with_folders(path: &str, folders: &[&str]) -> String {
    let mut parts: Vec<String> = path.split('/').map(str::to_string).collect();

    let Some(folder) = parts
        .iter()
        .position(|p| folders.iter().any(|f| p.eq_ignore_ascii_case(f)))
    else {
        return path.to_string();
    };

    parts[folder] = parts[folder].to_lowercase();
    for part in parts.iter_mut().skip(folder + 1).take(2) {
        *part = capitalize_first(part);
    }

    parts.join("/")
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn content_path(public_url: &str, state_name: &str) -> String {
    format!("{public_url}/{CONTENT_DIR}/{state_name} app content.pdf")
}

/// Frame `src` for the toolbar-free PDF viewer.
pub fn content_viewer_src(path: &str) -> String {
    format!("{path}{CONTENT_VIEWER_FRAGMENT}")
}

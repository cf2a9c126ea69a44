/// Name shown for a song: the file name with its last four characters
/// (the `.mp3` extension) removed.
///
/// Counts characters rather than bytes, and clamps to an empty string for
/// names of four characters or fewer.
pub fn display_name(file_name: &str) -> &str {
    let count = file_name.chars().count();
    if count <= 4 {
        return "";
    }

    let cut = file_name
        .char_indices()
        .nth(count - 4)
        .map(|(i, _)| i)
        .unwrap_or(0);
    &file_name[..cut]
}

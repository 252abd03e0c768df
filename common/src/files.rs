//! File-name rules for the intake and upload steps
//!
//! All checks work on the file name alone; content sniffing is left to the
//! backend.

/// Extensions accepted by the intake step, matched case-insensitively.
pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 7] =
    ["jpg", "jpeg", "png", "gif", "webp", "heic", "heif"];

fn extension(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Whether the file name carries one of the allowed image extensions.
pub fn is_allowed_image(name: &str) -> bool {
    extension(name)
        .map(|ext| ALLOWED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// HEIC/HEIF files skip client-side normalization and keep their name.
pub fn is_heic(name: &str) -> bool {
    matches!(extension(name).as_deref(), Some("heic") | Some("heif"))
}

/// Partition a batch of candidate file names into the indices of accepted
/// files and the names of rejected ones. Order is preserved on both sides;
/// duplicates are allowed.
pub fn screen_batch<'a, I>(names: I) -> (Vec<usize>, Vec<String>)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for (index, name) in names.into_iter().enumerate() {
        if is_allowed_image(name) {
            accepted.push(index);
        } else {
            rejected.push(name.to_string());
        }
    }
    (accepted, rejected)
}

/// Name used for the multipart part: the original name with its extension
/// replaced by `.jpg`, matching the re-encoded bytes. HEIC/HEIF uploads keep
/// their original name because they are passed through unconverted.
pub fn upload_file_name(name: &str) -> String {
    if is_heic(name) {
        return name.to_string();
    }
    match name.rfind('.') {
        Some(dot) => format!("{}.jpg", &name[..dot]),
        None => format!("{}.jpg", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions_case_insensitive() {
        assert!(is_allowed_image("look.jpg"));
        assert!(is_allowed_image("LOOK.JPEG"));
        assert!(is_allowed_image("fit.Png"));
        assert!(is_allowed_image("fit.webp"));
        assert!(is_allowed_image("fit.gif"));
        assert!(is_allowed_image("iphone.HEIC"));
        assert!(is_allowed_image("iphone.heif"));
    }

    #[test]
    fn test_disallowed_files() {
        assert!(!is_allowed_image("notes.txt"));
        assert!(!is_allowed_image("archive.tar.gz"));
        assert!(!is_allowed_image("no_extension"));
        assert!(!is_allowed_image("movie.mp4"));
    }

    #[test]
    fn test_is_heic() {
        assert!(is_heic("photo.heic"));
        assert!(is_heic("photo.HEIF"));
        assert!(!is_heic("photo.jpg"));
        assert!(!is_heic("heic"));
    }

    #[test]
    fn test_screen_batch_partitions_in_order() {
        let names = ["a.jpg", "b.txt", "c.png", "d.pdf"];
        let (accepted, rejected) = screen_batch(names);
        assert_eq!(accepted, vec![0, 2]);
        assert_eq!(rejected, vec!["b.txt".to_string(), "d.pdf".to_string()]);
    }

    #[test]
    fn test_screen_batch_empty_is_noop() {
        let empty: [&str; 0] = [];
        let (accepted, rejected) = screen_batch(empty);
        assert!(accepted.is_empty());
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_screen_batch_allows_duplicate_names() {
        let (accepted, rejected) = screen_batch(["same.jpg", "same.jpg"]);
        assert_eq!(accepted, vec![0, 1]);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_upload_file_name_replaces_extension() {
        assert_eq!(upload_file_name("look.png"), "look.jpg");
        assert_eq!(upload_file_name("look.JPEG"), "look.jpg");
        assert_eq!(upload_file_name("photo.细节.webp"), "photo.细节.jpg");
    }

    #[test]
    fn test_upload_file_name_keeps_heic_untouched() {
        assert_eq!(upload_file_name("IMG_0001.HEIC"), "IMG_0001.HEIC");
        assert_eq!(upload_file_name("shot.heif"), "shot.heif");
    }

    #[test]
    fn test_upload_file_name_without_extension() {
        assert_eq!(upload_file_name("photo"), "photo.jpg");
    }

    #[test]
    fn test_upload_file_name_with_multiple_dots() {
        assert_eq!(upload_file_name("a.b.png"), "a.b.jpg");
    }
}

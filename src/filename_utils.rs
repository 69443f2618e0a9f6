use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

/// Inserts `suffix` between the file stem and the extension,
/// e.g. `photo.jpg` + `_grayscale` -> `photo_grayscale.jpg`.
/// If no extension is present, appends to the end to make distinct file names.
pub fn insert_suffix_before_extension_in_path(path: &OsStr, suffix: &OsStr) -> OsString {
    let path_view = Path::new(path);

    let (file_name, extension) = match (path_view.file_name(), path_view.extension()) {
        (Some(name), Some(ext)) => (name, ext),
        _ => {
            let mut result = path.to_owned();
            result.push(suffix);
            return result;
        }
    };

    let stem = Path::new(file_name).file_stem().unwrap_or(OsStr::new(""));
    let mut new_name = OsString::new();
    new_name.push(stem);
    new_name.push(suffix);
    new_name.push(".");
    new_name.push(extension);

    match path_view.parent() {
        // An empty parent means a bare filename; `Path::join` on it would work
        // too, but skipping it avoids allocating for the common case.
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(new_name).into_os_string(),
        _ => new_name,
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;

    use super::*;

    #[test]
    fn grayscale_suffix() {
        let test_cases = vec![
            ("photo.jpg", "photo_grayscale.jpg"),
            ("archive.tar.gz", "archive.tar_grayscale.gz"),
            ("nodotfile", "nodotfile_grayscale"),
            (".bashrc", ".bashrc_grayscale"),
            ("..hidden_file.txt", "..hidden_file_grayscale.txt"),
        ];

        for (input_str, expected_str) in test_cases {
            let result = insert_suffix_before_extension_in_path(
                &OsString::from(input_str),
                OsStr::new("_grayscale"),
            );
            assert_eq!(
                result,
                OsString::from(expected_str),
                "Test failed for input: {}",
                input_str
            );
        }
    }

    #[cfg(target_family = "unix")]
    #[test]
    fn grayscale_suffix_unix_paths() {
        let unix_test_cases = vec![
            ("some_folder/photo.jpg", "some_folder/photo_grayscale.jpg"),
            ("a/b/photo.jpg", "a/b/photo_grayscale.jpg"),
            ("some_folder/nodotfile", "some_folder/nodotfile_grayscale"),
            ("foo/bar/baz.longext", "foo/bar/baz_grayscale.longext"),
        ];

        for (input_str, expected_str) in unix_test_cases {
            let result = insert_suffix_before_extension_in_path(
                &OsString::from(input_str),
                OsStr::new("_grayscale"),
            );
            assert_eq!(
                result,
                OsString::from(expected_str),
                "Test failed for input: {}",
                input_str
            );
        }

        // Filenames are allowed to contain non-UTF-8 bytes on Unix,
        // and they must pass through unmangled.
        use std::os::unix::ffi::OsStringExt;
        let non_utf8_path = OsString::from_vec(vec![b'f', 0xfe, b'l', b'e', b'.', b'p', b'n', b'g']);
        let expected: Vec<u8> = [b"f\xfele" as &[u8], b"_grayscale", b".png"].concat();
        let result = insert_suffix_before_extension_in_path(&non_utf8_path, OsStr::new("_grayscale"));
        assert_eq!(result, OsString::from_vec(expected));
    }
}

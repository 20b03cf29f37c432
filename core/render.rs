use crate::error::AppError;
use crate::gather::SelectedFile;
use log;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const FILE_START_MARKER: &str = ">>> START FILE";
pub const FILE_END_MARKER: &str = "<<< END FILE";

/// Reads the whole file as text.
///
/// A failure never propagates: the returned string is an inline placeholder
/// naming the error instead. The handle is dropped before returning on every
/// path.
pub fn read_file(path: &Path) -> String {
    match read_bytes(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            log::warn!("{}", e);
            match &e {
                AppError::FileRead { source, .. } => {
                    format!("[Error reading file: {}: {}]", source.kind(), source)
                }
                other => format!("[Error reading file: {}]", other),
            }
        }
    }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, AppError> {
    let to_err = |source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(to_err)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer).map_err(to_err)?;
    Ok(buffer)
}

/// One delimited block: start marker with the quoted relative path, the
/// content verbatim, the end marker, then a blank line.
pub fn render_file_block(relative: &str, content: &str) -> String {
    format!(
        "{} {:?}\n{}\n{}\n\n",
        FILE_START_MARKER, relative, content, FILE_END_MARKER
    )
}

/// Renders every file in order into a single document.
pub fn render(files: &[SelectedFile]) -> String {
    log::info!("Rendering {} files...", files.len());
    let mut document = String::new();
    for file in files {
        let content = read_file(&file.path);
        document.push_str(&render_file_block(&file.relative, &content));
    }
    log::debug!("Rendered document is {} bytes.", document.len());
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn selected(root: &Path, rel: &str) -> SelectedFile {
        SelectedFile {
            path: root.join(rel),
            relative: rel.to_string(),
        }
    }

    #[test]
    fn test_render_file_block_format() {
        assert_eq!(
            render_file_block("a.txt", "hello"),
            ">>> START FILE \"a.txt\"\nhello\n<<< END FILE\n\n"
        );
    }

    #[test]
    fn test_render_file_block_escapes_path() {
        let block = render_file_block("we\"ird\\name.txt", "");
        assert!(block.starts_with(">>> START FILE \"we\\\"ird\\\\name.txt\"\n"));
    }

    #[test]
    fn test_read_file_lossy() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bin.dat");
        fs::write(&path, [b'o', b'k', 0xff]).unwrap();
        assert_eq!(read_file(&path), "ok\u{fffd}");
    }

    #[test]
    fn test_read_file_error_placeholder() {
        let temp = tempdir().unwrap();
        let content = read_file(&temp.path().join("gone.txt"));
        assert!(content.starts_with("[Error reading file: "));
        assert!(content.contains("not found") || content.contains("No such file"));
        assert!(content.ends_with(']'));
    }

    #[test]
    fn test_render_keeps_order_and_survives_missing_file() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("a.txt"), "first").unwrap();
        fs::write(temp.path().join("c.txt"), "third\n").unwrap();

        let files = vec![
            selected(temp.path(), "a.txt"),
            selected(temp.path(), "b.txt"),
            selected(temp.path(), "c.txt"),
        ];
        let document = render(&files);

        let a = document.find("\"a.txt\"").unwrap();
        let b = document.find("\"b.txt\"").unwrap();
        let c = document.find("\"c.txt\"").unwrap();
        assert!(a < b && b < c);
        assert!(document.contains(">>> START FILE \"a.txt\"\nfirst\n<<< END FILE\n\n"));
        assert!(document.contains(">>> START FILE \"b.txt\"\n[Error reading file: "));
        assert!(document.ends_with(">>> START FILE \"c.txt\"\nthird\n\n<<< END FILE\n\n"));
        assert_eq!(document.matches(FILE_START_MARKER).count(), 3);
        assert_eq!(document.matches(FILE_END_MARKER).count(), 3);
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render(&[]), "");
    }
}

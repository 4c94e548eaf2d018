use serde_json::{Map, Value};
use std::path::Path;
use walkdir::WalkDir;

/// Render a materialized tree as JSON: directories become objects, files `null`.
///
/// Children appear in file name order.
pub fn tree_to_json(root: &Path) -> Result<Value, walkdir::Error> {
    let mut tree = Map::new();

    'entries: for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };

        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        let Some((leaf, parents)) = parts.split_last() else {
            continue;
        };

        let mut cursor = &mut tree;
        for part in parents {
            cursor = match cursor
                .entry(part.clone())
                .or_insert_with(|| Value::Object(Map::new()))
            {
                Value::Object(children) => children,
                _ => continue 'entries,
            };
        }

        if entry.file_type().is_dir() {
            cursor
                .entry(leaf.clone())
                .or_insert_with(|| Value::Object(Map::new()));
        } else {
            cursor.insert(leaf.clone(), Value::Null);
        }
    }

    Ok(Value::Object(tree))
}

/// Render a materialized tree as indented text, two spaces per level.
///
/// Directories carry a trailing `/`, so the output feeds back into the text
/// builder without the dotted-name ambiguity.
pub fn render_tree(root: &Path) -> Result<String, walkdir::Error> {
    let mut out = String::new();

    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        out.push_str(&"  ".repeat(entry.depth() - 1));
        out.push_str(&entry.file_name().to_string_lossy());
        if entry.file_type().is_dir() {
            out.push('/');
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/components")).unwrap();
        fs::create_dir_all(dir.path().join("empty")).unwrap();
        fs::write(dir.path().join("src/main.js"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();
        dir
    }

    #[test]
    fn test_tree_to_json_nesting() {
        let dir = sample_tree();
        let listing = tree_to_json(dir.path()).unwrap();

        assert_eq!(
            listing,
            json!({
                "README.md": null,
                "empty": {},
                "src": {
                    "components": {},
                    "main.js": null
                }
            })
        );
    }

    #[test]
    fn test_tree_to_json_empty_root() {
        let dir = TempDir::new().unwrap();
        assert_eq!(tree_to_json(dir.path()).unwrap(), json!({}));
    }

    #[test]
    fn test_render_tree() {
        let dir = sample_tree();
        let text = render_tree(dir.path()).unwrap();

        assert_eq!(
            text,
            "README.md\nempty/\nsrc/\n  components/\n  main.js\n"
        );
    }
}

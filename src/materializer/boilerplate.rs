use std::path::Path;

/// Extension -> starter content. Placeholders:
/// `{file}` full file name, `{class}` capitalized stem, `{title}` name without `.md`
static BOILERPLATE: &[(&str, &str)] = &[
    ("java", "public class {class} {\n    // TODO: Implement\n}\n"),
    ("js", "// {file}\nconsole.log('Hello from {file}');\n"),
    ("ts", "// {file}\nconsole.log('Hello from {file}');\n"),
    ("py", "# {file}\nprint('Hello from {file}')\n"),
    ("sh", "#!/usr/bin/env bash\n# {file}\n"),
    (
        "html",
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>{file}</title>\n</head>\n<body>\n    <h1>Hello World</h1>\n</body>\n</html>\n",
    ),
    ("css", "/* {file} */\nbody {\n    font-family: Arial, sans-serif;\n}\n"),
    ("md", "# {title}\n\nThis is a markdown file.\n"),
    ("txt", "This is a text file: {file}\n"),
    (
        "json",
        "{\n    \"name\": \"{file}\",\n    \"description\": \"Generated JSON file\"\n}\n",
    ),
    (
        "xml",
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<root>\n    <message>Hello from {file}</message>\n</root>\n",
    ),
];

/// Lowercased extension of `file_name`. Dotfiles such as `.gitignore` have none.
pub fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

/// Extensions that receive starter content
pub fn known_extensions() -> impl Iterator<Item = &'static str> {
    BOILERPLATE.iter().map(|(ext, _)| *ext)
}

/// Default content for a new file, or an empty string for unknown extensions
pub fn boilerplate_for(file_name: &str) -> String {
    let ext = extension_of(file_name);
    let Some((_, template)) = BOILERPLATE.iter().find(|(known, _)| *known == ext) else {
        return String::new();
    };

    template
        .replace("{file}", file_name)
        .replace("{class}", &class_name(file_name))
        .replace("{title}", &file_name.replace(".md", ""))
}

fn class_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    let mut chars = stem.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

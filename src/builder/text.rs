use super::{classify, BuildError, BuildStats, EntryKind, TreeBuilder, TreeWriter};
use log::debug;
use std::path::{Path, PathBuf};

/// Indentation units contributed by each leading whitespace character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndentStyle {
    pub space_width: usize,
    pub tab_width: usize,
}

impl IndentStyle {
    pub fn new(space_width: usize, tab_width: usize) -> Self {
        Self {
            space_width,
            tab_width,
        }
    }

    /// Indentation level of `line`, counting leading spaces and tabs only
    pub fn level_of(&self, line: &str) -> usize {
        line.chars()
            .map_while(|c| match c {
                ' ' => Some(self.space_width),
                '\t' => Some(self.tab_width),
                _ => None,
            })
            .sum()
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self::new(1, 4)
    }
}

const ROOT_LEVEL: isize = -1;

/// Enclosing directories by indentation level, root at the bottom
struct PathStack {
    frames: Vec<(isize, PathBuf)>,
}

impl PathStack {
    fn new(root: &Path) -> Self {
        Self {
            frames: vec![(ROOT_LEVEL, root.to_path_buf())],
        }
    }

    /// Pop every frame at or deeper than `level` and return the new top
    fn parent_for(&mut self, level: isize) -> &Path {
        while self.frames.len() > 1 && self.frames.last().is_some_and(|(l, _)| *l >= level) {
            self.frames.pop();
        }
        // The root frame is never popped
        &self.frames[self.frames.len() - 1].1
    }

    fn push(&mut self, level: isize, path: PathBuf) {
        self.frames.push((level, path));
    }
}

/// Builds a tree from indentation-delimited lines
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTreeBuilder {
    indent: IndentStyle,
}

impl TextTreeBuilder {
    pub fn new(indent: IndentStyle) -> Self {
        Self { indent }
    }
}

impl TreeBuilder for TextTreeBuilder {
    fn build(&self, input: &str, root: &Path) -> Result<BuildStats, BuildError> {
        let mut writer = TreeWriter::new(root);
        let mut stack = PathStack::new(root);

        // `lines` strips both "\n" and "\r\n"
        for (number, line) in input.lines().enumerate() {
            let name = line.trim();
            if name.is_empty() {
                continue;
            }

            let level = self.indent.level_of(line) as isize;
            let parent = stack.parent_for(level).to_path_buf();
            let Some(path) = writer.resolve(&parent, name) else {
                continue;
            };

            match classify(name) {
                EntryKind::Directory => {
                    if writer.directory(&path)? {
                        stack.push(level, path);
                    }
                }
                EntryKind::File => writer.file(&path, None)?,
            }
            debug!("line {}: level {} {:?}", number + 1, level, name);
        }

        Ok(writer.finish())
    }
}

mod path;


pub use path::{PathError, PathSanitizer, MAX_SEGMENT_LEN};

mod path_str_ext;

pub use path_str_ext::{PathStrExt, SEGMENT_SEPARATOR};

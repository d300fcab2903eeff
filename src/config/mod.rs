mod seed_list;

pub use seed_list::{DEMO_PATHS, SeedList, SeedListError};

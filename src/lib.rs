pub mod errors;
pub mod config;
pub mod copy;
pub mod props;
pub mod select;
pub mod shorten;
pub mod sort;
pub mod text;

pub use errors::{HelperError, Result};

/// Re-export the most-used helpers for users who call functions directly.
pub use config::{build_local_path, load_config, parse_json, read_json_file};
pub use copy::{copy_array, copy_object, copy_value};
pub use props::{
    any_has_prop_set, has_all_props_set, has_name_value, has_prop_set, has_prop_value,
    has_type_value,
};
pub use select::{
    get_by_name, get_by_type, get_first_by_name, get_first_by_type, get_name_list,
    get_random_entry,
};
pub use shorten::{shorten_url, shorten_url_with, Shortener};
pub use sort::{cmp_values, resolve_path, sort_by_deep_prop, sort_by_prop};
pub use text::capitalize;

//! Validated run inputs: the request every virtual user repeats and the load
//! profile that paces it.
mod profile;
mod template;

#[cfg(test)]
mod tests;

pub use profile::LoadProfile;
pub use template::{HttpMethod, RequestTemplate, parse_header_list};

pub mod license;
pub mod license_name_alias;
pub mod license_url_alias;

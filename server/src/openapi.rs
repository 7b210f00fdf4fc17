use utoipa::OpenApi;

/// The merged OpenAPI document of all endpoint modules.
pub fn openapi() -> utoipa::openapi::OpenApi {
    license_dictionary_module_license::endpoints::ApiDoc::openapi()
}

//! API collection paths and the console routes handed to navigation callbacks.

pub mod api {
    pub const PRODUCTS: &str = "/products";
    pub const COUNTRIES: &str = "/countries";
    pub const HSN_CODES: &str = "/hsncodes";
    pub const CATEGORIES: &str = "/categories";
    pub const DOCUMENT_TYPES: &str = "/productdocumenttype";
    pub const USER_DOCUMENTS: &str = "/userdocuments";
    pub const USERS: &str = "/users";

    pub fn import_status(product_id: u64, country_id: u64) -> String {
        format!("{PRODUCTS}/{product_id}/import-status/{country_id}")
    }
}

pub mod console {
    /// Where a successful product add lands.
    pub const PRODUCT_LIST: &str = "/products";
    /// Where a successful product edit lands.
    pub const PRODUCTS: &str = "/products";

    pub fn product_details(product_id: u64) -> String {
        format!("/products/{product_id}")
    }

    pub fn import_status_details(product_id: u64, country_id: u64) -> String {
        format!("/products/{product_id}/import-status/{country_id}")
    }
}

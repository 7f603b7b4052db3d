use std::fmt;

/// Destinations the list declares. The host router performs the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CreateProduct,
    EditProduct(i32),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::CreateProduct => "/products/create".to_string(),
            Route::EditProduct(id) => format!("/products/products/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub mod application {
    pub mod pricing {
        pub mod resolve_price;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod product {
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod price_override {
        pub mod model;
        pub mod repository;
    }
    pub mod gift_card {
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod pricing {
        pub mod errors;
        pub mod validation;
        pub mod use_cases {
            pub mod resolve_price;
        }
    }
}

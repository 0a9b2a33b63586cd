pub mod application {
    #[cfg(test)]
    pub(crate) mod test_support;
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod wishlist {
        pub mod clear;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod share;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod query;
        pub mod value_objects;
    }
    pub mod item {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod clear;
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod share;
            pub mod update;
        }
    }
}

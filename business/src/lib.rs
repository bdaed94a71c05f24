pub mod application {
    pub mod recommendation {
        pub mod recommend;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod model;
        pub mod repository;
    }
    pub mod recommendation {
        pub mod candidates;
        pub mod errors;
        pub mod fallback;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod recommend;
        }
    }
}
